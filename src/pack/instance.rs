use super::{grow, storage::Storage, Pack, DEFAULT_CAPACITY};
use crate::duplicator::Duplicator;
use std::{
    fmt::{self, Debug},
    mem,
};

/// Pack of pooled instances managed by a [`Duplicator`].
///
/// Every slot up to capacity holds an allocated instance. Overwritten and
/// truncated instances go back through the duplicator, and growth allocates
/// new ones from it. Values moved in by `set`/`push` are owned by the pack,
/// while the `*_copy` methods duplicate into the slot's existing instance.
pub struct InstancePack<T, D: Duplicator<T>> {
    instances: Vec<T>,
    size: usize,
    duplicator: D,
}

impl<T, D: Duplicator<T>> InstancePack<T, D> {
    pub fn new(mut duplicator: D, capacity: usize) -> Self {
        let instances = (0..capacity).map(|_| duplicator.allocate()).collect();
        Self {
            instances,
            size: 0,
            duplicator,
        }
    }

    pub fn duplicator(&self) -> &D {
        &self.duplicator
    }

    /// Frees every instance, live or not, and returns the duplicator.
    pub fn into_duplicator(mut self) -> D {
        for instance in mem::take(&mut self.instances) {
            self.duplicator.free(instance);
        }
        self.duplicator
    }

    /// Writes a duplicate of source at index, growing like [`Pack::set`].
    ///
    /// # Panics
    /// If index + 1 slots can't be allocated.
    pub fn set_copy(&mut self, index: usize, source: &T) {
        grow(self, index.saturating_add(1));
        self.duplicator.assign(source, &mut self.instances[index]);
        if index >= self.size {
            self.size = index + 1;
        }
    }

    pub fn push_copy(&mut self, source: &T) {
        self.set_copy(self.size, source);
    }

    /// Makes this pack a copy of source.
    pub fn copy_from(&mut self, source: &[T]) {
        if source.len() > self.capacity() {
            self.reallocate(source.len());
        }
        for (slot, value) in self.instances.iter_mut().zip(source) {
            self.duplicator.assign(value, slot);
        }
        for index in source.len()..self.size {
            self.reset(index);
        }
        self.size = source.len();
    }
}

impl<T, D: Duplicator<T>> Storage for InstancePack<T, D> {
    type Item = T;

    fn slots(&self) -> &[T] {
        &self.instances
    }

    fn slots_mut(&mut self) -> &mut [T] {
        &mut self.instances
    }

    fn live(&self) -> usize {
        self.size
    }

    fn set_live(&mut self, size: usize) {
        self.size = size;
    }

    fn filler(&mut self) -> T {
        self.duplicator.allocate()
    }

    fn recycle(&mut self, instance: T) {
        self.duplicator.free(instance);
    }

    fn reset(&mut self, index: usize) {
        self.duplicator.rollback(&mut self.instances[index]);
    }

    fn resize(&mut self, capacity: usize) {
        if capacity < self.instances.len() {
            for instance in self.instances.drain(capacity..) {
                self.duplicator.free(instance);
            }
        } else {
            self.instances.reserve_exact(capacity - self.instances.len());
            while self.instances.len() < capacity {
                let instance = self.duplicator.allocate();
                self.instances.push(instance);
            }
        }
    }
}

impl<T, D: Duplicator<T>> crate::algorithm::Sequence for InstancePack<T, D> {
    type Item = T;

    fn len(&self) -> usize {
        self.size
    }

    fn at(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T, D: Duplicator<T>> crate::algorithm::SwapSequence for InstancePack<T, D> {
    fn swap_at(&mut self, first: usize, second: usize) {
        self.as_mut_slice().swap(first, second);
    }
}

impl<T, D: Duplicator<T> + Default> Default for InstancePack<T, D> {
    fn default() -> Self {
        Self::new(D::default(), DEFAULT_CAPACITY)
    }
}

impl<T, D: Duplicator<T> + Clone> Clone for InstancePack<T, D> {
    /// Duplicates every instance through a clone of the duplicator.
    fn clone(&self) -> Self {
        let mut duplicator = self.duplicator.clone();
        let instances = self
            .instances
            .iter()
            .enumerate()
            .map(|(index, instance)| {
                if index < self.size {
                    duplicator.copy(instance)
                } else {
                    duplicator.allocate()
                }
            })
            .collect();
        Self {
            instances,
            size: self.size,
            duplicator,
        }
    }
}

impl<T: PartialEq, D: Duplicator<T>, E: Duplicator<T>> PartialEq<InstancePack<T, E>>
    for InstancePack<T, D>
{
    fn eq(&self, other: &InstancePack<T, E>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Debug, D: Duplicator<T>> Debug for InstancePack<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
