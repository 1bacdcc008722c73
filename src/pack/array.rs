use super::{storage::Storage, Pack, DEFAULT_CAPACITY};
use std::fmt::{self, Debug};

/// Pack over a `Vec` whose every slot is always initialized.
///
/// Filler values come from the factory, called once per slot.
#[derive(Clone)]
pub struct ArrayPack<T, F: Fn() -> T = fn() -> T> {
    values: Vec<T>,
    size: usize,
    factory: F,
}

impl<T: Default> ArrayPack<T> {
    pub fn new(capacity: usize) -> Self {
        Self::with_factory(T::default, capacity)
    }
}

impl<T, F: Fn() -> T> ArrayPack<T, F> {
    pub fn with_factory(factory: F, capacity: usize) -> Self {
        let values = (0..capacity).map(|_| factory()).collect();
        Self {
            values,
            size: 0,
            factory,
        }
    }

    /// Pack of values with capacity of their count.
    pub fn from_vec(factory: F, values: Vec<T>) -> Self {
        Self {
            size: values.len(),
            values,
            factory,
        }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Makes this pack a copy of source.
    pub fn copy_from(&mut self, source: &[T])
    where
        T: Clone,
    {
        if source.len() > self.capacity() {
            self.reallocate(source.len());
        }
        for (slot, value) in self.values.iter_mut().zip(source) {
            slot.clone_from(value);
        }
        for index in source.len()..self.size {
            self.reset(index);
        }
        self.size = source.len();
    }

    /// Live elements.
    pub fn into_vec(mut self) -> Vec<T> {
        self.values.truncate(self.size);
        self.values
    }
}

impl<T, F: Fn() -> T> Storage for ArrayPack<T, F> {
    type Item = T;

    fn slots(&self) -> &[T] {
        &self.values
    }

    fn slots_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    fn live(&self) -> usize {
        self.size
    }

    fn set_live(&mut self, size: usize) {
        self.size = size;
    }

    fn filler(&mut self) -> T {
        (self.factory)()
    }

    fn resize(&mut self, capacity: usize) {
        self.values.resize_with(capacity, &self.factory);
        self.values.shrink_to_fit();
    }
}

impl<T, F: Fn() -> T> crate::algorithm::Sequence for ArrayPack<T, F> {
    type Item = T;

    fn len(&self) -> usize {
        self.size
    }

    fn at(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T, F: Fn() -> T> crate::algorithm::SwapSequence for ArrayPack<T, F> {
    fn swap_at(&mut self, first: usize, second: usize) {
        self.as_mut_slice().swap(first, second);
    }
}

impl<T: Default> Default for ArrayPack<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<T: PartialEq, F: Fn() -> T, G: Fn() -> T> PartialEq<ArrayPack<T, G>> for ArrayPack<T, F> {
    fn eq(&self, other: &ArrayPack<T, G>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Debug, F: Fn() -> T> Debug for ArrayPack<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Default> FromIterator<T> for ArrayPack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(T::default, iter.into_iter().collect())
    }
}
