//! Explicit lifecycle of pooled elements.
//!
//! Elements managed by a [`Duplicator`] are mutable instances that are reused
//! instead of being dropped, so every slot transition goes through it.

use log::trace;
use std::mem;

/// Owner supplied lifecycle of pooled instances.
///
/// Implementations must be side effect safe to call repeatedly and at any point,
/// and must not keep aliases of instances they hand out.
///
/// A slot always holds an instance, so the provided slot transitions first build
/// the replacement with `copy` or `allocate`, move it into the slot, and only then
/// `free` the old occupant. The freed instance is never the one left in the slot.
/// Pools that can reuse the occupant in place should override `assign` and `rollback`.
pub trait Duplicator<T> {
    /// Returns an instance in its idle, default state.
    fn allocate(&mut self) -> T;

    /// Takes back an instance that is no longer in use.
    fn free(&mut self, instance: T);

    /// Returns an owned duplicate of source.
    fn copy(&mut self, source: &T) -> T;

    /// Makes target a duplicate of source.
    /// Calls `copy` and then `free` with the old target.
    fn assign(&mut self, source: &T, target: &mut T) {
        let duplicate = self.copy(source);
        let old = mem::replace(target, duplicate);
        self.free(old);
    }

    /// Returns instance to its idle state.
    /// Calls `allocate` and then `free` with the old instance.
    fn rollback(&mut self, instance: &mut T) {
        let idle = self.allocate();
        let old = mem::replace(instance, idle);
        self.free(old);
    }
}

impl<T, D: Duplicator<T> + ?Sized> Duplicator<T> for &mut D {
    fn allocate(&mut self) -> T {
        (**self).allocate()
    }

    fn free(&mut self, instance: T) {
        (**self).free(instance)
    }

    fn copy(&mut self, source: &T) -> T {
        (**self).copy(source)
    }

    fn assign(&mut self, source: &T, target: &mut T) {
        (**self).assign(source, target)
    }

    fn rollback(&mut self, instance: &mut T) {
        (**self).rollback(instance)
    }
}

/// Instance that can be reset to its idle state in place.
pub trait Reusable: Clone {
    fn reset(&mut self);
}

/// Duplicator that keeps freed instances and hands them out again before
/// creating new ones with its factory.
#[derive(Clone)]
pub struct PoolDuplicator<T: Reusable, F: Fn() -> T = fn() -> T> {
    factory: F,
    idle: Vec<T>,
}

impl<T: Reusable + Default> PoolDuplicator<T> {
    pub fn new() -> Self {
        Self::with_factory(T::default)
    }
}

impl<T: Reusable, F: Fn() -> T> PoolDuplicator<T, F> {
    pub fn with_factory(factory: F) -> Self {
        Self {
            factory,
            idle: Vec::new(),
        }
    }

    /// Pre creates `count` idle instances.
    pub fn with_capacity(factory: F, count: usize) -> Self {
        let idle = (0..count).map(|_| factory()).collect();
        Self { factory, idle }
    }

    /// Number of idle instances.
    pub fn idle(&self) -> usize {
        self.idle.len()
    }

    /// Drops all idle instances.
    pub fn clear(&mut self) {
        trace!("Dropping {} idle instances", self.idle.len());
        self.idle.clear();
    }
}

impl<T: Reusable + Default> Default for PoolDuplicator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Reusable, F: Fn() -> T> Duplicator<T> for PoolDuplicator<T, F> {
    fn allocate(&mut self) -> T {
        self.idle.pop().unwrap_or_else(|| (self.factory)())
    }

    fn free(&mut self, mut instance: T) {
        instance.reset();
        self.idle.push(instance);
    }

    fn copy(&mut self, source: &T) -> T {
        let mut instance = self.allocate();
        instance.clone_from(source);
        instance
    }

    fn assign(&mut self, source: &T, target: &mut T) {
        target.clone_from(source);
    }

    fn rollback(&mut self, instance: &mut T) {
        instance.reset();
    }
}

/// Duplicator for plain values, allocates defaults and copies by cloning.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloneDuplicator;

impl<T: Clone + Default> Duplicator<T> for CloneDuplicator {
    fn allocate(&mut self) -> T {
        T::default()
    }

    fn free(&mut self, _: T) {}

    fn copy(&mut self, source: &T) -> T {
        source.clone()
    }

    fn assign(&mut self, source: &T, target: &mut T) {
        target.clone_from(source);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Pooled vector that counts lifecycle calls, for asserting pack behaviour.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Vector {
        pub x: i64,
        pub y: i64,
    }

    impl Vector {
        pub fn new(x: i64, y: i64) -> Self {
            Self { x, y }
        }
    }

    impl Reusable for Vector {
        fn reset(&mut self) {
            self.x = 0;
            self.y = 0;
        }
    }

    #[derive(Debug, Clone, Default)]
    pub struct Counting {
        pub allocated: usize,
        pub freed: usize,
        pub copied: usize,
    }

    impl Counting {
        /// Instances handed out and not returned.
        pub fn live(&self) -> usize {
            self.allocated + self.copied - self.freed
        }
    }

    impl Duplicator<Vector> for Counting {
        fn allocate(&mut self) -> Vector {
            self.allocated += 1;
            Vector::default()
        }

        fn free(&mut self, _: Vector) {
            self.freed += 1;
        }

        fn copy(&mut self, source: &Vector) -> Vector {
            self.copied += 1;
            source.clone()
        }
    }

    /// Records lifecycle calls with the instance they were given or returned.
    #[derive(Default)]
    struct Recording {
        next: i64,
        calls: Vec<(&'static str, i64)>,
    }

    impl Duplicator<Vector> for Recording {
        fn allocate(&mut self) -> Vector {
            self.next += 1;
            self.calls.push(("allocate", self.next));
            Vector::new(self.next, 0)
        }

        fn free(&mut self, instance: Vector) {
            self.calls.push(("free", instance.x));
        }

        fn copy(&mut self, source: &Vector) -> Vector {
            self.calls.push(("copy", source.x));
            source.clone()
        }
    }

    #[test]
    fn provided_transitions_free_old_occupant_last() {
        let mut recording = Recording::default();
        let mut slot = recording.allocate();
        recording.assign(&Vector::new(7, 7), &mut slot);
        assert_eq!(slot, Vector::new(7, 7));
        recording.rollback(&mut slot);
        assert_eq!(slot, Vector::new(2, 0));
        assert_eq!(
            recording.calls,
            vec![
                ("allocate", 1),
                ("copy", 7),
                ("free", 1),
                ("allocate", 2),
                ("free", 7),
            ]
        );
    }

    #[test]
    fn pool_reuses() {
        let mut pool = PoolDuplicator::<Vector>::new();
        let mut a = pool.allocate();
        a.x = 5;
        pool.free(a);
        assert_eq!(pool.idle(), 1);
        let b = pool.allocate();
        assert_eq!(b, Vector::default());
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn pool_copy() {
        let mut pool = PoolDuplicator::with_capacity(Vector::default, 2);
        assert_eq!(pool.idle(), 2);
        let source = Vector::new(1, 2);
        let copy = pool.copy(&source);
        assert_eq!(copy, source);
        assert_eq!(pool.idle(), 1);

        let mut target = Vector::new(7, 7);
        pool.assign(&source, &mut target);
        assert_eq!(target, source);
        pool.rollback(&mut target);
        assert_eq!(target, Vector::default());
        pool.clear();
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn default_assign_frees() {
        let mut counting = Counting::default();
        let mut target = counting.allocate();
        counting.assign(&Vector::new(1, 1), &mut target);
        assert_eq!(target, Vector::new(1, 1));
        assert_eq!(counting.copied, 1);
        assert_eq!(counting.freed, 1);
        counting.rollback(&mut target);
        assert_eq!(target, Vector::default());
        assert_eq!(counting.live(), 1);
    }

    #[test]
    fn clone_duplicator() {
        let mut duplicator = CloneDuplicator;
        let value: String = duplicator.allocate();
        assert!(value.is_empty());
        let copy = duplicator.copy(&"pack".to_string());
        assert_eq!(copy, "pack");
    }
}
