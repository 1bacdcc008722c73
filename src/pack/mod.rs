//! Reallocable random access sequences.
//!
//! A pack owns `capacity` slots of which the first `size` are live elements.
//! Slots in `[size, capacity)` always hold filler values provided by the pack,
//! so growing never exposes uninitialized or stale elements.
//!
//! All operations are provided by [`Pack`] on top of the backing storage, which
//! differs between [`ArrayPack`], [`BufferPack`] and [`InstancePack`] only in how
//! filler values are created and how discarded elements are disposed of.

mod array;
mod buffer;
mod instance;

pub use array::*;
pub use buffer::*;
pub use instance::*;

use crate::{
    algorithm::{self, bisect, natural, quicksort},
    error::{ordered, PackError, PackResult},
};
use log::{debug, trace};
use std::{cmp::Ordering, mem};

/// Capacity of packs created without an explicit one.
pub const DEFAULT_CAPACITY: usize = 32;

pub(crate) mod storage {
    use std::mem;

    /// Slot management of a pack backing store.
    pub trait Storage {
        type Item;

        /// All `capacity` slots.
        fn slots(&self) -> &[Self::Item];

        fn slots_mut(&mut self) -> &mut [Self::Item];

        /// Number of live slots.
        fn live(&self) -> usize;

        /// Must not exceed number of slots.
        fn set_live(&mut self, size: usize);

        /// New filler value.
        fn filler(&mut self) -> Self::Item;

        /// Disposes of a value that left the pack.
        fn recycle(&mut self, value: Self::Item) {
            drop(value);
        }

        /// Turns slot back into a filler.
        fn reset(&mut self, index: usize) {
            let filler = self.filler();
            let old = mem::replace(&mut self.slots_mut()[index], filler);
            self.recycle(old);
        }

        /// Changes number of slots to capacity, keeping the leading ones.
        /// Live slots must already fit into capacity.
        fn resize(&mut self, capacity: usize);
    }
}

use storage::Storage;

/// Reallocable mutable sequence with explicit size and capacity.
///
/// Every fallible operation validates its arguments before mutating anything.
/// Ranges are given as two bounds in any order.
pub trait Pack: Storage {
    fn size(&self) -> usize {
        self.live()
    }

    fn capacity(&self) -> usize {
        self.slots().len()
    }

    fn is_empty(&self) -> bool {
        self.live() == 0
    }

    /// New value as used for filling grown slots.
    fn default_value(&mut self) -> Self::Item {
        self.filler()
    }

    /// Grows with default values or truncates.
    fn set_size(&mut self, size: usize) {
        let current = self.live();
        if size > self.capacity() {
            self.reallocate(size);
        }
        for index in size..current {
            self.reset(index);
        }
        self.set_live(size);
    }

    /// Changes capacity.
    /// If capacity is less than size, elements past it are dropped.
    fn reallocate(&mut self, capacity: usize) {
        let size = self.live();
        trace!(
            "Reallocating {} from {} to {}",
            std::any::type_name::<Self>(),
            self.capacity(),
            capacity
        );
        if capacity < size {
            debug!(
                "Reallocation of {} truncates {} elements",
                std::any::type_name::<Self>(),
                size - capacity
            );
            self.set_live(capacity);
        }
        self.resize(capacity);
    }

    /// Reallocates to size.
    fn fit(&mut self) {
        let size = self.live();
        self.reallocate(size);
    }

    /// Ensures capacity for additional elements.
    fn reserve(&mut self, additional: usize) {
        let required = self.live() + additional;
        grow(self, required);
    }

    fn get(&self, index: usize) -> PackResult<&Self::Item> {
        let size = self.live();
        if index < size {
            Ok(&self.slots()[index])
        } else {
            Err(PackError::index_out_of_range::<Self>(index, size).during("get"))
        }
    }

    fn get_mut(&mut self, index: usize) -> PackResult<&mut Self::Item> {
        let size = self.live();
        if index < size {
            Ok(&mut self.slots_mut()[index])
        } else {
            Err(PackError::index_out_of_range::<Self>(index, size).during("get_mut"))
        }
    }

    fn first(&self) -> PackResult<&Self::Item> {
        self.as_slice()
            .first()
            .ok_or_else(|| PackError::empty::<Self>().during("first"))
    }

    fn last(&self) -> PackResult<&Self::Item> {
        self.as_slice()
            .last()
            .ok_or_else(|| PackError::empty::<Self>().during("last"))
    }

    /// Live elements.
    fn as_slice(&self) -> &[Self::Item] {
        &self.slots()[..self.live()]
    }

    fn as_mut_slice(&mut self) -> &mut [Self::Item] {
        let size = self.live();
        &mut self.slots_mut()[..size]
    }

    fn iter(&self) -> std::slice::Iter<'_, Self::Item> {
        self.as_slice().iter()
    }

    /// Writes value at index.
    ///
    /// Writing past the end grows the pack, filling skipped slots with default values.
    ///
    /// # Panics
    /// If index + 1 slots can't be allocated.
    fn set(&mut self, index: usize, value: Self::Item) {
        grow(self, index.saturating_add(1));
        let old = mem::replace(&mut self.slots_mut()[index], value);
        self.recycle(old);
        if index >= self.live() {
            self.set_live(index + 1);
        }
    }

    /// Writes clones of value over `[start, end)`, growing the pack if necessary.
    fn set_range(&mut self, start_or_end: usize, end_or_start: usize, value: Self::Item)
    where
        Self::Item: Clone,
    {
        let (start, end) = ordered(start_or_end, end_or_start);
        if start == end {
            return;
        }
        grow(self, end);
        for index in start..end - 1 {
            self.set(index, value.clone());
        }
        self.set(end - 1, value);
    }

    /// Replaces live element at index and returns the old one.
    fn replace(&mut self, index: usize, value: Self::Item) -> PackResult<Self::Item> {
        let size = self.live();
        if index < size {
            Ok(mem::replace(&mut self.slots_mut()[index], value))
        } else {
            Err(PackError::index_out_of_range::<Self>(index, size).during("replace"))
        }
    }

    /// Overwrites every live element.
    fn fill_with(&mut self, mut fill: impl FnMut() -> Self::Item) {
        for index in 0..self.live() {
            let old = mem::replace(&mut self.slots_mut()[index], fill());
            self.recycle(old);
        }
    }

    fn push(&mut self, value: Self::Item) {
        let size = self.live();
        self.set(size, value);
    }

    fn pop(&mut self) -> PackResult<Self::Item> {
        let size = self.live();
        if size == 0 {
            return Err(PackError::empty::<Self>().during("pop"));
        }
        let filler = self.filler();
        let value = mem::replace(&mut self.slots_mut()[size - 1], filler);
        self.set_live(size - 1);
        Ok(value)
    }

    /// Inserts value at the beginning.
    fn unshift(&mut self, value: Self::Item) {
        self.push(value);
        self.as_mut_slice().rotate_right(1);
    }

    /// Removes the first element.
    fn shift(&mut self) -> PackResult<Self::Item> {
        if self.live() == 0 {
            return Err(PackError::empty::<Self>().during("shift"));
        }
        self.as_mut_slice().rotate_left(1);
        self.pop()
    }

    /// Inserts value before element at index, shifting the remainder.
    /// Inserting past the end behaves like [`Pack::set`].
    fn insert(&mut self, index: usize, value: Self::Item) {
        let size = self.live();
        if index >= size {
            self.set(index, value);
        } else {
            self.push(value);
            self.as_mut_slice()[index..].rotate_right(1);
        }
    }

    /// Removes element at index, preserving order of the remainder.
    fn remove(&mut self, index: usize) -> PackResult<Self::Item> {
        let size = self.live();
        if index >= size {
            return Err(PackError::index_out_of_range::<Self>(index, size).during("remove"));
        }
        self.as_mut_slice()[index..].rotate_left(1);
        self.pop()
    }

    /// Removes `[start, end)`, preserving order of the remainder.
    fn delete(&mut self, start_or_end: usize, end_or_start: usize) -> PackResult<()> {
        let (start, end) = ordered(start_or_end, end_or_start);
        let size = self.live();
        if end > size {
            return Err(PackError::range_out_of_bounds::<Self>(start, end, size).during("delete"));
        }

        let count = end - start;
        self.as_mut_slice()[start..].rotate_left(count);
        truncate(self, size - count);
        Ok(())
    }

    /// Removes `[start, end)` by moving trailing elements into the gap.
    /// Order of the remainder isn't preserved, but only O(end - start) elements move.
    fn warp(&mut self, start_or_end: usize, end_or_start: usize) -> PackResult<()> {
        let (start, end) = ordered(start_or_end, end_or_start);
        let size = self.live();
        if end > size {
            return Err(PackError::range_out_of_bounds::<Self>(start, end, size).during("warp"));
        }

        let keep = size - (end - start);
        let slots = self.as_mut_slice();
        // Trailing elements that survive fill removed slots that don't.
        let mut tail = end.max(keep);
        for index in start..end.min(keep) {
            slots.swap(index, tail);
            tail += 1;
        }
        truncate(self, keep);
        Ok(())
    }

    fn swap(&mut self, first: usize, second: usize) -> PackResult<()> {
        let size = self.live();
        for index in [first, second] {
            if index >= size {
                return Err(PackError::index_out_of_range::<Self>(index, size).during("swap"));
            }
        }
        self.slots_mut().swap(first, second);
        Ok(())
    }

    /// Rotates live elements so that element at `i` ends at `(i + offset) mod size`.
    fn rotate(&mut self, offset: isize) {
        algorithm::rotate(self.as_mut_slice(), offset);
    }

    fn sort_by<C>(&mut self, comparator: C)
    where
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let size = self.live();
        quicksort(self.as_mut_slice(), comparator, 0, size);
    }

    fn sort_range_by<C>(
        &mut self,
        comparator: C,
        start_or_end: usize,
        end_or_start: usize,
    ) -> PackResult<()>
    where
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let (start, end) = ordered(start_or_end, end_or_start);
        let size = self.live();
        if end > size {
            return Err(PackError::range_out_of_bounds::<Self>(start, end, size).during("sort"));
        }
        quicksort(self.as_mut_slice(), comparator, start, end);
        Ok(())
    }

    /// Sorts with the relational comparator.
    fn sort(&mut self)
    where
        Self::Item: PartialOrd,
    {
        self.sort_by(natural);
    }

    /// Binary searches a sorted pack, see [`algorithm::bisect`].
    fn bisect_by<V, C>(&self, value: &V, comparator: C) -> isize
    where
        V: ?Sized,
        C: FnMut(&V, &Self::Item) -> Ordering,
    {
        bisect(self.as_slice(), value, comparator, 0, self.live())
    }

    /// Removes elements of `[start, end)` equal to an earlier one in the range.
    fn unique_by<C>(
        &mut self,
        mut comparator: C,
        start_or_end: usize,
        end_or_start: usize,
    ) -> PackResult<()>
    where
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let (start, end) = ordered(start_or_end, end_or_start);
        let size = self.live();
        if end > size {
            return Err(PackError::range_out_of_bounds::<Self>(start, end, size).during("unique"));
        }

        let mut kept = start;
        for candidate in start..end {
            let slots = self.as_slice();
            let duplicate = slots[start..kept]
                .iter()
                .any(|other| comparator(&slots[candidate], other).is_eq());
            if !duplicate {
                self.slots_mut().swap(candidate, kept);
                kept += 1;
            }
        }

        let count = end - kept;
        self.as_mut_slice()[kept..].rotate_left(count);
        truncate(self, size - count);
        Ok(())
    }

    fn index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.iter().position(|element| element == value)
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Linear search for an element matching key.
    fn search_by<K, C>(&self, key: &K, mut comparator: C) -> Option<usize>
    where
        K: ?Sized,
        C: FnMut(&K, &Self::Item) -> Ordering,
    {
        self.iter()
            .position(|element| comparator(key, element).is_eq())
    }

    fn extend_from_iter(&mut self, values: impl IntoIterator<Item = Self::Item>) {
        let values = values.into_iter();
        self.reserve(values.size_hint().0);
        for value in values {
            self.push(value);
        }
    }

    /// Removes all elements, keeping capacity.
    fn clear(&mut self) {
        truncate(self, 0);
    }
}

impl<S: Storage + ?Sized> Pack for S {}

/// Reallocates so that at least required slots exist.
fn grow<P: Pack + ?Sized>(pack: &mut P, required: usize) {
    let capacity = pack.capacity();
    if required > capacity {
        pack.reallocate((capacity * 2).max(required).max(1));
    }
}

/// Resets slots of `[size, live)` and shrinks live to size.
fn truncate<P: Pack + ?Sized>(pack: &mut P, size: usize) {
    for index in size..pack.live() {
        pack.reset(index);
    }
    pack.set_live(size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duplicator::CloneDuplicator;

    /// Runs check against every backing store.
    fn each(check: impl Fn(&mut dyn FnMut(usize) -> Box<dyn Contract>)) {
        check(&mut |capacity| Box::new(ArrayPack::<u32>::new(capacity)) as Box<dyn Contract>);
        check(&mut |capacity| Box::new(BufferPack::<u32>::new(capacity)) as Box<dyn Contract>);
        check(&mut |capacity| {
            Box::new(InstancePack::<u32, _>::new(CloneDuplicator, capacity)) as Box<dyn Contract>
        });
    }

    /// Object safe view of a u32 pack for the tests.
    trait Contract {
        fn pack(&mut self) -> &mut dyn Ops;
    }

    trait Ops {
        fn size(&self) -> usize;
        fn capacity(&self) -> usize;
        fn values(&self) -> Vec<u32>;
        fn push(&mut self, value: u32);
        fn pop(&mut self) -> PackResult<u32>;
        fn get(&self, index: usize) -> PackResult<u32>;
        fn set(&mut self, index: usize, value: u32);
        fn set_size(&mut self, size: usize);
        fn reallocate(&mut self, capacity: usize);
        fn fit(&mut self);
        fn insert(&mut self, index: usize, value: u32);
        fn unshift(&mut self, value: u32);
        fn shift(&mut self) -> PackResult<u32>;
        fn delete(&mut self, start: usize, end: usize) -> PackResult<()>;
        fn warp(&mut self, start: usize, end: usize) -> PackResult<()>;
        fn swap(&mut self, first: usize, second: usize) -> PackResult<()>;
        fn rotate(&mut self, offset: isize);
        fn sort(&mut self);
        fn unique(&mut self) -> PackResult<()>;
        fn clear(&mut self);
        fn filler(&self) -> Vec<u32>;
    }

    impl<P: Pack<Item = u32> + 'static> Contract for P {
        fn pack(&mut self) -> &mut dyn Ops {
            self
        }
    }

    impl<P: Pack<Item = u32>> Ops for P {
        fn size(&self) -> usize {
            Pack::size(self)
        }
        fn capacity(&self) -> usize {
            Pack::capacity(self)
        }
        fn values(&self) -> Vec<u32> {
            self.iter().copied().collect()
        }
        fn push(&mut self, value: u32) {
            Pack::push(self, value)
        }
        fn pop(&mut self) -> PackResult<u32> {
            Pack::pop(self)
        }
        fn get(&self, index: usize) -> PackResult<u32> {
            Pack::get(self, index).copied()
        }
        fn set(&mut self, index: usize, value: u32) {
            Pack::set(self, index, value)
        }
        fn set_size(&mut self, size: usize) {
            Pack::set_size(self, size)
        }
        fn reallocate(&mut self, capacity: usize) {
            Pack::reallocate(self, capacity)
        }
        fn fit(&mut self) {
            Pack::fit(self)
        }
        fn insert(&mut self, index: usize, value: u32) {
            Pack::insert(self, index, value)
        }
        fn unshift(&mut self, value: u32) {
            Pack::unshift(self, value)
        }
        fn shift(&mut self) -> PackResult<u32> {
            Pack::shift(self)
        }
        fn delete(&mut self, start: usize, end: usize) -> PackResult<()> {
            Pack::delete(self, start, end)
        }
        fn warp(&mut self, start: usize, end: usize) -> PackResult<()> {
            Pack::warp(self, start, end)
        }
        fn swap(&mut self, first: usize, second: usize) -> PackResult<()> {
            Pack::swap(self, first, second)
        }
        fn rotate(&mut self, offset: isize) {
            Pack::rotate(self, offset)
        }
        fn sort(&mut self) {
            Pack::sort(self)
        }
        fn unique(&mut self) -> PackResult<()> {
            let size = Pack::size(self);
            Pack::unique_by(self, u32::cmp, 0, size)
        }
        fn clear(&mut self) {
            Pack::clear(self)
        }
        fn filler(&self) -> Vec<u32> {
            self.slots()[Pack::size(self)..].to_vec()
        }
    }

    fn filled(make: &mut dyn FnMut(usize) -> Box<dyn Contract>, values: &[u32]) -> Box<dyn Contract> {
        let mut pack = make(values.len());
        for &value in values {
            pack.pack().push(value);
        }
        pack
    }

    #[test]
    fn push_pop() {
        each(|make| {
            let mut pack = make(2);
            let pack = pack.pack();
            pack.push(1);
            pack.push(2);
            pack.push(3);
            assert_eq!(pack.size(), 3);
            assert!(pack.capacity() >= 3);
            assert_eq!(pack.pop(), Ok(3));
            assert_eq!(pack.pop(), Ok(2));
            assert_eq!(pack.pop(), Ok(1));
            assert!(pack.pop().unwrap_err().is_empty_collection());
            assert!(pack.shift().unwrap_err().is_empty_collection());
            assert!(pack.filler().iter().all(|&value| value == 0));
        });
    }

    #[test]
    fn get_out_of_range() {
        each(|make| {
            let mut pack = filled(make, &[4, 5]);
            let pack = pack.pack();
            assert_eq!(pack.get(1), Ok(5));
            let error = pack.get(2).unwrap_err();
            assert!(error.is_out_of_range());
            assert_eq!(pack.values(), vec![4, 5]);
        });
    }

    #[test]
    fn set_past_end() {
        each(|make| {
            let mut pack = make(2);
            let pack = pack.pack();
            pack.push(7);
            pack.set(4, 9);
            assert_eq!(pack.values(), vec![7, 0, 0, 0, 9]);
            assert!(pack.capacity() >= 5);
        });
    }

    #[test]
    fn set_size() {
        each(|make| {
            let mut pack = filled(make, &[1, 2, 3, 4]);
            let pack = pack.pack();
            pack.set_size(2);
            assert_eq!(pack.values(), vec![1, 2]);
            assert!(pack.filler().iter().all(|&value| value == 0));
            pack.set_size(6);
            assert_eq!(pack.values(), vec![1, 2, 0, 0, 0, 0]);
            assert!(pack.capacity() >= 6);
        });
    }

    #[test]
    fn reallocate_truncates() {
        each(|make| {
            let mut pack = filled(make, &[1, 2, 3, 4, 5]);
            let pack = pack.pack();
            pack.reallocate(3);
            assert_eq!(pack.capacity(), 3);
            assert_eq!(pack.values(), vec![1, 2, 3]);
            pack.reallocate(10);
            assert_eq!(pack.capacity(), 10);
            assert_eq!(pack.values(), vec![1, 2, 3]);
        });
    }

    #[test]
    fn fit_twice() {
        each(|make| {
            let mut pack = make(16);
            let pack = pack.pack();
            pack.push(1);
            pack.push(2);
            pack.fit();
            assert_eq!(pack.capacity(), 2);
            pack.fit();
            assert_eq!(pack.capacity(), 2);
            assert_eq!(pack.values(), vec![1, 2]);
        });
    }

    #[test]
    fn insert_unshift_shift() {
        each(|make| {
            let mut pack = filled(make, &[0, 1, 2, 3]);
            let pack = pack.pack();
            pack.insert(2, 8);
            assert_eq!(pack.values(), vec![0, 1, 8, 2, 3]);
            pack.insert(7, 9);
            assert_eq!(pack.values(), vec![0, 1, 8, 2, 3, 0, 0, 9]);
            pack.unshift(5);
            assert_eq!(pack.values(), vec![5, 0, 1, 8, 2, 3, 0, 0, 9]);
            assert_eq!(pack.shift(), Ok(5));
            assert_eq!(pack.shift(), Ok(0));
            assert_eq!(pack.values(), vec![1, 8, 2, 3, 0, 0, 9]);
        });
    }

    #[test]
    fn delete() {
        each(|make| {
            let values = (0..10).collect::<Vec<_>>();
            let mut pack = filled(make, &values);
            pack.pack().delete(5, 7).unwrap();
            assert_eq!(pack.pack().values(), vec![0, 1, 2, 3, 4, 7, 8, 9]);

            let mut reversed = filled(make, &values);
            reversed.pack().delete(7, 5).unwrap();
            assert_eq!(reversed.pack().values(), pack.pack().values());

            let error = pack.pack().delete(3, 9).unwrap_err();
            assert!(error.is_out_of_range());
            assert_eq!(pack.pack().size(), 8);
            assert!(pack.pack().filler().iter().all(|&value| value == 0));
        });
    }

    #[test]
    fn warp() {
        each(|make| {
            let values = (0..10).collect::<Vec<_>>();
            let mut pack = filled(make, &values);
            pack.pack().warp(2, 4).unwrap();
            assert_eq!(pack.pack().values(), vec![0, 1, 8, 9, 4, 5, 6, 7]);

            // Overlaps the tail.
            let mut pack = filled(make, &values);
            pack.pack().warp(6, 9).unwrap();
            assert_eq!(pack.pack().values(), vec![0, 1, 2, 3, 4, 5, 9]);

            let mut pack = filled(make, &values);
            pack.pack().warp(4, 0).unwrap();
            let mut rest = pack.pack().values();
            rest.sort();
            assert_eq!(rest, vec![4, 5, 6, 7, 8, 9]);
            assert!(pack.pack().warp(0, 11).unwrap_err().is_out_of_range());
        });
    }

    #[test]
    fn swap_and_rotate() {
        each(|make| {
            let mut pack = filled(make, &[0, 1, 2, 3, 4]);
            let pack = pack.pack();
            pack.swap(0, 4).unwrap();
            assert_eq!(pack.values(), vec![4, 1, 2, 3, 0]);
            assert!(pack.swap(0, 5).unwrap_err().is_out_of_range());
            pack.rotate(-2);
            assert_eq!(pack.values(), vec![2, 3, 0, 4, 1]);
        });
    }

    #[test]
    fn sort_and_unique() {
        each(|make| {
            let mut pack = filled(make, &[3, 1, 2, 0, 2, 3, 3]);
            let pack = pack.pack();
            pack.unique().unwrap();
            assert_eq!(pack.values(), vec![3, 1, 2, 0]);
            pack.sort();
            assert_eq!(pack.values(), vec![0, 1, 2, 3]);
            pack.clear();
            assert_eq!(pack.size(), 0);
            assert_eq!(pack.values(), Vec::<u32>::new());
        });
    }

    #[test]
    fn size_never_exceeds_capacity() {
        use rand::*;
        each(|make| {
            let mut rand = thread_rng();
            let mut pack = make(4);
            let pack = pack.pack();
            let mut doppelganger = Vec::new();
            for _ in 0..2000 {
                match rand.gen_range(0..10) {
                    0 | 1 | 2 => {
                        let value = rand.gen_range(1..1000);
                        pack.push(value);
                        doppelganger.push(value);
                    }
                    3 => assert_eq!(pack.pop().ok(), doppelganger.pop()),
                    4 if !doppelganger.is_empty() => {
                        let index = rand.gen_range(0..doppelganger.len());
                        let value = rand.gen_range(1..1000);
                        pack.insert(index, value);
                        doppelganger.insert(index, value);
                    }
                    5 => {
                        let start = rand.gen_range(0..=doppelganger.len());
                        let end = rand.gen_range(start..=doppelganger.len());
                        pack.delete(end, start).unwrap();
                        doppelganger.drain(start..end);
                    }
                    6 if !doppelganger.is_empty() => {
                        let value = rand.gen_range(1..1000);
                        pack.unshift(value);
                        doppelganger.insert(0, value);
                    }
                    7 if !doppelganger.is_empty() => {
                        assert_eq!(pack.shift().ok(), Some(doppelganger.remove(0)));
                    }
                    8 => {
                        let offset = rand.gen_range(-20..20);
                        pack.rotate(offset);
                        if !doppelganger.is_empty() {
                            let len = doppelganger.len();
                            doppelganger.rotate_right(algorithm::modulo(offset, len));
                        }
                    }
                    9 => {
                        pack.fit();
                        assert_eq!(pack.capacity(), doppelganger.len());
                    }
                    _ => (),
                }
                assert!(pack.size() <= pack.capacity());
                assert_eq!(pack.values(), doppelganger);
                assert!(pack.filler().iter().all(|&value| value == 0));
            }
        });
    }
}
