//! Ring buffer over any [`Pack`].
//!
//! Logical index `i` lives at physical slot `(start + i) mod capacity` of the
//! wrapped pack, whose own size is kept equal to its capacity so that every
//! physical slot is addressable. Slots outside of the logical window hold filler
//! values of the wrapped pack.

use crate::{
    algorithm::{bisect, modulo, natural, quicksort, rotate_with, Sequence, SwapSequence},
    error::{ordered, PackError, PackResult},
    pack::{storage::Storage, Pack},
};
use getset::CopyGetters;
use log::debug;
use std::{
    cmp::Ordering,
    fmt::{self, Debug},
    iter::Chain,
    mem, slice,
};

/// What a ring does when a write doesn't fit into its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Overflow {
    /// Overwrites elements at the opposite end.
    #[default]
    Evict,
    /// Reallocates to `max(2 * capacity, required, 1)`.
    Grow,
    /// Fails with [`PackError::InvalidArguments`].
    Reject,
}

#[derive(Clone, CopyGetters)]
pub struct CircularPack<P: Pack> {
    pack: P,
    /// Physical index of the first element.
    #[getset(get_copy = "pub")]
    start: usize,
    size: usize,
    #[getset(get_copy = "pub")]
    overflow: Overflow,
}

impl<P: Pack> CircularPack<P> {
    /// Ring of elements of the pack, evicting on overflow.
    pub fn new(pack: P) -> Self {
        Self::with_overflow(pack, Overflow::default())
    }

    /// Ring of elements of the pack.
    pub fn with_overflow(mut pack: P, overflow: Overflow) -> Self {
        let size = pack.size();
        let capacity = pack.capacity();
        pack.set_size(capacity);
        Self {
            pack,
            start: 0,
            size,
            overflow,
        }
    }

    /// Ring over all slots of the pack, with window of size elements beginning at start.
    /// Slots outside of the window are reset to filler values.
    pub fn from_parts(mut pack: P, start: usize, size: usize) -> PackResult<Self> {
        let capacity = pack.capacity();
        if size > capacity || (start >= capacity && start > 0) {
            return Err(PackError::invalid_arguments(
                "from_parts",
                "window doesn't fit into capacity",
            ));
        }
        pack.set_size(capacity);
        for index in size..capacity {
            pack.reset((start + index) % capacity);
        }
        Ok(Self {
            pack,
            start,
            size,
            overflow: Overflow::default(),
        })
    }

    pub fn set_overflow(&mut self, overflow: Overflow) {
        self.overflow = overflow;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn capacity(&self) -> usize {
        self.pack.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// Grows with default values or truncates.
    /// Growing past capacity reallocates, unless overflow is rejected.
    pub fn set_size(&mut self, size: usize) -> PackResult<()> {
        if size > self.capacity() {
            if self.overflow == Overflow::Reject {
                return Err(self.no_room("set_size"));
            }
            self.reallocate(size);
        }
        for index in size..self.size {
            let physical = self.physical(index);
            self.pack.reset(physical);
        }
        self.size = size;
        Ok(())
    }

    /// Changes capacity, keeping the newest elements if it's less than size.
    pub fn reallocate(&mut self, capacity: usize) {
        if capacity < self.size {
            self.evict(self.size - capacity);
        }
        self.realign();
        self.pack.set_size(self.size);
        self.pack.reallocate(capacity);
        self.pack.set_size(capacity);
    }

    /// Reallocates to size.
    pub fn fit(&mut self) {
        self.reallocate(self.size);
    }

    pub fn get(&self, index: usize) -> PackResult<&P::Item> {
        if index < self.size {
            Ok(&self.pack.as_slice()[self.physical(index)])
        } else {
            Err(PackError::index_out_of_range::<Self>(index, self.size).during("get"))
        }
    }

    pub fn get_mut(&mut self, index: usize) -> PackResult<&mut P::Item> {
        if index < self.size {
            let physical = self.physical(index);
            Ok(&mut self.pack.as_mut_slice()[physical])
        } else {
            Err(PackError::index_out_of_range::<Self>(index, self.size).during("get_mut"))
        }
    }

    pub fn first(&self) -> PackResult<&P::Item> {
        if self.size == 0 {
            return Err(PackError::empty::<Self>().during("first"));
        }
        self.get(0)
    }

    pub fn last(&self) -> PackResult<&P::Item> {
        if self.size == 0 {
            return Err(PackError::empty::<Self>().during("last"));
        }
        self.get(self.size - 1)
    }

    /// Live elements as two physical slices, in logical order.
    pub fn as_slices(&self) -> (&[P::Item], &[P::Item]) {
        let slots = self.pack.as_slice();
        let end = self.start + self.size;
        if end <= slots.len() {
            (&slots[self.start..end], &[])
        } else {
            (&slots[self.start..], &slots[..end - slots.len()])
        }
    }

    pub fn iter(&self) -> Chain<slice::Iter<'_, P::Item>, slice::Iter<'_, P::Item>> {
        let (head, tail) = self.as_slices();
        head.iter().chain(tail.iter())
    }

    /// Writes value at index.
    ///
    /// Writing past the end fills skipped slots with default values. Writing past
    /// capacity of an evicting ring first drops as many of the oldest elements as
    /// needed for index to become the last one.
    ///
    /// # Panics
    /// If a growing ring can't allocate index + 1 slots.
    pub fn set(&mut self, index: usize, value: P::Item) -> PackResult<()> {
        let mut index = index;
        let capacity = self.capacity();
        if index >= capacity {
            match self.overflow {
                Overflow::Evict if capacity > 0 => {
                    self.evict(index - (capacity - 1));
                    index = capacity - 1;
                }
                Overflow::Grow => self.grow(index.saturating_add(1)),
                _ => return Err(self.no_room("set")),
            }
        }

        let physical = self.physical(index);
        self.write(physical, value);
        self.size = self.size.max(index + 1);
        Ok(())
    }

    /// Appends value. A full evicting ring overwrites its oldest element.
    pub fn push(&mut self, value: P::Item) -> PackResult<()> {
        if self.is_full() && self.on_overflow("push")? {
            debug!("Overwriting oldest element of {}", std::any::type_name::<Self>());
            let physical = self.start;
            self.write(physical, value);
            self.start = (physical + 1) % self.capacity();
            return Ok(());
        }

        let physical = self.physical(self.size);
        self.write(physical, value);
        self.size += 1;
        Ok(())
    }

    /// Prepends value. A full evicting ring overwrites its newest element.
    pub fn unshift(&mut self, value: P::Item) -> PackResult<()> {
        let overwrite = self.is_full() && self.on_overflow("unshift")?;
        if overwrite {
            debug!("Overwriting newest element of {}", std::any::type_name::<Self>());
        }

        self.start = modulo(self.start as isize - 1, self.capacity());
        let physical = self.start;
        self.write(physical, value);
        if !overwrite {
            self.size += 1;
        }
        Ok(())
    }

    /// Removes the newest element.
    pub fn pop(&mut self) -> PackResult<P::Item> {
        if self.size == 0 {
            return Err(PackError::empty::<Self>().during("pop"));
        }
        let physical = self.physical(self.size - 1);
        self.size -= 1;
        Ok(self.take(physical))
    }

    /// Removes the oldest element.
    pub fn shift(&mut self) -> PackResult<P::Item> {
        if self.size == 0 {
            return Err(PackError::empty::<Self>().during("shift"));
        }
        let physical = self.start;
        self.start = (physical + 1) % self.capacity();
        self.size -= 1;
        Ok(self.take(physical))
    }

    /// Inserts value before element at index, moving the shorter side.
    ///
    /// A full evicting ring drops its oldest element first, so inserting at 0
    /// drops the inserted value itself.
    pub fn insert(&mut self, index: usize, value: P::Item) -> PackResult<()> {
        if index >= self.size {
            return self.set(index, value);
        }

        let mut index = index;
        if self.is_full() && self.on_overflow("insert")? {
            if index == 0 {
                debug!(
                    "Dropping value inserted before oldest element of {}",
                    std::any::type_name::<Self>()
                );
                self.pack.recycle(value);
                return Ok(());
            }
            self.evict(1);
            index -= 1;
        }

        if index < self.size - index {
            self.start = modulo(self.start as isize - 1, self.capacity());
            self.size += 1;
            for cursor in 0..index {
                self.exchange(cursor, cursor + 1);
            }
        } else {
            self.size += 1;
            for cursor in (index..self.size - 1).rev() {
                self.exchange(cursor, cursor + 1);
            }
        }

        let physical = self.physical(index);
        self.write(physical, value);
        Ok(())
    }

    /// Removes `[start, end)`, preserving order, by moving the shorter side.
    pub fn delete(&mut self, start_or_end: usize, end_or_start: usize) -> PackResult<()> {
        let (start, end) = self.range(start_or_end, end_or_start, "delete")?;
        let count = end - start;
        if count == 0 {
            return Ok(());
        }

        if start < self.size - end {
            for cursor in (0..start).rev() {
                self.exchange(cursor, cursor + count);
            }
            self.drop_front(count);
        } else {
            for cursor in end..self.size {
                self.exchange(cursor, cursor - count);
            }
            self.drop_back(count);
        }
        Ok(())
    }

    /// Removes element at index, preserving order.
    pub fn remove(&mut self, index: usize) -> PackResult<P::Item> {
        if index >= self.size {
            return Err(
                PackError::index_out_of_range::<Self>(index, self.size).during("remove")
            );
        }
        let physical = self.physical(index);
        let value = self.take(physical);
        self.delete(index, index + 1)?;
        Ok(value)
    }

    /// Removes `[start, end)` by moving elements of the nearer end into the gap.
    /// Order of the remainder isn't preserved.
    pub fn warp(&mut self, start_or_end: usize, end_or_start: usize) -> PackResult<()> {
        let (start, end) = self.range(start_or_end, end_or_start, "warp")?;
        let count = end - start;
        if count == 0 {
            return Ok(());
        }

        if start < self.size - end {
            // Surviving leading elements fill removed slots past the head.
            let gap = start.max(count);
            for offset in 0..start.min(count) {
                self.exchange(offset, gap + offset);
            }
            self.drop_front(count);
        } else {
            let keep = self.size - count;
            let mut tail = end.max(keep);
            for cursor in start..end.min(keep) {
                self.exchange(cursor, tail);
                tail += 1;
            }
            self.drop_back(count);
        }
        Ok(())
    }

    pub fn swap(&mut self, first: usize, second: usize) -> PackResult<()> {
        for index in [first, second] {
            if index >= self.size {
                return Err(
                    PackError::index_out_of_range::<Self>(index, self.size).during("swap")
                );
            }
        }
        self.exchange(first, second);
        Ok(())
    }

    /// Rotates elements so that element at `i` ends at `(i + offset) mod size`.
    pub fn rotate(&mut self, offset: isize) {
        if self.size == 0 {
            return;
        }
        if self.is_full() {
            self.start = modulo(self.start as isize - offset, self.capacity());
        } else {
            let size = self.size;
            rotate_with(size, offset, |first, second| self.exchange(first, second));
        }
    }

    /// Removes all elements, keeping capacity.
    pub fn clear(&mut self) {
        self.drop_back(self.size);
        self.start = 0;
    }

    /// Pushes every value in order.
    pub fn extend_from_iter(
        &mut self,
        values: impl IntoIterator<Item = P::Item>,
    ) -> PackResult<()> {
        for value in values {
            self.push(value)?;
        }
        Ok(())
    }

    /// Prepends values keeping their order.
    pub fn unshift_all<I>(&mut self, values: I) -> PackResult<()>
    where
        I: IntoIterator<Item = P::Item>,
        I::IntoIter: DoubleEndedIterator,
    {
        for value in values.into_iter().rev() {
            self.unshift(value)?;
        }
        Ok(())
    }

    /// Makes this ring a copy of source, reallocating if it doesn't fit.
    pub fn copy_from(&mut self, source: &[P::Item])
    where
        P::Item: Clone,
    {
        if source.len() > self.capacity() {
            self.reallocate(source.len());
        }
        self.clear();
        for (physical, value) in source.iter().enumerate() {
            self.write(physical, value.clone());
        }
        self.size = source.len();
    }

    pub fn index_of(&self, value: &P::Item) -> Option<usize>
    where
        P::Item: PartialEq,
    {
        self.iter().position(|element| element == value)
    }

    pub fn contains(&self, value: &P::Item) -> bool
    where
        P::Item: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Linear search for an element matching key.
    pub fn search_by<K, C>(&self, key: &K, mut comparator: C) -> Option<usize>
    where
        K: ?Sized,
        C: FnMut(&K, &P::Item) -> Ordering,
    {
        self.iter().position(|element| comparator(key, element).is_eq())
    }

    pub fn bisect_by<V, C>(&self, value: &V, comparator: C) -> isize
    where
        V: ?Sized,
        C: FnMut(&V, &P::Item) -> Ordering,
    {
        bisect(self, value, comparator, 0, self.size)
    }

    pub fn sort_by<C>(&mut self, comparator: C)
    where
        C: FnMut(&P::Item, &P::Item) -> Ordering,
    {
        let size = self.size;
        quicksort(self, comparator, 0, size);
    }

    pub fn sort_range_by<C>(
        &mut self,
        comparator: C,
        start_or_end: usize,
        end_or_start: usize,
    ) -> PackResult<()>
    where
        C: FnMut(&P::Item, &P::Item) -> Ordering,
    {
        let (start, end) = self.range(start_or_end, end_or_start, "sort")?;
        quicksort(self, comparator, start, end);
        Ok(())
    }

    pub fn sort(&mut self)
    where
        P::Item: PartialOrd,
    {
        self.sort_by(natural);
    }

    /// Wrapped pack holding the elements in order.
    pub fn into_inner(mut self) -> P {
        self.realign();
        self.pack.set_size(self.size);
        self.pack
    }

    fn physical(&self, index: usize) -> usize {
        (self.start + index) % self.capacity()
    }

    fn range(
        &self,
        start_or_end: usize,
        end_or_start: usize,
        op: &'static str,
    ) -> PackResult<(usize, usize)> {
        let (start, end) = ordered(start_or_end, end_or_start);
        if end > self.size {
            Err(PackError::range_out_of_bounds::<Self>(start, end, self.size).during(op))
        } else {
            Ok((start, end))
        }
    }

    /// Exchanges logical positions.
    fn exchange(&mut self, first: usize, second: usize) {
        let first = self.physical(first);
        let second = self.physical(second);
        self.pack.as_mut_slice().swap(first, second);
    }

    fn write(&mut self, physical: usize, value: P::Item) {
        let old = mem::replace(&mut self.pack.as_mut_slice()[physical], value);
        self.pack.recycle(old);
    }

    fn take(&mut self, physical: usize) -> P::Item {
        let filler = self.pack.default_value();
        mem::replace(&mut self.pack.as_mut_slice()[physical], filler)
    }

    /// Drops count oldest positions of the window, live or not.
    fn evict(&mut self, count: usize) {
        let dropped = count.min(self.size);
        debug!(
            "Evicting {} oldest elements of {}",
            dropped,
            std::any::type_name::<Self>()
        );
        for index in 0..dropped {
            let physical = self.physical(index);
            self.pack.reset(physical);
        }
        self.start = (self.start + count % self.capacity()) % self.capacity();
        self.size -= dropped;
    }

    /// Resets and drops first count live elements.
    fn drop_front(&mut self, count: usize) {
        for index in 0..count {
            let physical = self.physical(index);
            self.pack.reset(physical);
        }
        self.start = (self.start + count) % self.capacity();
        self.size -= count;
    }

    /// Resets and drops last count live elements.
    fn drop_back(&mut self, count: usize) {
        for index in self.size - count..self.size {
            let physical = self.physical(index);
            self.pack.reset(physical);
        }
        self.size -= count;
    }

    /// Physically rotates slots so that start becomes 0.
    fn realign(&mut self) {
        let offset = -(self.start as isize);
        let slots = self.pack.as_mut_slice();
        let len = slots.len();
        rotate_with(len, offset, |first, second| slots.swap(first, second));
        self.start = 0;
    }

    fn grow(&mut self, required: usize) {
        let capacity = self.capacity();
        self.reallocate((capacity * 2).max(required).max(1));
    }

    /// Makes room for one more element of a full ring according to the overflow policy.
    /// Returns true if an element must be overwritten instead.
    fn on_overflow(&mut self, op: &'static str) -> PackResult<bool> {
        match self.overflow {
            Overflow::Evict if self.capacity() > 0 => Ok(true),
            Overflow::Grow => {
                self.grow(self.size + 1);
                Ok(false)
            }
            _ => Err(self.no_room(op)),
        }
    }

    fn no_room(&self, op: &'static str) -> PackError {
        if self.capacity() == 0 {
            PackError::invalid_arguments(op, "ring has no capacity")
        } else {
            PackError::invalid_arguments(op, "ring is full")
        }
    }
}

impl<P: Pack> Sequence for CircularPack<P> {
    type Item = P::Item;

    fn len(&self) -> usize {
        self.size
    }

    fn at(&self, index: usize) -> &P::Item {
        assert!(index < self.size, "index {} out of ring of {}", index, self.size);
        &self.pack.as_slice()[self.physical(index)]
    }
}

impl<P: Pack> SwapSequence for CircularPack<P> {
    fn swap_at(&mut self, first: usize, second: usize) {
        assert!(
            first < self.size && second < self.size,
            "indices {} and {} out of ring of {}",
            first,
            second,
            self.size
        );
        self.exchange(first, second);
    }
}

impl<P: Pack, Q: Pack<Item = P::Item>> PartialEq<CircularPack<Q>> for CircularPack<P>
where
    P::Item: PartialEq,
{
    fn eq(&self, other: &CircularPack<Q>) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<P: Pack> Debug for CircularPack<P>
where
    P::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
