//! Binary max heap over any [`Pack`].
//!
//! Children of index `k` are at `2k + 1` and `2k + 2`, and no child compares
//! greater than its parent. Only the parent child order is maintained, so the
//! backing sequence isn't sorted.

use crate::{
    algorithm::natural,
    error::{PackError, PackResult},
    pack::{storage::Storage, Pack},
};
use std::{
    cmp::Ordering,
    fmt::{self, Debug},
    slice,
};

#[derive(Clone)]
pub struct PackHeap<P: Pack, C: Fn(&P::Item, &P::Item) -> Ordering> {
    pack: P,
    comparator: C,
}

impl<P: Pack> PackHeap<P, fn(&P::Item, &P::Item) -> Ordering>
where
    P::Item: PartialOrd,
{
    /// Heap ordered by the relational comparator.
    pub fn with_natural_order(pack: P) -> Self {
        Self::new(pack, natural)
    }
}

impl<P: Pack, C: Fn(&P::Item, &P::Item) -> Ordering> PackHeap<P, C> {
    /// Heap of elements of the pack.
    pub fn new(pack: P, comparator: C) -> Self {
        let mut heap = Self { pack, comparator };
        heap.heapify();
        heap
    }

    pub fn size(&self) -> usize {
        self.pack.size()
    }

    pub fn capacity(&self) -> usize {
        self.pack.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.pack.is_empty()
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Replaces comparator and restores heap order under it.
    pub fn set_comparator(&mut self, comparator: C) {
        self.comparator = comparator;
        self.heapify();
    }

    /// Greatest element.
    pub fn peek(&self) -> PackResult<&P::Item> {
        self.pack
            .as_slice()
            .first()
            .ok_or_else(|| PackError::empty::<Self>().during("peek"))
    }

    /// Element at index in heap order.
    pub fn get(&self, index: usize) -> PackResult<&P::Item> {
        self.pack.as_slice().get(index).ok_or_else(|| {
            PackError::index_out_of_range::<Self>(index, self.size()).during("get")
        })
    }

    /// Backing sequence in heap order.
    pub fn as_slice(&self) -> &[P::Item] {
        self.pack.as_slice()
    }

    pub fn iter(&self) -> slice::Iter<'_, P::Item> {
        self.pack.iter()
    }

    pub fn push(&mut self, value: P::Item) {
        self.pack.push(value);
        let last = self.size() - 1;
        self.uplift(last);
    }

    pub fn extend_from_iter(&mut self, values: impl IntoIterator<Item = P::Item>) {
        for value in values {
            self.push(value);
        }
    }

    /// Iterator that pops elements, greatest first.
    pub fn drain(&mut self) -> Drain<'_, P, C> {
        Drain { heap: self }
    }

    /// Removes the greatest element.
    pub fn pop(&mut self) -> PackResult<P::Item> {
        if self.is_empty() {
            return Err(PackError::empty::<Self>().during("pop"));
        }
        Ok(self.remove_at(0))
    }

    /// Removes element at index in heap order.
    pub fn take(&mut self, index: usize) -> PackResult<P::Item> {
        self.check(index, "take")?;
        Ok(self.remove_at(index))
    }

    /// Removes element at index in heap order and disposes of it.
    pub fn delete(&mut self, index: usize) -> PackResult<()> {
        self.check(index, "delete")?;
        let value = self.remove_at(index);
        self.pack.recycle(value);
        Ok(())
    }

    /// Changes capacity. Truncation drops trailing elements, which keeps heap order.
    pub fn reallocate(&mut self, capacity: usize) {
        self.pack.reallocate(capacity);
    }

    pub fn fit(&mut self) {
        self.pack.fit();
    }

    pub fn clear(&mut self) {
        self.pack.clear();
    }

    /// Whether every parent compares greater or equal to its children.
    pub fn is_heap(&self) -> bool {
        (1..self.size()).all(|child| !self.greater(child, (child - 1) / 2))
    }

    pub fn into_inner(self) -> P {
        self.pack
    }

    /// Elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<P::Item> {
        let mut sorted = Vec::with_capacity(self.size());
        while let Ok(value) = self.pop() {
            sorted.push(value);
        }
        sorted.reverse();
        sorted
    }

    fn check(&self, index: usize, op: &'static str) -> PackResult<()> {
        let size = self.size();
        if index < size {
            Ok(())
        } else {
            Err(PackError::index_out_of_range::<Self>(index, size).during(op))
        }
    }

    /// Index must be live.
    fn remove_at(&mut self, index: usize) -> P::Item {
        let last = self.size() - 1;
        let slots = self.pack.as_mut_slice();
        slots.swap(index, last);
        let filler = self.pack.default_value();
        let value = std::mem::replace(&mut self.pack.as_mut_slice()[last], filler);
        self.pack.set_live(last);
        if index < last && self.uplift(index) == index {
            self.dive(index);
        }
        value
    }

    fn heapify(&mut self) {
        for index in 1..self.size() {
            self.uplift(index);
        }
    }

    fn greater(&self, first: usize, second: usize) -> bool {
        let slots = self.pack.as_slice();
        (self.comparator)(&slots[first], &slots[second]).is_gt()
    }

    /// Moves element up while it's greater than its parent. Returns its final index.
    fn uplift(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.greater(index, parent) {
                break;
            }
            self.pack.as_mut_slice().swap(index, parent);
            index = parent;
        }
        index
    }

    /// Moves element down toward the greater child while that child is greater.
    fn dive(&mut self, mut index: usize) {
        let size = self.size();
        loop {
            let left = 2 * index + 1;
            if left >= size {
                break;
            }
            let right = left + 1;
            let child = if right < size && self.greater(right, left) {
                right
            } else {
                left
            };
            if !self.greater(child, index) {
                break;
            }
            self.pack.as_mut_slice().swap(index, child);
            index = child;
        }
    }
}

pub struct Drain<'a, P: Pack, C: Fn(&P::Item, &P::Item) -> Ordering> {
    heap: &'a mut PackHeap<P, C>,
}

impl<'a, P: Pack, C: Fn(&P::Item, &P::Item) -> Ordering> Iterator for Drain<'a, P, C> {
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.heap.size();
        (size, Some(size))
    }
}

pub struct IntoIter<P: Pack, C: Fn(&P::Item, &P::Item) -> Ordering> {
    heap: PackHeap<P, C>,
}

impl<P: Pack, C: Fn(&P::Item, &P::Item) -> Ordering> Iterator for IntoIter<P, C> {
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.heap.size();
        (size, Some(size))
    }
}

impl<P: Pack, C: Fn(&P::Item, &P::Item) -> Ordering> IntoIterator for PackHeap<P, C> {
    type Item = P::Item;
    type IntoIter = IntoIter<P, C>;

    /// Pops elements, greatest first.
    fn into_iter(self) -> IntoIter<P, C> {
        IntoIter { heap: self }
    }
}

impl<P: Pack, C: Fn(&P::Item, &P::Item) -> Ordering> Debug for PackHeap<P, C>
where
    P::Item: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
