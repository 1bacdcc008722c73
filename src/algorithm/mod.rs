//! Ordering algorithms over a minimal random access contract.
//!
//! Algorithms here are stateless and only require [`Sequence`] for reading
//! and [`SwapSequence`] for in place mutations.

mod bisect;
mod quicksort;

pub use bisect::*;
pub use quicksort::*;

use std::cmp::Ordering;

/// Random access to a finite sequence of elements.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    /// Panics if index is out of range.
    fn at(&self, index: usize) -> &Self::Item;
}

/// Sequence whose elements can be exchanged in place.
pub trait SwapSequence: Sequence {
    /// Panics if any index is out of range.
    fn swap_at(&mut self, first: usize, second: usize);
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> SwapSequence for [T] {
    fn swap_at(&mut self, first: usize, second: usize) {
        self.swap(first, second)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> SwapSequence for Vec<T> {
    fn swap_at(&mut self, first: usize, second: usize) {
        self.swap(first, second)
    }
}

/// Relational comparator.
/// Incomparable values, like NaN, are treated as equal.
pub fn natural<T: PartialOrd + ?Sized>(left: &T, right: &T) -> Ordering {
    left.partial_cmp(right).unwrap_or(Ordering::Equal)
}

/// Comparator with reversed order.
pub fn reversed<T: ?Sized>(
    comparator: impl Fn(&T, &T) -> Ordering,
) -> impl Fn(&T, &T) -> Ordering {
    move |left: &T, right: &T| comparator(right, left)
}

pub fn gcd(mut left: usize, mut right: usize) -> usize {
    while right != 0 {
        let next = left % right;
        left = right;
        right = next;
    }
    left
}

/// Euclidean remainder of offset by len.
/// Len must not be zero.
pub fn modulo(offset: isize, len: usize) -> usize {
    offset.rem_euclid(len as isize) as usize
}

/// Rotates `len` elements so that element at `i` ends at `(i + offset) mod len`.
///
/// Decomposes the permutation into `gcd(len, offset mod len)` independent cycles, and
/// walks each cycle by swapping its head with the next member.
pub fn rotate_with(len: usize, offset: isize, mut swap: impl FnMut(usize, usize)) {
    if len < 2 {
        return;
    }
    let offset = modulo(offset, len);
    if offset == 0 {
        return;
    }

    for head in 0..gcd(len, offset) {
        let mut next = (head + offset) % len;
        while next != head {
            swap(head, next);
            next = (next + offset) % len;
        }
    }
}

/// Rotates whole sequence by offset.
pub fn rotate<S: SwapSequence + ?Sized>(sequence: &mut S, offset: isize) {
    let len = sequence.len();
    rotate_with(len, offset, |first, second| sequence.swap_at(first, second));
}
