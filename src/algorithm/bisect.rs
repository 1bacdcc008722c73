use super::Sequence;
use std::cmp::Ordering;

/// Binary searches value in `[start, end)` of a sequence sorted by comparator.
///
/// Returns index of a matching element, otherwise `-(insertion_index + 1)`.
/// Comparator compares the searched value against an element.
///
/// Panics if `start > end` or `end > sequence.len()`.
pub fn bisect<S, V, C>(sequence: &S, value: &V, mut comparator: C, start: usize, end: usize) -> isize
where
    S: Sequence + ?Sized,
    V: ?Sized,
    C: FnMut(&V, &S::Item) -> Ordering,
{
    search(sequence, start, end, |element| comparator(value, element))
}

/// Like [`bisect`], but returns the first of matching elements.
pub fn bisect_first<S, V, C>(
    sequence: &S,
    value: &V,
    mut comparator: C,
    start: usize,
    end: usize,
) -> isize
where
    S: Sequence + ?Sized,
    V: ?Sized,
    C: FnMut(&V, &S::Item) -> Ordering,
{
    let found = bisect(sequence, value, &mut comparator, start, end);
    if found < 0 {
        return found;
    }

    let mut index = found as usize;
    while index > start && comparator(value, sequence.at(index - 1)).is_eq() {
        index -= 1;
    }
    index as isize
}

/// Like [`bisect`], but returns the last of matching elements.
pub fn bisect_last<S, V, C>(
    sequence: &S,
    value: &V,
    mut comparator: C,
    start: usize,
    end: usize,
) -> isize
where
    S: Sequence + ?Sized,
    V: ?Sized,
    C: FnMut(&V, &S::Item) -> Ordering,
{
    let found = bisect(sequence, value, &mut comparator, start, end);
    if found < 0 {
        return found;
    }

    let mut index = found as usize;
    while index + 1 < end && comparator(value, sequence.at(index + 1)).is_eq() {
        index += 1;
    }
    index as isize
}

/// Like [`bisect`], but for a sequence sorted by the inverse of the comparator.
pub fn bisect_invert<S, V, C>(
    sequence: &S,
    value: &V,
    mut comparator: C,
    start: usize,
    end: usize,
) -> isize
where
    S: Sequence + ?Sized,
    V: ?Sized,
    C: FnMut(&V, &S::Item) -> Ordering,
{
    search(sequence, start, end, |element| {
        comparator(value, element).reverse()
    })
}

/// Decodes result of bisect into a `Result` of found or insertion index.
pub fn insertion_point(result: isize) -> Result<usize, usize> {
    if result >= 0 {
        Ok(result as usize)
    } else {
        Err((-(result + 1)) as usize)
    }
}

fn search<S, C>(sequence: &S, start: usize, end: usize, mut compare: C) -> isize
where
    S: Sequence + ?Sized,
    C: FnMut(&S::Item) -> Ordering,
{
    assert!(
        start <= end && end <= sequence.len(),
        "bisect range [{}, {}) out of bounds of {}",
        start,
        end,
        sequence.len()
    );

    let mut left = start;
    let mut right = end;
    while left != right {
        let cursor = left + (right - left) / 2;
        match compare(sequence.at(cursor)) {
            Ordering::Equal => return cursor as isize,
            Ordering::Greater => left = cursor + 1,
            Ordering::Less => right = cursor,
        }
    }

    -(left as isize + 1)
}
