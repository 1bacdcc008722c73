use super::SwapSequence;
use std::cmp::Ordering;

/// Sorts `[start, end)` of the sequence in place.
///
/// Hoare partitioning around the element in the middle of each subrange.
/// Worst case is O(n^2) comparisons, but recursion only descends into the
/// smaller partition so stack depth stays O(log n).
///
/// Panics if `start > end` or `end > sequence.len()`.
pub fn quicksort<S, C>(sequence: &mut S, mut comparator: C, start: usize, end: usize)
where
    S: SwapSequence + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    assert!(
        start <= end && end <= sequence.len(),
        "quicksort range [{}, {}) out of bounds of {}",
        start,
        end,
        sequence.len()
    );
    if end - start > 1 {
        sort_between(sequence, &mut comparator, start, end - 1);
    }
}

/// Sorts inclusive `[left, right]`.
fn sort_between<S, C>(sequence: &mut S, comparator: &mut C, mut left: usize, mut right: usize)
where
    S: SwapSequence + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    while left < right {
        let boundary = partition(sequence, comparator, left, right);
        // Partitions are disjoint so the order in which they are sorted doesn't matter.
        if boundary - left < right - boundary {
            sort_between(sequence, comparator, left, boundary);
            left = boundary + 1;
        } else {
            sort_between(sequence, comparator, boundary + 1, right);
            right = boundary;
        }
    }
}

/// Returns boundary such that `[left, boundary]` <= pivot <= `[boundary + 1, right]`.
/// `left < right` must hold.
fn partition<S, C>(sequence: &mut S, comparator: &mut C, left: usize, right: usize) -> usize
where
    S: SwapSequence + ?Sized,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    // Pivot is followed through swaps instead of being copied out.
    let mut pivot = left + (right - left) / 2;
    let mut lower = left;
    let mut upper = right;

    loop {
        while lower < right && comparator(sequence.at(lower), sequence.at(pivot)).is_lt() {
            lower += 1;
        }

        while upper > left && comparator(sequence.at(upper), sequence.at(pivot)).is_gt() {
            upper -= 1;
        }

        if lower >= upper {
            return upper;
        }

        sequence.swap_at(lower, upper);
        if pivot == lower {
            pivot = upper;
        } else if pivot == upper {
            pivot = lower;
        }

        lower += 1;
        upper -= 1;
    }
}
