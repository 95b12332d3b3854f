use std::cmp::Ordering;

use log::trace;

sort_impl!("insertion_sort_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    trace!("insertion_sort: len={}", v.len());
    insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("insertion_sort: len={}", v.len());
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` by growing a sorted prefix one element at a time.
///
/// O(n^2) comparisons and moves in general, O(n) for already sorted input.
pub fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 2..=v.len() {
        insert_tail(&mut v[..i], is_less);
    }
}

/// Inserts the last element of `v` into the sorted prefix `v[..len - 1]`.
///
/// The element only moves past predecessors that are strictly greater than it, which keeps equal
/// elements in their original order. Returns the position the element ended up at.
pub fn insert_tail<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let Some(last) = v.len().checked_sub(1) else {
        return 0;
    };

    let mut hole = last;
    while hole > 0 && is_less(&v[last], &v[hole - 1]) {
        hole -= 1;
    }

    v[hole..].rotate_right(1);

    hole
}
