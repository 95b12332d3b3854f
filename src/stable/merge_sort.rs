//! Top-down merge sort producing a fresh sorted output and leaving its input untouched.

use std::cmp::Ordering;

use log::trace;

use crate::merge::{Merge, SliceCursor};

sort_impl!("merge_sort_stable");

/// Sorts `v` by writing the sorted copy back over it. If the comparison panics, `v` keeps its
/// original order.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    sort_via_buffer(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_via_buffer(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

#[inline]
pub fn sort_to_vec<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    sort_to_vec_by(v, |a, b| a.cmp(b))
}

pub fn sort_to_vec_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("merge_sort: sort_to_vec_by len={}", v.len());

    let mut out = Vec::with_capacity(v.len());
    merge_sort(v, &mut out, &mut |a, b| compare(a, b) == Ordering::Less);

    out
}

/// Writes the sorted elements of `v` to the front of `dst` and returns how many were written.
///
/// # Panics
///
/// Panics before doing any work if `dst` is shorter than `v`.
pub fn sort_into_slice<T, F>(v: &[T], dst: &mut [T], is_less: &mut F) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    assert!(
        dst.len() >= v.len(),
        "sort destination too small: {} elements required, {} available",
        v.len(),
        dst.len()
    );
    trace!("merge_sort: sort_into_slice len={}", v.len());

    let mut cursor = SliceCursor::new(dst);
    merge_sort(v, &mut cursor, is_less);

    cursor.position()
}

/// Appends the elements of `v` to `out` in sorted order.
///
/// Each level of recursion sorts both halves into freshly allocated buffers and merges those into
/// `out`. Live temporary storage is O(n), recursion depth O(log n).
pub fn merge_sort<T, O, F>(v: &[T], out: &mut O, is_less: &mut F)
where
    T: Clone,
    O: Extend<T>,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len <= 1 {
        out.extend(v.iter().cloned());
        return;
    }

    // The left half gets the smaller part for odd lengths.
    let mid = len / 2;

    let mut left = Vec::with_capacity(mid);
    merge_sort(&v[..mid], &mut left, is_less);

    let mut right = Vec::with_capacity(len - mid);
    merge_sort(&v[mid..], &mut right, is_less);

    out.extend(Merge::new(&left, &right, &mut *is_less).cloned());
}

fn sort_via_buffer<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    trace!("merge_sort: len={}", v.len());

    let mut sorted = Vec::with_capacity(v.len());
    merge_sort(v, &mut sorted, is_less);

    for (slot, val) in v.iter_mut().zip(sorted) {
        *slot = val;
    }
}
