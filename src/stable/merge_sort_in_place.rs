//! Top-down merge sort that needs no buffer. Adjacent sorted runs are merged by rotating each
//! out-of-place element of the right run into position, which costs O(n^2) moves in the worst
//! case in exchange for O(1) extra space.

use std::cmp::Ordering;

use log::trace;

sort_impl!("merge_sort_in_place_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    trace!("merge_sort_in_place: len={}", v.len());
    merge_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("merge_sort_in_place: len={}", v.len());
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

pub fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    sort_range(v, 0, v.len(), is_less);
}

fn sort_range<T, F>(v: &mut [T], start: usize, end: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if end - start <= 1 {
        return;
    }

    let mid = start + (end - start) / 2;
    sort_range(v, start, mid, is_less);
    sort_range(v, mid, end, is_less);
    merge_adjacent(v, start, mid, end, is_less);
}

/// Merges the sorted runs `v[start..mid]` and `v[mid..end]` in place.
///
/// Whenever the head of the right run is strictly less than the element at `left`, it is rotated
/// down to `left`, shifting `v[left..right]` up by one. Equal elements are never reordered.
pub fn merge_adjacent<T, F>(v: &mut [T], start: usize, mid: usize, end: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    assert!(start <= mid && mid <= end && end <= v.len());

    if start == mid || mid == end {
        return;
    }

    let mut left = start;
    let mut right = mid;

    while left != right && right != end {
        if is_less(&v[right], &v[left]) {
            v[left..=right].rotate_right(1);
            right += 1;
        }
        left += 1;
    }
}
