use std::cmp::Ordering;

use log::trace;

sort_impl!("quick_sort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    trace!("quick_sort: len={}", v.len());
    quick_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("quick_sort: len={}", v.len());
    quick_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` with Hoare partitioning around a copy of the middle element.
///
/// The shorter side is sorted recursively and the longer one by the next iteration of the loop,
/// so stack depth stays O(log n) even when every partition is maximally unbalanced.
pub fn quick_sort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        let pivot = v[len / 2].clone();
        let (left_end, right_start) = partition(v, &pivot, is_less);

        // A strict weak ordering always leaves both sides shorter than `v`. Clamping keeps the loop
        // finite for predicates that are not one.
        let left_end = left_end.min(len - 1);
        let right_start = right_start.max(1).max(left_end);

        let (left, rest) = v.split_at_mut(left_end);
        let right = &mut rest[right_start - left_end..];

        if left.len() < right.len() {
            quick_sort(left, is_less);
            v = right;
        } else {
            quick_sort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around `pivot` and returns `(left_end, right_start)`.
///
/// Afterwards no element of `v[..left_end]` is greater than `pivot`, no element of
/// `v[right_start..]` is less than it and every element in between is equal to it. The two cursors
/// stop at elements not strictly on their side of the pivot and swap them, which spreads runs of
/// pivot-equal elements over both sides.
pub fn partition<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut l = 0;
    // Exclusive, `v[r - 1]` is the next element the right cursor looks at.
    let mut r = len;

    while l < r {
        while l < len && is_less(&v[l], pivot) {
            l += 1;
        }

        while r > 0 && is_less(pivot, &v[r - 1]) {
            r -= 1;
        }

        if l < r {
            v.swap(l, r - 1);
            l += 1;
            r -= 1;
        }
    }

    (r, l)
}
