use std::cmp::Ordering;

use log::trace;

sort_impl!("heap_sort_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    trace!("heap_sort: len={}", v.len());
    heap_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("heap_sort: len={}", v.len());
    heap_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` with a binary max-heap, guaranteeing O(n log n) comparisons and O(1) extra space.
pub fn heap_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }

    heapify(v, is_less);
    debug_assert!(is_max_heap(v, is_less));

    // Pop the maximum to the end of the shrinking heap.
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, 0, end, is_less);
    }
}

/// Rearranges `v` into a max-heap: no element is less than either of its children at `2i + 1`
/// and `2i + 2`.
pub fn heapify<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for root in (0..len / 2).rev() {
        sift_down(v, root, len, is_less);
    }
}

/// Moves `v[root]` down the heap `v[..len]` until neither child is greater than it.
pub fn sift_down<T, F>(v: &mut [T], mut root: usize, len: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(len <= v.len());

    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < len && is_less(&v[largest], &v[left]) {
            largest = left;
        }

        if right < len && is_less(&v[largest], &v[right]) {
            largest = right;
        }

        if largest == root {
            return;
        }

        v.swap(root, largest);
        root = largest;
    }
}

pub fn is_max_heap<T, F>(v: &[T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    (1..v.len()).all(|child| !is_less(&v[(child - 1) / 2], &v[child]))
}
