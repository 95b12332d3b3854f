//! Two-way merge of sorted sequences.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use log::trace;

/// Iterator yielding the elements of two sorted slices in merged order.
///
/// When the heads of both inputs compare equal the head of `a` is yielded first, so the result is
/// a stable interleaving of `a` followed by `b`.
pub struct Merge<'a, T, F> {
    a: &'a [T],
    b: &'a [T],
    is_less: F,
}

impl<'a, T, F> Merge<'a, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    pub fn new(a: &'a [T], b: &'a [T], is_less: F) -> Self {
        Self { a, b, is_less }
    }
}

impl<'a, T, F> Iterator for Merge<'a, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let take_b = match (self.a.first(), self.b.first()) {
            (Some(a_head), Some(b_head)) => (self.is_less)(b_head, a_head),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => return None,
        };

        let side = if take_b { &mut self.b } else { &mut self.a };
        let remaining: &'a [T] = *side;
        let (head, rest) = remaining.split_first()?;
        *side = rest;

        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.a.len() + self.b.len();
        (len, Some(len))
    }
}

impl<T, F> ExactSizeIterator for Merge<'_, T, F> where F: FnMut(&T, &T) -> bool {}

impl<T, F> FusedIterator for Merge<'_, T, F> where F: FnMut(&T, &T) -> bool {}

#[inline]
pub fn merge<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    merge_by(a, b, |x, y| x.cmp(y))
}

#[inline]
pub fn merge_by<T, F>(a: &[T], b: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(a.len() + b.len());
    merge_into(a, b, &mut out, &mut |x, y| compare(x, y) == Ordering::Less);

    out
}

/// Appends the merge of `a` and `b` to `out`.
///
/// Both inputs must already be sorted under `is_less`. Debug builds check this.
pub fn merge_into<T, O, F>(a: &[T], b: &[T], out: &mut O, is_less: &mut F)
where
    T: Clone,
    O: Extend<T>,
    F: FnMut(&T, &T) -> bool,
{
    trace!("merge_into: {} + {} elements", a.len(), b.len());
    debug_assert!(is_sorted_by(a, is_less), "merge input `a` is not sorted");
    debug_assert!(is_sorted_by(b, is_less), "merge input `b` is not sorted");

    out.extend(Merge::new(a, b, is_less).cloned());
}

/// Writes the merge of `a` and `b` to the front of `dst` and returns the number of elements
/// written.
///
/// # Panics
///
/// Panics before writing anything if `dst` is shorter than `a.len() + b.len()`.
pub fn merge_into_slice<T, F>(a: &[T], b: &[T], dst: &mut [T], is_less: &mut F) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = a.len() + b.len();
    assert!(
        dst.len() >= len,
        "merge destination too small: {len} elements required, {} available",
        dst.len()
    );

    let mut cursor = SliceCursor::new(dst);
    merge_into(a, b, &mut cursor, is_less);

    cursor.position()
}

/// Write-only output cursor over a slice. Each written element advances the cursor by one.
///
/// Writing past the end of the slice panics, the destination was too small for the output.
pub struct SliceCursor<'a, T> {
    dst: &'a mut [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(dst: &'a mut [T]) -> Self {
        Self { dst, pos: 0 }
    }

    /// Number of elements written so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn capacity(&self) -> usize {
        self.dst.len()
    }

    pub fn write(&mut self, val: T) {
        assert!(
            self.pos < self.dst.len(),
            "output cursor exhausted after {} elements",
            self.dst.len()
        );

        self.dst[self.pos] = val;
        self.pos += 1;
    }
}

impl<T> Extend<T> for SliceCursor<'_, T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.write(val);
        }
    }
}

pub(crate) fn is_sorted_by<T, F>(v: &[T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2).all(|w| !is_less(&w[1], &w[0]))
}
