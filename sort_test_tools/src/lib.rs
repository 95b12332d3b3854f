/// A sort implementation under test.
///
/// Elements are required to be `Clone` because some of the classic algorithms copy values, the
/// copying merge sort produces a fresh output and quicksort snapshots its pivot.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
pub mod types;
