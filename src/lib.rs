//! Classic comparison sorts over slices: merge, two merge sorts, heap sort, quicksort and
//! insertion sort.
//!
//! Every algorithm module offers `sort` (ascending by `Ord`), `sort_by` (custom `Ordering`
//! comparison) and a core function taking an `is_less` predicate that must be a strict weak
//! ordering. Nothing here allocates shared state, so disjoint slices may be sorted from different
//! threads at the same time.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod merge;
pub mod stable;
pub mod unstable;
