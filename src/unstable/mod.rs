pub mod heap_sort;

// Hoare partition around the middle element, no pivot sampling.
pub mod quick_sort;
