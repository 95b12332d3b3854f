pub mod insertion_sort;
pub mod merge_sort;

// Rotation based merge, no auxiliary buffer. Quadratic worst case.
pub mod merge_sort_in_place;
