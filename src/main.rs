use std::fmt::Display;

use log::{debug, info, LevelFilter};

use sort_classics::merge;
use sort_classics::stable::{insertion_sort, merge_sort, merge_sort_in_place};
use sort_classics::unstable::{heap_sort, quick_sort};

fn join<T: Display>(v: &[T]) -> String {
    v.iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn show(step: &str, v: &[i32]) {
    debug!("{step}: {v:?}");
    println!("{}", join(v));
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let a = [1, 3, 5, 9];
    let b = [2, 4, 6, 7, 8];
    info!("merging {} and {} elements", a.len(), b.len());
    show("merge", &merge::merge(&a, &b));

    let mut v = vec![5, 3, 1, 4, 2];
    info!("merge sort into a fresh buffer");
    show("merge_sort", &merge_sort::sort_to_vec(&v));

    info!("in-place merge sort of the same input");
    merge_sort_in_place::sort(&mut v);
    show("merge_sort_in_place", &v);

    let runs: [(&str, fn(&mut [i32])); 3] = [
        ("heap_sort", heap_sort::sort),
        ("quick_sort", quick_sort::sort),
        ("insertion_sort", insertion_sort::sort),
    ];

    for (name, sort) in runs {
        let mut v = vec![5, 3, 1, 4, 2];
        info!("{name}");
        sort(&mut v);
        show(name, &v);
    }
}
