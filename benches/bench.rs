use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sort_classics::{stable, unstable};
use sort_test_tools::patterns;
use sort_test_tools::types::{LargeValue, F128};
use sort_test_tools::Sort;

// Past this length the quadratic sorts take minutes per pattern.
const QUADRATIC_LEN_LIMIT: usize = 10_000;

fn is_quadratic(sort_name: &str) -> bool {
    sort_name.starts_with("insertion_sort") || sort_name.starts_with("merge_sort_in_place")
}

fn should_run_benchmark(name: &str) -> bool {
    // Criterion passes the filter as the last non-flag argument.
    let args = env::args().collect::<Vec<_>>();
    match args.iter().skip(1).filter(|arg| !arg.starts_with("--")).last() {
        Some(filter) => name.contains(filter.as_str()),
        None => true,
    }
}

fn measure_comp_count<S: Sort, T: Ord + Clone>(
    name: &str,
    test_len: usize,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_len <= 20 {
        100_000
    } else if test_len < 2_048 {
        3000
    } else if test_len < 100_000 {
        100
    } else {
        10
    };

    let mut comp_count = 0u64;

    // Instrument via sort_by, so the element type keeps its properties.
    for _ in 0..run_count {
        let mut test_data = transform(pattern_provider(test_len));
        S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
            comp_count += 1;
            a.cmp(b)
        })
    }

    // Rounds down to zero for inputs that need less than one comparison on average.
    let total = comp_count / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

fn bench_fn<S: Sort, T: Ord + Clone>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    let bench_name = S::name();

    if test_len > QUADRATIC_LEN_LIMIT && is_quadratic(&bench_name) {
        return;
    }

    if env::var("MEASURE_COMP").is_ok() {
        let name = format!("{bench_name}-comp-{transform_name}-{pattern_name}-{test_len}");

        if should_run_benchmark(&name) {
            measure_comp_count::<S, T>(&name, test_len, transform, pattern_provider);
        }

        return;
    }

    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{bench_name}-{transform_name}-{pattern_name}-{test_len}"),
        |b| {
            b.iter_batched(
                || transform(pattern_provider(test_len)),
                |mut test_data| S::sort(black_box(test_data.as_mut_slice())),
                batch_size,
            )
        },
    );
}

fn bench_sorts<T: Ord + Clone>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    macro_rules! bench_inst {
        ($sort_impl_path:path) => {{
            use $sort_impl_path::*;

            bench_fn::<SortImpl, T>(
                c,
                test_len,
                transform_name,
                transform,
                pattern_name,
                pattern_provider,
            );
        }};
    }

    // --- Stable sorts ---

    bench_inst!(stable::merge_sort);
    bench_inst!(stable::merge_sort_in_place);
    bench_inst!(stable::insertion_sort);

    // --- Unstable sorts ---

    bench_inst!(unstable::heap_sort);
    bench_inst!(unstable::quick_sort);
}

fn shuffle_vec<T>(mut v: Vec<T>) -> Vec<T> {
    use rand::seq::SliceRandom;
    use rand::thread_rng;

    let mut rng = thread_rng();
    v.shuffle(&mut rng);

    v
}

fn split_len(size: usize, part_a_percent: f64) -> (usize, usize) {
    let len_a = ((size as f64 / 100.0) * part_a_percent).round() as usize;
    let len_b = size - len_a;

    (len_a, len_b)
}

fn bench_patterns<T: Ord + Clone>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    let pattern_providers: [(&str, fn(usize) -> Vec<i32>); 8] = [
        ("random", patterns::random),
        ("random_dense", |len| {
            patterns::random_uniform(len, 0..=(((len as f64).log2().round()) as i32))
        }),
        ("random_binary", |len| patterns::random_uniform(len, 0..=1 as i32)),
        ("random_5p", |len| {
            let (len_95p, len_5p) = split_len(len, 95.0);
            let v: Vec<i32> = std::iter::repeat(0)
                .take(len_95p)
                .chain(patterns::random(len_5p))
                .collect();

            shuffle_vec(v)
        }),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |len| {
            patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if test_len < 3 && *pattern_name != "random" {
            continue;
        }

        bench_sorts(
            c,
            test_len,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );
    }
}

fn ensure_true_random() {
    // Ensure that random vecs are actually different.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_lens = [
        0, 1, 2, 3, 5, 8, 16, 20, 36, 50, 101, 200, 500, 1_000, 2_048, 10_000, 100_000,
    ];

    patterns::use_random_seed_each_time();
    ensure_true_random();

    for test_len in test_lens {
        bench_patterns(c, test_len, "i32", |values| values);

        // Shifted into the unsigned range, preserving input order.
        bench_patterns(c, test_len, "u64", |values| {
            values
                .iter()
                .map(|val| ((*val as i64) + (i32::MAX as i64) + 1) as u64 * 2)
                .collect()
        });

        // Heap allocated and expensive to clone.
        bench_patterns(c, test_len, "string", |values| {
            values
                .iter()
                .map(|val| format!("{:010}", val.saturating_abs()))
                .collect()
        });

        bench_patterns(c, test_len, "large_val", |values| {
            values.iter().map(|val| LargeValue::new(*val)).collect()
        });

        bench_patterns(c, test_len, "f128", |values| {
            values.iter().map(|val| F128::new(*val)).collect()
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
