use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use classic_sort::{unstable, Sort};
use sort_test_tools::patterns;

const TEST_LENS: [usize; 12] = [0, 1, 2, 3, 8, 16, 20, 50, 100, 500, 1_000, 10_000];

struct StdUnstable;

impl Sort for StdUnstable {
    fn name() -> String {
        "rust_std_unstable".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord,
    {
        arr.sort_unstable();
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        arr.sort_unstable_by(compare);
    }
}

fn measure_comp_count<S: Sort>(
    name: &str,
    test_len: usize,
    pattern_provider: fn(usize) -> Vec<i32>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_len <= 20 {
        100_000
    } else if test_len < 10_000 {
        3000
    } else {
        100
    };

    let mut comp_count = 0u64;

    // Instrument via sort_by, so the element type stays the same as in the timed runs.
    for _ in 0..run_count {
        let mut test_data = pattern_provider(test_len);
        S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
            comp_count += 1;
            a.cmp(b)
        })
    }

    // If there is on average less than a single comparison this will be wrong.
    let total = comp_count / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

fn bench_fn<S: Sort>(
    c: &mut Criterion,
    test_len: usize,
    pattern_name: &str,
    pattern_provider: fn(usize) -> Vec<i32>,
) {
    let bench_name = S::name();

    if env::var("MEASURE_COMP").is_ok() {
        let name = format!("{bench_name}-comp-i32-{pattern_name}-{test_len}");
        measure_comp_count::<S>(&name, test_len, pattern_provider);
        return;
    }

    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{bench_name}-hot-i32-{pattern_name}-{test_len}"),
        |b| {
            b.iter_batched(
                || pattern_provider(test_len),
                |mut test_data| S::sort(black_box(test_data.as_mut_slice())),
                batch_size,
            )
        },
    );
}

fn split_len(len: usize, part_a_percent: f64) -> (usize, usize) {
    let len_a = ((len as f64 / 100.0) * part_a_percent).round() as usize;
    let len_b = len - len_a;

    (len_a, len_b)
}

fn pattern_providers() -> Vec<(&'static str, fn(usize) -> Vec<i32>)> {
    let mut providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |len| {
            patterns::random_uniform(len, 0..=(((len as f64).log2().round()) as i32))
        }),
        ("random_binary", |len| patterns::random_uniform(len, 0..=1i32)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |len| {
            patterns::saws(
                len,
                ((len as f64).log2().round()) as usize,
                patterns::Saw::Mixed,
            )
        }),
    ];

    // Patterns that hit the weak spots of a first element pivot and of heap construction.
    let extra_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("all_equal", patterns::all_equal),
        ("pipe_organ", patterns::pipe_organ),
        ("random_s95", |len| patterns::random_sorted(len, 95.0)),
        ("90_zero_10_random", |len| {
            let (len_90, len_10) = split_len(len, 90.0);
            std::iter::repeat(0)
                .take(len_90)
                .chain(patterns::random(len_10))
                .collect()
        }),
    ];

    if env::var("EXTRA_PATTERNS").is_ok() {
        providers.extend(extra_providers);
    }

    providers
}

fn bench_sort<S: Sort>(c: &mut Criterion) {
    setup();

    for test_len in TEST_LENS {
        for (pattern_name, pattern_provider) in pattern_providers() {
            if test_len < 3 && pattern_name != "random" {
                continue;
            }

            bench_fn::<S>(c, test_len, pattern_name, pattern_provider);
        }
    }
}

fn setup() {
    patterns::use_random_seed_each_time();

    // Each call to a random pattern has to yield new values, otherwise every batch sorts the
    // same input.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);
    assert_ne!(random_vec_a, random_vec_b);
}

macro_rules! bench_sort_impls {
    ($($sort_module:ident),*) => {
        paste::paste! {
            $(
                fn [<bench_ $sort_module>](c: &mut Criterion) {
                    bench_sort::<unstable::$sort_module::SortImpl>(c);
                }
            )*

            criterion_group!(benches, $([<bench_ $sort_module>],)* bench_rust_std);
        }
    };
}

fn bench_rust_std(c: &mut Criterion) {
    bench_sort::<StdUnstable>(c);
}

bench_sort_impls!(heapsort, quicksort);

criterion_main!(benches);
