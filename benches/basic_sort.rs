
use bench_utils::bench_single;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parmsort::MergeSort;

fn basic_sort(c: &mut Criterion) {
    let tests: Vec<(&str, Box<dyn Fn(Vec<u64>)>)> = vec![
        (
            "parmsort",
            Box::new(|mut input| {
                input.merge_sort_unstable().unwrap();
                black_box(input);
            }),
        ),
        (
            "parmsort_single_threaded",
            Box::new(|mut input| {
                input
                    .merge_sort_builder()
                    .with_single_threading()
                    .sort()
                    .unwrap();

                black_box(input);
            }),
        ),
        (
            "std_sort_unstable",
            Box::new(|mut input| {
                input.sort_unstable();
                black_box(input);
            }),
        ),
    ];

    bench_single(c, "basic_sort_u64", tests);
}

criterion_group!(benches, basic_sort,);
criterion_main!(benches);
