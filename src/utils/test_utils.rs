use block_pseudorand::block_rand;
use nanorand::{Rng, WyRand};
use rayon::prelude::*;
use std::fmt::Debug;

/// Fills a buffer with the distinct keys `0..n`, in order.
pub fn gen_permutation(n: usize) -> Vec<u64> {
    let mut data = vec![0u64; n];
    data.par_iter_mut()
        .enumerate()
        .for_each(|(i, v)| *v = i as u64);

    data
}

/// Index-swap shuffle where the partner index is chosen modulo the length.
/// This is the benchmark workload's shuffle, kept as-is: it is only an
/// approximation of a uniform Fisher-Yates pass.
pub fn shuffle_in_place(data: &mut [u64], seed: u64) {
    if data.is_empty() {
        return;
    }

    let mut rng = WyRand::new_seed(seed);

    for i in 0..data.len() {
        let j = (rng.generate::<u64>() as usize) % data.len();
        data.swap(i, j);
    }
}

/// Shuffled permutation of `0..n`, reproducible for a fixed seed.
pub fn gen_shuffled(n: usize, seed: u64) -> Vec<u64> {
    let mut data = gen_permutation(n);
    shuffle_in_place(&mut data, seed);

    data
}

/// Random values truncated to a small key space, so runs of equal keys are
/// common. Exercises the merge tie paths.
pub fn gen_duplicate_heavy(n: usize, distinct: u64) -> Vec<u64> {
    block_rand::<u64>(n).into_iter().map(|v| v % distinct).collect()
}

/// Runs `sort_fn` over `inputs` and asserts the result equals the input
/// sorted by the standard library: ordering and multiset preservation in
/// one comparison.
pub fn validate_sort<T, F>(mut inputs: Vec<T>, sort_fn: F)
where
    T: Ord + Copy + Debug + Send + Sync,
    F: Fn(&mut [T]),
{
    let mut expected = inputs.clone();

    sort_fn(&mut inputs);
    expected.sort_unstable();

    assert_eq!(inputs, expected);
}

/// Exercises `sort_fn` over a spread of lengths: empty, trivial, odd, even,
/// power-of-two, remainder-heavy and large, plus duplicate-heavy inputs.
pub fn sort_comparison_suite<F>(seed: u64, sort_fn: F)
where
    F: Fn(&mut [u64]),
{
    for n in [0usize, 1, 2, 3, 4, 5, 7, 8, 9, 16, 33, 100, 1_000, 4_096, 10_000, 100_001] {
        validate_sort(gen_shuffled(n, seed), &sort_fn);
    }

    for n in [10usize, 1_000, 10_000] {
        validate_sort(gen_duplicate_heavy(n, 16), &sort_fn);
    }
}
