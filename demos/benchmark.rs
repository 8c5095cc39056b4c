//! End-to-end benchmark harness: generate a permutation, shuffle it, sort
//! it with the partitioned merge sort, then validate the result, timing
//! every stage.
//!
//! Must be run with the `bench` feature for the workload generators:
//!
//! ```text
//! cargo run --release --example benchmark --features bench
//! ```

use parmsort::utils::test_utils::{gen_permutation, shuffle_in_place};
use parmsort::{validate_order, MergeSort};
use std::time::Instant;

const DATA_SIZE: usize = 1_000_000;
const SHUFFLE_SEED: u64 = 0x73_68_75_66;

// Dump the full sequence after each stage. Only sensible for tiny sizes.
const SHOW_DATA: bool = false;

fn print_time(started: Instant) {
    println!("- Took {:.3} ms", started.elapsed().as_secs_f64() * 1_000.0);
}

fn print_data(data: &[u64]) {
    if SHOW_DATA {
        println!("{:?}", data);
    }
}

fn main() {
    println!("=== Generating array ({} elements) ===", DATA_SIZE);
    let started = Instant::now();
    let mut data = gen_permutation(DATA_SIZE);
    print_time(started);
    print_data(&data);

    println!("\n=== Shuffling array ===");
    let started = Instant::now();
    shuffle_in_place(&mut data, SHUFFLE_SEED);
    print_time(started);
    print_data(&data);

    println!("\n=== Sorting array (multi-thread) ===");
    let started = Instant::now();
    match data.merge_sort_unstable() {
        Ok(()) => print_time(started),
        Err(err) => eprintln!("sort failed: {}", err),
    }
    print_data(&data);

    println!("\n=== Validating order ===");
    let started = Instant::now();
    match validate_order(&data) {
        Ok(()) => print_time(started),
        Err(violation) => eprintln!("{}", violation),
    }
}
