//! # parmsort
//!
//! parmsort is a partitioned multi-threaded merge sort for in-memory
//! sequences of `Ord + Copy` values.
//!
//! ## Usage
//!
//! In the simplest case, call `my_vec.merge_sort_unstable()`. The sequence
//! is split into one contiguous partition per worker, every partition is
//! sorted in place on its own thread by a sequential merge sort, and the
//! sorted runs are k-way merged back into the original sequence.
//!
//! ```
//! use parmsort::MergeSort;
//!
//! let mut values = vec![55, 22, 73, 4, 89, 0, 100, 3];
//! values.merge_sort_unstable().unwrap();
//!
//! assert_eq!(values, vec![0, 3, 4, 22, 55, 73, 89, 100]);
//! ```
//!
//! ## Builder
//!
//! The builder pins the knobs the plain call derives from the host:
//!
//! ```
//! use parmsort::MergeSort;
//!
//! let mut values = vec![3u64, 1, 2];
//!
//! values
//!     .merge_sort_builder()
//!     .with_workers(2)
//!     .sort()
//!     .unwrap();
//!
//! assert_eq!(values, vec![1, 2, 3]);
//! ```
//!
//!  * `with_workers(n)`: fixed worker count instead of the host's
//!    available parallelism (capped to the sequence length).
//!  * `with_single_threading()` / `with_multi_threading()`: force or
//!    restore the parallel path.
//!  * `with_scratch_limit(bytes)`: fail fast, with the input untouched,
//!    instead of allocating more scratch than the limit allows.
//!  * `with_worker_stack_size(bytes)`: stack provisioned per worker.
//!
//! Failures ([`SortError`]) identify the stage that failed (scratch
//! allocation, worker start, worker join) and leave the sequence unmerged;
//! nothing is retried.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.


mod error;
mod merge_sort;
mod merge_sort_builder;
#[cfg(feature = "multi-threaded")]
mod partitioner;
mod sorter;
mod sorts;
pub mod utils;
mod validate;
#[cfg(feature = "multi-threaded")]
mod worker_pool;

pub use error::SortError;
pub use merge_sort::MergeSort;
pub use merge_sort_builder::MergeSortBuilder;
pub use sorts::sequential_merge_sort;
pub use validate::{validate_order, OrderViolation};
