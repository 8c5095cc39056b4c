#[cfg(feature = "multi-threaded")]
mod kway_merge;
mod sequential_sort;

#[cfg(feature = "multi-threaded")]
pub use kway_merge::*;
pub use sequential_sort::*;
