//! `sequential_sort` is a recursive top-down merge sort. It is both the
//! single-threaded sort path and the per-partition sort run by each worker
//! of the partitioned path.
//!
//! Each call splits its view at the midpoint, copies the two halves into
//! heap scratch sized exactly to each half, sorts the copies recursively
//! and merges them back with a linear two-pointer pass. Recursion bottoms
//! out at views of one element, so the depth is at most ceil(log2 n) and
//! transient memory peaks at O(n) for the top-level call.
//!
//! ## Characteristics
//!
//!  * in-place result, heap scratch per recursion level
//!  * single-threaded
//!  * not stable: when two heads compare equal, the right half is emitted
//!    first
//!  * cancellable at every recursion entry

use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation for an in-flight sort. The flag is checked once
/// per recursion entry; a cancelled sort returns with its view in an
/// unspecified partially-sorted state, so callers must not use the data
/// afterwards.
pub struct CancelFlag(AtomicBool);

impl CancelFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    #[inline]
    pub fn request(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for CancelFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorts `view` into non-decreasing order.
pub fn sequential_merge_sort<T>(view: &mut [T])
where
    T: Ord + Copy,
{
    static NOT_CANCELLED: CancelFlag = CancelFlag::new();

    sequential_merge_sort_with_cancel(view, &NOT_CANCELLED);
}

/// Cancellable variant used by the worker pool. Checks `cancel` before
/// descending into each recursion level.
pub fn sequential_merge_sort_with_cancel<T>(view: &mut [T], cancel: &CancelFlag)
where
    T: Ord + Copy,
{
    if view.len() <= 1 || cancel.is_requested() {
        return;
    }

    let mid = view.len() / 2;
    let mut left = view[..mid].to_vec();
    let mut right = view[mid..].to_vec();

    sequential_merge_sort_with_cancel(&mut left, cancel);
    sequential_merge_sort_with_cancel(&mut right, cancel);

    merge_halves(&left, &right, view);
}

/// Linear two-pointer merge of two sorted halves back into `out`. The left
/// head is taken only while it is strictly smaller, so equal keys come from
/// the right half first.
#[inline]
fn merge_halves<T>(left: &[T], right: &[T], out: &mut [T])
where
    T: Ord + Copy,
{
    debug_assert_eq!(left.len() + right.len(), out.len());

    let mut li = 0;
    let mut ri = 0;

    for slot in out.iter_mut() {
        let take_left = li < left.len() && (ri >= right.len() || left[li] < right[ri]);

        if take_left {
            *slot = left[li];
            li += 1;
        } else {
            *slot = right[ri];
            ri += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{sequential_merge_sort, sequential_merge_sort_with_cancel, CancelFlag};
    use block_pseudorand::block_rand;

    fn check(mut inputs: Vec<u64>) {
        let mut expected = inputs.clone();

        sequential_merge_sort(&mut inputs);
        expected.sort_unstable();

        assert_eq!(inputs, expected);
    }

    #[test]
    pub fn test_empty() {
        // This is expected not to panic
        sequential_merge_sort::<u64>(&mut []);
    }

    #[test]
    pub fn test_single_element() {
        let mut inputs = vec![42u64];
        sequential_merge_sort(&mut inputs);
        assert_eq!(inputs, vec![42]);
    }

    #[test]
    pub fn test_two_elements() {
        let mut inputs = vec![2u64, 1];
        sequential_merge_sort(&mut inputs);
        assert_eq!(inputs, vec![1, 2]);
    }

    #[test]
    pub fn test_already_sorted_is_identity() {
        let inputs: Vec<u64> = (0..1_000).collect();
        let mut sorted = inputs.clone();

        sequential_merge_sort(&mut sorted);

        assert_eq!(sorted, inputs);
    }

    #[test]
    pub fn test_reverse_sorted() {
        let mut inputs: Vec<u64> = (0..1_000).rev().collect();
        sequential_merge_sort(&mut inputs);

        let expected: Vec<u64> = (0..1_000).collect();
        assert_eq!(inputs, expected);
    }

    #[test]
    pub fn test_random_lengths() {
        for n in [2usize, 3, 4, 5, 31, 32, 33, 1_000, 10_000] {
            check(block_rand(n));
        }
    }

    #[test]
    pub fn test_duplicates() {
        for n in [10usize, 1_000, 10_000] {
            let inputs: Vec<u64> = block_rand::<u64>(n).into_iter().map(|v| v % 8).collect();
            check(inputs);
        }
    }

    #[test]
    pub fn test_cancelled_sort_leaves_view_untouched() {
        let mut inputs = vec![3u64, 1, 2];
        let cancel = CancelFlag::new();
        cancel.request();

        sequential_merge_sort_with_cancel(&mut inputs, &cancel);

        assert_eq!(inputs, vec![3, 1, 2]);
    }
}
