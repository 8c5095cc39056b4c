//! A fixed pool of one OS thread per partition, created for a single sort
//! invocation and torn down with it. Each worker owns exclusive write
//! access to its own chunk for the whole sort phase, so the workers need no
//! locking, only the join barrier at the end.

use crate::error::SortError;
use crate::sorts::{sequential_merge_sort_with_cancel, CancelFlag};
use arbitrary_chunks::ArbitraryChunks;
use std::thread;

/// Sorts each chunk of `scratch` described by `lengths` on its own worker
/// thread and returns once every worker has finished.
///
/// If spawning worker `k` fails, no further workers are attempted; the
/// workers already running are asked to cancel cooperatively (the sort
/// checks the flag at every recursion entry) and joined, then the start
/// failure is returned. A worker that panics is reported as a join failure
/// after all remaining workers have been joined. In both cases the chunks
/// are left partially sorted and the caller must skip the merge.
pub fn sort_chunks<T>(
    scratch: &mut [T],
    lengths: &[usize],
    cancel: &CancelFlag,
    stack_size: usize,
) -> Result<(), SortError>
where
    T: Ord + Copy + Send + Sync,
{
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(lengths.len());

        for (index, chunk) in scratch.arbitrary_chunks_mut(lengths).enumerate() {
            let spawned = thread::Builder::new()
                .name(format!("merge-worker-{}", index))
                .stack_size(stack_size)
                .spawn_scoped(scope, move || {
                    sequential_merge_sort_with_cancel(chunk, cancel)
                });

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(source) => {
                    cancel.request();

                    for handle in handles {
                        let _ = handle.join();
                    }

                    return Err(SortError::WorkerStart { index, source });
                }
            }
        }

        let mut failed = None;

        for (index, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() && failed.is_none() {
                failed = Some(index);
            }
        }

        match failed {
            Some(index) => Err(SortError::WorkerJoin { index }),
            None => Ok(()),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::sort_chunks;
    use crate::sorter::DEFAULT_WORKER_STACK_SIZE;
    use crate::sorts::CancelFlag;

    #[test]
    pub fn test_chunks_are_sorted_independently() {
        let mut scratch = vec![4u64, 3, 2, 1, 9, 8, 7, 6];
        let cancel = CancelFlag::new();

        sort_chunks(&mut scratch, &[4, 4], &cancel, DEFAULT_WORKER_STACK_SIZE).unwrap();

        assert_eq!(scratch, vec![1, 2, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    pub fn test_single_chunk() {
        let mut scratch = vec![3u64, 1, 2];
        let cancel = CancelFlag::new();

        sort_chunks(&mut scratch, &[3], &cancel, DEFAULT_WORKER_STACK_SIZE).unwrap();

        assert_eq!(scratch, vec![1, 2, 3]);
    }

    #[test]
    pub fn test_cancelled_pool_leaves_chunks_untouched() {
        let mut scratch = vec![4u64, 3, 2, 1];
        let cancel = CancelFlag::new();
        cancel.request();

        sort_chunks(&mut scratch, &[2, 2], &cancel, DEFAULT_WORKER_STACK_SIZE).unwrap();

        assert_eq!(scratch, vec![4, 3, 2, 1]);
    }

    #[test]
    pub fn test_custom_stack_size() {
        let mut scratch: Vec<u64> = (0..10_000).rev().collect();
        let cancel = CancelFlag::new();

        sort_chunks(&mut scratch, &[5_000, 5_000], &cancel, 1024 * 1024).unwrap();

        let expected: Vec<u64> = (0..10_000).collect();
        assert_eq!(scratch, expected);
    }
}
