use crate::error::SortError;
#[cfg(feature = "multi-threaded")]
use crate::partitioner::partition_lengths;
#[cfg(feature = "multi-threaded")]
use crate::sorts::{kway_merge, CancelFlag, RunCursor};
use crate::sorts::sequential_merge_sort;
#[cfg(feature = "multi-threaded")]
use crate::utils::{cdiv, try_tmp_bucket};
#[cfg(feature = "multi-threaded")]
use crate::worker_pool::sort_chunks;
#[cfg(feature = "multi-threaded")]
use arbitrary_chunks::ArbitraryChunks;
#[cfg(feature = "multi-threaded")]
use rayon::prelude::*;

/// Default stack provisioned for each worker thread. Merge scratch lives on
/// the heap, so a worker stack only has to hold O(log n) recursion frames;
/// 8 MiB covers any partition size with a wide margin.
pub(crate) const DEFAULT_WORKER_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Coordinates one sort invocation: cap the worker count, copy the input
/// into scratch, sort the scratch partitions on the pool, then k-way merge
/// the runs back into the caller's sequence.
#[cfg_attr(not(feature = "multi-threaded"), allow(dead_code))]
pub(crate) struct Sorter {
    workers: usize,
    scratch_limit: Option<usize>,
    worker_stack_size: usize,
}

impl Sorter {
    pub(crate) fn new(
        workers: usize,
        scratch_limit: Option<usize>,
        worker_stack_size: usize,
    ) -> Self {
        Self {
            workers,
            scratch_limit,
            worker_stack_size,
        }
    }

    pub(crate) fn sort<T>(&self, data: &mut [T]) -> Result<(), SortError>
    where
        T: Ord + Copy + Send + Sync,
    {
        if data.len() <= 1 {
            return Ok(());
        }

        #[cfg(feature = "multi-threaded")]
        {
            // More workers than elements would leave empty chunks behind
            // the last partition; cap the pool to one worker per element.
            let workers = self.workers.min(data.len());

            if workers > 1 {
                return self.sort_partitioned(data, workers);
            }
        }

        sequential_merge_sort(data);

        Ok(())
    }

    #[cfg(feature = "multi-threaded")]
    fn sort_partitioned<T>(&self, data: &mut [T], workers: usize) -> Result<(), SortError>
    where
        T: Ord + Copy + Send + Sync,
    {
        let bytes = std::mem::size_of::<T>() * data.len();

        if let Some(limit) = self.scratch_limit {
            if bytes > limit {
                return Err(SortError::Allocation { bytes });
            }
        }

        let mut scratch: Vec<T> =
            try_tmp_bucket(data.len()).map_err(|_| SortError::Allocation { bytes })?;

        let tile_size = cdiv(data.len(), workers);
        scratch
            .par_chunks_mut(tile_size)
            .zip(data.par_chunks(tile_size))
            .for_each(|(dst, src)| {
                dst.copy_from_slice(src);
            });

        let lengths = partition_lengths(data.len(), workers);

        #[cfg(feature = "work_profiles")]
        println!("SORT: {} workers, {} elements each", workers, lengths[0]);

        let cancel = CancelFlag::new();
        sort_chunks(&mut scratch, &lengths, &cancel, self.worker_stack_size)?;

        #[cfg(feature = "work_profiles")]
        println!("MERGE: {} runs, {} elements", lengths.len(), data.len());

        let mut runs: Vec<RunCursor<'_, T>> = scratch
            .arbitrary_chunks_mut(&lengths)
            .map(|run| RunCursor::new(run))
            .collect();

        kway_merge(&mut runs, data);

        Ok(())
    }
}
