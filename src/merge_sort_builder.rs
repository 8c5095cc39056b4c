use crate::error::SortError;
use crate::sorter::{Sorter, DEFAULT_WORKER_STACK_SIZE};

pub struct MergeSortBuilder<'a, T> {
    data: &'a mut [T],
    workers: Option<usize>,
    scratch_limit: Option<usize>,
    worker_stack_size: usize,
}

impl<'a, T> MergeSortBuilder<'a, T>
where
    T: Ord + Copy + Send + Sync,
{
    pub(crate) fn new(data: &'a mut [T]) -> Self {
        Self {
            data,
            workers: None,
            scratch_limit: None,
            worker_stack_size: DEFAULT_WORKER_STACK_SIZE,
        }
    }

    /// Pins the worker count instead of deriving it from the host's
    /// available parallelism. The effective count is capped to the sequence
    /// length at sort time, so no partition is ever empty.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers.max(1));

        self
    }

    /// Runs the whole sort on the calling thread, skipping the partition
    /// and merge phases entirely.
    pub fn with_single_threading(mut self) -> Self {
        self.workers = Some(1);

        self
    }

    /// Restores the default of one worker per unit of available hardware
    /// parallelism.
    pub fn with_multi_threading(mut self) -> Self {
        self.workers = None;

        self
    }

    /// Upper bound, in bytes, for the partition scratch buffer. A sort that
    /// would exceed it fails with [`SortError::Allocation`] before any
    /// worker starts, leaving the input untouched.
    pub fn with_scratch_limit(mut self, bytes: usize) -> Self {
        self.scratch_limit = Some(bytes);

        self
    }

    /// Stack size for each worker thread. Merge scratch lives on the heap,
    /// so the 8 MiB default covers the O(log n) recursion frames of any
    /// partition size; lower it only for tightly constrained targets.
    pub fn with_worker_stack_size(mut self, bytes: usize) -> Self {
        self.worker_stack_size = bytes;

        self
    }

    pub fn sort(self) -> Result<(), SortError> {
        // By definition, this is already sorted
        if self.data.len() <= 1 {
            return Ok(());
        }

        let workers = match self.workers {
            Some(workers) => workers,
            None => available_workers(),
        };

        let sorter = Sorter::new(workers, self.scratch_limit, self.worker_stack_size);

        sorter.sort(self.data)
    }
}

#[cfg(feature = "multi-threaded")]
fn available_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(not(feature = "multi-threaded"))]
fn available_workers() -> usize {
    1
}
