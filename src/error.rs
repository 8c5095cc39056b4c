use std::io;
use thiserror::Error;

/// Failures the partitioned sort can report. Every variant is fatal to the
/// invocation that produced it: nothing is retried, the merge phase is
/// skipped, and the caller's sequence is left unmerged.
#[derive(Debug, Error)]
pub enum SortError {
    /// The partition scratch buffer could not be obtained, either because
    /// the allocation itself failed or because it would exceed the
    /// configured scratch limit. Reported before any worker starts; the
    /// input sequence is untouched.
    #[error("partition scratch: failed to allocate {bytes} bytes")]
    Allocation { bytes: usize },

    /// Worker `index` could not be spawned. Workers started before it were
    /// asked to cancel and joined before this was returned.
    #[error("worker {index}: failed to start: {source}")]
    WorkerStart {
        index: usize,
        #[source]
        source: io::Error,
    },

    /// Worker `index` panicked before completing its partition. All other
    /// workers were joined before this was returned.
    #[error("worker {index}: join failed")]
    WorkerJoin { index: usize },
}
