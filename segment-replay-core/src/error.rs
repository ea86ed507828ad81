//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum SegmentReplayError {
    /// Sampling was requested before any segment was stored.
    #[error("Replay buffer is empty")]
    EmptyBuffer,

    /// Sampling was requested with a batch size of zero.
    #[error("Batch size must be positive")]
    ZeroBatchSize,

    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),
}
