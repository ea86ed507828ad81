//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum SegmentReplayAsyncError {
    /// A collector failed to send buffered segments to the replay buffer server.
    #[error("Failed to send segments to the replay buffer")]
    SendMsgForPush,

    /// A thread panicked while holding the replay buffer lock.
    #[error("Replay buffer lock is poisoned")]
    BufferLockPoisoned,

    /// The ingest thread panicked.
    #[error("Ingest thread panicked")]
    IngestThreadPanicked,
}
