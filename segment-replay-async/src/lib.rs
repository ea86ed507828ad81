//! Concurrent ingestion of segments into a prioritized replay buffer.
//!
//! Collectors run episodes on their own threads and push their segments into a
//! [`ReplayBufferProxy`], which forwards them in chunks over a channel. A
//! [`ReplayBufferServer`] owns the
//! [`SegmentReplayBuffer`](segment_replay_core::SegmentReplayBuffer) behind a
//! mutex, pushes incoming segments on an ingest thread and serves batches to the
//! learner.
//!
//! # Messages
//! * From collectors ([`ReplayBufferProxy`]) to the ingest thread ([`ReplayBufferServer`])
//!   - [`SegmentMessage`]
mod error;
mod messages;
mod replay_buffer_proxy;
mod server;
pub use error::SegmentReplayAsyncError;
pub use messages::SegmentMessage;
pub use replay_buffer_proxy::{ReplayBufferProxy, ReplayBufferProxyConfig};
pub use server::{IngestStat, ReplayBufferServer};

#[cfg(test)]
mod test_util;
