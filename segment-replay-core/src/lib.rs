#![warn(missing_docs)]
//! Experience storage and sampling for recurrent, reward-decomposed agents.
//!
//! * [`EpisodeBuffer`] collects the [`Transition`]s of an episode and cuts them
//!   into overlapping [`Segment`]s of `burnin_length + unroll_length` steps.
//! * [`SegmentReplayBuffer`] keeps segments in a fixed-capacity ring buffer and
//!   samples prioritized minibatches with importance sampling weights.
//! * [`SumTree`] is the priority index behind the replay buffer.
pub mod error;
pub mod record;

mod base;
pub use base::{ExperienceBufferBase, ReplayBufferBase};

mod episode_buffer;
pub use episode_buffer::{EpisodeBuffer, EpisodeBufferConfig, Segment, Transition};

mod segment_replay_buffer;
pub use segment_replay_buffer::{
    PrioritizedSegments, SegmentBatch, SegmentReplayBuffer, SegmentReplayBufferConfig, SumTree,
};

#[cfg(test)]
mod test_util;
