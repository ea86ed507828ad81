//! Prioritized replay of fixed-length segments.
//!
//! Segments pulled out of an [`EpisodeBuffer`](crate::EpisodeBuffer) are
//! stored in a ring buffer along with priorities given by an external
//! prioritizer, typically derived from TD errors. Minibatches are sampled with
//! probability proportional to priorities and come with importance sampling
//! weights correcting for that bias.
//!
//! # Examples
//!
//! ```rust
//! use segment_replay_core::{
//!     EpisodeBuffer, ReplayBufferBase, SegmentReplayBuffer, SegmentReplayBufferConfig,
//!     Transition,
//! };
//!
//! let mut episode = EpisodeBuffer::new(1, 2);
//! for k in 0..6 {
//!     episode.push(Transition {
//!         prev_in_reward: 0.0,
//!         prev_ex_reward: 0.0,
//!         prev_action: 0,
//!         state: vec![k as f32],
//!         action: 1,
//!         in_h: vec![0f32; 4],
//!         in_c: vec![0f32; 4],
//!         ex_h: vec![0f32; 4],
//!         ex_c: vec![0f32; 4],
//!         j: 0,
//!         done: k == 5,
//!         in_reward: 0.0,
//!         ex_reward: 1.0,
//!         next_state: vec![k as f32 + 1.0],
//!     });
//! }
//! let segments = episode.take_segments();
//! let priorities = vec![1.0; segments.len()];
//!
//! let config = SegmentReplayBufferConfig::default().capacity(128);
//! let mut buffer = SegmentReplayBuffer::build(&config);
//! buffer.push_segments(&priorities, segments);
//!
//! let batch = buffer.batch(4).unwrap();
//! buffer.update_priority(&batch.ix_sample, &vec![0.5; batch.len()]);
//! ```
mod base;
mod batch;
mod config;
pub use base::{SegmentReplayBuffer, SumTree};
pub use batch::{PrioritizedSegments, SegmentBatch};
pub use config::SegmentReplayBufferConfig;
