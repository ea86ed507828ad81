//! Per-episode accumulation of transitions and their slicing into segments.
//!
//! A recurrent learner trains on windows of consecutive steps rather than on
//! single transitions. Each window starts with `burnin_length` steps used only
//! to warm up the LSTM states, followed by `unroll_length` steps the loss is
//! computed on. The recurrent states recorded at the first step of a window
//! are stored in the [`Segment`] so the learner does not need to replay the
//! episode from its beginning.
//!
//! ```rust
//! use segment_replay_core::{EpisodeBuffer, EpisodeBufferConfig};
//!
//! let config = EpisodeBufferConfig::default().burnin_length(2).unroll_length(3);
//! let buffer = EpisodeBuffer::<Vec<f32>, Vec<f32>>::build(&config);
//! assert!(buffer.pull_segments().is_empty());
//! ```
mod base;
mod config;
mod segment;
mod transition;
pub use base::EpisodeBuffer;
pub use config::EpisodeBufferConfig;
pub use segment::Segment;
pub use transition::Transition;
