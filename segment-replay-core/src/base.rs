//! Core traits shared by the buffers in this crate.
mod replay_buffer;
pub use replay_buffer::{ExperienceBufferBase, ReplayBufferBase};
