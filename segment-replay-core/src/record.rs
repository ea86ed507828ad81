//! Records for logging replay buffer statistics.
//!
//! ```rust
//! use segment_replay_core::record::{Record, RecordValue};
//!
//! let record = Record::from_slice(&[("replay_buffer_len", RecordValue::Scalar(128.0))]);
//! assert_eq!(record.get_scalar("replay_buffer_len").unwrap(), 128.0);
//! ```
mod base;

pub use base::{Record, RecordValue};
