//! Key-value records of replay buffer statistics.
use crate::error::SegmentReplayError;
use std::collections::HashMap;

/// Value stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single floating-point value, such as the total priority mass.
    Scalar(f32),
}

/// Named statistics, typically handed to a logger by the training loop.
#[derive(Debug, Clone, Default)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Gets a scalar value from the record.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentReplayError::RecordKeyError`] if the key does not exist.
    pub fn get_scalar(&self, k: &str) -> Result<f32, SegmentReplayError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            None => Err(SegmentReplayError::RecordKeyError(k.to_string())),
        }
    }

    /// Returns `true` if the record holds no value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
