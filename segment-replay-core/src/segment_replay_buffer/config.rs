//! Configuration of [`SegmentReplayBuffer`](super::SegmentReplayBuffer).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`SegmentReplayBuffer`](super::SegmentReplayBuffer).
///
/// # Examples
///
/// ```rust
/// use segment_replay_core::SegmentReplayBufferConfig;
///
/// let config = SegmentReplayBufferConfig::default()
///     .capacity(100_000)
///     .weight_expo(0.6)
///     .eta(0.9)
///     .seed(42);
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct SegmentReplayBufferConfig {
    /// Maximum number of segments. When the buffer is full, new segments
    /// replace the oldest ones.
    pub capacity: usize,

    /// Exponent of importance sampling weights. The weight of a sample with
    /// probability $P(i)$ in a buffer of $N$ segments is $(N P(i))^{-\beta}$.
    pub weight_expo: f64,

    /// Exponent applied to priorities given to
    /// [`update_priority`](crate::ReplayBufferBase::update_priority).
    /// Priorities given at insertion are stored as they are.
    pub eta: f64,

    /// Seed of the random number generator used for sampling.
    pub seed: u64,
}

impl Default for SegmentReplayBufferConfig {
    fn default() -> Self {
        Self {
            capacity: 10000,
            weight_expo: 0.6,
            eta: 0.9,
            seed: 42,
        }
    }
}

impl SegmentReplayBufferConfig {
    /// Sets the capacity of the replay buffer.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the exponent of importance sampling weights.
    pub fn weight_expo(mut self, weight_expo: f64) -> Self {
        self.weight_expo = weight_expo;
        self
    }

    /// Sets the exponent applied to updated priorities.
    pub fn eta(mut self, eta: f64) -> Self {
        self.eta = eta;
        self
    }

    /// Sets the random seed for sampling.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Loads the configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves the configuration to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SegmentReplayBufferConfig;
    use anyhow::Result;
    use tempdir::TempDir;

    #[test]
    fn test_serde_segment_replay_buffer_config() -> Result<()> {
        let config = SegmentReplayBufferConfig::default()
            .capacity(512)
            .weight_expo(0.4)
            .eta(0.5)
            .seed(3);
        let dir = TempDir::new("segment_replay_buffer_config")?;
        let path = dir.path().join("replay_buffer.yaml");

        config.save(&path)?;
        let config_ = SegmentReplayBufferConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }
}
