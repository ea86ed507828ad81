//! Configuration of [`EpisodeBuffer`](super::EpisodeBuffer).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`EpisodeBuffer`](super::EpisodeBuffer).
///
/// ```rust
/// use segment_replay_core::EpisodeBufferConfig;
///
/// let config = EpisodeBufferConfig::default()
///     .burnin_length(40)
///     .unroll_length(80);
/// assert_eq!(config.segment_len(), 120);
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct EpisodeBufferConfig {
    /// Number of leading steps of each segment used only to warm up recurrent states.
    pub burnin_length: usize,

    /// Number of steps of each segment used for training. Windows advance by this many steps.
    pub unroll_length: usize,
}

impl Default for EpisodeBufferConfig {
    fn default() -> Self {
        Self {
            burnin_length: 40,
            unroll_length: 80,
        }
    }
}

impl EpisodeBufferConfig {
    /// Sets the burn-in length.
    pub fn burnin_length(mut self, burnin_length: usize) -> Self {
        self.burnin_length = burnin_length;
        self
    }

    /// Sets the unroll length.
    pub fn unroll_length(mut self, unroll_length: usize) -> Self {
        self.unroll_length = unroll_length;
        self
    }

    /// Length of every segment, `burnin_length + unroll_length`.
    pub fn segment_len(&self) -> usize {
        self.burnin_length + self.unroll_length
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
    use super::EpisodeBufferConfig;
    use anyhow::Result;
    use tempdir::TempDir;

    #[test]
    fn test_serde_episode_buffer_config() -> Result<()> {
        let config = EpisodeBufferConfig::default()
            .burnin_length(2)
            .unroll_length(3);
        let dir = TempDir::new("episode_buffer_config")?;
        let path = dir.path().join("episode_buffer.yaml");

        config.save(&path)?;
        let config_ = EpisodeBufferConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }
}
