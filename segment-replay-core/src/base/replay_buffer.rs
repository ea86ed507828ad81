//! Replay buffer interface for segment-based reinforcement learning.
//!
//! Replay buffers store training segments produced by actors and hand
//! prioritized batches of them to a learner. The two traits here split those
//! roles: [`ExperienceBufferBase`] is what a collector sees, and
//! [`ReplayBufferBase`] is what a learner sees.

use anyhow::Result;

/// Interface for buffers that store experiences from environments.
///
/// # Examples
///
/// ```ignore
/// struct SimpleBuffer<T> {
///     items: Vec<T>,
/// }
///
/// impl<T> ExperienceBufferBase for SimpleBuffer<T> {
///     type Item = T;
///
///     fn push(&mut self, tr: T) -> Result<()> {
///         self.items.push(tr);
///         Ok(())
///     }
///
///     fn len(&self) -> usize {
///         self.items.len()
///     }
/// }
/// ```
pub trait ExperienceBufferBase {
    /// The type of items pushed into the buffer.
    type Item;

    /// Pushes a new item into the buffer.
    fn push(&mut self, tr: Self::Item) -> Result<()>;

    /// Returns the current number of experiences in the buffer.
    fn len(&self) -> usize;

    /// Returns `true` if the buffer holds no experience.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Interface for replay buffers that generate batches for training.
pub trait ReplayBufferBase {
    /// Configuration parameters for the replay buffer.
    type Config: Clone;

    /// The type of batch generated for training.
    type Batch;

    /// Builds a new replay buffer from the given configuration.
    fn build(config: &Self::Config) -> Self;

    /// Samples a batch of `size` experiences.
    fn batch(&mut self, size: usize) -> Result<Self::Batch>;

    /// Updates the priorities of sampled experiences.
    ///
    /// `ixs` are the slot indices returned with a batch and `priorities` the
    /// fresh priorities computed by the learner for them.
    ///
    /// # Panics
    ///
    /// Implementations panic when `ixs` and `priorities` differ in length.
    fn update_priority(&mut self, ixs: &[usize], priorities: &[f64]);
}
