//! Prioritized ring buffer of segments.
mod sum_tree;
use super::{PrioritizedSegments, SegmentBatch, SegmentReplayBufferConfig};
use crate::{
    error::SegmentReplayError,
    record::{Record, RecordValue},
    ExperienceBufferBase, ReplayBufferBase, Segment,
};
use anyhow::Result;
use log::{info, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Arc;
pub use sum_tree::SumTree;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// A fixed-capacity ring buffer of segments with prioritized sampling.
///
/// Slot `i` of the buffer is paired with slot `i` of a [`SumTree`] holding its
/// priority. Segments are written at a cursor that wraps around, replacing the
/// oldest segment once the buffer is full.
///
/// ```mermaid
/// graph LR
///     A[EpisodeBuffer] -->|segments| P[Prioritizer]
///     P -->|priorities, segments| R[SegmentReplayBuffer]
///     R -->|SegmentBatch| L[Learner]
///     L -->|ix_sample, priorities| R
/// ```
///
/// Priorities given at insertion are stored as they are, while those given
/// to [`update_priority`](ReplayBufferBase::update_priority) are raised to the
/// power `eta` first.
///
/// Importance sampling weights are $w_i = (N P(i))^{-\beta}$, where $N$ is
/// the number of stored segments, $P(i)$ the probability of drawing slot $i$
/// and $\beta$ is `weight_expo`. They are normalized by their maximum within
/// the batch.
///
/// The buffer has no internal locking. Wrap it in a mutex when collectors and
/// the learner run on different threads.
#[derive(Debug)]
pub struct SegmentReplayBuffer<O, H> {
    capacity: usize,

    /// Write cursor.
    i: usize,

    /// Set once the cursor has wrapped around.
    full: bool,

    /// Slot `k` lives at index `k`. Grows up to `capacity`, then is overwritten in place.
    segments: Vec<Arc<Segment<O, H>>>,

    sum_tree: SumTree,

    weight_expo: f64,

    eta: f64,

    rng: StdRng,
}

impl<O, H> SegmentReplayBuffer<O, H> {
    /// Creates an empty buffer.
    pub fn new(config: &SegmentReplayBufferConfig) -> Self {
        let capacity = config.capacity;
        Self {
            capacity,
            i: 0,
            full: false,
            segments: Vec::with_capacity(capacity),
            sum_tree: SumTree::new(capacity),
            weight_expo: config.weight_expo,
            eta: config.eta,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Replaces the random number generator used for sampling.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Maximum number of segments.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` once the cursor has wrapped around at least once.
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Stores segments with their initial priorities.
    ///
    /// # Panics
    ///
    /// Panics if `priorities` and `segments` differ in length, a priority is
    /// negative or not finite, or the total priority overflows `f64`.
    pub fn push_segments(&mut self, priorities: &[f64], segments: Vec<Segment<O, H>>) {
        assert_eq!(
            priorities.len(),
            segments.len(),
            "priorities and segments must have the same length"
        );

        for (&priority, segment) in priorities.iter().zip(segments) {
            let segment = Arc::new(segment);
            self.sum_tree.set(self.i, priority);
            if self.full {
                self.segments[self.i] = segment;
            } else {
                self.segments.push(segment);
            }

            self.i += 1;
            if self.i == self.capacity {
                self.i = 0;
                if !self.full {
                    info!("Segment replay buffer is full ({} segments)", self.capacity);
                }
                self.full = true;
            }
        }
    }

    /// Segment stored at slot `ix`.
    pub fn get(&self, ix: usize) -> Option<&Arc<Segment<O, H>>> {
        self.segments.get(ix)
    }

    /// Priority of slot `ix`.
    ///
    /// # Panics
    ///
    /// Panics if `ix` is not less than the capacity.
    pub fn priority(&self, ix: usize) -> f64 {
        self.sum_tree.get(ix)
    }

    /// Sum of the priorities of all stored segments.
    pub fn total_priority(&self) -> f64 {
        self.sum_tree.total()
    }

    /// Statistics of the buffer for logging.
    pub fn record(&self) -> Record {
        let len = self.len();
        let total = self.sum_tree.total();
        let max = self.sum_tree.iter().take(len).fold(0f64, f64::max);
        let mean = if len == 0 { 0.0 } else { total / len as f64 };

        Record::from_slice(&[
            ("replay_buffer_len", RecordValue::Scalar(len as f32)),
            ("priority_total", RecordValue::Scalar(total as f32)),
            ("priority_max", RecordValue::Scalar(max as f32)),
            ("priority_mean", RecordValue::Scalar(mean as f32)),
        ])
    }

    /// Draws slots and computes their normalized importance weights.
    fn sample_ixs(&mut self, size: usize) -> (Vec<usize>, Vec<f32>) {
        let len = self.len();
        let total = self.sum_tree.total();
        let sum_tree = &self.sum_tree;
        let rng = &mut self.rng;

        if total <= 0.0 {
            trace!("Total priority is zero, sampling uniformly");
            let ixs = (0..size).map(|_| rng.gen_range(0..len)).collect();
            return (ixs, vec![1f32; size]);
        }

        let ixs = (0..size)
            .map(|_| sum_tree.sample(&mut *rng))
            .collect::<Vec<_>>();

        // log-space keeps (N P(i))^(-beta) finite for tiny probabilities
        let n = len as f64;
        let weight_expo = self.weight_expo;
        let log_ws = ixs
            .iter()
            .map(|&ix| -weight_expo * (sum_tree.get(ix) / total * n).ln())
            .collect::<Vec<_>>();
        let log_w_max = log_ws.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let ws = log_ws
            .iter()
            .map(|lw| (lw - log_w_max).exp() as f32)
            .collect();

        (ixs, ws)
    }
}

impl<O, H> ExperienceBufferBase for SegmentReplayBuffer<O, H> {
    type Item = PrioritizedSegments<O, H>;

    fn push(&mut self, item: Self::Item) -> Result<()> {
        self.push_segments(&item.priorities, item.segments);
        Ok(())
    }

    fn len(&self) -> usize {
        if self.full {
            self.capacity
        } else {
            self.i
        }
    }
}

impl<O, H> ReplayBufferBase for SegmentReplayBuffer<O, H> {
    type Config = SegmentReplayBufferConfig;
    type Batch = SegmentBatch<O, H>;

    fn build(config: &Self::Config) -> Self {
        Self::new(config)
    }

    /// Samples `size` segments with replacement, proportionally to their priorities.
    ///
    /// If all priorities are zero, slots are drawn uniformly and all weights are 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is empty or `size` is zero.
    fn batch(&mut self, size: usize) -> Result<Self::Batch> {
        if size == 0 {
            return Err(SegmentReplayError::ZeroBatchSize.into());
        }
        if self.len() == 0 {
            return Err(SegmentReplayError::EmptyBuffer.into());
        }

        let (ix_sample, weight) = self.sample_ixs(size);
        let segments = ix_sample
            .iter()
            .map(|&ix| self.segments[ix].clone())
            .collect();

        Ok(SegmentBatch {
            ix_sample,
            weight,
            segments,
        })
    }

    /// Sets the priority of each slot in `ixs` to the matching priority raised to `eta`.
    ///
    /// # Panics
    ///
    /// Panics if `ixs` and `priorities` differ in length, a slot holds no segment,
    /// or a priority raised to `eta` is negative, not finite or makes the total
    /// priority overflow `f64`.
    fn update_priority(&mut self, ixs: &[usize], priorities: &[f64]) {
        assert_eq!(
            ixs.len(),
            priorities.len(),
            "ixs and priorities must have the same length"
        );

        let len = self.len();
        for (&ix, &priority) in ixs.iter().zip(priorities.iter()) {
            assert!(ix < len, "slot {} holds no segment", ix);
            self.sum_tree.set(ix, priority.powf(self.eta));
        }
    }
}
