//! Items going in and out of [`SegmentReplayBuffer`](super::SegmentReplayBuffer).
use crate::Segment;
use std::sync::Arc;

/// Segments pushed into the replay buffer along with their initial priorities.
#[derive(Clone, Debug)]
pub struct PrioritizedSegments<O, H> {
    /// Initial priority of each segment.
    pub priorities: Vec<f64>,

    /// Segments, in the same order as `priorities`.
    pub segments: Vec<Segment<O, H>>,
}

impl<O, H> PrioritizedSegments<O, H> {
    /// Pairs segments with their priorities.
    pub fn new(priorities: Vec<f64>, segments: Vec<Segment<O, H>>) -> Self {
        Self {
            priorities,
            segments,
        }
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if there is no segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Appends the content of `other`.
    pub fn extend(&mut self, other: Self) {
        self.priorities.extend(other.priorities);
        self.segments.extend(other.segments);
    }
}

impl<O, H> Default for PrioritizedSegments<O, H> {
    fn default() -> Self {
        Self::new(vec![], vec![])
    }
}

/// A minibatch sampled from [`SegmentReplayBuffer`](super::SegmentReplayBuffer).
///
/// Segments are shared with the buffer, the same slot may appear more than
/// once since slots are drawn with replacement.
#[derive(Clone, Debug)]
pub struct SegmentBatch<O, H> {
    /// Slots of the sampled segments, to be given back with fresh priorities.
    pub ix_sample: Vec<usize>,

    /// Importance sampling weights, normalized so that the largest is 1.
    pub weight: Vec<f32>,

    /// Sampled segments.
    pub segments: Vec<Arc<Segment<O, H>>>,
}

impl<O, H> SegmentBatch<O, H> {
    /// Number of samples in the batch.
    pub fn len(&self) -> usize {
        self.ix_sample.len()
    }

    /// Returns `true` if the batch has no sample.
    pub fn is_empty(&self) -> bool {
        self.ix_sample.is_empty()
    }

    /// Unpacks the batch into slots, weights and segments.
    pub fn unpack(self) -> (Vec<usize>, Vec<f32>, Vec<Arc<Segment<O, H>>>) {
        (self.ix_sample, self.weight, self.segments)
    }
}
