use segment_replay_core::PrioritizedSegments;

/// Message a collector sends to [`ReplayBufferServer`](crate::ReplayBufferServer).
pub struct SegmentMessage<O, H> {
    /// Id of the collector.
    pub id: usize,

    /// Segments with their initial priorities.
    pub pushed_items: PrioritizedSegments<O, H>,
}
