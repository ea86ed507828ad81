use super::{EpisodeBufferConfig, Segment, Transition};
use log::{debug, trace};

/// Collects the transitions of one episode and cuts them into segments.
///
/// Windows have length `burnin_length + unroll_length` and start every
/// `unroll_length` steps, so consecutive segments overlap by the burn-in. The
/// first window covers steps `[0, burnin_length + unroll_length)`. When the
/// next window would run past the end of the episode, it is replaced with the
/// last `burnin_length + unroll_length` steps, so every segment has full
/// length at the cost of overlapping its predecessor further.
///
/// An episode shorter than one segment yields no segment at all.
#[derive(Debug, Clone)]
pub struct EpisodeBuffer<O, H> {
    transitions: Vec<Transition<O, H>>,
    burnin_length: usize,
    unroll_length: usize,
}

impl<O, H> EpisodeBuffer<O, H> {
    /// Creates an empty buffer.
    ///
    /// # Panics
    ///
    /// Panics if `unroll_length` is zero.
    pub fn new(burnin_length: usize, unroll_length: usize) -> Self {
        assert!(unroll_length > 0, "unroll_length must be positive");
        Self {
            transitions: vec![],
            burnin_length,
            unroll_length,
        }
    }

    /// Creates an empty buffer from a configuration.
    pub fn build(config: &EpisodeBufferConfig) -> Self {
        Self::new(config.burnin_length, config.unroll_length)
    }

    /// Appends a transition.
    pub fn push(&mut self, transition: Transition<O, H>) {
        self.transitions.push(transition);
    }

    /// Number of transitions collected so far.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Returns `true` if no transition has been pushed since the last reset.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Length of the segments this buffer emits.
    pub fn segment_len(&self) -> usize {
        self.burnin_length + self.unroll_length
    }

    /// Discards all collected transitions.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Transitions collected so far.
    pub fn transitions(&self) -> &[Transition<O, H>] {
        &self.transitions
    }

    /// Start offsets of the windows [`pull_segments`](Self::pull_segments) would emit.
    pub fn window_starts(&self) -> Vec<usize> {
        let len = self.transitions.len();
        let seg_len = self.segment_len();
        if len < seg_len {
            return vec![];
        }

        (self.burnin_length..len)
            .step_by(self.unroll_length)
            .map(|t| {
                if t + self.unroll_length > len {
                    len - seg_len
                } else {
                    t - self.burnin_length
                }
            })
            .collect()
    }
}

impl<O: Clone, H: Clone> EpisodeBuffer<O, H> {
    /// Cuts the collected transitions into segments.
    ///
    /// The transitions are kept, see [`take_segments`](Self::take_segments)
    /// for the variant that also resets the buffer.
    pub fn pull_segments(&self) -> Vec<Segment<O, H>> {
        let seg_len = self.segment_len();
        let starts = self.window_starts();
        if starts.is_empty() {
            debug!(
                "Episode of {} steps is shorter than a segment ({} steps), no segment emitted",
                self.transitions.len(),
                seg_len
            );
            return vec![];
        }
        trace!("Windows start at {:?}", starts);

        starts
            .into_iter()
            .map(|s| Segment::from_window(&self.transitions[s..s + seg_len]))
            .collect()
    }

    /// Cuts the collected transitions into segments and clears the buffer.
    pub fn take_segments(&mut self) -> Vec<Segment<O, H>> {
        let segments = self.pull_segments();
        self.clear();
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::EpisodeBuffer;
    use crate::test_util::{episode, transition};

    #[test]
    fn test_single_window() {
        let mut buffer = EpisodeBuffer::new(2, 3);
        episode(5).into_iter().for_each(|t| buffer.push(t));

        let segments = buffer.pull_segments();
        assert_eq!(segments.len(), 1);

        let segment = &segments[0];
        let first = transition(0);
        let last = transition(4);
        assert_eq!(segment.len(), 5);
        assert_eq!(segment.in_h_init, first.in_h);
        assert_eq!(segment.in_c_init, first.in_c);
        assert_eq!(segment.ex_h_init, first.ex_h);
        assert_eq!(segment.ex_c_init, first.ex_c);
        assert_eq!(segment.prev_a_init, first.prev_action);
        assert_eq!(segment.prev_in_reward_init, first.prev_in_reward);
        assert_eq!(segment.prev_ex_reward_init, first.prev_ex_reward);
        assert_eq!(segment.j, first.j);
        assert_eq!(segment.last_state, last.next_state);
        assert_eq!(segment.states, vec![0, 1, 2, 3, 4]);
        assert_eq!(segment.actions, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_tail_window_is_aligned_to_the_end() {
        let mut buffer = EpisodeBuffer::new(2, 3);
        episode(10).into_iter().for_each(|t| buffer.push(t));

        assert_eq!(buffer.window_starts(), vec![0, 3, 5]);

        let segments = buffer.pull_segments();
        let states = segments.iter().map(|s| s.states.clone()).collect::<Vec<_>>();
        assert_eq!(
            states,
            vec![
                vec![0, 1, 2, 3, 4],
                vec![3, 4, 5, 6, 7],
                vec![5, 6, 7, 8, 9],
            ]
        );
        assert!(segments.iter().all(|s| s.len() == 5));
        assert_eq!(segments[2].last_state, transition(9).next_state);
        assert_eq!(segments[1].in_h_init, transition(3).in_h);
    }

    #[test]
    fn test_exact_multiple_has_no_tail_window() {
        let mut buffer = EpisodeBuffer::new(2, 3);
        episode(11).into_iter().for_each(|t| buffer.push(t));

        assert_eq!(buffer.window_starts(), vec![0, 3, 6]);
    }

    #[test]
    fn test_short_episode_yields_nothing() {
        let mut buffer = EpisodeBuffer::new(2, 3);
        for len in 0..5 {
            buffer.clear();
            episode(len).into_iter().for_each(|t| buffer.push(t));
            assert_eq!(buffer.len(), len);
            assert!(buffer.pull_segments().is_empty());
        }
    }

    #[test]
    fn test_zero_burnin() {
        let mut buffer = EpisodeBuffer::new(0, 4);
        episode(10).into_iter().for_each(|t| buffer.push(t));

        assert_eq!(buffer.window_starts(), vec![0, 4, 6]);
    }

    #[test]
    fn test_take_segments_resets() {
        let mut buffer = EpisodeBuffer::new(1, 2);
        episode(6).into_iter().for_each(|t| buffer.push(t));

        let segments = buffer.take_segments();
        assert_eq!(segments.len(), 3);
        assert!(buffer.is_empty());
        assert!(buffer.pull_segments().is_empty());
    }

    #[test]
    #[should_panic]
    fn test_zero_unroll_length() {
        let _ = EpisodeBuffer::<i64, Vec<f32>>::new(2, 0);
    }
}
