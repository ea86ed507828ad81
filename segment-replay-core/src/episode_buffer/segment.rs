use super::Transition;

/// A fixed-length training window of `burnin_length + unroll_length` steps.
///
/// All `*_init` fields and `j` come from the first step of the window,
/// `last_state` is the next observation of its last step.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<O, H> {
    /// Intrinsic rewards over the window.
    pub in_rewards: Vec<f32>,

    /// Extrinsic rewards over the window.
    pub ex_rewards: Vec<f32>,

    /// Observations over the window.
    pub states: Vec<O>,

    /// Actions over the window.
    pub actions: Vec<i64>,

    /// Termination flags over the window.
    pub dones: Vec<bool>,

    /// Intrinsic hidden state at the start of the window.
    pub in_h_init: H,

    /// Intrinsic cell state at the start of the window.
    pub in_c_init: H,

    /// Extrinsic hidden state at the start of the window.
    pub ex_h_init: H,

    /// Extrinsic cell state at the start of the window.
    pub ex_c_init: H,

    /// Action preceding the window.
    pub prev_a_init: i64,

    /// Intrinsic reward preceding the window.
    pub prev_in_reward_init: f32,

    /// Extrinsic reward preceding the window.
    pub prev_ex_reward_init: f32,

    /// Observation following the last step of the window.
    pub last_state: O,

    /// Arm index of the window.
    pub j: usize,
}

impl<O: Clone, H: Clone> Segment<O, H> {
    /// Builds a segment from consecutive transitions.
    ///
    /// # Panics
    ///
    /// Panics if `window` is empty.
    pub fn from_window(window: &[Transition<O, H>]) -> Self {
        assert!(!window.is_empty(), "A segment needs at least one transition");
        let first = &window[0];
        let last = &window[window.len() - 1];

        Self {
            in_rewards: window.iter().map(|t| t.in_reward).collect(),
            ex_rewards: window.iter().map(|t| t.ex_reward).collect(),
            states: window.iter().map(|t| t.state.clone()).collect(),
            actions: window.iter().map(|t| t.action).collect(),
            dones: window.iter().map(|t| t.done).collect(),
            in_h_init: first.in_h.clone(),
            in_c_init: first.in_c.clone(),
            ex_h_init: first.ex_h.clone(),
            ex_c_init: first.ex_c.clone(),
            prev_a_init: first.prev_action,
            prev_in_reward_init: first.prev_in_reward,
            prev_ex_reward_init: first.prev_ex_reward,
            last_state: last.next_state.clone(),
            j: first.j,
        }
    }
}

impl<O, H> Segment<O, H> {
    /// Number of time steps in the segment.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if the segment has no time step.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
