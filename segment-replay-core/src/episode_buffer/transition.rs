//! A single environment step as seen by a recurrent, reward-decomposed agent.

/// A transition recorded at one environment step.
///
/// `O` is the observation type and `H` the type of a recurrent state tensor.
/// The intrinsic and extrinsic value streams each carry their own LSTM state
/// pair `(h, c)`, recorded *before* the step so that a window starting here
/// can seed its burn-in from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<O, H> {
    /// Intrinsic reward received at the previous step.
    pub prev_in_reward: f32,

    /// Extrinsic reward received at the previous step.
    pub prev_ex_reward: f32,

    /// Action taken at the previous step.
    pub prev_action: i64,

    /// Observation at this step.
    pub state: O,

    /// Action taken at this step.
    pub action: i64,

    /// Hidden state of the intrinsic stream.
    pub in_h: H,

    /// Cell state of the intrinsic stream.
    pub in_c: H,

    /// Hidden state of the extrinsic stream.
    pub ex_h: H,

    /// Cell state of the extrinsic stream.
    pub ex_c: H,

    /// Index of the reward-scaling arm used for this step.
    pub j: usize,

    /// Whether the episode terminated at this step.
    pub done: bool,

    /// Intrinsic reward received for this step.
    pub in_reward: f32,

    /// Extrinsic reward received for this step.
    pub ex_reward: f32,

    /// Observation after this step.
    pub next_state: O,
}
