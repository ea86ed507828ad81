//! Fixtures shared by unit tests.
use crate::{Segment, Transition};

/// A transition whose fields are all derived from the step index `k`.
pub fn transition(k: usize) -> Transition<i64, Vec<f32>> {
    let x = k as f32;
    Transition {
        prev_in_reward: 0.1 * (x - 1.0),
        prev_ex_reward: x - 1.0,
        prev_action: k as i64 - 1,
        state: k as i64,
        action: k as i64,
        in_h: vec![x, 0.0],
        in_c: vec![x, 1.0],
        ex_h: vec![x, 2.0],
        ex_c: vec![x, 3.0],
        j: k % 4,
        done: false,
        in_reward: 0.1 * x,
        ex_reward: x,
        next_state: 1000 + k as i64,
    }
}

/// An episode of `len` steps, with the last one terminal.
pub fn episode(len: usize) -> Vec<Transition<i64, Vec<f32>>> {
    (0..len)
        .map(|k| Transition {
            done: k + 1 == len,
            ..transition(k)
        })
        .collect()
}

/// A two-step segment tagged by `k` through its first state.
pub fn segment(k: usize) -> Segment<i64, Vec<f32>> {
    Segment::from_window(&[transition(k), transition(k + 1)])
}
