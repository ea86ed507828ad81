//! Fixtures shared by unit tests.
use segment_replay_core::{EpisodeBuffer, Segment, Transition};

/// An episode of `len` steps whose observations are the step indices offset by `base`.
pub fn episode(base: i64, len: usize) -> Vec<Transition<i64, Vec<f32>>> {
    (0..len)
        .map(|k| {
            let x = k as f32;
            Transition {
                prev_in_reward: 0.0,
                prev_ex_reward: 0.0,
                prev_action: 0,
                state: base + k as i64,
                action: (k % 3) as i64,
                in_h: vec![x; 2],
                in_c: vec![x; 2],
                ex_h: vec![-x; 2],
                ex_c: vec![-x; 2],
                j: 1,
                done: k + 1 == len,
                in_reward: 0.01 * x,
                ex_reward: 1.0,
                next_state: base + k as i64 + 1,
            }
        })
        .collect()
}

/// `n` segments of 3 steps each.
pub fn segments(n: usize) -> Vec<Segment<i64, Vec<f32>>> {
    let mut buffer = EpisodeBuffer::new(1, 2);
    // windows start every 2 steps, so n windows need 2n + 1 steps
    episode(0, 2 * n + 1)
        .into_iter()
        .for_each(|t| buffer.push(t));
    let segments = buffer.take_segments();
    assert_eq!(segments.len(), n);
    segments
}
