use crate::{SegmentMessage, SegmentReplayAsyncError};
use anyhow::Result;
use crossbeam_channel::Sender;
use log::trace;
use segment_replay_core::{ExperienceBufferBase, PrioritizedSegments};
use serde::{Deserialize, Serialize};

/// Configuration of [`ReplayBufferProxy`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ReplayBufferProxyConfig {
    /// Number of segments buffered until sent to the replay buffer server.
    pub n_buffer: usize,
}

impl Default for ReplayBufferProxyConfig {
    fn default() -> Self {
        Self { n_buffer: 16 }
    }
}

/// Collector-side stand-in for the replay buffer.
///
/// Segments pushed into the proxy are held locally and sent to a
/// [`ReplayBufferServer`](crate::ReplayBufferServer) as one
/// [`SegmentMessage`] once at least `n_buffer` of them have accumulated.
pub struct ReplayBufferProxy<O, H> {
    id: usize,

    /// Sender of [`SegmentMessage`].
    sender: Sender<SegmentMessage<O, H>>,

    /// Number of segments buffered until sent to the server.
    n_buffer: usize,

    buffer: PrioritizedSegments<O, H>,
}

impl<O, H> ReplayBufferProxy<O, H> {
    /// Builds a proxy sending its segments through `sender`.
    pub fn build_with_sender(
        id: usize,
        config: &ReplayBufferProxyConfig,
        sender: Sender<SegmentMessage<O, H>>,
    ) -> Self {
        Self {
            id,
            sender,
            n_buffer: config.n_buffer,
            buffer: PrioritizedSegments::default(),
        }
    }

    /// Sends all buffered segments, if any.
    pub fn flush(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let pushed_items = std::mem::take(&mut self.buffer);
        trace!("Collector {} sends {} segments", self.id, pushed_items.len());
        let msg = SegmentMessage {
            id: self.id,
            pushed_items,
        };

        match self.sender.try_send(msg) {
            Ok(()) => Ok(()),
            Err(_e) => Err(SegmentReplayAsyncError::SendMsgForPush.into()),
        }
    }
}

impl<O, H> ExperienceBufferBase for ReplayBufferProxy<O, H> {
    type Item = PrioritizedSegments<O, H>;

    /// Buffers segments and sends them once `n_buffer` have accumulated.
    ///
    /// # Panics
    ///
    /// Panics if the priorities and segments of `tr` differ in length.
    fn push(&mut self, tr: Self::Item) -> Result<()> {
        assert_eq!(
            tr.priorities.len(),
            tr.segments.len(),
            "priorities and segments must have the same length"
        );
        self.buffer.extend(tr);
        if self.buffer.len() >= self.n_buffer {
            self.flush()?;
        }
        Ok(())
    }

    /// Number of segments held by the proxy and not sent yet.
    fn len(&self) -> usize {
        self.buffer.len()
    }
}
