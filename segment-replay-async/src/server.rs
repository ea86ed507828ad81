//! Learner-side owner of the replay buffer.
use crate::{SegmentMessage, SegmentReplayAsyncError};
use anyhow::Result;
use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::{info, warn};
use segment_replay_core::{
    record::Record, ExperienceBufferBase, ReplayBufferBase, SegmentBatch, SegmentReplayBuffer,
    SegmentReplayBufferConfig,
};
use std::{
    sync::{Arc, Mutex, MutexGuard},
    thread::JoinHandle,
    time::{Duration, SystemTime},
};

/// Stats of the ingest loop of [`ReplayBufferServer`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IngestStat {
    /// The number of messages received from collectors.
    pub n_messages: usize,

    /// The number of segments pushed into the replay buffer.
    pub n_segments: usize,

    /// Duration of the ingest loop.
    pub duration: Duration,
}

impl IngestStat {
    /// Returns a formatted string.
    pub fn fmt(&self) -> String {
        let d = self.duration.as_secs_f32();
        let mut s = "messages, segments, segments/sec, duration\n".to_string();
        s += format!(
            "{}, {}, {}, {}\n",
            self.n_messages,
            self.n_segments,
            self.n_segments as f32 / d,
            d
        )
        .as_str();
        s
    }
}

/// Owns a [`SegmentReplayBuffer`] shared by an ingest thread and a learner.
///
/// The ingest thread, started with [`run`](Self::run), receives
/// [`SegmentMessage`]s from collectors and pushes them into the buffer. The
/// learner samples and updates priorities through [`batch`](Self::batch) and
/// [`update_priority`](Self::update_priority). Every access holds the buffer
/// lock, so a learner never observes a segment whose priority is not written
/// yet.
pub struct ReplayBufferServer<O, H> {
    buffer: Arc<Mutex<SegmentReplayBuffer<O, H>>>,

    /// Flag to stop the ingest thread.
    stop: Arc<Mutex<bool>>,

    thread: Option<JoinHandle<IngestStat>>,
}

impl<O, H> ReplayBufferServer<O, H>
where
    O: Send + Sync + 'static,
    H: Send + Sync + 'static,
{
    /// Builds a server holding an empty replay buffer.
    pub fn build(config: &SegmentReplayBufferConfig) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(SegmentReplayBuffer::build(config))),
            stop: Arc::new(Mutex::new(false)),
            thread: None,
        }
    }

    /// Shared handle to the replay buffer.
    pub fn buffer(&self) -> Arc<Mutex<SegmentReplayBuffer<O, H>>> {
        self.buffer.clone()
    }

    fn lock(&self) -> Result<MutexGuard<'_, SegmentReplayBuffer<O, H>>> {
        self.buffer
            .lock()
            .map_err(|_| SegmentReplayAsyncError::BufferLockPoisoned.into())
    }

    /// Number of segments in the replay buffer.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    /// Returns `true` if the replay buffer holds no segment.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Samples a minibatch, see [`ReplayBufferBase::batch`].
    pub fn batch(&self, size: usize) -> Result<SegmentBatch<O, H>> {
        self.lock()?.batch(size)
    }

    /// Updates priorities, see [`ReplayBufferBase::update_priority`].
    pub fn update_priority(&self, ixs: &[usize], priorities: &[f64]) -> Result<()> {
        self.lock()?.update_priority(ixs, priorities);
        Ok(())
    }

    /// Statistics of the replay buffer.
    pub fn record(&self) -> Result<Record> {
        Ok(self.lock()?.record())
    }

    /// Spawns the thread pushing incoming segments into the replay buffer.
    ///
    /// The thread runs until [`stop`](Self::stop) is called or all senders are dropped.
    pub fn run(&mut self, receiver: Receiver<SegmentMessage<O, H>>) {
        let buffer = self.buffer.clone();
        let stop = self.stop.clone();
        let handle = std::thread::spawn(move || Self::ingest_loop(receiver, buffer, stop));
        self.thread = Some(handle);
        info!("Started ingest thread");
    }

    /// Requests the ingest thread to stop.
    pub fn stop(&self) {
        if let Ok(mut stop) = self.stop.lock() {
            *stop = true;
        }
    }

    /// Waits until the ingest thread finishes and returns its stats.
    ///
    /// Returns default stats if the thread was never started.
    pub fn join(&mut self) -> Result<IngestStat> {
        match self.thread.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| SegmentReplayAsyncError::IngestThreadPanicked.into()),
            None => Ok(IngestStat::default()),
        }
    }

    /// Stops and joins the ingest thread.
    pub fn stop_and_join(&mut self) -> Result<IngestStat> {
        self.stop();
        self.join()
    }

    fn push_message(
        buffer: &Mutex<SegmentReplayBuffer<O, H>>,
        msg: SegmentMessage<O, H>,
        stat: &mut IngestStat,
    ) -> Result<()> {
        let n = msg.pushed_items.len();
        let mut buffer = buffer
            .lock()
            .map_err(|_| SegmentReplayAsyncError::BufferLockPoisoned)?;
        buffer.push(msg.pushed_items)?;
        stat.n_messages += 1;
        stat.n_segments += n;
        Ok(())
    }

    /// Loop receiving [`SegmentMessage`]s from collectors.
    fn ingest_loop(
        receiver: Receiver<SegmentMessage<O, H>>,
        buffer: Arc<Mutex<SegmentReplayBuffer<O, H>>>,
        stop: Arc<Mutex<bool>>,
    ) -> IngestStat {
        let mut stat = IngestStat::default();
        let time = SystemTime::now();

        loop {
            match receiver.recv_timeout(Duration::from_millis(10)) {
                Ok(msg) => {
                    if let Err(e) = Self::push_message(&buffer, msg, &mut stat) {
                        warn!("Stopped ingesting segments: {}", e);
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            if stop.lock().map(|stop| *stop).unwrap_or(true) {
                // segments already sent are not lost
                for msg in receiver.try_iter() {
                    if Self::push_message(&buffer, msg, &mut stat).is_err() {
                        break;
                    }
                }
                break;
            }
        }

        stat.duration = time.elapsed().unwrap_or_default();
        info!(
            "Stopped ingest thread after {} messages ({} segments)",
            stat.n_messages, stat.n_segments
        );
        stat
    }
}
