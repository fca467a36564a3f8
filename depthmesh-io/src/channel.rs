//! Frames delivered from a producer thread

use crate::{mark_started, not_started};
use depthmesh_core::{DepthFrame, DepthSource, Error, Result};
use flume::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

/// Receives frames pushed by a capture thread over a `flume` channel
///
/// # Example
/// ```rust
/// use std::time::Duration;
/// use depthmesh_core::{DepthFrame, DepthSource};
/// use depthmesh_io::ChannelDepthSource;
///
/// let (mut source, sender) = ChannelDepthSource::bounded(2);
/// std::thread::spawn(move || {
///     sender.send(DepthFrame::filled(4, 4, 0.5)).ok();
/// });
///
/// source.start().unwrap();
/// let frame = source.wait_for_frame(Duration::from_secs(1)).unwrap();
/// assert_eq!(frame.dimensions(), (4, 4));
/// ```
pub struct ChannelDepthSource {
    receiver: Receiver<DepthFrame>,
    started: bool,
}

impl ChannelDepthSource {
    const NAME: &'static str = "channel depth source";

    /// Wrap an existing receiver
    pub fn new(receiver: Receiver<DepthFrame>) -> Self {
        Self {
            receiver,
            started: false,
        }
    }

    /// Create a source with a queue of at most `capacity` frames and the sender feeding it
    pub fn bounded(capacity: usize) -> (Self, Sender<DepthFrame>) {
        let (sender, receiver) = flume::bounded(capacity);
        (Self::new(receiver), sender)
    }

    pub fn unbounded() -> (Self, Sender<DepthFrame>) {
        let (sender, receiver) = flume::unbounded();
        (Self::new(receiver), sender)
    }

    /// Frames queued and not yet consumed
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

impl DepthSource for ChannelDepthSource {
    fn start(&mut self) -> Result<()> {
        mark_started(&mut self.started, Self::NAME)?;
        Ok(())
    }

    fn wait_for_frame(&mut self, timeout: Duration) -> Result<DepthFrame> {
        if !self.started {
            return Err(not_started(Self::NAME));
        }

        self.receiver.recv_timeout(timeout).map_err(|e| match e {
            RecvTimeoutError::Timeout => Error::Timeout(timeout),
            RecvTimeoutError::Disconnected => {
                Error::Disconnected("frame producer hung up".to_string())
            }
        })
    }
}
