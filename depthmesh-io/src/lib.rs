//! Depth frame sources
//!
//! Every source implements [`DepthSource`]: a synthetic bowl generator for
//! demos without a camera, an in-memory replay of recorded frames, and a
//! channel-fed source for frames produced on another thread.

pub mod synthetic;
pub mod replay;
pub mod channel;

pub use synthetic::*;
pub use replay::*;
pub use channel::*;

use depthmesh_core::{Error, Result};

pub use depthmesh_core::DepthSource;

/// Error returned by every source when a frame is requested before `start()`
pub(crate) fn not_started(source: &str) -> Error {
    Error::Disconnected(format!("{} not started", source))
}

/// Shared `start()` bookkeeping; returns `true` the first time only
pub(crate) fn mark_started(started: &mut bool, source: &str) -> Result<bool> {
    if *started {
        log::trace!("{} already started", source);
        return Ok(false);
    }
    *started = true;
    log::info!("{} started", source);
    Ok(true)
}
