//! Replay of recorded frames

use crate::{mark_started, not_started};
use depthmesh_core::{DepthFrame, DepthSource, Error, Result};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::Duration;

/// Plays back a fixed list of frames, optionally forever
#[derive(Debug, Clone, Default)]
pub struct ReplayDepthSource {
    frames: VecDeque<DepthFrame>,
    looping: bool,
    started: bool,
}

impl ReplayDepthSource {
    const NAME: &'static str = "replay depth source";

    pub fn new(frames: impl IntoIterator<Item = DepthFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            looping: false,
            started: false,
        }
    }

    /// Restart from the first frame once the recording runs out
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn push(&mut self, frame: DepthFrame) {
        self.frames.push_back(frame);
    }

    /// Frames left before the source is exhausted (or wraps around)
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    /// Load a recording saved with [`save_frames`]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(load_frames(path)?))
    }
}

impl DepthSource for ReplayDepthSource {
    fn start(&mut self) -> Result<()> {
        mark_started(&mut self.started, Self::NAME)?;
        Ok(())
    }

    fn wait_for_frame(&mut self, _timeout: Duration) -> Result<DepthFrame> {
        if !self.started {
            return Err(not_started(Self::NAME));
        }

        let frame = self
            .frames
            .pop_front()
            .ok_or_else(|| Error::Disconnected("replay exhausted".to_string()))?;
        if self.looping {
            self.frames.push_back(frame.clone());
        }
        Ok(frame)
    }
}

/// Read a JSON array of frames
pub fn load_frames<P: AsRef<Path>>(path: P) -> Result<Vec<DepthFrame>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let frames: Vec<DepthFrame> = serde_json::from_reader(reader)
        .map_err(|e| Error::InvalidData(format!("Failed to parse recording: {}", e)))?;

    // serde bypasses the constructor, so re-check the buffer sizes
    frames
        .into_iter()
        .map(|frame| {
            let (width, height) = frame.dimensions();
            DepthFrame::new(width, height, frame.as_slice().to_vec())
        })
        .collect()
}

/// Write frames as a JSON array readable by [`load_frames`]
pub fn save_frames<P: AsRef<Path>>(frames: &[DepthFrame], path: P) -> Result<()> {
    let writer = BufWriter::new(File::create(path.as_ref())?);
    serde_json::to_writer(writer, frames)
        .map_err(|e| Error::InvalidData(format!("Failed to write recording: {}", e)))?;
    log::debug!("saved {} frames to {}", frames.len(), path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_millis(10);

    fn frames() -> Vec<DepthFrame> {
        vec![DepthFrame::filled(2, 2, 0.5), DepthFrame::filled(2, 2, 0.7)]
    }

    #[test]
    fn test_exhausted_replay_disconnects() {
        let mut source = ReplayDepthSource::new(frames());
        source.start().unwrap();
        assert_eq!(source.wait_for_frame(TIMEOUT).unwrap().distance_at(0, 0), 0.5);
        assert_eq!(source.wait_for_frame(TIMEOUT).unwrap().distance_at(0, 0), 0.7);
        assert!(matches!(source.wait_for_frame(TIMEOUT), Err(Error::Disconnected(_))));
    }

    #[test]
    fn test_looping_replay_wraps() {
        let mut source = ReplayDepthSource::new(frames()).looping(true);
        source.start().unwrap();
        let seen: Vec<f32> = (0..5)
            .map(|_| source.wait_for_frame(TIMEOUT).unwrap().distance_at(0, 0))
            .collect();
        assert_eq!(seen, vec![0.5, 0.7, 0.5, 0.7, 0.5]);
        assert_eq!(source.remaining(), 2);
    }

    #[test]
    fn test_requires_start() {
        let mut source = ReplayDepthSource::new(frames());
        assert!(matches!(source.wait_for_frame(TIMEOUT), Err(Error::Disconnected(_))));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join("depthmesh_replay_test.json");
        save_frames(&frames(), &path).unwrap();
        let loaded = load_frames(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, frames());
    }

    #[test]
    fn test_load_rejects_bad_buffer() {
        let path = std::env::temp_dir().join("depthmesh_replay_bad.json");
        std::fs::write(&path, r#"[{"width":2,"height":2,"distances":[1.0]}]"#).unwrap();
        let result = load_frames(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_frames("/nonexistent/recording.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
