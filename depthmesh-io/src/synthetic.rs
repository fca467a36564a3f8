//! Deterministic stand-in for a depth camera

use crate::{mark_started, not_started};
use depthmesh_core::{DepthFrame, DepthSource, Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Generates frames of a bowl-shaped surface with random dropouts
///
/// The bowl is nearest at the centre of the frame and recedes towards the
/// corners; it slowly breathes from frame to frame so consecutive frames
/// differ. Output is fully determined by the seed.
#[derive(Debug, Clone)]
pub struct SyntheticDepthSource {
    width: usize,
    height: usize,
    /// Distance at the centre of the bowl (meters)
    pub center_distance: f32,
    /// Extra distance at the frame corners (meters)
    pub depth: f32,
    /// Probability that a sample reports no return (0.0)
    pub dropout_probability: f64,
    rng: StdRng,
    frame_index: u64,
    started: bool,
}

impl SyntheticDepthSource {
    const NAME: &'static str = "synthetic depth source";

    pub fn new(width: usize, height: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            center_distance: 0.5,
            depth: 0.8,
            dropout_probability: 0.02,
            rng: StdRng::seed_from_u64(seed),
            frame_index: 0,
            started: false,
        }
    }

    pub fn with_dropout_probability(mut self, probability: f64) -> Self {
        self.dropout_probability = probability;
        self
    }

    pub fn with_surface(mut self, center_distance: f32, depth: f32) -> Self {
        self.center_distance = center_distance;
        self.depth = depth;
        self
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Frames produced so far
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Produce the next frame without the started check
    pub fn generate(&mut self) -> Result<DepthFrame> {
        if !(0.0..=1.0).contains(&self.dropout_probability) {
            return Err(Error::InvalidConfiguration(format!(
                "dropout probability must be within [0, 1], got {}",
                self.dropout_probability
            )));
        }

        let cx = self.width as f32 / 2.0;
        let cy = self.height as f32 / 2.0;
        let max_radius_sq = (cx * cx + cy * cy).max(f32::EPSILON);
        let breath = 1.0 + 0.05 * (self.frame_index as f32 * 0.1).sin();

        let mut distances = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                if self.rng.gen_bool(self.dropout_probability) {
                    distances.push(0.0);
                    continue;
                }
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let t = (dx * dx + dy * dy) / max_radius_sq;
                distances.push((self.center_distance + self.depth * t) * breath);
            }
        }

        self.frame_index += 1;
        DepthFrame::new(self.width, self.height, distances)
    }
}

impl DepthSource for SyntheticDepthSource {
    fn start(&mut self) -> Result<()> {
        mark_started(&mut self.started, Self::NAME)?;
        Ok(())
    }

    fn wait_for_frame(&mut self, _timeout: Duration) -> Result<DepthFrame> {
        if !self.started {
            return Err(not_started(Self::NAME));
        }
        self.generate()
    }
}
