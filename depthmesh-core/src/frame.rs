//! Depth frame container

use crate::error::{Error, Result};
use crate::point::DepthSample;
use serde::{Deserialize, Serialize};

/// One rectangular snapshot of per-pixel distances in meters, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthFrame {
    width: usize,
    height: usize,
    distances: Vec<f32>,
}

impl DepthFrame {
    /// Create a frame from row-major distances
    pub fn new(width: usize, height: usize, distances: Vec<f32>) -> Result<Self> {
        if distances.len() != width * height {
            return Err(Error::InvalidData(format!(
                "depth frame {}x{} needs {} samples, got {}",
                width,
                height,
                width * height,
                distances.len()
            )));
        }
        Ok(Self {
            width,
            height,
            distances,
        })
    }

    /// Create a frame where every pixel has the same distance
    pub fn filled(width: usize, height: usize, distance: f32) -> Self {
        Self {
            width,
            height,
            distances: vec![distance; width * height],
        }
    }

    /// Create a frame by evaluating `f(x, y)` for every pixel
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f32,
    {
        let mut distances = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                distances.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            distances,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// (width, height)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Distance at a pixel, `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.distances[y * self.width + x])
        } else {
            None
        }
    }

    /// Distance at a pixel; out of bounds reads report no return
    pub fn distance_at(&self, x: usize, y: usize) -> f32 {
        self.get(x, y).unwrap_or(0.0)
    }

    /// Sample a pixel as a `DepthSample`
    pub fn sample(&self, x: usize, y: usize) -> DepthSample {
        DepthSample::new(x, y, self.distance_at(x, y))
    }

    /// Set the distance at a pixel
    pub fn set(&mut self, x: usize, y: usize, distance: f32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::InvalidData(format!(
                "pixel ({}, {}) outside {}x{} frame",
                x, y, self.width, self.height
            )));
        }
        self.distances[y * self.width + x] = distance;
        Ok(())
    }

    /// Raw row-major distances
    pub fn as_slice(&self) -> &[f32] {
        &self.distances
    }

    /// Fail with `FrameSizeMismatch` unless the frame is `width` x `height`
    pub fn ensure_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if self.dimensions() != (width, height) {
            return Err(Error::FrameSizeMismatch {
                expected: (width, height),
                actual: self.dimensions(),
            });
        }
        Ok(())
    }
}
