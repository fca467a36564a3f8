//! Average depth of a window in the middle of the frame
//!
//! Drives the physics toy: the average distance becomes a ball radius and a
//! grey swatch.

use crate::mapping::{lerp, map_range};
use depthmesh_core::{DepthFrame, Error, Result};

/// Samples a small window centred on the frame and averages the valid distances
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthProbe {
    pub rows: usize,
    pub cols: usize,
    /// Samples closer than this (meters) are discarded as dropouts
    pub min_valid_distance: f32,
    /// Distance range (meters) mapped onto `output_range`
    pub input_range: (f32, f32),
    /// Clamped output range, pixels of ball radius
    pub output_range: (f32, f32),
}

/// Result of probing one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeReading {
    /// Mean of the valid samples in meters
    pub average_distance: f32,
    /// `average_distance` mapped and clamped into the probe's output range
    pub mapped: f32,
    pub valid_samples: usize,
    pub total_samples: usize,
}

impl ProbeReading {
    /// Grey level for the depth swatch, `lerp(0, 255, distance)` clamped to a byte
    pub fn shade(&self) -> u8 {
        lerp(0.0, 255.0, self.average_distance).clamp(0.0, 255.0) as u8
    }
}

impl DepthProbe {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Top-left pixel of the window for a frame of the given size
    fn window_origin(&self, width: usize, height: usize) -> Result<(usize, usize)> {
        if self.rows == 0 || self.cols == 0 || self.cols > width || self.rows > height {
            return Err(Error::InvalidConfiguration(format!(
                "probe window {}x{} does not fit a {}x{} frame",
                self.cols, self.rows, width, height
            )));
        }
        Ok((width / 2 - self.cols / 2, height / 2 - self.rows / 2))
    }

    /// Average the window; `None` when every sample in it is a dropout
    pub fn measure(&self, frame: &DepthFrame) -> Result<Option<ProbeReading>> {
        let (x0, y0) = self.window_origin(frame.width(), frame.height())?;

        let mut sum = 0.0f64;
        let mut valid_samples = 0usize;
        for y in y0..y0 + self.rows {
            for x in x0..x0 + self.cols {
                let distance = frame.distance_at(x, y);
                if distance >= self.min_valid_distance {
                    sum += f64::from(distance);
                    valid_samples += 1;
                }
            }
        }

        if valid_samples == 0 {
            log::debug!("probe window has no valid samples");
            return Ok(None);
        }

        let average_distance = (sum / valid_samples as f64) as f32;
        let mapped = map_range(
            average_distance,
            self.input_range.0,
            self.input_range.1,
            self.output_range.0,
            self.output_range.1,
            true,
        );

        Ok(Some(ProbeReading {
            average_distance,
            mapped,
            valid_samples,
            total_samples: self.rows * self.cols,
        }))
    }
}

impl Default for DepthProbe {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            min_valid_distance: 0.1,
            input_range: (0.1, 0.6),
            output_range: (20.0, 200.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_frame() {
        let frame = DepthFrame::filled(64, 48, 0.35);
        let reading = DepthProbe::default().measure(&frame).unwrap().unwrap();
        assert_relative_eq!(reading.average_distance, 0.35, epsilon = 1e-6);
        assert_relative_eq!(reading.mapped, 110.0, epsilon = 1e-3);
        assert_eq!(reading.valid_samples, 100);
    }

    #[test]
    fn test_dropouts_are_ignored() {
        // left half of the window reports nothing
        let frame = DepthFrame::from_fn(64, 48, |x, _| if x < 32 { 0.0 } else { 0.5 });
        let reading = DepthProbe::default().measure(&frame).unwrap().unwrap();
        assert_eq!(reading.valid_samples, 50);
        assert_relative_eq!(reading.average_distance, 0.5);
    }

    #[test]
    fn test_no_valid_samples() {
        let frame = DepthFrame::filled(64, 48, 0.0);
        assert_eq!(DepthProbe::default().measure(&frame).unwrap(), None);
    }

    #[test]
    fn test_mapping_is_clamped() {
        let frame = DepthFrame::filled(64, 48, 3.0);
        let reading = DepthProbe::default().measure(&frame).unwrap().unwrap();
        assert_relative_eq!(reading.mapped, 200.0);
        assert_eq!(reading.shade(), 255);
    }

    #[test]
    fn test_window_must_fit() {
        let frame = DepthFrame::filled(8, 8, 0.3);
        assert!(DepthProbe::default().measure(&frame).is_err());
        assert!(DepthProbe::new(4, 4).measure(&frame).unwrap().is_some());
    }

    #[test]
    fn test_shade() {
        let reading = ProbeReading {
            average_distance: 0.5,
            mapped: 0.0,
            valid_samples: 1,
            total_samples: 1,
        };
        assert_eq!(reading.shade(), 127);
    }
}
