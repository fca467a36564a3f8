//! Affine depth mapping

use depthmesh_core::{DepthRangeConfig, Result};

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Map `value` from `[in_min, in_max]` to `[out_min, out_max]`
///
/// With `clamp` set the result is limited to the output range, whichever way
/// round its bounds are given.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32, clamp: bool) -> f32 {
    let mapped = out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min);
    if clamp {
        let (lo, hi) = if out_min <= out_max {
            (out_min, out_max)
        } else {
            (out_max, out_min)
        };
        mapped.max(lo).min(hi)
    } else {
        mapped
    }
}

/// A classified sample: its stored depth and whether it is an outlier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappedDepth {
    pub value: f32,
    pub outlier: bool,
}

/// Maps raw distances in meters to extruded depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthMapper {
    range: DepthRangeConfig,
}

impl DepthMapper {
    /// Create a mapper, rejecting empty or non-finite ranges
    pub fn new(range: DepthRangeConfig) -> Result<Self> {
        range.validate()?;
        Ok(Self { range })
    }

    pub fn range(&self) -> &DepthRangeConfig {
        &self.range
    }

    /// Map without clamping
    pub fn map_unclamped(&self, raw: f32) -> f32 {
        let r = &self.range;
        map_range(
            raw,
            r.min_raw_depth,
            r.max_raw_depth,
            r.min_mapped_depth,
            r.max_mapped_depth,
            false,
        )
    }

    /// Map, clamping when the range asks for it
    pub fn map(&self, raw: f32) -> f32 {
        let mapped = self.map_unclamped(raw);
        if self.range.clamp_output {
            mapped
                .max(self.range.min_mapped_depth)
                .min(self.range.max_mapped_depth)
        } else {
            mapped
        }
    }

    /// Map a raw distance and flag it when the sensor had no return or the
    /// unclamped value falls outside the mapped range
    pub fn classify(&self, raw: f32) -> MappedDepth {
        let unclamped = self.map_unclamped(raw);
        let outlier = raw <= 0.0 || !self.range.contains_mapped(unclamped);
        MappedDepth {
            value: self.map(raw),
            outlier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mapper() -> DepthMapper {
        DepthMapper::new(DepthRangeConfig::new(0.1, 2.0, 1.0, 1000.0)).unwrap()
    }

    #[test]
    fn test_endpoints_map_to_output_bounds() {
        let m = mapper();
        assert_relative_eq!(m.map(0.1), 1.0);
        assert_relative_eq!(m.map(2.0), 1000.0, epsilon = 1e-3);
        assert_relative_eq!(m.map(1.05), 500.5, epsilon = 1e-3);
    }

    #[test]
    fn test_unclamped_overshoots() {
        let m = mapper();
        assert!(m.map(3.0) > 1000.0);
        assert!(m.map(0.0) < 1.0);
    }

    #[test]
    fn test_clamped_output() {
        let m = DepthMapper::new(DepthRangeConfig::new(0.1, 0.6, 20.0, 200.0).clamped()).unwrap();
        assert_relative_eq!(m.map(5.0), 200.0);
        assert_relative_eq!(m.map(0.0), 20.0);
    }

    #[test]
    fn test_classify_flags_no_return_even_when_clamped() {
        let m = DepthMapper::new(DepthRangeConfig::default().clamped()).unwrap();
        let sample = m.classify(0.0);
        assert!(sample.outlier);
        assert_relative_eq!(sample.value, 1.0);

        let sample = m.classify(1.0);
        assert!(!sample.outlier);
    }

    #[test]
    fn test_degenerate_range_rejected() {
        assert!(DepthMapper::new(DepthRangeConfig::new(1.0, 1.0, 1.0, 1000.0)).is_err());
        assert!(DepthMapper::new(DepthRangeConfig::new(0.1, 2.0, 5.0, 5.0)).is_err());
    }

    #[test]
    fn test_lerp_midpoint() {
        assert_relative_eq!(lerp(100.0, 200.0, 0.5), 150.0);
    }
}
