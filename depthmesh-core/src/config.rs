//! Live configuration for the depth visualizers
//!
//! Every tunable is read once at the start of a frame build. Input handling
//! mutates [`VisualizerConfig`] between frames, never during a build.

use crate::error::{Error, Result};
use crate::point::Rgb;
use crate::topology::PrimitiveTopology;
use serde::{Deserialize, Serialize};

/// Orange used by the scan-line point cloud
pub const SCAN_LINE_COLOR: Rgb = [255, 165, 0];

/// Which pixels of a frame get sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub frame_width: usize,
    pub frame_height: usize,
    /// Distance in pixels between samples, at least 1
    pub step_size: usize,
    /// Pixels skipped along every frame edge
    pub buffer: usize,
}

impl GridConfig {
    pub fn new(frame_width: usize, frame_height: usize, step_size: usize) -> Self {
        Self {
            frame_width,
            frame_height,
            step_size,
            buffer: 0,
        }
    }

    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }

    fn extent(&self, dimension: usize) -> usize {
        dimension.saturating_sub(self.buffer.saturating_mul(2))
    }

    fn sample_count(&self, dimension: usize) -> usize {
        self.extent(dimension).div_ceil(self.step_size.max(1))
    }

    /// Sampled x coordinates: `buffer..width - buffer` stepping by `step_size`
    pub fn x_coords(&self) -> impl Iterator<Item = usize> {
        let (start, step) = (self.buffer, self.step_size.max(1));
        (0..self.sampled_columns()).map(move |i| start + i * step)
    }

    /// Sampled y coordinates: `buffer..height - buffer` stepping by `step_size`
    pub fn y_coords(&self) -> impl Iterator<Item = usize> {
        let (start, step) = (self.buffer, self.step_size.max(1));
        (0..self.sampled_rows()).map(move |i| start + i * step)
    }

    /// Number of samples per row
    pub fn sampled_columns(&self) -> usize {
        self.sample_count(self.frame_width)
    }

    /// Number of sampled rows
    pub fn sampled_rows(&self) -> usize {
        self.sample_count(self.frame_height)
    }

    /// Vertex columns covered by triangulation. A trailing partial column is left out.
    pub fn triangulated_columns(&self) -> usize {
        self.extent(self.frame_width) / self.step_size.max(1)
    }

    /// Vertex rows covered by triangulation. A trailing partial row is left out.
    pub fn triangulated_rows(&self) -> usize {
        self.extent(self.frame_height) / self.step_size.max(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.step_size < 1 {
            return Err(Error::InvalidConfiguration(
                "step_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(848, 480, 7)
    }
}

/// Input range in meters and output range of the extruded depth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthRangeConfig {
    pub min_raw_depth: f32,
    pub max_raw_depth: f32,
    pub min_mapped_depth: f32,
    pub max_mapped_depth: f32,
    /// Clamp mapped values into `[min_mapped_depth, max_mapped_depth]`
    pub clamp_output: bool,
}

impl DepthRangeConfig {
    pub fn new(
        min_raw_depth: f32,
        max_raw_depth: f32,
        min_mapped_depth: f32,
        max_mapped_depth: f32,
    ) -> Self {
        Self {
            min_raw_depth,
            max_raw_depth,
            min_mapped_depth,
            max_mapped_depth,
            clamp_output: false,
        }
    }

    pub fn clamped(mut self) -> Self {
        self.clamp_output = true;
        self
    }

    /// Whether a mapped value lies inside the output range (bounds included)
    pub fn contains_mapped(&self, mapped: f32) -> bool {
        mapped >= self.min_mapped_depth && mapped <= self.max_mapped_depth
    }

    /// Value written provisionally into an outlier before smoothing
    pub fn outlier_sentinel(&self) -> f32 {
        self.min_mapped_depth - 1.0
    }

    pub fn validate(&self) -> Result<()> {
        let values = [
            self.min_raw_depth,
            self.max_raw_depth,
            self.min_mapped_depth,
            self.max_mapped_depth,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidConfiguration(
                "depth ranges must be finite".to_string(),
            ));
        }
        if self.max_raw_depth <= self.min_raw_depth {
            return Err(Error::InvalidConfiguration(format!(
                "raw depth range is empty: min {} >= max {}",
                self.min_raw_depth, self.max_raw_depth
            )));
        }
        if self.max_mapped_depth <= self.min_mapped_depth {
            return Err(Error::InvalidConfiguration(format!(
                "mapped depth range is empty: min {} >= max {}",
                self.min_mapped_depth, self.max_mapped_depth
            )));
        }
        Ok(())
    }
}

impl Default for DepthRangeConfig {
    fn default() -> Self {
        Self::new(0.1, 2.0, 1.0, 1000.0)
    }
}

/// What an outlier resolves to when it sits at the end of its run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgePolicy {
    /// Copy the only available neighbor
    NearestNeighbor,
    /// Push the vertex to `max_mapped_depth`
    ClampToMax,
}

/// Which vertices count as neighbors during smoothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmoothingScope {
    /// Neighbors come from the same scan row
    Row,
    /// Neighbors follow the whole build order and may cross rows
    Grid,
}

/// How out-of-range samples are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutlierPolicy {
    /// Keep every sample with its mapped value
    Keep,
    /// Remove out-of-range samples from the mesh
    Drop,
    /// Keep every sample and interpolate outliers from their neighbors
    Smooth {
        edge_policy: EdgePolicy,
        scope: SmoothingScope,
    },
}

/// How sampled vertices are assembled into meshes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshLayout {
    /// One mesh per sampled row, indices in build order
    ScanLines,
    /// One mesh for the whole grid, indices in build order
    Grid,
    /// One mesh, two triangles per grid cell
    Triangulated,
    /// One mesh, a line between every pair of vertices closer than the connect distance
    Constellation,
}

/// The full set of live tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub grid: GridConfig,
    pub range: DepthRangeConfig,
    pub topology: PrimitiveTopology,
    pub layout: MeshLayout,
    /// Policy applied while `filter_enabled` is set
    pub outlier_policy: OutlierPolicy,
    pub filter_enabled: bool,
    pub connect_distance: f32,
    pub vertex_color: Option<Rgb>,
    pub label_points: bool,
    /// Spot light position (x, y, z) used by the renderer
    pub spot_light: [f32; 3],
}

impl VisualizerConfig {
    pub const MIN_CONNECT_DISTANCE: f32 = 5.0;

    /// Orange point cloud drawn one mesh per scan row
    pub fn scan_lines() -> Self {
        Self {
            grid: GridConfig::new(848, 480, 10),
            topology: PrimitiveTopology::Points,
            layout: MeshLayout::ScanLines,
            outlier_policy: OutlierPolicy::Drop,
            filter_enabled: false,
            vertex_color: Some(SCAN_LINE_COLOR),
            ..Self::triangle_mesh()
        }
    }

    /// Smoothed surface triangulated over the sampling grid
    pub fn triangle_mesh() -> Self {
        Self {
            grid: GridConfig::new(848, 480, 7),
            range: DepthRangeConfig::default(),
            topology: PrimitiveTopology::Triangles,
            layout: MeshLayout::Triangulated,
            outlier_policy: OutlierPolicy::Smooth {
                edge_policy: EdgePolicy::ClampToMax,
                scope: SmoothingScope::Grid,
            },
            filter_enabled: true,
            connect_distance: 50.0,
            vertex_color: None,
            label_points: false,
            spot_light: [100.0, -175.0, 100.0],
        }
    }

    /// Points joined by lines when closer than `connect_distance`
    pub fn constellation() -> Self {
        Self {
            grid: GridConfig::new(848, 480, 10),
            topology: PrimitiveTopology::Lines,
            layout: MeshLayout::Constellation,
            outlier_policy: OutlierPolicy::Drop,
            filter_enabled: true,
            ..Self::triangle_mesh()
        }
    }

    /// The policy the builder should apply this frame
    pub fn effective_outlier_policy(&self) -> OutlierPolicy {
        if self.filter_enabled {
            self.outlier_policy
        } else {
            OutlierPolicy::Keep
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.range.validate()?;

        if self.layout == MeshLayout::Constellation
            && !(self.connect_distance.is_finite() && self.connect_distance >= 0.0)
        {
            return Err(Error::InvalidConfiguration(format!(
                "connect_distance must be a non-negative number, got {}",
                self.connect_distance
            )));
        }

        if self.layout == MeshLayout::Triangulated
            && self.effective_outlier_policy() == OutlierPolicy::Drop
        {
            return Err(Error::InvalidConfiguration(
                "dropping outliers leaves holes the grid triangulation cannot index".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self::triangle_mesh()
    }
}
