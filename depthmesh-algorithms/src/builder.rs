//! Per-frame mesh construction

use crate::connect::connect_by_distance;
use crate::indexing::{grid_triangle_indices, sequential_primitive_indices};
use crate::mapping::DepthMapper;
use crate::sampling::{sample_grid, SampledGrid};
use crate::smoothing::smooth_grid;
use depthmesh_core::{
    DepthFrame, DepthRangeConfig, Error, GridConfig, Mesh, MeshLayout, OutlierPolicy,
    PrimitiveTopology, Result, Rgb, VisualizerConfig,
};

/// Turns one depth frame into renderable meshes
///
/// A builder is cheap to create; the frame loop makes a fresh one from the
/// current [`VisualizerConfig`] at the start of every frame.
///
/// # Example
/// ```rust
/// use depthmesh_core::{DepthFrame, DepthRangeConfig, GridConfig, PrimitiveTopology};
/// use depthmesh_algorithms::GridMeshBuilder;
///
/// fn main() -> depthmesh_core::Result<()> {
///     let frame = DepthFrame::filled(40, 30, 1.0);
///     let builder = GridMeshBuilder::new(
///         GridConfig::new(40, 30, 10),
///         DepthRangeConfig::default(),
///         PrimitiveTopology::Points,
///     )?;
///
///     let mesh = builder.build_mesh(&frame)?;
///     assert_eq!(mesh.vertex_count(), 12);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GridMeshBuilder {
    grid: GridConfig,
    mapper: DepthMapper,
    topology: PrimitiveTopology,
    layout: MeshLayout,
    outlier_policy: OutlierPolicy,
    connect_distance: f32,
    vertex_color: Option<Rgb>,
}

impl GridMeshBuilder {
    /// Create a builder that keeps every sample and indexes the grid in build order
    pub fn new(grid: GridConfig, range: DepthRangeConfig, topology: PrimitiveTopology) -> Result<Self> {
        grid.validate()?;
        Ok(Self {
            grid,
            mapper: DepthMapper::new(range)?,
            topology,
            layout: MeshLayout::Grid,
            outlier_policy: OutlierPolicy::Keep,
            connect_distance: 50.0,
            vertex_color: None,
        })
    }

    /// Create a builder from the live configuration
    pub fn from_config(config: &VisualizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.grid, config.range, config.topology)?
            .with_layout(config.layout)
            .with_outlier_policy(config.effective_outlier_policy())
            .with_connect_distance(config.connect_distance)
            .with_vertex_color(config.vertex_color))
    }

    /// Set how sampled vertices are assembled into meshes
    pub fn with_layout(mut self, layout: MeshLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the treatment of out-of-range samples
    pub fn with_outlier_policy(mut self, policy: OutlierPolicy) -> Self {
        self.outlier_policy = policy;
        self
    }

    /// Set the longest line `Constellation` draws between two vertices
    pub fn with_connect_distance(mut self, distance: f32) -> Self {
        self.connect_distance = distance;
        self
    }

    /// Color every vertex; `None` leaves vertices uncolored
    pub fn with_vertex_color(mut self, color: Option<Rgb>) -> Self {
        self.vertex_color = color;
        self
    }

    /// The sampling grid this builder expects frames to match
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// The layout `build` dispatches on
    pub fn layout(&self) -> MeshLayout {
        self.layout
    }

    fn validate(&self) -> Result<()> {
        if self.layout == MeshLayout::Triangulated && self.outlier_policy == OutlierPolicy::Drop {
            return Err(Error::InvalidConfiguration(
                "dropping outliers leaves holes the grid triangulation cannot index".to_string(),
            ));
        }
        if self.layout == MeshLayout::Constellation
            && !(self.connect_distance.is_finite() && self.connect_distance >= 0.0)
        {
            return Err(Error::InvalidConfiguration(format!(
                "connect_distance must be a non-negative number, got {}",
                self.connect_distance
            )));
        }
        Ok(())
    }

    /// Sample the frame and apply the outlier policy
    fn sample(&self, frame: &DepthFrame) -> Result<SampledGrid> {
        self.validate()?;
        let mut sampled = sample_grid(frame, &self.grid, &self.mapper, self.vertex_color)?;
        let range = self.mapper.range();

        match self.outlier_policy {
            OutlierPolicy::Keep => {}
            OutlierPolicy::Drop => {
                let before = sampled.len();
                sampled.drop_outliers();
                log::trace!("dropped {} outliers", before - sampled.len());
            }
            OutlierPolicy::Smooth { edge_policy, scope } => {
                sampled.mark_outliers(range.outlier_sentinel());
                smooth_grid(&mut sampled, scope, edge_policy, range.max_mapped_depth);
            }
        }

        Ok(sampled)
    }

    /// Build the meshes for one frame according to the configured layout
    ///
    /// `ScanLines` yields one mesh per sampled row; every other layout yields
    /// exactly one mesh.
    pub fn build(&self, frame: &DepthFrame) -> Result<Vec<Mesh>> {
        match self.layout {
            MeshLayout::ScanLines => self.build_scan_lines(frame),
            _ => Ok(vec![self.build_mesh(frame)?]),
        }
    }

    /// Build one mesh holding every sampled vertex
    ///
    /// Indices follow the layout: two triangles per cell for `Triangulated`,
    /// distance-connected line pairs for `Constellation`, build order otherwise.
    pub fn build_mesh(&self, frame: &DepthFrame) -> Result<Mesh> {
        let sampled = self.sample(frame)?;
        let vertices = sampled.vertices;

        let mesh = match self.layout {
            MeshLayout::Triangulated => {
                let indices = grid_triangle_indices(
                    self.grid.sampled_columns(),
                    self.grid.triangulated_columns(),
                    self.grid.triangulated_rows(),
                );
                Mesh::from_parts(vertices, indices, self.topology)
            }
            MeshLayout::Constellation => {
                let indices = connect_by_distance(&vertices, self.connect_distance);
                Mesh::from_parts(vertices, indices, PrimitiveTopology::Lines)
            }
            MeshLayout::Grid | MeshLayout::ScanLines => {
                let indices = sequential_primitive_indices(vertices.len(), self.topology);
                Mesh::from_parts(vertices, indices, self.topology)
            }
        };

        log::debug!(
            "built {:?} mesh: {} vertices, {} indices",
            self.layout,
            mesh.vertex_count(),
            mesh.index_count()
        );
        Ok(mesh)
    }

    /// Build one mesh per sampled row, each indexed in build order up to the
    /// last whole primitive
    pub fn build_scan_lines(&self, frame: &DepthFrame) -> Result<Vec<Mesh>> {
        let sampled = self.sample(frame)?;

        let meshes: Vec<Mesh> = sampled
            .into_rows()
            .into_iter()
            .map(|vertices| {
                let indices = sequential_primitive_indices(vertices.len(), self.topology);
                Mesh::from_parts(vertices, indices, self.topology)
            })
            .collect();

        log::debug!("built {} scan lines", meshes.len());
        Ok(meshes)
    }
}
