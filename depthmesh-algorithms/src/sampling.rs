//! Grid sampling of a depth frame

use crate::mapping::DepthMapper;
use depthmesh_core::{DepthFrame, GridConfig, MappedVertex, Point3f, Result, Rgb};
use std::ops::Range;

/// Vertices sampled from one frame in build order (y outer, x inner),
/// with an outlier flag per vertex and the vertex range of every row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledGrid {
    pub vertices: Vec<MappedVertex>,
    pub outliers: Vec<bool>,
    row_starts: Vec<usize>,
}

impl SampledGrid {
    /// Build from rows of `(vertex, outlier)` pairs
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (MappedVertex, bool)>,
    {
        let mut grid = SampledGrid::default();
        for row in rows {
            grid.row_starts.push(grid.vertices.len());
            for (vertex, outlier) in row {
                grid.vertices.push(vertex);
                grid.outliers.push(outlier);
            }
        }
        grid
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.row_starts.len()
    }

    /// Vertex index range of every row
    pub fn row_ranges(&self) -> Vec<Range<usize>> {
        self.row_starts
            .iter()
            .enumerate()
            .map(|(row, &start)| {
                let end = self
                    .row_starts
                    .get(row + 1)
                    .copied()
                    .unwrap_or(self.vertices.len());
                start..end
            })
            .collect()
    }

    pub fn outlier_count(&self) -> usize {
        self.outliers.iter().filter(|&&o| o).count()
    }

    /// Remove every outlier, keeping row boundaries
    pub fn drop_outliers(&mut self) {
        let ranges = self.row_ranges();
        let mut vertices = Vec::with_capacity(self.vertices.len());
        let mut row_starts = Vec::with_capacity(ranges.len());

        for range in ranges {
            row_starts.push(vertices.len());
            for i in range {
                if !self.outliers[i] {
                    vertices.push(self.vertices[i]);
                }
            }
        }

        self.outliers = vec![false; vertices.len()];
        self.vertices = vertices;
        self.row_starts = row_starts;
    }

    /// Write `sentinel` into the depth of every outlier
    pub fn mark_outliers(&mut self, sentinel: f32) {
        for (vertex, &outlier) in self.vertices.iter_mut().zip(&self.outliers) {
            if outlier {
                vertex.set_z(sentinel);
            }
        }
    }

    /// Split into one vertex list per row
    pub fn into_rows(self) -> Vec<Vec<MappedVertex>> {
        let ranges = self.row_ranges();
        ranges
            .into_iter()
            .map(|range| self.vertices[range].to_vec())
            .collect()
    }
}

/// Sample `frame` on the grid described by `grid` and map every distance
///
/// Fails with `FrameSizeMismatch` before reading anything when the frame is not
/// the size the grid expects.
pub fn sample_grid(
    frame: &DepthFrame,
    grid: &GridConfig,
    mapper: &DepthMapper,
    color: Option<Rgb>,
) -> Result<SampledGrid> {
    grid.validate()?;
    frame.ensure_dimensions(grid.frame_width, grid.frame_height)?;

    let rows = grid.y_coords().map(|y| {
        grid.x_coords().map(move |x| {
            let depth = mapper.classify(frame.distance_at(x, y));
            let vertex = MappedVertex {
                position: Point3f::new(x as f32, y as f32, depth.value),
                color,
            };
            (vertex, depth.outlier)
        })
    });

    Ok(SampledGrid::from_rows(rows))
}
