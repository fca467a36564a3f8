//! Outlier interpolation along the build order

use crate::mapping::lerp;
use crate::sampling::SampledGrid;
use depthmesh_core::{EdgePolicy, MappedVertex, SmoothingScope};

/// Interpolation weight between the previous and next neighbor
pub const SMOOTHING_FRACTION: f32 = 0.5;

/// Replace the depth of every flagged outlier in `vertices`, walking in order
///
/// An interior outlier takes the midpoint of its previous vertex (already
/// resolved by the walk) and the nearest following non-outlier. An outlier with
/// a neighbor on one side only follows `edge_policy`; one with no usable
/// neighbor at all takes `max_mapped_depth`.
///
/// Returns the number of vertices rewritten.
pub fn smooth_outliers(
    vertices: &mut [MappedVertex],
    outliers: &[bool],
    edge_policy: EdgePolicy,
    max_mapped_depth: f32,
) -> usize {
    debug_assert_eq!(vertices.len(), outliers.len());
    let mut resolved = 0;

    for i in 0..vertices.len() {
        if !outliers[i] {
            continue;
        }

        let prev = if i > 0 { Some(vertices[i - 1].z()) } else { None };
        let next = (i + 1..vertices.len())
            .find(|&j| !outliers[j])
            .map(|j| vertices[j].z());

        let z = match (prev, next) {
            (Some(prev), Some(next)) => lerp(prev, next, SMOOTHING_FRACTION),
            (Some(only), None) | (None, Some(only)) => match edge_policy {
                EdgePolicy::NearestNeighbor => only,
                EdgePolicy::ClampToMax => max_mapped_depth,
            },
            (None, None) => max_mapped_depth,
        };

        vertices[i].set_z(z);
        resolved += 1;
    }

    resolved
}

/// Smooth every outlier of a sampled grid, row by row or across the whole build order
pub fn smooth_grid(
    grid: &mut SampledGrid,
    scope: SmoothingScope,
    edge_policy: EdgePolicy,
    max_mapped_depth: f32,
) -> usize {
    if grid.outlier_count() == 0 {
        return 0;
    }

    let resolved = match scope {
        SmoothingScope::Grid => smooth_outliers(
            &mut grid.vertices,
            &grid.outliers,
            edge_policy,
            max_mapped_depth,
        ),
        SmoothingScope::Row => {
            let mut resolved = 0;
            for range in grid.row_ranges() {
                resolved += smooth_outliers(
                    &mut grid.vertices[range.clone()],
                    &grid.outliers[range],
                    edge_policy,
                    max_mapped_depth,
                );
            }
            resolved
        }
    };

    log::trace!("smoothed {} outliers ({:?} scope)", resolved, scope);
    resolved
}
