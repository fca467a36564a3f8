//! Index generation for grid meshes

use depthmesh_core::PrimitiveTopology;

/// One index per vertex, in build order
pub fn sequential_indices(vertex_count: usize) -> Vec<u32> {
    (0..vertex_count as u32).collect()
}

/// Build-order indices cut down to whole primitives of `topology`
///
/// Strips, fans and loops take every vertex; a trailing partial line or
/// triangle is left unindexed.
pub fn sequential_primitive_indices(vertex_count: usize, topology: PrimitiveTopology) -> Vec<u32> {
    let count = match topology.vertices_per_primitive() {
        Some(per) => vertex_count - vertex_count % per,
        None => vertex_count,
    };
    sequential_indices(count)
}

/// Two triangles per cell of a row-major vertex grid
///
/// `stride` is the number of vertices stored per row. Cells cover the first
/// `columns` x `rows` vertices, so with `columns < stride` the trailing
/// columns are sampled but never triangulated.
///
/// For the cell at `(x, y)` with `idx(x, y) = x + y * stride`:
/// - triangle A = `idx(x, y), idx(x + 1, y), idx(x, y + 1)`
/// - triangle B = `idx(x + 1, y), idx(x + 1, y + 1), idx(x, y + 1)`
pub fn grid_triangle_indices(stride: usize, columns: usize, rows: usize) -> Vec<u32> {
    let columns = columns.min(stride);
    let cells_x = columns.saturating_sub(1);
    let cells_y = rows.saturating_sub(1);
    let mut indices = Vec::with_capacity(cells_x * cells_y * 6);

    let idx = |x: usize, y: usize| (x + y * stride) as u32;

    for y in 0..cells_y {
        for x in 0..cells_x {
            indices.push(idx(x, y));
            indices.push(idx(x + 1, y));
            indices.push(idx(x, y + 1));

            indices.push(idx(x + 1, y));
            indices.push(idx(x + 1, y + 1));
            indices.push(idx(x, y + 1));
        }
    }

    indices
}
