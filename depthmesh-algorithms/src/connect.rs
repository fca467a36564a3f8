//! Connect-by-distance line generation

use crate::nearest_neighbor::BruteForceSearch;
use depthmesh_core::{MappedVertex, NearestNeighborSearch};
use rayon::prelude::*;

/// Line index pairs `(a, b)` with `a < b` for every two vertices at most
/// `connect_distance` apart
///
/// Every pair is tested, so the cost grows with the square of the vertex
/// count. Pairs come out ordered by `a`, then by `b`.
///
/// # Example
/// ```rust
/// use depthmesh_core::MappedVertex;
/// use depthmesh_algorithms::connect_by_distance;
///
/// let vertices = vec![
///     MappedVertex::new(0.0, 0.0, 0.0),
///     MappedVertex::new(40.0, 0.0, 0.0),
///     MappedVertex::new(80.0, 0.0, 0.0),
/// ];
/// let indices = connect_by_distance(&vertices, 50.0);
/// assert_eq!(indices, vec![0, 1, 1, 2]);
/// ```
pub fn connect_by_distance(vertices: &[MappedVertex], connect_distance: f32) -> Vec<u32> {
    if vertices.len() < 2 {
        return Vec::new();
    }

    let search = BruteForceSearch::from_vertices(vertices);

    let per_vertex: Vec<Vec<u32>> = vertices
        .par_iter()
        .enumerate()
        .map(|(a, vertex)| {
            search
                .find_radius_neighbors(&vertex.position, connect_distance)
                .into_iter()
                .filter(|&(b, _)| b > a)
                .flat_map(|(b, _)| [a as u32, b as u32])
                .collect()
        })
        .collect();

    per_vertex.into_iter().flatten().collect()
}
