//! Nearest neighbor search over mesh vertices

use depthmesh_core::{MappedVertex, NearestNeighborSearch, Point3f};

/// Simple brute force nearest neighbor search, fine for one frame of samples
pub struct BruteForceSearch {
    points: Vec<Point3f>,
}

impl BruteForceSearch {
    pub fn new(points: &[Point3f]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    /// Index the positions of `vertices`
    pub fn from_vertices(vertices: &[MappedVertex]) -> Self {
        Self {
            points: vertices.iter().map(|v| v.position).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn distance_squared(a: &Point3f, b: &Point3f) -> f32 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        let dz = a.z - b.z;
        dx * dx + dy * dy + dz * dz
    }
}

impl NearestNeighborSearch for BruteForceSearch {
    /// Neighbors with distance `<= radius`, in index order
    fn find_radius_neighbors(&self, query: &Point3f, radius: f32) -> Vec<(usize, f32)> {
        let radius_squared = radius * radius;
        self.points
            .iter()
            .enumerate()
            .filter_map(|(idx, point)| {
                let distance_squared = Self::distance_squared(point, query);
                if distance_squared <= radius_squared {
                    Some((idx, distance_squared.sqrt()))
                } else {
                    None
                }
            })
            .collect()
    }
}
