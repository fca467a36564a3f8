//! Point and vertex types

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// RGB color with 8 bits per channel
pub type Rgb = [u8; 3];

/// One reading taken from a depth frame at an integer grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthSample {
    pub x: usize,
    pub y: usize,
    /// Distance in meters, 0 or negative means no return
    pub raw_distance: f32,
}

impl DepthSample {
    pub fn new(x: usize, y: usize, raw_distance: f32) -> Self {
        Self { x, y, raw_distance }
    }

    /// Whether the sensor reported a return for this pixel
    pub fn has_return(&self) -> bool {
        self.raw_distance > 0.0
    }
}

/// A vertex whose z coordinate is the extruded (mapped) depth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MappedVertex {
    pub position: Point3f,
    pub color: Option<Rgb>,
}

impl MappedVertex {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Point3f::new(x, y, z),
            color: None,
        }
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    /// The mapped depth of this vertex
    pub fn z(&self) -> f32 {
        self.position.z
    }

    pub fn set_z(&mut self, z: f32) {
        self.position.z = z;
    }

    /// Euclidean distance between two vertex positions
    pub fn distance_to(&self, other: &MappedVertex) -> f32 {
        nalgebra::distance(&self.position, &other.position)
    }
}

impl Default for MappedVertex {
    fn default() -> Self {
        Self {
            position: Point3f::origin(),
            color: None,
        }
    }
}

impl From<MappedVertex> for Point3f {
    fn from(vertex: MappedVertex) -> Self {
        vertex.position
    }
}
