//! Core traits for depthmesh

use crate::{error::Result, frame::DepthFrame, mesh::Mesh, point::*};
use std::time::Duration;

/// A camera (or stand-in) that yields depth frames on demand
pub trait DepthSource {
    /// Start the capture session. Calling it again on a running source is a no-op.
    fn start(&mut self) -> Result<()>;

    /// Block until the next frame arrives or `timeout` elapses
    fn wait_for_frame(&mut self, timeout: Duration) -> Result<DepthFrame>;
}

impl<S: DepthSource + ?Sized> DepthSource for Box<S> {
    fn start(&mut self) -> Result<()> {
        (**self).start()
    }

    fn wait_for_frame(&mut self, timeout: Duration) -> Result<DepthFrame> {
        (**self).wait_for_frame(timeout)
    }
}

/// Consumer of the meshes produced for one frame
pub trait Renderer {
    /// Draw every mesh of the current frame
    fn draw(&mut self, meshes: &[Mesh]) -> Result<()>;
}

/// Trait for nearest neighbor search functionality
pub trait NearestNeighborSearch {
    /// Find all neighbors within a given radius
    fn find_radius_neighbors(&self, query: &Point3f, radius: f32) -> Vec<(usize, f32)>;
}

/// Trait for drawable/renderable objects
pub trait Drawable {
    /// Get the bounding box of the object
    fn bounding_box(&self) -> (Point3f, Point3f);

    /// Get the center point of the object
    fn center(&self) -> Point3f;
}

impl Drawable for Mesh {
    fn bounding_box(&self) -> (Point3f, Point3f) {
        if self.vertices.is_empty() {
            return (Point3f::origin(), Point3f::origin());
        }

        let mut min = self.vertices[0].position;
        let mut max = self.vertices[0].position;

        for vertex in &self.vertices {
            let p = vertex.position;
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);

            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        (min, max)
    }

    fn center(&self) -> Point3f {
        let (min, max) = self.bounding_box();
        Point3f::new(
            (min.x + max.x) / 2.0,
            (min.y + max.y) / 2.0,
            (min.z + max.z) / 2.0,
        )
    }
}
