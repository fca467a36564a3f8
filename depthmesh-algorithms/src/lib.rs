//! # depthmesh algorithms
//!
//! Per-frame transforms from a depth buffer to renderable geometry.
//!
//! The centre of the crate is [`GridMeshBuilder`], which samples a depth frame on a
//! regular grid, maps distances to an extruded depth, handles outliers (drop or
//! interpolate), and indexes the result as scan lines, a triangulated surface or
//! a distance-connected constellation. [`DepthProbe`] averages a window in the
//! middle of the frame for the physics toy.

pub mod mapping;
pub mod sampling;
pub mod smoothing;
pub mod indexing;
pub mod nearest_neighbor;
pub mod connect;
pub mod builder;
pub mod probe;

// Re-export commonly used items
pub use mapping::*;
pub use sampling::*;
pub use smoothing::*;
pub use indexing::*;
pub use nearest_neighbor::*;
pub use connect::*;
pub use builder::*;
pub use probe::*;
