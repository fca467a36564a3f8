//! Core data structures and traits for depthmesh
//!
//! This crate provides the fundamental types shared by every depthmesh crate:
//! depth frames, mapped vertices, meshes with a primitive topology, the live
//! visualizer configuration, and the traits connecting a depth source to a renderer.

pub mod point;
pub mod frame;
pub mod topology;
pub mod mesh;
pub mod config;
pub mod traits;
pub mod error;

pub use point::*;
pub use frame::*;
pub use topology::*;
pub use mesh::*;
pub use config::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};
