//! # depthmesh
//!
//! Turns live depth-camera frames into renderable point clouds, scan lines,
//! triangulated surfaces and distance-connected line meshes.
//!
//! This is the umbrella crate that provides convenient access to all depthmesh functionality.
//! You can use this crate to get everything in one place, or use individual crates for
//! more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Depth frames, mapped vertices, meshes and configuration
//! - **Algorithms**: Depth mapping, outlier smoothing, grid triangulation, connect-by-distance
//! - **I/O**: Synthetic, replayed and channel-fed depth sources
//! - **Visualization**: Frame loop, GPU buffers, live key controls and HUD text
//!
//! ## Quick Start
//!
//! ```rust
//! use depthmesh::prelude::*;
//! use std::time::Duration;
//!
//! fn main() -> depthmesh::Result<()> {
//!     let config = VisualizerConfig::triangle_mesh();
//!     let mut source = SyntheticDepthSource::new(848, 480, 0);
//!     source.start()?;
//!
//!     let frame = source.wait_for_frame(Duration::from_millis(100))?;
//!     let meshes = GridMeshBuilder::from_config(&config)?.build(&frame)?;
//!     assert_eq!(meshes.len(), 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables core, algorithms and io
//! - `algorithms`: Mesh building
//! - `io`: Depth sources
//! - `visualization`: Frame loop and controls
//! - `all`: Enables all features

// Re-export core functionality
pub use depthmesh_core::*;

// Re-export sub-crates
#[cfg(feature = "algorithms")]
pub use depthmesh_algorithms as algorithms;

#[cfg(feature = "io")]
pub use depthmesh_io as io;

#[cfg(feature = "visualization")]
pub use depthmesh_visualization as visualization;

/// Convenient imports for common use cases
pub mod prelude {
    pub use depthmesh_core::*;

    #[cfg(feature = "algorithms")]
    pub use depthmesh_algorithms::*;

    #[cfg(feature = "io")]
    pub use depthmesh_io::*;

    #[cfg(feature = "visualization")]
    pub use depthmesh_visualization::*;
}
