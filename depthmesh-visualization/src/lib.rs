//! Visualization side of depthmesh
//!
//! Runs the per-frame loop (acquire a frame, build meshes, draw), converts
//! meshes into GPU-ready buffers, and maps key presses onto live
//! configuration changes.

pub mod buffers;
pub mod controls;
pub mod frame_loop;
pub mod overlay;
pub mod renderer;

pub use buffers::*;
pub use controls::*;
pub use frame_loop::*;
pub use overlay::*;
pub use renderer::*;
