//! Acquire, build, draw

use depthmesh_algorithms::GridMeshBuilder;
use depthmesh_core::{DepthSource, Renderer, Result, VisualizerConfig};
use std::time::Duration;

/// Default wait for the next frame
pub const DEFAULT_FRAME_TIMEOUT: Duration = Duration::from_millis(500);

/// What one successful frame produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// Zero-based count of frames drawn before this one
    pub frame_index: u64,
    pub mesh_count: usize,
    pub vertex_count: usize,
    pub index_count: usize,
}

/// Drives one source into one renderer
///
/// The configuration is passed to every [`FrameLoop::step`], so key presses
/// applied between steps take effect on the next frame.
pub struct FrameLoop<S: DepthSource, R: Renderer> {
    source: S,
    renderer: R,
    timeout: Duration,
    frames_drawn: u64,
}

impl<S: DepthSource, R: Renderer> FrameLoop<S, R> {
    pub fn new(source: S, renderer: R) -> Self {
        Self {
            source,
            renderer,
            timeout: DEFAULT_FRAME_TIMEOUT,
            frames_drawn: 0,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Start the underlying source
    pub fn start(&mut self) -> Result<()> {
        self.source.start()
    }

    /// Run one frame
    ///
    /// Nothing reaches the renderer unless the frame was acquired and every
    /// mesh built; on error the frame counter does not advance.
    pub fn step(&mut self, config: &VisualizerConfig) -> Result<FrameStats> {
        let builder = GridMeshBuilder::from_config(config)?;
        let frame = self.source.wait_for_frame(self.timeout)?;
        let meshes = builder.build(&frame)?;
        self.renderer.draw(&meshes)?;

        let stats = FrameStats {
            frame_index: self.frames_drawn,
            mesh_count: meshes.len(),
            vertex_count: meshes.iter().map(|m| m.vertex_count()).sum(),
            index_count: meshes.iter().map(|m| m.index_count()).sum(),
        };
        self.frames_drawn += 1;

        log::trace!("{:?}", stats);
        Ok(stats)
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_parts(self) -> (S, R) {
        (self.source, self.renderer)
    }
}
