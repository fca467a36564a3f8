//! Headless renderers

use crate::buffers::{to_gpu_buffers, GpuVertex};
use depthmesh_core::{Drawable, Mesh, Renderer, Result};

/// Counts of one drawn frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawCounts {
    pub meshes: usize,
    pub vertices: usize,
    pub indices: usize,
}

impl DrawCounts {
    pub fn of(meshes: &[Mesh]) -> Self {
        Self {
            meshes: meshes.len(),
            vertices: meshes.iter().map(Mesh::vertex_count).sum(),
            indices: meshes.iter().map(Mesh::index_count).sum(),
        }
    }
}

/// Logs what it would draw and keeps running totals
#[derive(Debug, Default)]
pub struct MeshStatsRenderer {
    pub frames_drawn: usize,
    pub last: DrawCounts,
    pub total_vertices: usize,
}

impl MeshStatsRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for MeshStatsRenderer {
    fn draw(&mut self, meshes: &[Mesh]) -> Result<()> {
        let counts = DrawCounts::of(meshes);
        self.frames_drawn += 1;
        self.total_vertices += counts.vertices;
        self.last = counts;

        log::info!(
            "frame {}: {} meshes, {} vertices, {} indices",
            self.frames_drawn,
            counts.meshes,
            counts.vertices,
            counts.indices
        );
        for mesh in meshes.iter().filter(|m| !m.is_empty()) {
            let (min, max) = mesh.bounding_box();
            log::trace!("{} bounds {:?} .. {:?}", mesh.topology, min, max);
        }
        Ok(())
    }
}

/// Keeps the meshes of the last drawn frame and their GPU buffers
#[derive(Debug)]
pub struct RecordingRenderer {
    default_color: [f32; 4],
    meshes: Vec<Mesh>,
    buffers: Vec<(Vec<GpuVertex>, Vec<u32>)>,
    frames_drawn: usize,
}

impl RecordingRenderer {
    pub fn new(default_color: [f32; 4]) -> Self {
        Self {
            default_color,
            meshes: Vec::new(),
            buffers: Vec::new(),
            frames_drawn: 0,
        }
    }

    pub fn last_frame(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Buffers of the last frame, one pair per mesh
    pub fn last_buffers(&self) -> &[(Vec<GpuVertex>, Vec<u32>)] {
        &self.buffers
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new([1.0, 1.0, 1.0, 1.0])
    }
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, meshes: &[Mesh]) -> Result<()> {
        for mesh in meshes {
            mesh.validate()?;
        }
        self.buffers = meshes
            .iter()
            .map(|mesh| to_gpu_buffers(mesh, self.default_color))
            .collect();
        self.meshes = meshes.to_vec();
        self.frames_drawn += 1;
        Ok(())
    }
}
