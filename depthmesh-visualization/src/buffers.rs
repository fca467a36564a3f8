//! Upload-ready vertex and index buffers

use bytemuck::{Pod, Zeroable};
use depthmesh_core::{Mesh, Rgb};

/// Vertex layout handed to the GPU: position then RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl GpuVertex {
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// 8-bit RGB to normalized opaque RGBA
pub fn rgb_to_rgba(color: Rgb) -> [f32; 4] {
    [
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        1.0,
    ]
}

/// Convert a mesh into vertex and index buffers
///
/// Vertices without their own color take `default_color`.
pub fn to_gpu_buffers(mesh: &Mesh, default_color: [f32; 4]) -> (Vec<GpuVertex>, Vec<u32>) {
    let vertices = mesh
        .vertices
        .iter()
        .map(|vertex| {
            let p = vertex.position;
            let color = vertex.color.map(rgb_to_rgba).unwrap_or(default_color);
            GpuVertex::new([p.x, p.y, p.z], color)
        })
        .collect();

    (vertices, mesh.indices.clone())
}

/// Raw bytes of a vertex buffer, ready for a buffer upload
pub fn vertex_bytes(vertices: &[GpuVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
