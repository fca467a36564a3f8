//! HUD text and per-vertex labels

use depthmesh_core::{MappedVertex, Mesh, MeshLayout, Point3f, Vector3f, VisualizerConfig};

/// Offset of a label from the vertex it describes
const LABEL_OFFSET: f32 = 1.0;

/// One line per tunable, each naming the keys that change it
pub fn status_lines(config: &VisualizerConfig) -> Vec<String> {
    let mut lines = vec![
        format!("Point Density (m, n): {}", config.grid.step_size),
        format!("Min Raw Depth (p, o): {:.2}", config.range.min_raw_depth),
        format!("Max Raw Depth (l, k): {:.2}", config.range.max_raw_depth),
        format!("Outlier Filter (f): {}", config.filter_enabled),
        format!("Label Points (u): {}", config.label_points),
        format!("Primitive Mode (y): {}", config.topology),
    ];

    match config.layout {
        MeshLayout::Constellation => {
            lines.push(format!("Connect Distance (t, r): {}", config.connect_distance));
        }
        MeshLayout::Triangulated => {
            let [x, y, z] = config.spot_light;
            lines.push(format!("Spot Z (w, q): {}", z));
            lines.push(format!("Spot X (s, a): {}", x));
            lines.push(format!("Spot Y (x, z): {}", y));
        }
        MeshLayout::ScanLines | MeshLayout::Grid => {}
    }

    lines
}

/// `index:x,y,z`
pub fn vertex_label(index: usize, vertex: &MappedVertex) -> String {
    let p = vertex.position;
    format!("{}:{},{},{}", index, p.x, p.y, p.z)
}

/// A label and where to draw it
#[derive(Debug, Clone, PartialEq)]
pub struct PointLabel {
    pub anchor: Point3f,
    pub text: String,
}

/// Labels for every vertex of every mesh, empty unless `label_points` is set
///
/// Indices restart at zero for each mesh, matching the mesh's own index buffer.
pub fn point_labels(meshes: &[Mesh], config: &VisualizerConfig) -> Vec<PointLabel> {
    if !config.label_points {
        return Vec::new();
    }

    meshes
        .iter()
        .flat_map(|mesh| mesh.vertices.iter().enumerate())
        .map(|(i, vertex)| PointLabel {
            anchor: vertex.position + Vector3f::repeat(LABEL_OFFSET),
            text: vertex_label(i, vertex),
        })
        .collect()
}
