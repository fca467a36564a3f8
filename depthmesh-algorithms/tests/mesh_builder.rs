//! Integration tests for the grid mesh builder
//!
//! These exercise the builder end to end on synthetic frames, covering every
//! layout and outlier policy together.

use depthmesh_algorithms::*;
use depthmesh_core::{
    DepthFrame, DepthRangeConfig, EdgePolicy, Error, GridConfig, MeshLayout, OutlierPolicy,
    PrimitiveTopology, SmoothingScope, VisualizerConfig,
};
use proptest::prelude::*;

/// A 848x480 frame with a bowl in the middle and a band of dropouts
fn realsense_like_frame() -> DepthFrame {
    DepthFrame::from_fn(848, 480, |x, y| {
        if (200..210).contains(&y) {
            return 0.0;
        }
        let dx = x as f32 - 424.0;
        let dy = y as f32 - 240.0;
        0.6 + (dx * dx + dy * dy).sqrt() / 600.0
    })
}

fn smooth(edge_policy: EdgePolicy, scope: SmoothingScope) -> OutlierPolicy {
    OutlierPolicy::Smooth { edge_policy, scope }
}

#[test]
fn test_realsense_grid_dimensions() {
    let frame = realsense_like_frame();
    let builder = GridMeshBuilder::new(
        GridConfig::new(848, 480, 10),
        DepthRangeConfig::default(),
        PrimitiveTopology::Points,
    )
    .unwrap()
    .with_layout(MeshLayout::ScanLines);

    let meshes = builder.build(&frame).unwrap();
    assert_eq!(meshes.len(), 48);
    assert!(meshes.iter().all(|m| m.vertex_count() == 85));
}

#[test]
fn test_triangulated_mesh_is_valid() {
    let frame = realsense_like_frame();
    let config = VisualizerConfig::triangle_mesh();
    let builder = GridMeshBuilder::from_config(&config).unwrap();
    let meshes = builder.build(&frame).unwrap();
    assert_eq!(meshes.len(), 1);

    let mesh = &meshes[0];
    let grid = config.grid;
    assert_eq!(mesh.vertex_count(), grid.sampled_columns() * grid.sampled_rows());
    assert_eq!(
        mesh.index_count(),
        (grid.triangulated_columns() - 1) * (grid.triangulated_rows() - 1) * 6
    );
    assert!(mesh.validate().is_ok());

    // every dropout was smoothed into the mapped range
    let range = config.range;
    for vertex in &mesh.vertices {
        assert!(vertex.z() >= range.min_mapped_depth - 1e-3);
        assert!(vertex.z() <= range.max_mapped_depth + 1e-3);
    }
}

#[test]
fn test_smoothing_without_outliers_is_noop() {
    let frame = DepthFrame::from_fn(30, 20, |x, y| 0.5 + 0.01 * (x + y) as f32);
    let base = GridMeshBuilder::new(
        GridConfig::new(30, 20, 3),
        DepthRangeConfig::default(),
        PrimitiveTopology::Triangles,
    )
    .unwrap();

    let plain = base.clone().build_mesh(&frame).unwrap();
    for policy in [
        smooth(EdgePolicy::NearestNeighbor, SmoothingScope::Row),
        smooth(EdgePolicy::ClampToMax, SmoothingScope::Grid),
    ] {
        let smoothed = base.clone().with_outlier_policy(policy).build_mesh(&frame).unwrap();
        assert_eq!(plain, smoothed);
    }
}

#[test]
fn test_midpoint_through_builder() {
    // raw 0.1 -> 100, raw 0.2 -> 200 with range 0..1 m -> 0..1000
    let frame = DepthFrame::new(3, 1, vec![0.1, 0.0, 0.2]).unwrap();
    let mesh = GridMeshBuilder::new(
        GridConfig::new(3, 1, 1),
        DepthRangeConfig::new(0.0, 1.0, 0.0, 1000.0),
        PrimitiveTopology::LineStrip,
    )
    .unwrap()
    .with_outlier_policy(smooth(EdgePolicy::NearestNeighbor, SmoothingScope::Row))
    .build_mesh(&frame)
    .unwrap();

    let zs: Vec<f32> = mesh.vertices.iter().map(|v| v.z().round()).collect();
    assert_eq!(zs, vec![100.0, 150.0, 200.0]);
}

#[test]
fn test_edge_clamp_through_builder() {
    let frame = DepthFrame::new(2, 1, vec![0.0, 0.05]).unwrap();
    let mesh = GridMeshBuilder::new(
        GridConfig::new(2, 1, 1),
        DepthRangeConfig::new(0.0, 1.0, 0.0, 1000.0),
        PrimitiveTopology::Points,
    )
    .unwrap()
    .with_outlier_policy(smooth(EdgePolicy::ClampToMax, SmoothingScope::Row))
    .build_mesh(&frame)
    .unwrap();

    assert_eq!(mesh.vertices[0].z(), 1000.0);
    assert!((mesh.vertices[1].z() - 50.0).abs() < 1e-3);
}

#[test]
fn test_dropped_outlier_row() {
    let frame = DepthFrame::new(5, 1, vec![0.5, 0.0, 0.7, 9.0, 0.9]).unwrap();
    let mut config = VisualizerConfig::scan_lines();
    config.grid = GridConfig::new(5, 1, 1);
    config.filter_enabled = true;

    let meshes = GridMeshBuilder::from_config(&config).unwrap().build(&frame).unwrap();
    assert_eq!(meshes.len(), 1);
    assert_eq!(meshes[0].vertex_count(), 3);
    assert_eq!(meshes[0].indices, vec![0, 1, 2]);
    assert!(meshes[0].vertices.iter().all(|v| v.color == Some([255, 165, 0])));
}

#[test]
fn test_size_mismatch_is_reported() {
    let frame = DepthFrame::filled(640, 480, 1.0);
    let builder = GridMeshBuilder::from_config(&VisualizerConfig::default()).unwrap();
    assert!(matches!(
        builder.build(&frame),
        Err(Error::FrameSizeMismatch { expected: (848, 480), actual: (640, 480) })
    ));
}

#[test]
fn test_degenerate_range_is_reported() {
    let mut config = VisualizerConfig::default();
    config.range.min_raw_depth = 2.5;
    assert!(matches!(
        GridMeshBuilder::from_config(&config),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn test_huge_step_samples_the_corner() {
    let frame = realsense_like_frame();
    let mut config = VisualizerConfig::triangle_mesh();
    config.grid.step_size = usize::MAX;
    let meshes = GridMeshBuilder::from_config(&config).unwrap().build(&frame).unwrap();
    assert_eq!(meshes[0].vertex_count(), 1);
    assert!(meshes[0].indices.is_empty());

    config.grid.step_size = 1;
    config.grid.buffer = usize::MAX;
    let meshes = GridMeshBuilder::from_config(&config).unwrap().build(&frame).unwrap();
    assert!(meshes[0].is_empty());
}

#[test]
fn test_constellation_lines_are_short() {
    let frame = realsense_like_frame();
    let mut config = VisualizerConfig::constellation();
    config.grid = GridConfig::new(848, 480, 40);
    let meshes = GridMeshBuilder::from_config(&config).unwrap().build(&frame).unwrap();
    let mesh = &meshes[0];

    assert_eq!(mesh.topology, PrimitiveTopology::Lines);
    assert!(mesh.validate().is_ok());
    for pair in mesh.indices.chunks(2) {
        let a = &mesh.vertices[pair[0] as usize];
        let b = &mesh.vertices[pair[1] as usize];
        assert!(pair[0] < pair[1]);
        assert!(a.distance_to(b) <= config.connect_distance);
    }
}

proptest! {
    #[test]
    fn mapping_is_monotonic(
        min_raw in 0.0f32..5.0,
        raw_span in 0.05f32..5.0,
        min_mapped in -500.0f32..500.0,
        mapped_span in 1.0f32..2000.0,
        a in 0.0f32..10.0,
        delta in 0.01f32..5.0,
    ) {
        let mapper = DepthMapper::new(DepthRangeConfig::new(
            min_raw,
            min_raw + raw_span,
            min_mapped,
            min_mapped + mapped_span,
        )).unwrap();
        prop_assert!(mapper.map(a) < mapper.map(a + delta));
    }

    #[test]
    fn every_layout_yields_valid_meshes(
        width in 1usize..60,
        height in 1usize..40,
        step in 1usize..8,
        dropout_every in 2usize..9,
        layout_index in 0usize..4,
    ) {
        let layouts = [
            MeshLayout::ScanLines,
            MeshLayout::Grid,
            MeshLayout::Triangulated,
            MeshLayout::Constellation,
        ];
        let frame = DepthFrame::from_fn(width, height, |x, y| {
            if (x + y) % dropout_every == 0 { 0.0 } else { 0.5 + 0.001 * x as f32 }
        });
        let builder = GridMeshBuilder::new(
            GridConfig::new(width, height, step),
            DepthRangeConfig::default(),
            PrimitiveTopology::Triangles,
        )
        .unwrap()
        .with_layout(layouts[layout_index])
        .with_outlier_policy(smooth(EdgePolicy::NearestNeighbor, SmoothingScope::Grid))
        .with_connect_distance(15.0);

        for mesh in builder.build(&frame).unwrap() {
            prop_assert!(mesh.validate().is_ok());
        }
    }
}
