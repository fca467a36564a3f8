//! Primitive topology tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a renderer connects a vertex/index buffer into geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveTopology {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl PrimitiveTopology {
    /// Every topology, in cycling order
    pub const ALL: [PrimitiveTopology; 7] = [
        PrimitiveTopology::Points,
        PrimitiveTopology::Lines,
        PrimitiveTopology::LineStrip,
        PrimitiveTopology::LineLoop,
        PrimitiveTopology::Triangles,
        PrimitiveTopology::TriangleStrip,
        PrimitiveTopology::TriangleFan,
    ];

    /// Position of this topology in `ALL`
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&topology| topology == self)
            .unwrap_or(0)
    }

    /// The next topology, wrapping around after the last one
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Vertices consumed per primitive for list topologies, `None` for strips, fans and loops
    pub fn vertices_per_primitive(self) -> Option<usize> {
        match self {
            PrimitiveTopology::Points => Some(1),
            PrimitiveTopology::Lines => Some(2),
            PrimitiveTopology::Triangles => Some(3),
            PrimitiveTopology::LineStrip
            | PrimitiveTopology::LineLoop
            | PrimitiveTopology::TriangleStrip
            | PrimitiveTopology::TriangleFan => None,
        }
    }

    /// Display name used by the HUD
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveTopology::Points => "POINTS",
            PrimitiveTopology::Lines => "LINES",
            PrimitiveTopology::LineStrip => "LINE_STRIP",
            PrimitiveTopology::LineLoop => "LINE_LOOP",
            PrimitiveTopology::Triangles => "TRIANGLES",
            PrimitiveTopology::TriangleStrip => "TRIANGLE_STRIP",
            PrimitiveTopology::TriangleFan => "TRIANGLE_FAN",
        }
    }
}

impl Default for PrimitiveTopology {
    fn default() -> Self {
        PrimitiveTopology::Points
    }
}

impl fmt::Display for PrimitiveTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
