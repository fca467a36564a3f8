//! Mesh data structures and functionality

use crate::error::{Error, Result};
use crate::point::*;
use crate::topology::PrimitiveTopology;
use serde::{Deserialize, Serialize};

/// An indexed vertex buffer tagged with the topology the renderer should use
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<MappedVertex>,
    pub indices: Vec<u32>,
    pub topology: PrimitiveTopology,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new(topology: PrimitiveTopology) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            topology,
        }
    }

    /// Create a mesh from vertices and indices
    pub fn from_parts(
        vertices: Vec<MappedVertex>,
        indices: Vec<u32>,
        topology: PrimitiveTopology,
    ) -> Self {
        Self {
            vertices,
            indices,
            topology,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of indices
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check that every index references a vertex
    ///
    /// A trailing partial primitive is allowed; renderers ignore it.
    pub fn validate_indices(&self) -> Result<()> {
        let vertex_count = self.vertices.len();
        if let Some(&bad) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(Error::InvalidData(format!(
                "index {} out of range for {} vertices",
                bad, vertex_count
            )));
        }
        Ok(())
    }

    /// Check that every index references a vertex and that list topologies
    /// have a whole number of primitives
    pub fn validate(&self) -> Result<()> {
        self.validate_indices()?;

        if let Some(per) = self.topology.vertices_per_primitive() {
            if self.indices.len() % per != 0 {
                return Err(Error::InvalidData(format!(
                    "{} indices do not form whole {} primitives",
                    self.indices.len(),
                    self.topology
                )));
            }
        }

        Ok(())
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new(PrimitiveTopology::default())
    }
}
