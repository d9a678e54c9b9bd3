use std::collections::BTreeSet;

use super::vertex::{VertexData, VertexId};

/// The polygon type of a board face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    Triangle,
    Pentagon,
}

impl FaceKind {
    /// Number of vertices, which is also the number of render cells the
    /// face is split into.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Triangle => 3,
            Self::Pentagon => 5,
        }
    }

    /// Lower-case name used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Triangle => "triangle",
            Self::Pentagon => "pentagon",
        }
    }
}

/// A polygon of the board mesh and the render cells that draw it.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Triangle or pentagon.
    pub kind: FaceKind,
    /// Ordered vertex identifiers.
    pub vertices: Vec<VertexId>,
    /// Indices of the renderer primitives belonging to this face.
    pub cells: Vec<usize>,
}

impl FaceData {
    /// Returns the single group shared by every vertex of this face, or
    /// `None` if the vertices span more than one group.
    ///
    /// `vertices` must be the topology's vertex table.
    #[must_use]
    pub fn monochrome_group(&self, vertices: &[VertexData]) -> Option<usize> {
        let groups: BTreeSet<usize> = self
            .vertices
            .iter()
            .map(|v| vertices[v.index()].group)
            .collect();
        if groups.len() == 1 {
            groups.first().copied()
        } else {
            None
        }
    }
}
