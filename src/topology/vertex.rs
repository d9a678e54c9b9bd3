use std::fmt;

use crate::math::Point3;

/// Identifier of a playable vertex ("city"), dense in `0..N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Returns the raw index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// A playable board position at a fixed location on the polyhedron.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// The vertex identifier.
    pub id: VertexId,
    /// The 3D position of the vertex.
    pub point: Point3,
    /// The region this vertex belongs to (`id / group_size`).
    pub group: usize,
}

impl VertexData {
    /// Creates a vertex, deriving its group from the identifier.
    #[must_use]
    pub fn new(id: VertexId, point: Point3, group_size: usize) -> Self {
        Self {
            id,
            point,
            group: id.0 / group_size,
        }
    }
}
