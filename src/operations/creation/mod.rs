mod make_icosahedron;

pub use make_icosahedron::{IcosahedronBoard, MakeIcosahedron};

use crate::math::Point3;

/// Triangle soup of the board's render cells; cell `i` is `indices[i]`.
#[derive(Debug, Clone, Default)]
pub struct RenderMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Triangle indices (each triple is one render cell).
    pub indices: Vec<[u32; 3]>,
}

impl RenderMesh {
    /// Number of render cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.indices.len()
    }

    /// Centroid of a render cell, as a picker reports it.
    #[must_use]
    pub fn cell_centroid(&self, cell: usize) -> Option<Point3> {
        let tri = self.indices.get(cell)?;
        let mut sum = Point3::origin().coords;
        for &i in tri {
            sum += self.vertices.get(i as usize)?.coords;
        }
        Some(Point3::from(sum / 3.0))
    }
}
