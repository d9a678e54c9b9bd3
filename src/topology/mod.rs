pub mod face;
pub mod vertex;

pub use face::{FaceData, FaceKind};
pub use vertex::{VertexData, VertexId};

use std::collections::BTreeSet;

use crate::error::TopologyError;
use crate::math::Point3;

/// Raw topology tables as shipped with the board mesh asset.
///
/// Faces are listed as vertex-index tuples; `triangle_cells[i]` and
/// `pentagon_cells[i]` hold the render-cell indices of the i-th face.
#[derive(Debug, Clone, Default)]
pub struct TopologyTables {
    /// Vertex positions, indexed by vertex identifier.
    pub positions: Vec<Point3>,
    /// Number of consecutive vertex identifiers per group.
    pub group_size: usize,
    /// Triangular faces.
    pub triangles: Vec<Vec<usize>>,
    /// Pentagonal faces.
    pub pentagons: Vec<Vec<usize>>,
    /// Render cells of each triangle.
    pub triangle_cells: Vec<Vec<usize>>,
    /// Render cells of each pentagon.
    pub pentagon_cells: Vec<Vec<usize>>,
    /// Total number of render cells in the mesh.
    pub cell_count: usize,
}

/// Validated, immutable board topology.
///
/// Construction checks every table reference, so code holding a
/// `BoardTopology` may index vertices and cells without further checks.
#[derive(Debug, Clone)]
pub struct BoardTopology {
    vertices: Vec<VertexData>,
    faces: Vec<FaceData>,
    group_size: usize,
    cell_count: usize,
}

impl BoardTopology {
    /// Builds a topology from raw tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex set is empty, the group size is zero
    /// or does not divide the vertex count, or any face has the wrong
    /// arity, references a missing vertex, repeats a vertex, or maps to a
    /// missing render cell.
    pub fn new(tables: TopologyTables) -> Result<Self, TopologyError> {
        let TopologyTables {
            positions,
            group_size,
            triangles,
            pentagons,
            triangle_cells,
            pentagon_cells,
            cell_count,
        } = tables;

        if positions.is_empty() {
            return Err(TopologyError::NoVertices);
        }
        if group_size == 0 {
            return Err(TopologyError::ZeroGroupSize);
        }
        if positions.len() % group_size != 0 {
            return Err(TopologyError::RaggedGroups {
                count: positions.len(),
                group_size,
            });
        }

        let vertices: Vec<VertexData> = positions
            .into_iter()
            .enumerate()
            .map(|(i, point)| VertexData::new(VertexId(i), point, group_size))
            .collect();

        let mut faces = Vec::with_capacity(triangles.len() + pentagons.len());
        for (kind, polygons, cells) in [
            (FaceKind::Triangle, triangles, triangle_cells),
            (FaceKind::Pentagon, pentagons, pentagon_cells),
        ] {
            if polygons.len() != cells.len() {
                return Err(TopologyError::CellMapLength {
                    kind: kind.name(),
                    faces: polygons.len(),
                    cell_maps: cells.len(),
                });
            }
            for (i, (polygon, cells)) in polygons.into_iter().zip(cells).enumerate() {
                faces.push(build_face(kind, i, polygon, cells, vertices.len(), cell_count)?);
            }
        }

        tracing::debug!(
            vertices = vertices.len(),
            faces = faces.len(),
            cells = cell_count,
            "board topology loaded"
        );

        Ok(Self {
            vertices,
            faces,
            group_size,
            cell_count,
        })
    }

    /// All vertices, indexed by identifier.
    #[must_use]
    pub fn vertices(&self) -> &[VertexData] {
        &self.vertices
    }

    /// Returns the vertex with the given identifier, if it exists.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&VertexData> {
        self.vertices.get(id.index())
    }

    /// Returns `true` if `id` names a vertex of this board.
    #[must_use]
    pub fn contains(&self, id: VertexId) -> bool {
        id.index() < self.vertices.len()
    }

    /// All faces: triangles first, then pentagons.
    #[must_use]
    pub fn faces(&self) -> &[FaceData] {
        &self.faces
    }

    /// Faces of the given kind, in table order.
    pub fn faces_of(&self, kind: FaceKind) -> impl Iterator<Item = &FaceData> {
        self.faces.iter().filter(move |f| f.kind == kind)
    }

    /// Number of consecutive vertex identifiers per group.
    #[must_use]
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Number of vertex groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.vertices.len() / self.group_size
    }

    /// Total number of render cells in the mesh.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }
}

fn build_face(
    kind: FaceKind,
    face: usize,
    polygon: Vec<usize>,
    cells: Vec<usize>,
    vertex_count: usize,
    cell_count: usize,
) -> Result<FaceData, TopologyError> {
    let name = kind.name();
    let expected = kind.arity();

    if polygon.len() != expected {
        return Err(TopologyError::FaceArity {
            kind: name,
            face,
            expected,
            actual: polygon.len(),
        });
    }
    if cells.len() != expected {
        return Err(TopologyError::CellArity {
            kind: name,
            face,
            expected,
            actual: cells.len(),
        });
    }

    let mut seen = BTreeSet::new();
    for &vertex in &polygon {
        if vertex >= vertex_count {
            return Err(TopologyError::VertexOutOfRange {
                kind: name,
                face,
                vertex,
                count: vertex_count,
            });
        }
        if !seen.insert(vertex) {
            return Err(TopologyError::RepeatedVertex {
                kind: name,
                face,
                vertex,
            });
        }
    }
    if let Some(&cell) = cells.iter().find(|&&c| c >= cell_count) {
        return Err(TopologyError::CellOutOfRange {
            kind: name,
            face,
            cell,
            cell_count,
        });
    }

    Ok(FaceData {
        kind,
        vertices: polygon.into_iter().map(VertexId).collect(),
        cells,
    })
}
