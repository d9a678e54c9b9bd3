use crate::error::{Result, TopologyError};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{BoardTopology, TopologyTables};

use super::RenderMesh;

/// A playable icosahedral board and the render cells that draw it.
#[derive(Debug, Clone)]
pub struct IcosahedronBoard {
    pub topology: BoardTopology,
    pub mesh: RenderMesh,
}

/// Creates a 12-vertex icosahedral board centered at the origin.
///
/// Each of the 20 triangular faces is fanned around its centroid into 3
/// render cells, so face `f` owns cells `3f..3f + 3`.
pub struct MakeIcosahedron {
    radius: f64,
    group_size: usize,
}

impl MakeIcosahedron {
    /// Creates a new `MakeIcosahedron` operation.
    #[must_use]
    pub fn new(radius: f64, group_size: usize) -> Self {
        Self { radius, group_size }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is near zero or `group_size` does
    /// not partition the 12 vertices.
    pub fn execute(&self) -> Result<IcosahedronBoard> {
        if self.radius < TOLERANCE {
            return Err(TopologyError::NonPositiveRadius.into());
        }

        let positions = self.positions();
        let triangles = faces(&positions);

        let mut mesh = RenderMesh {
            vertices: positions.clone(),
            indices: Vec::with_capacity(triangles.len() * 3),
        };
        let mut triangle_cells = Vec::with_capacity(triangles.len());
        for tri in &triangles {
            let centroid = Point3::from(
                (positions[tri[0]].coords + positions[tri[1]].coords + positions[tri[2]].coords)
                    / 3.0,
            );
            let c = to_u32(mesh.vertices.len());
            mesh.vertices.push(centroid);

            let mut cells = Vec::with_capacity(3);
            for k in 0..3 {
                cells.push(mesh.indices.len());
                mesh.indices.push([to_u32(tri[k]), to_u32(tri[(k + 1) % 3]), c]);
            }
            triangle_cells.push(cells);
        }

        let topology = BoardTopology::new(TopologyTables {
            positions,
            group_size: self.group_size,
            cell_count: mesh.cell_count(),
            triangles: triangles.iter().map(|t| t.to_vec()).collect(),
            triangle_cells,
            pentagons: Vec::new(),
            pentagon_cells: Vec::new(),
        })?;

        Ok(IcosahedronBoard { topology, mesh })
    }

    fn positions(&self) -> Vec<Point3> {
        let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
        let mut points = Vec::with_capacity(12);
        for a in [-1.0, 1.0] {
            for b in [-phi, phi] {
                points.push(Point3::new(0.0, a, b));
                points.push(Point3::new(a, b, 0.0));
                points.push(Point3::new(b, 0.0, a));
            }
        }
        points
            .into_iter()
            .map(|p| Point3::from(p.coords.normalize() * self.radius))
            .collect()
    }
}

/// Finds the 20 faces as vertex triples at mutual edge distance, wound
/// counter-clockwise when seen from outside.
fn faces(positions: &[Point3]) -> Vec<[usize; 3]> {
    let edge = positions
        .iter()
        .skip(1)
        .map(|p| (p - positions[0]).norm())
        .fold(f64::INFINITY, f64::min);
    let adjacent =
        |i: usize, j: usize| ((positions[i] - positions[j]).norm() - edge).abs() < 1e-6 * edge;

    let n = positions.len();
    let mut result = Vec::with_capacity(20);
    for i in 0..n {
        for j in (i + 1)..n {
            if !adjacent(i, j) {
                continue;
            }
            for k in (j + 1)..n {
                if adjacent(i, k) && adjacent(j, k) {
                    let normal = (positions[j] - positions[i]).cross(&(positions[k] - positions[i]));
                    if normal.dot(&positions[i].coords) >= 0.0 {
                        result.push([i, j, k]);
                    } else {
                        result.push([i, k, j]);
                    }
                }
            }
        }
    }
    result
}

fn to_u32(i: usize) -> u32 {
    u32::try_from(i).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn icosahedron_has_12_vertices_and_20_faces() {
        let board = MakeIcosahedron::new(1.0, 3).execute().unwrap();
        assert_eq!(board.topology.vertices().len(), 12);
        assert_eq!(board.topology.faces().len(), 20);
        assert_eq!(board.topology.cell_count(), 60);
        assert_eq!(board.topology.group_count(), 4);
    }

    #[test]
    fn vertices_lie_on_sphere() {
        let board = MakeIcosahedron::new(2.5, 3).execute().unwrap();
        for v in board.topology.vertices() {
            assert_relative_eq!(v.point.coords.norm(), 2.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn every_vertex_touches_five_faces() {
        let board = MakeIcosahedron::new(1.0, 3).execute().unwrap();
        let mut degree = [0usize; 12];
        for face in board.topology.faces() {
            for v in &face.vertices {
                degree[v.index()] += 1;
            }
        }
        assert!(degree.iter().all(|&d| d == 5));
    }

    #[test]
    fn faces_wind_outward() {
        let board = MakeIcosahedron::new(1.0, 3).execute().unwrap();
        let verts = board.topology.vertices();
        for face in board.topology.faces() {
            let [a, b, c] = [0, 1, 2].map(|k| verts[face.vertices[k].index()].point);
            let normal = (b - a).cross(&(c - a));
            assert!(normal.dot(&a.coords) > 0.0);
        }
    }

    #[test]
    fn cell_centroids_sit_inside_their_face() {
        let board = MakeIcosahedron::new(1.0, 3).execute().unwrap();
        for (f, face) in board.topology.faces().iter().enumerate() {
            assert_eq!(face.cells, vec![3 * f, 3 * f + 1, 3 * f + 2]);
            for &cell in &face.cells {
                let c = board.mesh.cell_centroid(cell).unwrap();
                assert!(c.coords.norm() < 1.0);
            }
        }
        assert!(board.mesh.cell_centroid(60).is_none());
    }

    #[test]
    fn zero_radius_fails() {
        assert!(MakeIcosahedron::new(0.0, 3).execute().is_err());
    }

    #[test]
    fn group_size_must_partition_vertices() {
        assert!(MakeIcosahedron::new(1.0, 5).execute().is_err());
    }
}
