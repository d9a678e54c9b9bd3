use crate::math::Point3;
use crate::topology::{BoardTopology, VertexId};

/// Nearest-neighbor lookup over the fixed set of playable vertices.
///
/// A linear scan is used; boards have a few dozen vertices.
#[derive(Debug, Clone)]
pub struct VertexIndex {
    points: Vec<Point3>,
}

impl VertexIndex {
    /// Builds the index from a validated topology.
    #[must_use]
    pub fn new(topology: &BoardTopology) -> Self {
        Self {
            points: topology.vertices().iter().map(|v| v.point).collect(),
        }
    }

    /// Number of indexed vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for an index built from a [`BoardTopology`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the vertex closest to `point` by Euclidean distance.
    ///
    /// Ties resolve to the lowest identifier.
    #[must_use]
    pub fn nearest(&self, point: &Point3) -> VertexId {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (i, candidate) in self.points.iter().enumerate() {
            let d = (candidate - point).norm_squared();
            if d < best_dist {
                best_dist = d;
                best = i;
            }
        }
        VertexId(best)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::topology::TopologyTables;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn index_of(positions: Vec<Point3>) -> VertexIndex {
        let topo = BoardTopology::new(TopologyTables {
            positions,
            group_size: 1,
            ..TopologyTables::default()
        })
        .unwrap();
        VertexIndex::new(&topo)
    }

    fn octahedron() -> VertexIndex {
        index_of(vec![
            p(1.0, 0.0, 0.0),
            p(-1.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(0.0, -1.0, 0.0),
            p(0.0, 0.0, 1.0),
            p(0.0, 0.0, -1.0),
        ])
    }

    #[test]
    fn exact_positions_map_to_themselves() {
        let index = octahedron();
        for (i, point) in index.points.iter().enumerate() {
            assert_eq!(index.nearest(point), VertexId(i));
        }
    }

    #[test]
    fn near_miss_resolves_to_closest() {
        let index = octahedron();
        assert_eq!(index.nearest(&p(0.0, 0.0, 1.01)), VertexId(4));
        assert_eq!(index.nearest(&p(0.1, -0.9, 0.2)), VertexId(3));
    }

    #[test]
    fn repeated_queries_agree() {
        let index = octahedron();
        let q = p(0.3, 0.31, -0.2);
        assert_eq!(index.nearest(&q), index.nearest(&q));
    }

    #[test]
    fn ties_resolve_to_lowest_id() {
        let index = octahedron();
        // Equidistant from +X (0) and +Y (2).
        assert_eq!(index.nearest(&p(0.5, 0.5, 0.0)), VertexId(0));
        // Equidistant from every vertex.
        assert_eq!(index.nearest(&Point3::origin()), VertexId(0));
    }

    #[test]
    fn far_points_still_resolve() {
        let index = octahedron();
        assert_eq!(index.nearest(&p(0.0, 0.0, -100.0)), VertexId(5));
        assert_eq!(index.len(), 6);
        assert!(!index.is_empty());
    }
}
