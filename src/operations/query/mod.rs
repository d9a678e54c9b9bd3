mod nearest_vertex;

pub use nearest_vertex::VertexIndex;
