use thiserror::Error;

/// Top-level error type for the Polyclash client core.
#[derive(Debug, Error)]
pub enum PolyclashError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Message(#[from] MessageError),
}

/// Faults in the static board topology, detected when it is loaded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("topology has no vertices")]
    NoVertices,

    #[error("board radius must be positive")]
    NonPositiveRadius,

    #[error("group size must be positive")]
    ZeroGroupSize,

    #[error("vertex count {count} is not a multiple of group size {group_size}")]
    RaggedGroups { count: usize, group_size: usize },

    #[error("{kind} {face} references vertex {vertex}, but only {count} vertices exist")]
    VertexOutOfRange {
        kind: &'static str,
        face: usize,
        vertex: usize,
        count: usize,
    },

    #[error("{kind} {face} has {actual} vertices, expected {expected}")]
    FaceArity {
        kind: &'static str,
        face: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{kind} {face} repeats vertex {vertex}")]
    RepeatedVertex {
        kind: &'static str,
        face: usize,
        vertex: usize,
    },

    #[error("{kind} {face} maps to {actual} render cells, expected {expected}")]
    CellArity {
        kind: &'static str,
        face: usize,
        expected: usize,
        actual: usize,
    },

    #[error("{kind} count {faces} does not match cell map length {cell_maps}")]
    CellMapLength {
        kind: &'static str,
        faces: usize,
        cell_maps: usize,
    },

    #[error("{kind} {face} maps to render cell {cell}, but the mesh has {cell_count} cells")]
    CellOutOfRange {
        kind: &'static str,
        face: usize,
        cell: usize,
        cell_count: usize,
    },
}

/// Faults in the static client configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("palette has no color for vertex group {0}")]
    MissingGroupColor(usize),

    #[error("configured group size {configured} does not match board group size {board}")]
    GroupSizeMismatch { configured: usize, board: usize },
}

/// Errors decoding untyped messages from a board authority.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MessageError {
    #[error("unknown message kind: {0}")]
    UnknownKind(String),

    #[error("message {kind} is missing payload key {key}")]
    MissingPayload { kind: String, key: &'static str },
}

/// Convenience type alias for results using [`PolyclashError`].
pub type Result<T> = std::result::Result<T, PolyclashError>;
