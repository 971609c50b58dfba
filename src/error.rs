use thiserror::Error;

/// Result type for fallible construction APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building buffers and meshes.
///
/// Rasterization itself never fails: numeric edge cases degrade to "nothing drawn".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid buffer size: {width}x{height}")]
    InvalidSize { width: usize, height: usize },

    #[error("Vertex index {index} is out of bounds (mesh has {len} vertices)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Index list of length {len} does not describe whole triangles")]
    IncompleteTriangle { len: usize },
}
