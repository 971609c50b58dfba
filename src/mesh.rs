use crate::{
    error::{Error, Result},
    Vertex,
};

/// An indexed triangle list.
///
/// Every index is validated on construction, so iterating over the triangles of a mesh never goes out of bounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<[usize; 3]>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<[usize; 3]>) -> Result<Self> {
        let len = vertices.len();
        if let Some(&index) = indices.iter().flatten().find(|i| **i >= len) {
            return Err(Error::IndexOutOfBounds { index, len });
        }
        Ok(Self { vertices, indices })
    }

    /// Build a mesh from a flat index list, where every 3 consecutive indices form a triangle.
    pub fn from_flat_indices(vertices: Vec<Vertex>, indices: &[usize]) -> Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(Error::IncompleteTriangle { len: indices.len() });
        }
        let indices = indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
            .collect();
        Self::new(vertices, indices)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[[usize; 3]] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Iterate over the vertices of each triangle, in index order.
    pub fn triangles(&self) -> impl Iterator<Item = [&Vertex; 3]> + '_ {
        self.indices
            .iter()
            .map(move |&[a, b, c]| [&self.vertices[a], &self.vertices[b], &self.vertices[c]])
    }
}
