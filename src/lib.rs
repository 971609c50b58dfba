//! A software triangle rasterizer that lets you write shaders with Rust.
//!
//! Triangles are submitted to a [`Raster`] together with a [`VertexProgram`] and a [`FragmentProgram`]. The rasterizer
//! projects them from homogeneous clip space, culls back faces, fills them scanline by scanline and shades every
//! pixel that passes the depth test with perspective-correct varyings.

#[cfg(feature = "image")]
extern crate image_ as image;

pub mod buffer;
pub mod config;
pub mod error;
pub mod interpolate;
pub mod mesh;
pub mod program;
pub mod raster;
pub mod render;
pub mod stats;
pub mod target;
pub mod vertex;

// Reexports
pub use self::{
    buffer::Buffer2d,
    config::{CullMode, RasterConfig},
    error::{Error, Result},
    interpolate::Interpolate,
    mesh::Mesh,
    program::{FragmentProgram, VertexProgram},
    raster::Raster,
    render::Renderer,
    stats::Stats,
    target::{DepthBuffer, NoDepth, RenderTarget},
    vertex::Vertex,
};
