//! The shader program contracts invoked by [`Raster`](crate::Raster).
//!
//! Both programs receive the same uniform value by reference. The rasterizer never inspects their internals: a program
//! that forgets to write one of its outputs simply leaves the zeroed register in place.

use crate::Vertex;
use vek::{Rgba, Vec4};

/// A program executed once per triangle vertex.
pub trait VertexProgram<U: ?Sized> {
    /// Transform `input` into a clip-space `position` and the `varying` attributes to be interpolated across the
    /// triangle.
    fn main(&self, uniform: &U, input: &Vertex, varying: &mut Vertex, position: &mut Vec4<f32>);
}

/// A program executed once for every fragment that passes the depth test.
pub trait FragmentProgram<U: ?Sized> {
    /// Compute the `color` of a fragment from its perspective-correct interpolated `varying`.
    fn main(&self, uniform: &U, varying: &Vertex, color: &mut Rgba<f32>);
}

impl<U, F> VertexProgram<U> for F
where
    U: ?Sized,
    F: Fn(&U, &Vertex, &mut Vertex, &mut Vec4<f32>),
{
    #[inline(always)]
    fn main(&self, uniform: &U, input: &Vertex, varying: &mut Vertex, position: &mut Vec4<f32>) {
        self(uniform, input, varying, position)
    }
}

impl<U, F> FragmentProgram<U> for F
where
    U: ?Sized,
    F: Fn(&U, &Vertex, &mut Rgba<f32>),
{
    #[inline(always)]
    fn main(&self, uniform: &U, varying: &Vertex, color: &mut Rgba<f32>) {
        self(uniform, varying, color)
    }
}

/// A vertex program that treats the input position as already being in clip space and passes every attribute through
/// unchanged.
#[derive(Copy, Clone, Debug, Default)]
pub struct PassThrough;

impl<U: ?Sized> VertexProgram<U> for PassThrough {
    #[inline(always)]
    fn main(&self, _: &U, input: &Vertex, varying: &mut Vertex, position: &mut Vec4<f32>) {
        *varying = *input;
        *position = input.position;
    }
}

/// A fragment program that writes a single color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Solid(pub Rgba<f32>);

impl<U: ?Sized> FragmentProgram<U> for Solid {
    #[inline(always)]
    fn main(&self, _: &U, _: &Vertex, color: &mut Rgba<f32>) {
        *color = self.0;
    }
}
