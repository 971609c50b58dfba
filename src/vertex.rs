use crate::Interpolate;
use vek::{Vec2, Vec3, Vec4};

/// A bundle of per-vertex attributes.
///
/// The same type is used for the vertices submitted to the rasterizer, for the varyings produced by a
/// [`VertexProgram`](crate::VertexProgram) and for the interpolated varyings handed to a
/// [`FragmentProgram`](crate::FragmentProgram).
///
/// A vertex is either in *raw* form (as submitted, or as written by a vertex program) or in *corrected* form (every
/// component divided by the clip-space `w` of its vertex, see [`Vertex::correct`]). Only vertices of the same form may
/// be interpolated together.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub position: Vec4<f32>,
    pub normal: Vec3<f32>,
    pub uv: Vec2<f32>,
}

impl Vertex {
    /// A vertex with every attribute set to zero.
    pub const ZERO: Self = Self {
        position: Vec4 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 0.0,
        },
        normal: Vec3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        },
        uv: Vec2 { x: 0.0, y: 0.0 },
    };

    /// Create a zero-initialized vertex.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub fn new(position: Vec4<f32>, normal: Vec3<f32>, uv: Vec2<f32>) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Create a vertex at the given point (`w = 1`) with no normal or texture coordinate.
    #[inline]
    pub fn from_position(position: Vec3<f32>) -> Self {
        Self {
            position: Vec4::from_point(position),
            ..Self::ZERO
        }
    }

    #[inline]
    pub fn with_normal(self, normal: Vec3<f32>) -> Self {
        Self { normal, ..self }
    }

    #[inline]
    pub fn with_uv(self, uv: Vec2<f32>) -> Self {
        Self { uv, ..self }
    }

    /// Divide every attribute of this vertex by `w`, writing the result into `out`.
    ///
    /// This produces the *corrected* form of a varying, which may be linearly interpolated in screen space.
    #[inline(always)]
    pub fn correct(&self, w: f32, out: &mut Self) {
        let rw = 1.0 / w;
        out.position = self.position * rw;
        out.normal = self.normal * rw;
        out.uv = self.uv * rw;
    }

    /// Blend three *corrected* vertices with the barycentric `weights` and divide by `w`, writing the result into
    /// `out`.
    ///
    /// `w` is the barycentric-interpolated reciprocal-w of the pixel being shaded (not the `w` of any one vertex).
    /// Dividing by it recovers perspective-correct attribute values from the screen-linear blend.
    #[inline(always)]
    pub fn interpolate(a: &Self, b: &Self, c: &Self, weights: Vec3<f32>, w: f32, out: &mut Self) {
        let rw = 1.0 / w;
        *out = Self::lerp3(a, b, c, weights.x * rw, weights.y * rw, weights.z * rw);
    }
}

impl Interpolate for Vertex {
    #[inline(always)]
    fn lerp2(a: &Self, b: &Self, x: f32, y: f32) -> Self {
        Self {
            position: Vec4::lerp2(&a.position, &b.position, x, y),
            normal: Vec3::lerp2(&a.normal, &b.normal, x, y),
            uv: Vec2::lerp2(&a.uv, &b.uv, x, y),
        }
    }

    #[inline(always)]
    fn lerp3(a: &Self, b: &Self, c: &Self, x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec4::lerp3(&a.position, &b.position, &c.position, x, y, z),
            normal: Vec3::lerp3(&a.normal, &b.normal, &c.normal, x, y, z),
            uv: Vec2::lerp3(&a.uv, &b.uv, &c.uv, x, y, z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vertex {
        Vertex::new(
            Vec4::new(2.0, 4.0, 6.0, 2.0),
            Vec3::new(0.0, 2.0, 0.0),
            Vec2::new(1.0, 0.5),
        )
    }

    #[test]
    fn zero_is_default() {
        assert_eq!(Vertex::zero(), Vertex::default());
    }

    #[test]
    fn correct_divides_every_component() {
        let mut out = Vertex::zero();
        sample().correct(2.0, &mut out);
        assert_eq!(out.position, Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(out.normal, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(out.uv, Vec2::new(0.5, 0.25));
    }

    #[test]
    fn interpolate_at_a_corner_undoes_correction() {
        let v = sample();
        let w = v.position.w;
        let mut corrected = Vertex::zero();
        v.correct(w, &mut corrected);

        let other = Vertex::from_position(Vec3::new(9.0, 9.0, 9.0));
        let mut out = Vertex::zero();
        Vertex::interpolate(
            &corrected,
            &other,
            &other,
            Vec3::new(1.0, 0.0, 0.0),
            1.0 / w,
            &mut out,
        );
        assert_eq!(out, v);
    }

    #[test]
    fn lerp2_blends_every_field() {
        let a = Vertex::new(Vec4::new(0.0, 0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0), Vec2::new(0.0, 1.0));
        let b = Vertex::new(Vec4::new(2.0, 4.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.0), Vec2::new(1.0, 0.0));
        let mid = Vertex::lerp2(&a, &b, 0.5, 0.5);
        assert_eq!(mid.position, Vec4::new(1.0, 2.0, 0.0, 1.0));
        assert_eq!(mid.normal, Vec3::new(0.5, 0.0, 0.5));
        assert_eq!(mid.uv, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn interpolate_with_unit_w_is_a_weighted_sum() {
        let a = Vertex::zero().with_uv(Vec2::new(0.0, 0.0));
        let b = Vertex::zero().with_uv(Vec2::new(1.0, 0.0));
        let c = Vertex::zero().with_uv(Vec2::new(0.0, 1.0));
        let mut out = Vertex::zero();
        Vertex::interpolate(&a, &b, &c, Vec3::new(0.5, 0.25, 0.25), 1.0, &mut out);
        assert_eq!(out.uv, Vec2::new(0.25, 0.25));
    }
}
