use vek::{Rgb, Rgba, Vec2, Vec3, Vec4};

/// A trait used to enable types to be interpolated throughout the rasterization process
pub trait Interpolate: Sized {
    /// Linearly scale two items of this type and sum them
    fn lerp2(a: &Self, b: &Self, x: f32, y: f32) -> Self;

    /// Linearly scale three items of this type and sum them
    fn lerp3(a: &Self, b: &Self, c: &Self, x: f32, y: f32, z: f32) -> Self;
}

// Default impls for types that support `Self * f32` and `Self + Self`
macro_rules! impl_interpolate_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl Interpolate for $t {
                #[inline(always)]
                fn lerp2(a: &Self, b: &Self, x: f32, y: f32) -> Self {
                    *a * x + *b * y
                }

                #[inline(always)]
                fn lerp3(a: &Self, b: &Self, c: &Self, x: f32, y: f32, z: f32) -> Self {
                    *a * x + *b * y + *c * z
                }
            }
        )*
    };
}

impl_interpolate_for!(
    f32,
    Vec2<f32>,
    Vec3<f32>,
    Vec4<f32>,
    Rgb<f32>,
    Rgba<f32>,
);

macro_rules! impl_interpolate_for_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Interpolate),+> Interpolate for ($($name,)+) {
            #[inline(always)]
            fn lerp2(a: &Self, b: &Self, x: f32, y: f32) -> Self {
                ($($name::lerp2(&a.$idx, &b.$idx, x, y),)+)
            }

            #[inline(always)]
            fn lerp3(a: &Self, b: &Self, c: &Self, x: f32, y: f32, z: f32) -> Self {
                ($($name::lerp3(&a.$idx, &b.$idx, &c.$idx, x, y, z),)+)
            }
        }
    };
}

impl_interpolate_for_tuple!(A: 0);
impl_interpolate_for_tuple!(A: 0, B: 1);
impl_interpolate_for_tuple!(A: 0, B: 1, C: 2);
impl_interpolate_for_tuple!(A: 0, B: 1, C: 2, D: 3);

impl Interpolate for () {
    #[inline(always)]
    fn lerp2(_: &Self, _: &Self, _: f32, _: f32) -> Self {}

    #[inline(always)]
    fn lerp3(_: &Self, _: &Self, _: &Self, _: f32, _: f32, _: f32) -> Self {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_weights() {
        assert_eq!(f32::lerp2(&2.0, &4.0, 0.5, 0.5), 3.0);
        assert_eq!(f32::lerp3(&1.0, &2.0, &3.0, 1.0, 0.0, 0.0), 1.0);
        assert_eq!(f32::lerp3(&1.0, &2.0, &3.0, 0.0, 0.0, 1.0), 3.0);
    }

    #[test]
    fn tuples_interpolate_per_element() {
        let a = (1.0f32, Vec2::new(0.0f32, 2.0));
        let b = (3.0f32, Vec2::new(2.0f32, 0.0));
        let (s, v) = <(f32, Vec2<f32>)>::lerp2(&a, &b, 0.5, 0.5);
        assert_eq!(s, 2.0);
        assert_eq!(v, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn unit_interpolates_to_unit() {
        let () = <()>::lerp2(&(), &(), 0.5, 0.5);
        let () = <()>::lerp3(&(), &(), &(), 0.2, 0.3, 0.5);
    }

    #[test]
    fn colors_interpolate() {
        let red = Rgba::new(1.0f32, 0.0, 0.0, 1.0);
        let blue = Rgba::new(0.0f32, 0.0, 1.0, 1.0);
        let mixed = Rgba::lerp2(&red, &blue, 0.25, 0.75);
        assert_eq!(mixed, Rgba::new(0.25, 0.0, 0.75, 1.0));
    }
}
