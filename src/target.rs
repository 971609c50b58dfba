use vek::Rgba;

/// A per-pixel store of the closest depth seen so far.
///
/// The rasterizer only reads and writes locations within the bounds of the [`RenderTarget`] it draws into, so a depth
/// buffer must be at least as large as the render target it is paired with.
pub trait DepthBuffer {
    /// Get the depth stored at the given location.
    fn get(&self, x: usize, y: usize) -> f32;

    /// Store a depth at the given location.
    fn set(&mut self, x: usize, y: usize, depth: f32);

    /// Reset every location to a depth that any fragment will pass against (`f32::INFINITY`).
    fn clear(&mut self);
}

/// A 2-dimensional surface that fragment colors are written to.
pub trait RenderTarget {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Write a color to the given location. The location is always within `width() x height()`.
    fn set(&mut self, x: usize, y: usize, color: Rgba<f32>);
}

impl<T: DepthBuffer + ?Sized> DepthBuffer for &mut T {
    #[inline(always)]
    fn get(&self, x: usize, y: usize) -> f32 {
        T::get(self, x, y)
    }
    #[inline(always)]
    fn set(&mut self, x: usize, y: usize, depth: f32) {
        T::set(self, x, y, depth)
    }
    #[inline(always)]
    fn clear(&mut self) {
        T::clear(self)
    }
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    #[inline(always)]
    fn width(&self) -> usize {
        T::width(self)
    }
    #[inline(always)]
    fn height(&self) -> usize {
        T::height(self)
    }
    #[inline(always)]
    fn set(&mut self, x: usize, y: usize, color: Rgba<f32>) {
        T::set(self, x, y, color)
    }
}

/// A depth buffer that stores nothing and lets every fragment through.
///
/// Useful when drawing geometry that does not need hidden surface removal.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDepth;

impl DepthBuffer for NoDepth {
    #[inline(always)]
    fn get(&self, _: usize, _: usize) -> f32 {
        f32::INFINITY
    }
    #[inline(always)]
    fn set(&mut self, _: usize, _: usize, _: f32) {}
    #[inline(always)]
    fn clear(&mut self) {}
}
