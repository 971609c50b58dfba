use crate::{
    error::{Error, Result},
    target::{DepthBuffer, RenderTarget},
};
use core::fmt;
use vek::{Clamp, Rgba};

/// A 2-dimensional, row-major buffer.
///
/// This type may be used to contain colour data, depth data, or arbitrary pixel data.
#[derive(Clone, PartialEq)]
pub struct Buffer2d<T> {
    size: [usize; 2],
    items: Vec<T>,
}

impl<T: Clone> Buffer2d<T> {
    /// Create a new buffer with the given size, filled with duplicates of the given element.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or `width * height` overflows. See [`Buffer2d::try_new`] for a fallible
    /// version.
    pub fn new(size: [usize; 2], fill: T) -> Self {
        match Self::try_new(size, fill) {
            Ok(buf) => buf,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create a new buffer with the given size, failing if either dimension is zero or the item count overflows.
    pub fn try_new([width, height]: [usize; 2], fill: T) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .filter(|len| *len > 0)
            .ok_or(Error::InvalidSize { width, height })?;
        Ok(Self {
            size: [width, height],
            items: vec![fill; len],
        })
    }

    /// Overwrite every item with copies of the given element.
    pub fn fill(&mut self, item: T) {
        self.items.iter_mut().for_each(|e| *e = item.clone());
    }

    /// Get a copy of the item at the given location.
    ///
    /// # Panics
    ///
    /// Panics if the location is not within bounds.
    #[inline]
    pub fn get(&self, [x, y]: [usize; 2]) -> T {
        self.items[self.linear_index([x, y])].clone()
    }
}

impl<T> Buffer2d<T> {
    #[inline]
    pub fn size(&self) -> [usize; 2] {
        self.size
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.size[0]
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.size[1]
    }

    /// Convert the given location into an index into the raw data of this buffer.
    ///
    /// # Panics
    ///
    /// Panics if the location is not within bounds.
    #[inline]
    pub fn linear_index(&self, [x, y]: [usize; 2]) -> usize {
        let [width, height] = self.size;
        assert!(
            x < width && y < height,
            "Attempted to access buffer of size {:?} at out-of-bounds location {:?}",
            self.size,
            [x, y],
        );
        y * width + x
    }

    /// Replace the item at the given location.
    ///
    /// # Panics
    ///
    /// Panics if the location is not within bounds.
    #[inline]
    pub fn set(&mut self, pos: [usize; 2], item: T) {
        let idx = self.linear_index(pos);
        self.items[idx] = item;
    }

    /// Get a mutable reference to the item at the given location.
    ///
    /// # Panics
    ///
    /// Panics if the location is not within bounds.
    #[inline]
    pub fn get_mut(&mut self, pos: [usize; 2]) -> &mut T {
        let idx = self.linear_index(pos);
        &mut self.items[idx]
    }

    /// View this buffer as a linear slice of rows.
    #[inline]
    pub fn raw(&self) -> &[T] {
        &self.items
    }

    /// View this buffer as a linear mutable slice of rows.
    #[inline]
    pub fn raw_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl DepthBuffer for Buffer2d<f32> {
    #[inline(always)]
    fn get(&self, x: usize, y: usize) -> f32 {
        Buffer2d::get(self, [x, y])
    }

    #[inline(always)]
    fn set(&mut self, x: usize, y: usize, depth: f32) {
        Buffer2d::set(self, [x, y], depth)
    }

    fn clear(&mut self) {
        self.fill(f32::INFINITY);
    }
}

impl RenderTarget for Buffer2d<Rgba<f32>> {
    #[inline(always)]
    fn width(&self) -> usize {
        self.size[0]
    }

    #[inline(always)]
    fn height(&self) -> usize {
        self.size[1]
    }

    #[inline(always)]
    fn set(&mut self, x: usize, y: usize, color: Rgba<f32>) {
        Buffer2d::set(self, [x, y], color)
    }
}

/// Packed little-endian RGBA8, the layout most window framebuffers expect.
impl RenderTarget for Buffer2d<u32> {
    #[inline(always)]
    fn width(&self) -> usize {
        self.size[0]
    }

    #[inline(always)]
    fn height(&self) -> usize {
        self.size[1]
    }

    #[inline(always)]
    fn set(&mut self, x: usize, y: usize, color: Rgba<f32>) {
        Buffer2d::set(self, [x, y], pack_rgba8(color))
    }
}

/// Quantize a colour to 8 bits per channel and pack it as little-endian `[r, g, b, a]`.
#[inline(always)]
pub fn pack_rgba8(color: Rgba<f32>) -> u32 {
    let bytes = (color.clamped(Rgba::zero(), Rgba::one()) * 255.0)
        .map(|e| (e + 0.5) as u8)
        .into_array();
    u32::from_le_bytes(bytes)
}

#[cfg(feature = "image")]
impl Buffer2d<Rgba<f32>> {
    /// Quantize this buffer into an 8-bit RGBA image.
    pub fn to_image(&self) -> image::RgbaImage {
        let [width, height] = self.size;
        image::RgbaImage::from_fn(width as u32, height as u32, |x, y| {
            image::Rgba(pack_rgba8(self.get([x as usize, y as usize])).to_le_bytes())
        })
    }
}

impl<T> fmt::Debug for Buffer2d<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Buffer2d(dimensions: {:?})", self.size)
    }
}
