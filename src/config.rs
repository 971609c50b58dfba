/// Which triangle windings the rasterizer discards.
///
/// Winding is measured on the screen-space positions in submission order using [`edge`](crate::raster::edge). A
/// non-negative signed area marks a front face.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CullMode {
    /// Draw both front and back faces.
    None,
    /// Discard back faces (negative signed area).
    Back,
    /// Discard front faces (positive signed area).
    Front,
}

impl CullMode {
    /// Determine whether a triangle with the given signed screen-space area survives culling.
    #[inline(always)]
    pub fn accepts(&self, area: f32) -> bool {
        match self {
            CullMode::None => true,
            CullMode::Back => area >= 0.0,
            CullMode::Front => area <= 0.0,
        }
    }
}

impl Default for CullMode {
    fn default() -> Self {
        CullMode::Back
    }
}

/// Configuration of a [`Raster`](crate::Raster).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RasterConfig {
    pub cull: CullMode,
    /// Triangles whose signed screen-space area has a smaller magnitude than this are treated as degenerate and draw
    /// nothing.
    pub min_area: f32,
}

impl RasterConfig {
    pub fn with_cull(self, cull: CullMode) -> Self {
        Self { cull, ..self }
    }

    pub fn with_min_area(self, min_area: f32) -> Self {
        Self { min_area, ..self }
    }
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            cull: CullMode::default(),
            min_area: f32::EPSILON,
        }
    }
}
