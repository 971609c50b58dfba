use core::{
    fmt::{self, Display, Formatter},
    ops::Add,
};

/// Counters accumulated by a [`Raster`](crate::Raster).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Triangles submitted.
    pub triangles_in: usize,
    /// Triangles dropped because a vertex was behind the camera.
    pub discarded: usize,
    /// Triangles dropped by the cull mode.
    pub culled: usize,
    /// Triangles dropped for having (almost) no area.
    pub degenerate: usize,
    /// Triangles that reached scan conversion.
    pub rasterized: usize,
    /// Fragments that reached the depth test.
    pub fragments_tested: usize,
    /// Fragments that passed the depth test and were shaded.
    pub fragments_written: usize,
}

impl Stats {
    /// The counts accumulated since `earlier` was taken. Counters that were reset in between saturate at zero.
    pub fn diff(&self, earlier: &Stats) -> Stats {
        Stats {
            triangles_in: self.triangles_in.saturating_sub(earlier.triangles_in),
            discarded: self.discarded.saturating_sub(earlier.discarded),
            culled: self.culled.saturating_sub(earlier.culled),
            degenerate: self.degenerate.saturating_sub(earlier.degenerate),
            rasterized: self.rasterized.saturating_sub(earlier.rasterized),
            fragments_tested: self.fragments_tested.saturating_sub(earlier.fragments_tested),
            fragments_written: self.fragments_written.saturating_sub(earlier.fragments_written),
        }
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(self, rhs: Stats) -> Stats {
        Stats {
            triangles_in: self.triangles_in + rhs.triangles_in,
            discarded: self.discarded + rhs.discarded,
            culled: self.culled + rhs.culled,
            degenerate: self.degenerate + rhs.degenerate,
            rasterized: self.rasterized + rhs.rasterized,
            fragments_tested: self.fragments_tested + rhs.fragments_tested,
            fragments_written: self.fragments_written + rhs.fragments_written,
        }
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tris {} in / {} drawn ({} discarded, {} culled, {} degenerate), frags {} tested / {} written",
            self.triangles_in,
            self.rasterized,
            self.discarded,
            self.culled,
            self.degenerate,
            self.fragments_tested,
            self.fragments_written,
        )
    }
}
