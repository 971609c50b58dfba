//! The triangle rasterizer.
//!
//! [`Raster::triangle`] runs the vertex program over three vertices, projects them to the screen, culls them, scan
//! converts the result and runs the fragment program for every pixel that passes the depth test.

use crate::{
    config::RasterConfig, stats::Stats, DepthBuffer, FragmentProgram, RenderTarget, Vertex, VertexProgram,
};
use log::trace;
use vek::{Rgba, Vec2, Vec3, Vec4};


/// The signed edge function of `p` against the directed edge `a -> b`.
///
/// `edge(a, b, c)` is twice the signed area of the triangle `abc`. With screen coordinates (+y down) it is positive when
/// `abc` appears counter-clockwise on screen, which is the winding [`CullMode::Back`](crate::CullMode) keeps.
#[inline(always)]
pub fn edge(a: Vec2<f32>, b: Vec2<f32>, p: Vec2<f32>) -> f32 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

/// Compute the barycentric weights of `p` with respect to the triangle `abc`.
///
/// The weights sum to 1 and are all non-negative when `p` is inside the triangle. Returns `None` for triangles with no
/// (or non-finite) area, including areas so small that their reciprocal overflows.
#[inline]
pub fn barycentric(a: Vec2<f32>, b: Vec2<f32>, c: Vec2<f32>, p: Vec2<f32>) -> Option<Vec3<f32>> {
    let area = edge(a, b, c);
    let rec_area = 1.0 / area;
    if area != 0.0 && area.is_finite() && rec_area.is_finite() {
        Some(weights(a, b, c, p, rec_area))
    } else {
        None
    }
}

#[inline(always)]
fn weights(a: Vec2<f32>, b: Vec2<f32>, c: Vec2<f32>, p: Vec2<f32>, rec_area: f32) -> Vec3<f32> {
    Vec3::new(edge(b, c, p), edge(c, a, p), edge(a, b, p)) * rec_area
}

// Stable sort by ascending y
#[inline(always)]
fn ysort([mut a, mut b, mut c]: [Vec2<f32>; 3]) -> [Vec2<f32>; 3] {
    if b.y < a.y {
        core::mem::swap(&mut a, &mut b);
    }
    if c.y < b.y {
        core::mem::swap(&mut b, &mut c);
        if b.y < a.y {
            core::mem::swap(&mut a, &mut b);
        }
    }
    [a, b, c]
}

/// Find the x position of the edge `a -> b` at the given y, where `a.y <= y <= b.y`.
#[inline(always)]
fn solve_x(a: Vec2<f32>, b: Vec2<f32>, y: f32) -> f32 {
    let dy = b.y - a.y;
    if dy > 0.0 {
        let t = ((y - a.y) / dy).max(0.0).min(1.0);
        a.x + (b.x - a.x) * t
    } else {
        // Horizontal edge: the other end of the span comes from the opposite edge
        a.x
    }
}

/// The two x positions bounding a y-sorted triangle on scanline `y`: one on the long edge, one on whichever short edge
/// spans `y`.
#[inline(always)]
fn span([top, mid, bot]: [Vec2<f32>; 3], y: f32) -> (f32, f32) {
    let long = solve_x(top, bot, y);
    let short = if y < mid.y {
        solve_x(top, mid, y)
    } else {
        solve_x(mid, bot, y)
    };
    (long, short)
}

/// Scratch storage reused by every call to [`Raster::triangle`].
#[derive(Clone, Debug, Default)]
struct Registers {
    varying: [Vertex; 3],
    corrected: [Vertex; 3],
    position: [Vec4<f32>; 3],
    screen: [Vec2<f32>; 3],
    rec_w: [f32; 3],
    varying_out: Vertex,
    color: Rgba<f32>,
}

/// A triangle rasterizer.
///
/// The rasterizer owns the scratch registers used while drawing, so drawing requires exclusive (`&mut`) access. It
/// performs no clipping: a triangle with any vertex behind the camera is dropped entirely.
#[derive(Clone, Debug, Default)]
pub struct Raster {
    config: RasterConfig,
    stats: Stats,
    regs: Registers,
}

impl Raster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RasterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RasterConfig) {
        self.config = config;
    }

    /// The counters accumulated since creation or the last [`Raster::reset_stats`].
    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = Stats::default();
    }

    /// Draw a single triangle.
    ///
    /// `vertex_program` is run on `v0`, `v1` and `v2` to produce their clip-space positions and varyings. Pixels
    /// covered by the resulting triangle whose depth is closer than or equal to the depth already stored in `depth`
    /// are shaded with `fragment_program` and written to `target`.
    ///
    /// The depth stored for a fragment is its perspective-correct clip-space `w` (i.e: its distance along the view
    /// axis), so `depth` should be cleared to `f32::INFINITY` at the start of a frame.
    #[allow(clippy::too_many_arguments)]
    pub fn triangle<U, VP, FP, D, T>(
        &mut self,
        vertex_program: &VP,
        fragment_program: &FP,
        depth: &mut D,
        target: &mut T,
        uniform: &U,
        v0: &Vertex,
        v1: &Vertex,
        v2: &Vertex,
    ) where
        U: ?Sized,
        VP: VertexProgram<U> + ?Sized,
        FP: FragmentProgram<U> + ?Sized,
        D: DepthBuffer + ?Sized,
        T: RenderTarget + ?Sized,
    {
        let Self {
            config,
            stats,
            regs,
        } = self;

        stats.triangles_in += 1;

        let (width, height) = (target.width(), target.height());
        let size = Vec2::new(width as f32, height as f32);
        let half_scr = size * 0.5;

        // Vertex shading
        for (i, input) in [v0, v1, v2].iter().enumerate() {
            regs.varying[i] = Vertex::ZERO;
            regs.position[i] = Vec4::zero();
            vertex_program.main(uniform, input, &mut regs.varying[i], &mut regs.position[i]);
        }

        // No clipping: anything behind the camera takes the whole triangle with it
        if regs
            .position
            .iter()
            .any(|p| p.z < 0.0 || !(p.w > 0.0 && p.w.is_finite()))
        {
            trace!("Discarding triangle behind the camera: {:?}", regs.position);
            stats.discarded += 1;
            return;
        }

        // Project to screen space (+y down) and pre-divide the varyings
        for i in 0..3 {
            let p = regs.position[i];
            regs.screen[i] = Vec2::new(p.x / p.w, -p.y / p.w) * size + half_scr;
            regs.rec_w[i] = 1.0 / p.w;
            regs.varying[i].correct(p.w, &mut regs.corrected[i]);
        }

        let [a, b, c] = regs.screen;
        let area = edge(a, b, c);
        if !config.cull.accepts(area) {
            trace!("Culling triangle with signed area {}", area);
            stats.culled += 1;
            return;
        }
        if !area.is_finite() || area.abs() < config.min_area {
            trace!("Skipping degenerate triangle with signed area {}", area);
            stats.degenerate += 1;
            return;
        }
        stats.rasterized += 1;

        if width == 0 || height == 0 {
            return;
        }

        let rec_area = 1.0 / area;
        let rec_w = Vec3::from(regs.rec_w);
        let sorted = ysort(regs.screen);

        let y_min = sorted[0].y.ceil().max(0.0);
        let y_max = sorted[2].y.floor().min((height - 1) as f32);
        if !(y_min <= y_max) {
            return;
        }

        for y in y_min as usize..=y_max as usize {
            let yf = y as f32;
            let (x0, x1) = span(sorted, yf);
            let x_min = x0.min(x1).ceil().max(0.0);
            let x_max = x0.max(x1).floor().min((width - 1) as f32);
            if !(x_min <= x_max) {
                continue;
            }

            for x in x_min as usize..=x_max as usize {
                let bary = weights(a, b, c, Vec2::new(x as f32, yf), rec_area);

                // Interpolated reciprocal-w, and the perspective-correct depth it implies
                let rw = bary.dot(rec_w);
                if !(rw > 0.0 && rw.is_finite()) {
                    continue;
                }
                let z = 1.0 / rw;

                stats.fragments_tested += 1;
                // `NaN` fails this comparison, so it never reaches the depth buffer
                if !(z <= depth.get(x, y)) {
                    continue;
                }
                depth.set(x, y, z);

                let [ca, cb, cc] = &regs.corrected;
                Vertex::interpolate(ca, cb, cc, bary, rw, &mut regs.varying_out);

                regs.color = Rgba::zero();
                fragment_program.main(uniform, &regs.varying_out, &mut regs.color);
                target.set(x, y, regs.color);
                stats.fragments_written += 1;
            }
        }
    }
}
