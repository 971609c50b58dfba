use crate::{
    config::RasterConfig, mesh::Mesh, stats::Stats, DepthBuffer, FragmentProgram, Raster, RenderTarget,
    VertexProgram,
};
use log::{debug, warn};

/// Feeds the triangles of a [`Mesh`] through a [`Raster`].
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    raster: Raster,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RasterConfig) -> Self {
        Self {
            raster: Raster::with_config(config),
        }
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn raster_mut(&mut self) -> &mut Raster {
        &mut self.raster
    }

    /// Draw every triangle of `mesh`, in index order, returning the statistics of this draw alone.
    pub fn draw<U, VP, FP, D, T>(
        &mut self,
        vertex_program: &VP,
        fragment_program: &FP,
        depth: &mut D,
        target: &mut T,
        uniform: &U,
        mesh: &Mesh,
    ) -> Stats
    where
        U: ?Sized,
        VP: VertexProgram<U> + ?Sized,
        FP: FragmentProgram<U> + ?Sized,
        D: DepthBuffer + ?Sized,
        T: RenderTarget + ?Sized,
    {
        if target.width() == 0 || target.height() == 0 {
            warn!("Drawing {} triangles into an empty target", mesh.triangle_count());
        }

        let before = self.raster.stats();
        for [a, b, c] in mesh.triangles() {
            self.raster
                .triangle(vertex_program, fragment_program, depth, target, uniform, a, b, c);
        }
        let stats = self.raster.stats().diff(&before);

        debug!("Drew mesh: {}", stats);
        stats
    }
}
