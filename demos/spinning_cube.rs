use scanraster::{Buffer2d, CullMode, DepthBuffer, Mesh, RasterConfig, Renderer, Vertex, VertexProgram};
use vek::*;

struct Cube {
    mvp: Mat4<f32>,
}

/// Carries the vertex colour through the normal slot.
struct ColorVertex;

impl VertexProgram<Cube> for ColorVertex {
    #[inline(always)]
    fn main(&self, cube: &Cube, input: &Vertex, varying: &mut Vertex, position: &mut Vec4<f32>) {
        *position = cube.mvp * input.position;
        varying.normal = input.normal;
    }
}

const R: Vec3<f32> = Vec3::new(1.0, 0.0, 0.0);
const Y: Vec3<f32> = Vec3::new(1.0, 1.0, 0.0);
const G: Vec3<f32> = Vec3::new(0.0, 1.0, 0.0);
const B: Vec3<f32> = Vec3::new(0.0, 0.0, 1.0);

const VERTICES: &[(Vec3<f32>, Vec3<f32>)] = &[
    (Vec3::new(-1.0, -1.0, -1.0), R),
    (Vec3::new(-1.0, -1.0,  1.0), Y),
    (Vec3::new(-1.0,  1.0, -1.0), G),
    (Vec3::new(-1.0,  1.0,  1.0), B),
    (Vec3::new( 1.0, -1.0, -1.0), B),
    (Vec3::new( 1.0, -1.0,  1.0), G),
    (Vec3::new( 1.0,  1.0, -1.0), Y),
    (Vec3::new( 1.0,  1.0,  1.0), R),
];

const INDICES: &[usize] = &[
    0, 3, 2, 0, 1, 3, // -x
    7, 4, 6, 5, 4, 7, // +x
    5, 0, 4, 1, 0, 5, // -y
    2, 7, 6, 2, 3, 7, // +y
    0, 6, 4, 0, 2, 6, // -z
    7, 1, 5, 3, 1, 7, // +z
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let [w, h] = [320, 240];
    let frames = 8;
    let out_dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());

    let mesh = Mesh::from_flat_indices(
        VERTICES
            .iter()
            .map(|(pos, color)| Vertex::from_position(*pos).with_normal(*color))
            .collect(),
        INDICES,
    )?;

    let mut color = Buffer2d::new([w, h], Rgba::zero());
    let mut depth = Buffer2d::new([w, h], f32::INFINITY);
    // Both windings are drawn, the depth buffer sorts out which faces are visible
    let mut renderer = Renderer::with_config(RasterConfig::default().with_cull(CullMode::None));

    for i in 0..frames {
        let t = i as f32 / frames as f32 * std::f32::consts::PI * 2.0;
        let mvp = Mat4::perspective_fov_lh_zo(1.3, w as f32, h as f32, 0.01, 100.0)
            * Mat4::translation_3d(Vec3::new(0.0, 0.0, 8.0))
            * Mat4::rotation_x(t.sin() * 2.0)
            * Mat4::rotation_y(t)
            * Mat4::rotation_z(t.cos());

        color.fill(Rgba::new(0.1, 0.1, 0.1, 1.0));
        depth.clear();

        let stats = renderer.draw(
            &ColorVertex,
            &|_: &Cube, v: &Vertex, c: &mut Rgba<f32>| *c = Rgba::new(v.normal.x, v.normal.y, v.normal.z, 1.0),
            &mut depth,
            &mut color,
            &Cube { mvp },
            &mesh,
        );
        log::info!("Frame {}: {}", i, stats);

        let path = format!("{}/cube_{:02}.png", out_dir, i);
        color.to_image().save(&path)?;
    }
    Ok(())
}
