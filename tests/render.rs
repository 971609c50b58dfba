use scanraster::{
    buffer::pack_rgba8, Buffer2d, DepthBuffer, FragmentProgram, Mesh, RasterConfig, Renderer, Vertex, VertexProgram,
};
use vek::*;

const W: usize = 24;
const H: usize = 24;

struct Camera {
    mvp: Mat4<f32>,
    light_dir: Vec3<f32>,
}

struct Transform;

impl VertexProgram<Camera> for Transform {
    fn main(&self, camera: &Camera, input: &Vertex, varying: &mut Vertex, position: &mut Vec4<f32>) {
        *position = camera.mvp * input.position;
        varying.normal = input.normal;
        varying.uv = input.uv;
    }
}

struct Lambert;

impl FragmentProgram<Camera> for Lambert {
    fn main(&self, camera: &Camera, varying: &Vertex, color: &mut Rgba<f32>) {
        let light = varying.normal.normalized().dot(camera.light_dir).max(0.0) * 0.8 + 0.2;
        *color = Rgba::new(light, light, light, 1.0);
    }
}

/// A 2x2 square in the z = 0 plane, facing -z (towards a camera looking down +z).
fn square() -> Mesh {
    let normal = -Vec3::unit_z();
    let corner = |x: f32, y: f32| {
        Vertex::from_position(Vec3::new(x, y, 0.0))
            .with_normal(normal)
            .with_uv(Vec2::new(x * 0.5 + 0.5, y * 0.5 + 0.5))
    };
    Mesh::from_flat_indices(
        vec![corner(-1.0, -1.0), corner(1.0, -1.0), corner(1.0, 1.0), corner(-1.0, 1.0)],
        &[0, 1, 2, 0, 2, 3],
    )
    .unwrap()
}

fn camera(distance: f32) -> Camera {
    Camera {
        mvp: Mat4::perspective_fov_lh_zo(1.0, W as f32, H as f32, 0.1, 100.0)
            * Mat4::translation_3d(Vec3::new(0.0, 0.0, distance)),
        light_dir: -Vec3::unit_z(),
    }
}

fn render(renderer: &mut Renderer, distance: f32) -> (Buffer2d<u32>, Buffer2d<f32>) {
    let mut color = Buffer2d::new([W, H], 0u32);
    let mut depth = Buffer2d::new([W, H], 0.0f32);
    depth.clear();
    renderer.draw(&Transform, &Lambert, &mut depth, &mut color, &camera(distance), &square());
    (color, depth)
}

#[test]
fn square_faces_the_camera() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut renderer = Renderer::new();
    let (color, depth) = render(&mut renderer, 6.0);

    let stats = renderer.raster().stats();
    assert_eq!(stats.triangles_in, 2);
    assert_eq!(stats.culled, 0);
    assert_eq!(stats.rasterized, 2);

    // The centre of the screen sees the square, lit head-on
    assert_eq!(color.get([W / 2, H / 2]), pack_rgba8(Rgba::new(1.0, 1.0, 1.0, 1.0)));
    assert!((depth.get([W / 2, H / 2]) - 6.0).abs() < 1e-3);
    // The corners do not
    assert_eq!(color.get([0, 0]), 0);
    assert_eq!(depth.get([0, 0]), f32::INFINITY);
}

#[test]
fn shared_edge_overdraw_is_bounded() {
    let mut renderer = Renderer::new();
    let (_, depth) = render(&mut renderer, 6.0);
    let stats = renderer.raster().stats();

    // Only pixels along the shared diagonal may be tested by both triangles
    let covered = depth.raw().iter().filter(|d| d.is_finite()).count();
    assert!(covered > 0);
    assert!(stats.fragments_tested >= covered);
    assert!(stats.fragments_tested <= covered + 2 * W.max(H));
}

#[test]
fn behind_the_camera_draws_nothing() {
    let mut renderer = Renderer::new();
    let (color, depth) = render(&mut renderer, -6.0);

    let stats = renderer.raster().stats();
    assert_eq!(stats.discarded, 2);
    assert!(color.raw().iter().all(|c| *c == 0));
    assert!(depth.raw().iter().all(|d| *d == f32::INFINITY));
}

#[test]
fn nearer_mesh_occludes_farther_mesh() {
    let mut renderer = Renderer::new();
    let mut color = Buffer2d::new([W, H], Rgba::zero());
    let white = Rgba::new(1.0, 1.0, 1.0, 1.0);
    let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
    let mut depth = Buffer2d::new([W, H], f32::INFINITY);

    let near = |_: &Camera, _: &Vertex, c: &mut Rgba<f32>| *c = white;
    let far = |_: &Camera, _: &Vertex, c: &mut Rgba<f32>| *c = red;

    renderer.draw(&Transform, &near, &mut depth, &mut color, &camera(2.0), &square());
    renderer.draw(&Transform, &far, &mut depth, &mut color, &camera(6.0), &square());

    assert_eq!(color.get([W / 2, H / 2]), white);
    assert!(color.raw().iter().all(|c| *c != red));
}

#[test]
fn draw_reports_stats_for_that_draw_only() {
    let mut renderer = Renderer::with_config(RasterConfig::default());
    let mut color = Buffer2d::new([W, H], 0u32);
    let mut depth = Buffer2d::new([W, H], f32::INFINITY);

    let first = renderer.draw(&Transform, &Lambert, &mut depth, &mut color, &camera(6.0), &square());
    let second = renderer.draw(&Transform, &Lambert, &mut depth, &mut color, &camera(6.0), &square());

    assert_eq!(first.triangles_in, 2);
    assert_eq!(second.triangles_in, 2);
    assert_eq!(renderer.raster().stats(), first + second);
    assert_eq!(first.fragments_tested, second.fragments_tested);
    assert!(second.fragments_written > 0);
}
