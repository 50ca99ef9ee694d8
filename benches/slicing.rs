use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trislice::bench::{EdgeFunctionRasterizer, FlatShader, FrameBuffer, Rasterizer, ScreenTriangle};
use trislice::prelude::*;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

/// `n * n * n` unit cubes on a grid, spaced so they don't touch.
fn cube_grid(n: usize) -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(n * n * n * 12);
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                let center = Vec3::new(x as f32 * 1.5, y as f32 * 1.5, z as f32 * 1.5);
                triangles.extend(cube_at(center));
            }
        }
    }
    triangles
}

fn benchmark_slice_cube(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice_cube");
    let cube = cube_at(Vec3::ZERO);

    for (name, normal) in [
        ("axis", Vec3::FORWARD),
        ("tilted", Vec3::new(0.2, 0.3, 1.0)),
        ("corner", Vec3::ONE),
    ] {
        let plane = ClipPlane::new(Vec3::ZERO, normal);
        group.bench_with_input(BenchmarkId::from_parameter(name), &plane, |b, plane| {
            b.iter(|| slice(black_box(&cube), plane));
        });
    }

    group.finish();
}

fn benchmark_clip_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_grid");

    for n in [2, 4, 8] {
        let triangles = cube_grid(n);
        let plane = ClipPlane::new(Vec3::ONE * (n as f32 * 0.75), Vec3::new(0.3, 0.2, 1.0));
        group.bench_with_input(BenchmarkId::from_parameter(triangles.len()), &triangles, |b, tris| {
            let mut buffer = ClipBuffer::for_triangles(tris.len());
            b.iter(|| {
                buffer.clear();
                for t in tris {
                    let _ = clip_triangle(black_box(t), &plane, &mut buffer);
                }
            });
        });
    }

    group.finish();
}

fn benchmark_reduce_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce_points");

    for sides in [4usize, 16, 64] {
        // Corners of a polygon with each edge carrying its midpoint and a near-duplicate.
        let points: Vec<Vec3> = (0..sides)
            .flat_map(|i| {
                let angle = |k: usize| k as f32 / sides as f32 * std::f32::consts::TAU;
                let a = Vec3::new(angle(i).cos(), angle(i).sin(), 0.0);
                let b = Vec3::new(angle(i + 1).cos(), angle(i + 1).sin(), 0.0);
                [a, a.lerp(b, 0.5), a + Vec3::new(0.001, 0.0, 0.0)]
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(points.len()), &points, |b, pts| {
            b.iter(|| reduce_points(black_box(pts)));
        });
    }

    group.finish();
}

fn benchmark_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");

    let q = Quat::from_axis_angle(0.3, Vec3::new(1.0, 2.0, 3.0).normalize());
    let v = Vec3::new(0.5, -1.5, 2.0);
    group.bench_function("quat_rotate_vector", |b| {
        b.iter(|| black_box(q).rotate_vector(black_box(v)));
    });

    group.bench_function("rotate_vertex", |b| {
        let mut t = *IdentityTriangle::LowerLeft.triangle();
        b.iter(|| t.rotate_vertex(0, Winding::Clockwise, black_box(PLANE_SWEEP_STEP)));
    });

    group.bench_function("rotate_plane", |b| {
        let mut plane = ClipPlane::new(Vec3::ZERO, Vec3::FORWARD);
        let mut basis = PlaneBasis::from_normal(plane.normal);
        b.iter(|| rotate_plane(&mut plane, &mut basis, Vec3::RIGHT, black_box(PLANE_SWEEP_STEP)));
    });

    group.finish();
}

fn benchmark_rasterize(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");
    let rasterizer = EdgeFunctionRasterizer::new();
    let shader = FlatShader::new(0xFFFF0000);

    for (name, points) in [
        ("small", [Vec3::new(100.0, 100.0, 0.5), Vec3::new(120.0, 100.0, 0.5), Vec3::new(110.0, 120.0, 0.5)]),
        ("large", [Vec3::new(50.0, 50.0, 0.5), Vec3::new(750.0, 100.0, 0.5), Vec3::new(400.0, 550.0, 0.5)]),
    ] {
        let triangle = ScreenTriangle::new(points, [Vec2::ZERO; 3]);
        group.bench_with_input(BenchmarkId::new("edge_function", name), &triangle, |b, tri| {
            let size = (BUFFER_WIDTH * BUFFER_HEIGHT) as usize;
            let mut color = vec![0u32; size];
            let mut depth = vec![0.0f32; size];
            b.iter(|| {
                depth.fill(0.0);
                let mut fb = FrameBuffer::new(&mut color, &mut depth, BUFFER_WIDTH, BUFFER_HEIGHT);
                rasterizer.fill_triangle(black_box(tri), &mut fb, &shader);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_slice_cube,
    benchmark_clip_grid,
    benchmark_reduce_points,
    benchmark_rotation,
    benchmark_rasterize
);
criterion_main!(benches);
