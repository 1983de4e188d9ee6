use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linmath_matrix::{Kernel, Mat4F32};
use rand::Rng;

fn random_matrix(rng: &mut impl Rng) -> Mat4F32 {
    let mut m = [[0.0; 4]; 4];
    for row in m.iter_mut() {
        for v in row.iter_mut() {
            *v = rng.random_range(-1.0..1.0);
        }
    }
    Mat4F32::new(m)
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    let mut rng = rand::rng();

    let a = random_matrix(&mut rng).to_rows_array();
    let b = random_matrix(&mut rng).to_rows_array();

    group.bench_function("scalar", |bencher| {
        bencher.iter(|| black_box(Kernel::Scalar.matmul(black_box(&a), black_box(&b))))
    });

    let active = Kernel::active();
    group.bench_function(format!("active_{:?}", active).to_lowercase(), |bencher| {
        bencher.iter(|| black_box(active.matmul(black_box(&a), black_box(&b))))
    });

    group.finish();
}

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");
    let mut rng = rand::rng();

    let a = random_matrix(&mut rng);
    let b = random_matrix(&mut rng);

    group.bench_function("add", |bencher| {
        bencher.iter(|| black_box(black_box(a) + black_box(b)))
    });

    group.bench_function("mul_scalar", |bencher| {
        bencher.iter(|| black_box(black_box(a) * black_box(0.5)))
    });

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    let mut rng = rand::rng();

    let m = Mat4F32::make_model_matrix(
        Mat4F32::translation(1.0, 2.0, 3.0),
        Mat4F32::rotation_axis_angle_intrinsic(
            Some(rng.random_range(-1.0..1.0)),
            Some(rng.random_range(-1.0..1.0)),
            Some(rng.random_range(-1.0..1.0)),
        ),
        Mat4F32::uniform_scaling(2.0),
    );

    group.bench_function("determinant", |bencher| {
        bencher.iter(|| black_box(black_box(m).determinant()))
    });

    group.bench_function("inverse", |bencher| {
        bencher.iter(|| black_box(black_box(m).inverse().unwrap()))
    });

    group.bench_function("glam_inverse", |bencher| {
        let g = glam::Mat4::from(m);
        bencher.iter(|| black_box(black_box(g).inverse()))
    });

    group.finish();
}

criterion_group!(benches, bench_matmul, bench_elementwise, bench_inverse);
criterion_main!(benches);
