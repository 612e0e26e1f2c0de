use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saturn_math::Fixed;
use saturn_space::{BodyMode, Scene, SceneSettings, StarfieldGenerator};

fn settings() -> SceneSettings {
    SceneSettings {
        star_seed: 42,
        ..SceneSettings::default()
    }
}

fn bench_frame_fixed(c: &mut Criterion) {
    let mut scene = Scene::<Fixed>::new(&settings());
    c.bench_function("frame_fixed", |bencher| bencher.iter(|| scene.step()));
}

fn bench_frame_f32(c: &mut Criterion) {
    let mut scene = Scene::<f32>::new(&settings());
    c.bench_function("frame_f32", |bencher| bencher.iter(|| scene.step()));
}

fn bench_frame_point_cloud(c: &mut Criterion) {
    let mut scene = Scene::<Fixed>::new(&SceneSettings {
        body_mode: BodyMode::PointCloud,
        ..settings()
    });
    c.bench_function("frame_point_cloud_fixed", |bencher| {
        bencher.iter(|| scene.step())
    });
}

fn bench_starfield(c: &mut Criterion) {
    let generator = StarfieldGenerator::new(42, 1000, 200, 50);
    c.bench_function("starfield_1000", |bencher| {
        bencher.iter(|| black_box(generator.generate::<Fixed>()))
    });
}

criterion_group!(
    benches,
    bench_frame_fixed,
    bench_frame_f32,
    bench_frame_point_cloud,
    bench_starfield,
);
criterion_main!(benches);
