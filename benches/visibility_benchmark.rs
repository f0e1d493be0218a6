// benches/visibility_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rand::rngs::StdRng;
use rand::SeedableRng;
use raycaster2d::color::WHITE;
use raycaster2d::generator::BoundaryGenerator;
use raycaster2d::{Point2, Raycaster, RaycasterConfig, SceneConfig, Segment};

fn build_scene(count: usize) -> (Raycaster, Vec<Segment>) {
    let config = SceneConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    let mut boundaries = config.enclosure().to_vec();
    boundaries.extend(BoundaryGenerator::scatter_boundaries(
        &mut rng,
        config.width,
        config.height,
        60.0,
        count,
        WHITE,
    ));

    let mut caster = Raycaster::new(
        Point2::new(config.width / 2.0, config.height / 2.0),
        RaycasterConfig::default(),
    );
    for boundary in &boundaries {
        caster
            .register_boundary(boundary)
            .expect("generated boundaries are never degenerate");
    }
    (caster, boundaries)
}

fn visibility_benchmark_fn(c: &mut Criterion) {
    let mut group = c.benchmark_group("VisibilityUpdate");

    for count in [8usize, 32, 128] {
        let (mut caster, boundaries) = build_scene(count);
        let mut step = 0u32;
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                // Move the light a little each iteration so nothing is cached.
                step = step.wrapping_add(1);
                let offset = (step % 100) as f32;
                caster.set_source(Point2::new(300.0 + offset, 320.0 - offset));
                caster.update(black_box(&boundaries));
                black_box(caster.polygon().len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, visibility_benchmark_fn);
criterion_main!(benches);
