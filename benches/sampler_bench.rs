use bez_gradient_editor::core::sampler::{sample_curve, SamplerSettings};
use bez_gradient_editor::shared::spline_geometry::{flatten, ArcLengthTable};
use bez_gradient_editor::{Curve, InterpolationStyle, SourceImage};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use image::{Rgba, RgbaImage};
use std::hint::black_box;

fn build_gradient_image(width: u32, height: u32) -> SourceImage {
    let pixels = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    });
    SourceImage::from_rgba(pixels, "bench").expect("Bench-Bild sollte gültig sein")
}

fn build_curve(point_count: usize, extent: Vec2) -> Curve {
    Curve::from_positions((0..point_count).map(|i| {
        let t = i as f32 / (point_count.max(2) - 1) as f32;
        Vec2::new(t * extent.x, (0.5 + 0.4 * (t * 12.0).sin()) * extent.y)
    }))
}

fn bench_sample_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_curve");
    let extent = Vec2::new(1200.0, 800.0);
    let image = build_gradient_image(3000, 2000);

    for &point_count in &[4usize, 32usize] {
        let curve = build_curve(point_count, extent);

        for style in InterpolationStyle::ALL {
            let settings = SamplerSettings {
                sample_count: 200,
                interpolation: style,
                samples_per_segment: 32,
            };

            group.bench_with_input(
                BenchmarkId::new(style.label(), point_count),
                &curve,
                |b, curve| {
                    b.iter(|| {
                        let samples =
                            sample_curve(black_box(curve), &image, black_box(extent), settings);
                        black_box(samples.map(|s| s.colors.len()))
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_arc_length_lookup(c: &mut Criterion) {
    let curve = build_curve(32, Vec2::new(1200.0, 800.0));
    let table = ArcLengthTable::new(flatten(
        &curve.positions(),
        InterpolationStyle::CatmullRom,
        32,
    ));
    let total = table.total_length();

    c.bench_function("arc_length_lookup_1024", |b| {
        b.iter(|| {
            let mut acc = Vec2::ZERO;
            for i in 0..1024 {
                if let Some(p) = table.point_at_length(black_box(i as f32 / 1023.0 * total)) {
                    acc += p;
                }
            }
            black_box(acc)
        })
    });
}

criterion_group!(sampler_benches, bench_sample_curve, bench_arc_length_lookup);
criterion_main!(sampler_benches);
