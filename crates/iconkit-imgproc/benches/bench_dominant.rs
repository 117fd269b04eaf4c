use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iconkit_image::{Image, ImageSize};
use iconkit_imgproc::dominant::{dominant_color, DominantColorConfig};
use iconkit_imgproc::interpolation::InterpolationMode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn create_test_image(width: usize, height: usize) -> Image<u8, 4> {
    let mut rng = StdRng::seed_from_u64(42);
    let data: Vec<u8> = (0..(width * height * 4)).map(|_| rng.random()).collect();
    let size = ImageSize { width, height };
    Image::new(size, data).unwrap()
}

fn bench_dominant(c: &mut Criterion) {
    let mut group = c.benchmark_group("DominantColor");

    for (w, h) in [(256, 256), (1024, 1024), (1920, 1080)] {
        let src = create_test_image(w, h);

        for interpolation in [InterpolationMode::Nearest, InterpolationMode::Bicubic] {
            let config = DominantColorConfig {
                interpolation,
                ..Default::default()
            };

            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", interpolation), format!("{}x{}", w, h)),
                &src,
                |b, src| b.iter(|| std::hint::black_box(dominant_color(src, &config).unwrap())),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_dominant);
criterion_main!(benches);
