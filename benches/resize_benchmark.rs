use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iconmill::processing::FilterType;
use iconmill::ICON_SIZES;
use image::{DynamicImage, ImageBuffer, Rgb};

fn synthetic_image(width: u32, height: u32) -> DynamicImage {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let intensity = ((x + y) % 255) as u8;
        Rgb([intensity, intensity, intensity])
    });
    DynamicImage::ImageRgb8(img)
}

fn benchmark_icon_fanout(c: &mut Criterion) {
    let img = synthetic_image(512, 512);
    let filter: image::imageops::FilterType = FilterType::Lanczos3.into();

    c.bench_function("fanout_512_to_icon_sizes", |b| {
        b.iter(|| {
            for (width, height) in ICON_SIZES {
                black_box(img.resize_exact(width, height, filter));
            }
        });
    });
}

criterion_group!(benches, benchmark_icon_fanout);
criterion_main!(benches);
