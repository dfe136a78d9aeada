use criterion::{criterion_group, criterion_main, Criterion};
use stegobmp_core::media::{BmpImage, GradientKey, ImageProcessor, PatternId};
use stegobmp_core::LsbCodec;

pub fn image_encoding(c: &mut Criterion) {
    let plain_image = std::fs::read("tests/images/plain/carrier-image.bmp")
        .expect("Input image is not readable.");
    let secret_message = b"Hello World!";

    c.bench_function("Image Encoding", |b| {
        b.iter(|| {
            LsbCodec::embed(&secret_message[..], &plain_image)
                .expect("Cannot write secret message");
        })
    });

    c.bench_function("Pattern Rendering", |b| {
        let image = BmpImage::parse(&plain_image).expect("Input image is not a BMP.");
        let processor = ImageProcessor::new(PatternId::RadialWaves, GradientKey::RedToBlue);

        b.iter(|| processor.synthesize(&image))
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
