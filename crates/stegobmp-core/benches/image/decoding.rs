use criterion::{criterion_group, criterion_main, Criterion};
use stegobmp_core::LsbCodec;

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let secret = std::fs::read("tests/images/with_text/hello_world.bmp")
            .expect("Input image is not readable.");

        b.iter(|| {
            LsbCodec::extract(&secret).expect("Failed to unveil the message");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
