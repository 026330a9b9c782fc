use criterion::{criterion_group, criterion_main, Criterion};
use stegohide_core::{LsbCodec, PixelBuffer};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let mut img = PixelBuffer::from_fn(512, 512, 4, |x, y, c| (x ^ y) as u8 ^ c)
            .expect("Cannot create carrier image");
        LsbCodec::encode(&mut img, "Hello World!".repeat(1000).as_bytes())
            .expect("Cannot write secret message");

        b.iter(|| {
            LsbCodec::decode(&img).expect("Failed to unveil the message");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
