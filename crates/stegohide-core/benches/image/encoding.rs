use criterion::{criterion_group, criterion_main, Criterion};
use stegohide_core::{LsbCodec, PixelBuffer};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let plain_image = PixelBuffer::from_fn(512, 512, 4, |x, y, c| (x ^ y) as u8 ^ c)
            .expect("Cannot create carrier image");
        let secret_message = "Hello World!".repeat(1000);

        b.iter(|| {
            let mut image = plain_image.clone();
            LsbCodec::encode(&mut image, secret_message.as_bytes())
                .expect("Cannot write secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
