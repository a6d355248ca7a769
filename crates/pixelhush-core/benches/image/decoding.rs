use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, RgbaImage};
use pixelhush_core::{capacity, decode, encode};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let mut image_with_secret: RgbaImage = ImageBuffer::from_fn(512, 512, |x, y| {
            image::Rgba([(x ^ y) as u8, x as u8, y as u8, 255])
        });
        let secret_message = vec![b'x'; capacity(image_with_secret.len())];
        encode(&mut image_with_secret, &secret_message).expect("Cannot write secret message");

        b.iter(|| {
            decode(&image_with_secret).expect("Cannot read secret message");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
