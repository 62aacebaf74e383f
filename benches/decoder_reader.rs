use std::io::Read;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use runlength_rs::DecoderReader;

/// Build an encoded stream alternating maximum-length literal and
/// repeated runs, decoding to `blocks * 256` bytes
fn synthetic_stream(blocks: usize) -> (Vec<u8>, usize) {
    let mut encoded = Vec::new();
    let mut decoded_len = 0;

    for i in 0..blocks {
        encoded.push(127);
        for j in 0..128 {
            encoded.push(((i * 31 + j * 7) % 256) as u8);
        }
        decoded_len += 128;

        encoded.push(129);
        encoded.push((i % 256) as u8);
        decoded_len += 128;
    }

    encoded.push(128);
    (encoded, decoded_len)
}

fn bench_decode(c: &mut Criterion) {
    let (encoded, decoded_len) = synthetic_stream(4096);

    let encoded: &[u8] = encoded.as_ref();

    c.bench_function("decode", move |b| {
        b.iter(|| {
            let encoded = black_box(encoded);

            let mut decoder = DecoderReader::new(encoded);

            let mut out = Vec::with_capacity(decoded_len);
            decoder.read_to_end(&mut out).unwrap();

            assert_eq!(decoded_len, black_box(out.len()));
        })
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
