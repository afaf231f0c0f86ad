//! Benchmarks for header parsing and pixel reconstruction

use blp_decode::{blp_to_bgra, parse_blp};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// BLP2 file with a single level of the given encoding
fn create_test_blp(compression: u8, alpha_bits: u8, alpha_encoding: u8, size: u32) -> Vec<u8> {
    let pixels = (size * size) as usize;
    let payload: Vec<u8> = match compression {
        1 => {
            let alpha_plane = match alpha_bits {
                0 => 0,
                1 => pixels.div_ceil(8),
                4 => pixels.div_ceil(2),
                _ => pixels,
            };
            (0..pixels + alpha_plane).map(|i| i as u8).collect()
        }
        2 => vec![0x55; pixels],
        _ => (0..pixels * 4).map(|i| (i % 251) as u8).collect(),
    };

    let mut bytes = b"BLP2".to_vec();
    bytes.extend(1u32.to_le_bytes());
    bytes.extend([compression, alpha_bits, alpha_encoding, 0]);
    bytes.extend(size.to_le_bytes());
    bytes.extend(size.to_le_bytes());
    let mut offsets = [0u32; 16];
    let mut sizes = [0u32; 16];
    offsets[0] = 148 + 1024;
    sizes[0] = payload.len() as u32;
    for value in offsets.iter().chain(sizes.iter()) {
        bytes.extend(value.to_le_bytes());
    }
    bytes.extend((0..1024).map(|i| (i % 256) as u8));
    bytes.extend(payload);
    bytes
}

fn bench_parse(c: &mut Criterion) {
    let blp = create_test_blp(1, 8, 8, 256);
    c.bench_function("parse_header_256", |b| {
        b.iter(|| parse_blp(black_box(&blp)).unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let encodings = [
        ("raw_bgra", 3, 8, 8),
        ("paletted_alpha1", 1, 1, 0),
        ("paletted_alpha8", 1, 8, 8),
        ("dxt1", 2, 0, 0),
        ("dxt5", 2, 8, 7),
    ];

    for (name, compression, alpha_bits, alpha_encoding) in encodings {
        for size in [64, 256, 512] {
            let bytes = create_test_blp(compression, alpha_bits, alpha_encoding, size);
            let descriptor = parse_blp(&bytes).unwrap();
            group.bench_with_input(BenchmarkId::new(name, size), &bytes, |b, bytes| {
                b.iter(|| blp_to_bgra(black_box(bytes), &descriptor, 0).unwrap())
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_decode);
criterion_main!(benches);
