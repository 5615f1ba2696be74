use criterion::{Criterion, criterion_group, criterion_main};
use huff_codec::prelude::*;
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hint::black_box;

/// Roughly text-shaped data: a few frequent symbols and a long tail.
pub fn gen_skewed_data(n: usize) -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(0);
    (0..n)
        .map(|_| {
            let a: u8 = rng.random();
            let b: u8 = rng.random();
            a & b
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const BYTES: usize = 1 << 16;
    let data = gen_skewed_data(BYTES);

    let mut encoded_traditional = Vec::new();
    let mut reader = MemByteReader::new(&data[..]);
    let mut writer = MemByteWriter::new(&mut encoded_traditional);
    encode_traditional(&mut reader, &mut writer).unwrap();

    let mut encoded_canonical = Vec::new();
    let mut reader = MemByteReader::new(&data[..]);
    let mut writer = MemByteWriter::new(&mut encoded_canonical);
    encode_canonical(&mut reader, &mut writer).unwrap();

    c.bench_function("encode_traditional", |b| {
        b.iter(|| {
            let mut reader = MemByteReader::new(black_box(&data[..]));
            let mut writer = MemByteWriter::new(Vec::with_capacity(BYTES));
            encode_traditional(&mut reader, &mut writer).unwrap();
            writer.into_inner()
        })
    });

    c.bench_function("encode_canonical", |b| {
        b.iter(|| {
            let mut reader = MemByteReader::new(black_box(&data[..]));
            let mut writer = MemByteWriter::new(Vec::with_capacity(BYTES));
            encode_canonical(&mut reader, &mut writer).unwrap();
            writer.into_inner()
        })
    });

    c.bench_function("decode_traditional", |b| {
        b.iter(|| {
            let mut reader = MemByteReader::new(black_box(&encoded_traditional[..]));
            let mut writer = MemByteWriter::new(Vec::with_capacity(BYTES));
            decode_traditional(&mut reader, &mut writer).unwrap();
            writer.into_inner()
        })
    });

    c.bench_function("decode_canonical", |b| {
        b.iter(|| {
            let mut reader = MemByteReader::new(black_box(&encoded_canonical[..]));
            let mut writer = MemByteWriter::new(Vec::with_capacity(BYTES));
            decode_canonical(&mut reader, &mut writer).unwrap();
            writer.into_inner()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
