//! Throughput benchmarks for zzzip-lzw
//!
//! This benchmark suite evaluates:
//! - Compression/decompression speed (throughput)
//! - Behaviour once the dictionary freezes (random text)
//! - Streaming through buffered readers versus in-memory slices

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::io::BufReader;
use zzzip_lzw::{CodeConfig, compress, compress_stream, decompress};

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate text patterns over the seed alphabet
mod test_data {
    /// One repeated character (best case)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![b'a'; size]
    }

    /// Random printable text - no patterns (worst case)
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push(b' ' + ((seed >> 33) % 95) as u8);
        }
        data
    }

    /// Prose with line breaks - realistic scenario
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog.\r\n\
                     Pack my box with five dozen liquor jugs.\r\n\
                     \tHow vexingly quick daft zebras jump!\r\n";
        text.iter().copied().cycle().take(size).collect()
    }
}

/// Document sizes
mod doc_sizes {
    /// 16KB
    pub const SMALL: usize = 16 * 1024;

    /// 256KB
    pub const MEDIUM: usize = 256 * 1024;

    /// 1MB
    pub const LARGE: usize = 1024 * 1024;
}

const SIZES: [(&str, usize); 3] = [
    ("small_16KB", doc_sizes::SMALL),
    ("medium_256KB", doc_sizes::MEDIUM),
    ("large_1MB", doc_sizes::LARGE),
];

const PATTERNS: [(&str, PatternGenerator); 3] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
];

/// Benchmark compression speed for different sizes and patterns
fn bench_compression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(size);
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| {
                    let compressed = compress(black_box(data)).unwrap();
                    black_box(compressed);
                });
            });
        }
    }

    group.finish();
}

/// Benchmark decompression speed
fn bench_decompression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let compressed = compress(&generator(size)).unwrap();
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(&id),
                &compressed,
                |b, compressed| {
                    b.iter(|| {
                        let decompressed = decompress(black_box(compressed)).unwrap();
                        black_box(decompressed);
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark the streaming path through a buffered reader
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");

    let data = test_data::text_like(doc_sizes::MEDIUM);
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("buffered_reader", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(data.len());
            let reader = BufReader::new(black_box(&data[..]));
            compress_stream(reader, &mut out, CodeConfig::DEFAULT).unwrap();
            black_box(out);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compression_speed,
    bench_decompression_speed,
    bench_streaming,
);
criterion_main!(benches);
