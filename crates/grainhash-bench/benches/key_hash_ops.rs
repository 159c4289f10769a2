//! Criterion micro-benchmarks for string key hashing across buffer tiers.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use grainhash_bench::{guid_keys, random_keys};
use grainhash_jenkins::JenkinsHash;
use grainhash_keyhash::{HashRequest, KeyHasher};

/// Benchmark: hash 1K GUID keys (64-byte inline tier).
fn bench_guid_keys(c: &mut Criterion) {
    let hasher = KeyHasher::new(JenkinsHash, "ChatRoom");
    let keys = guid_keys(42, 1000);
    c.bench_function("hash_guid_1k", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(hasher.hash_str(key).unwrap());
            }
        });
    });
}

/// Benchmark: one key per extended length straddling each tier boundary.
fn bench_tier_boundaries(c: &mut Criterion) {
    let hasher = KeyHasher::new(JenkinsHash, "ChatRoom");
    let mut group = c.benchmark_group("hash_by_extended_len");
    for extended_len in [32usize, 64, 128, 256, 257, 1024, 16 * 1024] {
        let key = random_keys(extended_len as u64, 1, extended_len - 8).remove(0);
        group.bench_with_input(BenchmarkId::from_parameter(extended_len), &key, |b, key| {
            b.iter(|| black_box(hasher.hash(key).unwrap()));
        });
    }
    group.finish();
}

/// Benchmark: type-name detection hit vs explicit request.
fn bench_type_name_paths(c: &mut Criterion) {
    let hasher = KeyHasher::new(JenkinsHash, "ChatRoom");
    c.bench_function("hash_type_name_detected", |b| {
        b.iter(|| black_box(hasher.hash(black_box(b"ChatRoom")).unwrap()));
    });
    c.bench_function("hash_type_name_explicit", |b| {
        b.iter(|| black_box(hasher.hash_request(HashRequest::TypeName).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_guid_keys,
    bench_tier_boundaries,
    bench_type_name_paths
);
criterion_main!(benches);
