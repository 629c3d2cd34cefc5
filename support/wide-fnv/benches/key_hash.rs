//! Benchmarks for WideFnv vs scalar FNV-1a vs hashbrown's default hasher.
//!
//! Run with: `cargo bench --bench key_hash`

use core::hash::BuildHasher;

use axzdict_wide_fnv::{WideFnvBuildHasher, fnv1a, fnv1a_wide};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn key_of_len(len: usize) -> String {
    "abcdefghijklmnopqrstuvwxyz0123456789"
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_raw_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_hash");

    for len in [4, 16, 32, 64, 256] {
        let key = key_of_len(len);

        group.bench_with_input(BenchmarkId::new("fnv1a", len), &key, |b, key| {
            b.iter(|| black_box(fnv1a(black_box(key.as_bytes()))));
        });

        group.bench_with_input(BenchmarkId::new("fnv1a_wide", len), &key, |b, key| {
            b.iter(|| black_box(fnv1a_wide(black_box(key.as_bytes()))));
        });
    }

    group.finish();
}

fn bench_map_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_lookup");

    for len in [8, 24, 64] {
        let keys: Vec<String> = (0..512).map(|i| format!("{}{i}", key_of_len(len))).collect();

        let mut wide: hashbrown::HashMap<String, usize, WideFnvBuildHasher> =
            hashbrown::HashMap::with_hasher(WideFnvBuildHasher);
        let mut default: hashbrown::HashMap<String, usize> = hashbrown::HashMap::new();
        for (i, key) in keys.iter().enumerate() {
            wide.insert(key.clone(), i);
            default.insert(key.clone(), i);
        }

        group.bench_with_input(BenchmarkId::new("WideFnv", len), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(wide.get(key.as_str()));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("DefaultHashBuilder", len), &keys, |b, keys| {
            b.iter(|| {
                for key in keys {
                    black_box(default.get(key.as_str()));
                }
            });
        });
    }

    group.finish();
}

fn bench_hash_one(c: &mut Criterion) {
    let build = WideFnvBuildHasher;
    let key = key_of_len(40);
    c.bench_function("hash_one_40", |b| {
        b.iter(|| black_box(build.hash_one(black_box(key.as_str()))));
    });
}

criterion_group!(benches, bench_raw_hash, bench_map_lookup, bench_hash_one);
criterion_main!(benches);
