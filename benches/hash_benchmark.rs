//! Performance benchmarks for UniHash
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use unihash::config::{HashFamily, OutputFormat};
use unihash::hash::HashParams;

const KEYS: usize = 4096;

fn random_keys() -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0x00c0_ffee);
    (0..KEYS).map(|_| rng.gen()).collect()
}

fn bench_hash_families(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_families");
    let keys = random_keys();
    let mut rng = StdRng::seed_from_u64(7);

    group.throughput(Throughput::Elements(KEYS as u64));

    for family in [HashFamily::ModPrime, HashFamily::Shift] {
        let params = HashParams::generate(family, &mut rng);
        group.bench_with_input(BenchmarkId::new("hash", family.name()), &keys, |b, keys| {
            b.iter(|| {
                keys.iter()
                    .fold(0u32, |acc, &x| acc ^ black_box(params).hash(x))
            });
        });
    }

    group.finish();
}

fn bench_generate_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("mod_prime_1000", |b| {
        b.iter(|| {
            let generator = unihash::core::SampleGenerator::with_rng(
                StdRng::seed_from_u64(1),
                HashFamily::ModPrime,
                1000,
            );
            let mut out = Vec::with_capacity(1000 * 80);
            let mut progress = unihash::progress::ProgressReporter::disabled();
            black_box(unihash::core::write_samples(generator, &mut out, &mut progress).unwrap())
        });
    });

    group.finish();
}

fn bench_verify_stream(c: &mut Criterion) {
    let generator = unihash::core::SampleGenerator::with_rng(
        StdRng::seed_from_u64(2),
        HashFamily::ModPrime,
        1000,
    );
    let input: String = generator.map(|s| format!("{}\n", s)).collect();

    let mut group = c.benchmark_group("verify");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("mod_prime_1000", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(4096);
            black_box(
                unihash::core::verify(input.as_bytes(), &mut out, HashFamily::ModPrime, OutputFormat::Text)
                    .unwrap(),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_hash_families, bench_generate_samples, bench_verify_stream);

criterion_main!(benches);
