use chaotic_seed::{sequence, DigestEngine, EntropySample, HashAlgorithm, Seed, SeedDeriver};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_digest(c: &mut Criterion) {
    // Roughly the size of a compressed phone photo
    let content: Vec<u8> = (0..2_000_000u32).map(|i| (i.wrapping_mul(2654435761) >> 11) as u8).collect();
    let sample = EntropySample::new(content, "bench").unwrap();

    let mut group = c.benchmark_group("digest");
    for algorithm in [HashAlgorithm::Sha1, HashAlgorithm::Sha256, HashAlgorithm::Blake3] {
        let engine = DigestEngine::new(algorithm);
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| SeedDeriver::new().derive(&engine.digest(black_box(&sample))))
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let seed: Seed = "0xf9ccd7655bc00491a98bc8b3a59ac87c19f1f7e0".parse().unwrap();

    c.bench_function("generate_10k", |b| {
        b.iter(|| sequence::generate(black_box(&seed), 0, (1 << 31) - 1, 10_000).unwrap())
    });
}

criterion_group!(benches, bench_digest, bench_generate);
criterion_main!(benches);
