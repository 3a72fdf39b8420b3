use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use keystretch::{HashAlgorithm, Pbkdf2Params};

criterion_main!(benches);
criterion_group!(benches, bench_iterations, bench_output_len);

/// Cost grows linearly with the iteration count
fn bench_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("pbkdf2/iterations");
    for algo in [HashAlgorithm::Sha1, HashAlgorithm::Sha256, HashAlgorithm::Sha512] {
        let mut out = vec![0u8; algo.hash_len()];
        for iterations in [1u32, 10, 100, 1000] {
            let params = Pbkdf2Params::new(algo, b"password", b"salt").iterations(iterations);

            group.throughput(Throughput::Elements(iterations as u64));
            group.bench_function(BenchmarkId::new(algo.name(), iterations), |bench| {
                bench.iter(|| params.derive_into(&mut out).unwrap())
            });
        }
    }
    group.finish();
}

/// Every additional block costs as much as the first one
fn bench_output_len(c: &mut Criterion) {
    let mut group = c.benchmark_group("pbkdf2/output_len");
    let algo = HashAlgorithm::Sha256;
    let params = Pbkdf2Params::new(algo, b"password", b"salt").iterations(100);
    for blocks in [1usize, 2, 4] {
        let mut out = vec![0u8; blocks * algo.hash_len()];

        group.bench_function(BenchmarkId::new(algo.name(), out.len()), |bench| {
            bench.iter(|| params.derive_into(&mut out).unwrap())
        });
    }
    group.finish();
}
