use checkdigit_algorithms::{alphabet, catalog};
use checkdigit_tests::payloads;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    for length in [8usize, 32, 128] {
        let inputs = payloads(alphabet::base32(), length, 64, 1);
        group.throughput(Throughput::Elements(inputs.len() as u64));
        for entry in catalog::entries() {
            let checker = entry.build().unwrap();
            group.bench_with_input(BenchmarkId::new(entry.name, length), &inputs, |b, inputs| {
                b.iter(|| {
                    for p in inputs {
                        let _ = checker.compute(p);
                    }
                });
            });
        }
    }

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    for entry in catalog::entries() {
        group.bench_function(entry.name, |b| b.iter(|| entry.build().unwrap()));
    }
    group.finish();
}

criterion_group!(benches, bench_compute, bench_construction);
criterion_main!(benches);
