use checkdigit_algorithms::catalog;
use checkdigit_fuzz::{FuzzScorer, ScoringConfig, Subject};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    group.sample_size(10);

    let config = ScoringConfig::default()
        .with_battery_size(50)
        .with_attempts(20)
        .with_seed(1);
    let scorer = FuzzScorer::new(config).unwrap();

    for name in ["base32check1", "base32check2", "mod97-10"] {
        let entry = catalog::find(name).unwrap();
        let checker = entry.build().unwrap();
        group.bench_function(name, |b| {
            b.iter(|| scorer.score(&Subject::from_entry(entry, &*checker)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
