//! Criterion benchmarks for parcel-sort.
//!
//! Compares the direct decision function against the default rule engine
//! over the same randomly sampled packages.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parcel_sort::classifier::{sort, PackageRecord};
use parcel_sort::rules::{default_rules, RuleDefinition, RuleEngine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sample_packages(n: usize, seed: u64) -> Vec<PackageRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            PackageRecord::measure(
                rng.random_range(1.0..200.0),
                rng.random_range(1.0..200.0),
                rng.random_range(1.0..200.0),
                rng.random_range(0.1..40.0),
            )
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_direct_vs_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let engine = RuleEngine::new(default_rules::<PackageRecord>()).unwrap();

    for &n in &[100usize, 1_000, 10_000] {
        let packages = sample_packages(n, 42);

        group.bench_with_input(BenchmarkId::new("sort", n), &packages, |b, pkgs| {
            b.iter(|| {
                for p in pkgs {
                    black_box(sort(p.width, p.height, p.length, p.mass));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("engine", n), &packages, |b, pkgs| {
            b.iter(|| {
                for p in pkgs {
                    let _ = black_box(engine.evaluate(p));
                }
            })
        });
    }
    group.finish();
}

fn bench_deep_rule_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_rules");
    let packages = sample_packages(1_000, 7);

    for &depth in &[10usize, 100, 500] {
        let mut engine = RuleEngine::new(default_rules::<PackageRecord>()).unwrap();
        // Never-matching rules ahead of the defaults force a full scan.
        for i in 0..depth {
            engine
                .add_rule(
                    RuleDefinition::default()
                        .with_name(format!("filler-{i}"))
                        .when(|p: &PackageRecord| p.mass < 0.0)
                        .with_result("NEVER")
                        .with_priority(0.5),
                )
                .unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(depth), &packages, |b, pkgs| {
            b.iter(|| {
                for p in pkgs {
                    let _ = black_box(engine.evaluate(p));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_direct_vs_engine, bench_deep_rule_list);
criterion_main!(benches);
