//! Benchmarks for pricing and yield solving.
//!
//! Run with: cargo bench -p tenor-pricing

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;

use tenor_core::{BondTerms, CashFlowSchedule, Compounding, Frequency};
use tenor_pricing::{present_value, YieldSolver};

fn bullet_schedule(years: u32) -> CashFlowSchedule {
    BondTerms::new(
        Decimal::from(100),
        Decimal::new(5, 2),
        Decimal::from(years),
        Frequency::SemiAnnual,
    )
    .cash_flow_schedule()
    .unwrap()
}

fn bench_present_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("present_value");

    for years in [2, 10, 30] {
        let schedule = bullet_schedule(years);
        for compounding in [Compounding::Discrete, Compounding::Continuous] {
            group.bench_with_input(
                BenchmarkId::new(compounding.to_string(), years),
                &schedule,
                |b, schedule| {
                    b.iter(|| present_value(black_box(schedule), black_box(0.045), compounding));
                },
            );
        }
    }

    group.finish();
}

fn bench_yield_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("yield_solver");

    for years in [2, 10, 30] {
        let schedule = bullet_schedule(years);
        let solver = YieldSolver::new(Compounding::Discrete);
        let price = present_value(&schedule, 0.045, Compounding::Discrete).unwrap();

        group.bench_with_input(BenchmarkId::new("bisection", years), &schedule, |b, schedule| {
            b.iter(|| solver.solve(black_box(schedule), black_box(price)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_present_value, bench_yield_solver);
criterion_main!(benches);
