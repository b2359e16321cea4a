use courier_core::{build_graph, build_risk_table, search::search, HunterSighting, RouteRecord};
use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;

// A chain of 30 planets, one day apart, with a handful of watched days
// scattered along the route, wide enough to force some refuel waits.
static GRAPH: Lazy<courier_core::Graph> = Lazy::new(|| {
    let records = (0..29).map(|i| RouteRecord::new(format!("p{i}"), format!("p{}", i + 1), 4));
    build_graph(records).expect("fixture graph builds")
});

static RISK: Lazy<courier_core::RiskTable> = Lazy::new(|| {
    build_risk_table((0..29).step_by(3).map(|i| HunterSighting::new(format!("p{i}"), i as u64)))
});

fn benchmark_search(c: &mut Criterion) {
    let graph = &*GRAPH;
    let risk = &*RISK;

    c.bench_function("search_safe_chain", |b| {
        b.iter(|| {
            let best = search(graph, risk, "p0", "p29", 4, 200);
            black_box(best.risk)
        });
    });

    c.bench_function("search_tight_countdown", |b| {
        b.iter(|| {
            let best = search(graph, risk, "p0", "p29", 4, 120);
            black_box(best.is_reachable())
        });
    });
}

criterion_group!(benches, benchmark_search);
criterion_main!(benches);
