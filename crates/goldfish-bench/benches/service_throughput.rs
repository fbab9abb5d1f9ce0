//! Criterion benchmark for the worker-pool service: submit a batch of
//! simulations and wait for every result.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use goldfish_bench::{constructed_deck, TurnLimit};
use goldfish_engine::{ServiceConfig, SimulationService};

const JOBS: usize = 64;

fn bench_service_batch(c: &mut Criterion) {
    let deck = Arc::new(constructed_deck());
    let mut group = c.benchmark_group("service_64_jobs");
    for workers in [1usize, 2, 4, 8] {
        let service: SimulationService<u16, TurnLimit> = SimulationService::new(ServiceConfig {
            worker_count: Some(workers),
            default_games: 10,
            ..Default::default()
        })
        .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, _| {
            b.iter(|| {
                for _ in 0..JOBS {
                    service
                        .simulate(Arc::clone(&deck), TurnLimit::new(8))
                        .unwrap();
                }
                while let Some(agent) = service.retrieve_next_completed().unwrap() {
                    black_box(agent.cards_seen);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_service_batch);
criterion_main!(benches);
