use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fracmatch::{algo::*, gens::*, prelude::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use std::hint::black_box;

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("fractional_matching");
    group.sample_size(20);

    let rng = &mut Pcg64Mcg::seed_from_u64(0xfac7);
    for (n, avg_deg) in [(100, 3.0), (500, 3.0), (500, 10.0), (2000, 5.0)] {
        let graph = AdjArrayUndir::gnp_avg_deg(rng, n, avg_deg);
        let name = format!("n{n}_d{avg_deg}");

        group.bench_with_input(
            BenchmarkId::new("label_propagation", &name),
            &graph,
            |b, graph| {
                b.iter(|| {
                    FractionalMatchingSolver::new(graph)
                        .with_observer(NoEvents)
                        .skip_validation()
                        .solve()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("double_cover", &name),
            &graph,
            |b, graph| b.iter(|| black_box(graph.double_cover_fractional_matching())),
        );

        group.bench_with_input(BenchmarkId::new("greedy", &name), &graph, |b, graph| {
            b.iter(|| black_box(graph.maximal_undirected_matching()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
