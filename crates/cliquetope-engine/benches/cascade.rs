#[path = "../tests/support.rs"]
mod support;

use cliquetope_core::Graph;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use support::{cross_polytope, cycle, engine, icosahedron, octahedron};

fn named_graphs() -> Vec<(&'static str, Graph)> {
    let mut bridged = octahedron(0);
    for (u, v) in octahedron(6).edges() {
        bridged.add_edge(u, v);
    }
    bridged.add_edge(0, 6);
    bridged.add_edge(1, 7);

    vec![
        ("c12", cycle(12)),
        ("cross_polytope_5", cross_polytope(5)),
        ("icosahedron", icosahedron()),
        ("bridged_octahedra", bridged),
    ]
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade.classify");
    for (name, graph) in named_graphs() {
        group.bench_with_input(BenchmarkId::new("graph", name), &graph, |b, graph| {
            b.iter(|| black_box(engine().classify(graph)));
        });
    }
    group.finish();
}

fn bench_clique_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade.clique_graph");
    for (name, graph) in [("c12", cycle(12)), ("octahedron", octahedron(0))] {
        group.bench_with_input(BenchmarkId::new("graph", name), &graph, |b, graph| {
            b.iter(|| black_box(engine().classify_clique_graph(graph)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_clique_graph);
criterion_main!(benches);
