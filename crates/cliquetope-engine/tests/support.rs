//! Named graphs shared by the integration tests and benches.

#![allow(dead_code)]

use cliquetope_core::Graph;
use cliquetope_engine::{EngineConfig, HomotopyEngine};

pub fn engine() -> HomotopyEngine {
    HomotopyEngine::new(&EngineConfig {
        seed: Some(0x5EED),
        ..EngineConfig::default()
    })
}

pub fn cycle(n: u32) -> Graph {
    Graph::from_edges((0..n).map(|i| (i, (i + 1) % n)))
}

pub fn complete(n: u32) -> Graph {
    Graph::from_parts(0..n, (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v))))
}

/// Complete multipartite graph with `parts` classes of two vertices: the
/// 1-skeleton of the cross-polytope, whose clique complex is a sphere of
/// dimension `parts - 1`.
pub fn cross_polytope(parts: u32) -> Graph {
    let n = 2 * parts;
    Graph::from_edges(
        (0..n).flat_map(|u| (u + 1..n).filter(move |v| u / 2 != v / 2).map(move |v| (u, v))),
    )
}

/// Octahedron shifted to `base..base + 6`.
pub fn octahedron(base: u32) -> Graph {
    Graph::from_edges(
        cross_polytope(3)
            .edges()
            .into_iter()
            .map(|(u, v)| (u + base, v + base)),
    )
}

/// Icosahedron: apex 0, upper ring 1..=5, lower ring 6..=10, apex 11.
pub fn icosahedron() -> Graph {
    let mut edges = Vec::new();
    for i in 0..5 {
        let upper = 1 + i;
        let next_upper = 1 + (i + 1) % 5;
        let lower = 6 + i;
        let next_lower = 6 + (i + 1) % 5;
        edges.extend([
            (0, upper),
            (upper, next_upper),
            (upper, lower),
            (upper, next_lower),
            (lower, next_lower),
            (lower, 11),
        ]);
    }
    Graph::from_edges(edges)
}

pub fn union(a: &Graph, b: &Graph) -> Graph {
    Graph::from_parts(
        a.vertices().into_iter().chain(b.vertices()),
        a.edges().into_iter().chain(b.edges()),
    )
}
