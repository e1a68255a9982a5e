//! Maximal cliques, clique graphs, and the clique-Helly property.

use std::collections::BTreeSet;

use tracing::debug;

use super::{Graph, Vertex};

/// All maximal cliques, each as a sorted vertex set, in ascending order.
///
/// Bron–Kerbosch with pivoting on the vertex that covers the most
/// candidates.
#[must_use]
pub fn maximal_cliques(graph: &Graph) -> Vec<BTreeSet<Vertex>> {
    let mut cliques = Vec::new();
    bron_kerbosch(
        graph,
        &BTreeSet::new(),
        graph.vertices().into_iter().collect(),
        BTreeSet::new(),
        &mut cliques,
    );
    cliques.sort();
    cliques
}

fn bron_kerbosch(
    graph: &Graph,
    clique: &BTreeSet<Vertex>,
    mut candidates: BTreeSet<Vertex>,
    mut excluded: BTreeSet<Vertex>,
    out: &mut Vec<BTreeSet<Vertex>>,
) {
    if candidates.is_empty() && excluded.is_empty() {
        if !clique.is_empty() {
            out.push(clique.clone());
        }
        return;
    }

    let pivot_hood = candidates
        .union(&excluded)
        .max_by_key(|&&u| graph.neighbors(u).intersection(&candidates).count())
        .map(|&u| graph.neighbors(u))
        .unwrap_or_default();

    let branch: Vec<Vertex> = candidates.difference(&pivot_hood).copied().collect();
    for v in branch {
        let hood = graph.neighbors(v);
        let mut grown = clique.clone();
        grown.insert(v);
        bron_kerbosch(
            graph,
            &grown,
            candidates.intersection(&hood).copied().collect(),
            excluded.intersection(&hood).copied().collect(),
            out,
        );
        candidates.remove(&v);
        excluded.insert(v);
    }
}

/// The clique graph `K(G)`: one vertex per maximal clique (numbered in the
/// order of [`maximal_cliques`]), adjacent when the cliques intersect.
///
/// Returns `None` when `G` has more than `limit` maximal cliques.
#[must_use]
pub fn clique_graph(graph: &Graph, limit: Option<usize>) -> Option<Graph> {
    let cliques = maximal_cliques(graph);
    if limit.is_some_and(|limit| cliques.len() > limit) {
        debug!(cliques = cliques.len(), ?limit, "clique graph over the size limit");
        return None;
    }

    let count = u32::try_from(cliques.len()).ok()?;
    let labelled: Vec<(Vertex, &BTreeSet<Vertex>)> = (0..count).zip(&cliques).collect();
    let mut k = Graph::with_vertices(count);
    for (pos, &(i, a)) in labelled.iter().enumerate() {
        for &(j, b) in &labelled[pos + 1..] {
            if !a.is_disjoint(b) {
                k.add_edge(i, j);
            }
        }
    }
    Some(k)
}

/// `true` when the maximal cliques of `G` have the Helly property.
///
/// Uses the triangle characterisation: `G` is clique-Helly iff for every
/// triangle, the set of vertices adjacent to at least two of its corners
/// contains a vertex adjacent to all the others.
#[must_use]
pub fn is_clique_helly(graph: &Graph) -> bool {
    for (a, b) in graph.edges() {
        let common: Vec<Vertex> = graph
            .neighbors(a)
            .intersection(&graph.neighbors(b))
            .copied()
            .filter(|&c| c > b)
            .collect();
        for c in common {
            if !extended_triangle_has_universal(graph, [a, b, c]) {
                return false;
            }
        }
    }
    true
}

fn extended_triangle_has_universal(graph: &Graph, triangle: [Vertex; 3]) -> bool {
    let extended: BTreeSet<Vertex> = graph
        .vertices()
        .into_iter()
        .filter(|&w| {
            triangle.contains(&w)
                || triangle.iter().filter(|&&t| graph.has_edge(w, t)).count() >= 2
        })
        .collect();

    extended
        .iter()
        .any(|&u| extended.is_subset(&graph.closed_neighborhood(u)))
}
