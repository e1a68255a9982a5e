//! s-collapses: graph reductions that preserve the simple homotopy type of
//! the clique complex.
//!
//! - A vertex `v` is s-collapsible when `G[N(v)]` is nonempty and
//!   dismantlable. Its link in the clique complex is then collapsible, so
//!   deleting `v` is a homotopy equivalence.
//! - An edge `uv` is s-collapsible when `G[N(u) ∩ N(v)]` is nonempty and
//!   dismantlable, by the same argument applied to the link of the edge.
//!
//! [`simplify`] runs vertex, edge, then vertex reductions, each to a fixed
//! point. Dominated vertices are a special case of s-collapsible vertices,
//! so a simplified graph is also pared.

use tracing::{debug, trace};

use super::dominated::is_dismantlable;
use super::{Graph, Vertex};

/// First s-collapsible vertex in ascending order.
#[must_use]
pub fn s_collapsible_vertex(graph: &Graph) -> Option<Vertex> {
    graph.vertices().into_iter().find(|&v| {
        let hood = graph.open_neighborhood(v);
        !hood.is_empty() && is_dismantlable(&hood)
    })
}

/// First s-collapsible edge in ascending order.
#[must_use]
pub fn s_collapsible_edge(graph: &Graph) -> Option<(Vertex, Vertex)> {
    graph.edges().into_iter().find(|&(u, v)| {
        let common = graph
            .neighbors(u)
            .intersection(&graph.neighbors(v))
            .copied()
            .collect();
        let hood = graph.induced_subgraph(&common);
        !hood.is_empty() && is_dismantlable(&hood)
    })
}

/// Remove s-collapsible vertices until none remain.
#[must_use]
pub fn s_collapse_vertices(graph: &Graph) -> Graph {
    let mut current = graph.clone();
    while let Some(v) = s_collapsible_vertex(&current) {
        trace!(vertex = v, "s-collapsing vertex");
        current = current.remove_vertex(v);
    }
    current
}

/// Remove s-collapsible edges until none remain.
#[must_use]
pub fn s_collapse_edges(graph: &Graph) -> Graph {
    let mut current = graph.clone();
    while let Some((u, v)) = s_collapsible_edge(&current) {
        trace!(u, v, "s-collapsing edge");
        current = current.remove_edge(u, v);
    }
    current
}

/// Vertex, edge, then vertex s-collapses.
#[must_use]
pub fn simplify(graph: &Graph) -> Graph {
    let vertices = s_collapse_vertices(graph);
    let edges = s_collapse_edges(&vertices);
    let simplified = s_collapse_vertices(&edges);
    debug!(
        order_before = graph.order(),
        order_after = simplified.order(),
        size_after = simplified.size(),
        "graph simplified"
    );
    simplified
}
