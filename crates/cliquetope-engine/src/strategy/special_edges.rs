//! Splitting along edges whose endpoints share no neighbour.

use cliquetope_core::{Graph, Vertex};
use tracing::debug;

use super::{Classify, classify_all};
use crate::betti::BettiSequence;
use crate::error::EngineError;
use crate::homotopy::HomotopyType;

/// Edges `uv` with `N(u) ∩ N(v) = ∅` and both degrees above two.
#[must_use]
pub fn special_edges(graph: &Graph) -> Vec<(Vertex, Vertex)> {
    graph
        .edges()
        .into_iter()
        .filter(|&(u, v)| {
            graph.degree(u) > 2
                && graph.degree(v) > 2
                && graph.neighbors(u).is_disjoint(&graph.neighbors(v))
        })
        .collect()
}

/// When removing every special edge leaves exactly two components, the
/// clique complex is the two sides joined by `m` bare edges: the wedge of
/// both sides with `m − 1` circles.
///
/// # Errors
///
/// Propagates failures from classifying the sides.
pub fn try_special_edges(
    engine: &mut dyn Classify,
    graph: &Graph,
) -> Result<Option<HomotopyType>, EngineError> {
    let cut = special_edges(graph);
    if cut.is_empty() {
        return Ok(None);
    }
    let sides = graph.remove_edges(&cut).component_vertex_sets();
    let [left, right] = sides.as_slice() else {
        return Ok(None);
    };

    let crossing = cut
        .iter()
        .filter(|(u, v)| left.contains(u) != left.contains(v))
        .count();
    debug!(special = cut.len(), crossing, "special edges split the graph");

    let parts = [graph.induced_subgraph(left), graph.induced_subgraph(right)];
    let Some(types) = classify_all(engine, &parts)? else {
        return Ok(None);
    };
    let betti: BettiSequence = types
        .iter()
        .map(HomotopyType::betti)
        .chain([BettiSequence::monomial(1, crossing.saturating_sub(1))])
        .sum();
    Ok(Some(HomotopyType::from_betti(&betti)))
}
