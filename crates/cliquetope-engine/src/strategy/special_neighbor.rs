//! Vertices whose link is two disjoint simplices.

use cliquetope_core::{Graph, Vertex};
use tracing::debug;

use super::Classify;
use crate::error::EngineError;
use crate::homotopy::HomotopyType;

/// `true` when `G[N(v)]` is exactly two disjoint complete graphs.
#[must_use]
pub fn has_special_neighborhood(graph: &Graph, v: Vertex) -> bool {
    let components = graph.open_neighborhood(v).connected_components();
    components.len() == 2 && components.iter().all(Graph::is_complete)
}

/// First vertex with a special neighbourhood whose removal keeps the graph
/// connected.
#[must_use]
pub fn special_neighbor(graph: &Graph) -> Option<Vertex> {
    graph
        .vertices()
        .into_iter()
        .find(|&v| has_special_neighborhood(graph, v) && graph.remove_vertex(v).is_connected())
}

/// Removing such a vertex deletes a cone over two points glued into a
/// connected complex, which is one circle: `K(G) ≃ K(G − v) ∨ S¹`.
///
/// # Errors
///
/// Propagates failures from classifying `G − v`.
pub fn try_special_neighbor(
    engine: &mut dyn Classify,
    graph: &Graph,
) -> Result<Option<HomotopyType>, EngineError> {
    let Some(v) = special_neighbor(graph) else {
        return Ok(None);
    };
    debug!(vertex = v, "special neighbourhood");
    let inner = engine.homotopy(&graph.remove_vertex(v))?;
    Ok(inner.is_certified().then(|| inner.combine_suspend(2)))
}
