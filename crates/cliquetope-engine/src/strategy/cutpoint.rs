//! Wedge decomposition at an articulation vertex.

use cliquetope_core::Graph;
use tracing::debug;

use super::{Classify, classify_all};
use crate::betti::BettiSequence;
use crate::error::EngineError;
use crate::homotopy::HomotopyType;

/// Pieces `G[Cᵢ ∪ {c}]` for the components `Cᵢ` of `G − c`, where `c` is
/// the first articulation vertex. Their clique complexes meet only in `c`.
#[must_use]
pub fn cutpoint_pieces(graph: &Graph) -> Option<Vec<Graph>> {
    let &c = graph.articulation_points().first()?;
    let pieces = graph
        .remove_vertex(c)
        .component_vertex_sets()
        .into_iter()
        .map(|mut side| {
            side.insert(c);
            graph.induced_subgraph(&side)
        })
        .collect();
    debug!(cutpoint = c, "articulation vertex");
    Some(pieces)
}

/// # Errors
///
/// Propagates failures from classifying the pieces.
pub fn try_cutpoint(
    engine: &mut dyn Classify,
    graph: &Graph,
) -> Result<Option<HomotopyType>, EngineError> {
    let Some(pieces) = cutpoint_pieces(graph) else {
        return Ok(None);
    };
    let Some(types) = classify_all(engine, &pieces)? else {
        return Ok(None);
    };
    let betti: BettiSequence = types.iter().map(HomotopyType::betti).sum();
    Ok(Some(HomotopyType::from_betti(&betti)))
}
