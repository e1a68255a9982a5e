//! Disconnected complement: the clique complex is a join.

use cliquetope_core::Graph;
use tracing::debug;

use super::{Classify, classify_all};
use crate::betti::BettiSequence;
use crate::error::EngineError;
use crate::homotopy::HomotopyType;

/// When the complement of `graph` splits into components `C₁ … Cₙ`, every
/// vertex of `Cᵢ` is adjacent to every vertex of `Cⱼ`, so the clique
/// complex is the join of the clique complexes of the `G[Cᵢ]`.
///
/// # Errors
///
/// Propagates failures from classifying the parts.
pub fn try_join(
    engine: &mut dyn Classify,
    graph: &Graph,
) -> Result<Option<HomotopyType>, EngineError> {
    let parts = graph.complement().component_vertex_sets();
    if parts.len() < 2 {
        return Ok(None);
    }
    debug!(parts = parts.len(), "complement disconnected");

    let subgraphs: Vec<Graph> = parts.iter().map(|p| graph.induced_subgraph(p)).collect();
    let Some(types) = classify_all(engine, &subgraphs)? else {
        return Ok(None);
    };
    let factors: Vec<BettiSequence> = types.iter().map(HomotopyType::betti).collect();
    Ok(Some(HomotopyType::from_betti(&BettiSequence::join(&factors))))
}
