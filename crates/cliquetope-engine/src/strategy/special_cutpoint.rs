//! Closed formula for the clique graph around a special cutpoint.
//!
//! A vertex `v` is a special cutpoint when its neighbourhood is independent
//! and no neighbour is a leaf. Each edge at `v` is then a maximal clique,
//! and these `s = deg v` cliques pairwise meet in `v`. In `K(G)` they form
//! a complete subgraph attached to the clique graphs of the components of
//! `G − v`, which gives
//! `K(G) ≃ (⋁ᵢ K(Hᵢ)) ∨ ⋁_{s − c} S¹` for `c` components `Hᵢ`.

use cliquetope_core::graph::{clique_graph, pared_graph};
use cliquetope_core::{Graph, Vertex};
use tracing::debug;

use super::Classify;
use crate::error::EngineError;
use crate::homotopy::HomotopyType;

/// First special cutpoint of a connected graph, in ascending order.
#[must_use]
pub fn find_special_cutpoint(graph: &Graph) -> Option<Vertex> {
    if !graph.is_connected() {
        return None;
    }
    graph.vertices().into_iter().find(|&v| {
        let hood = graph.neighbors(v);
        !hood.is_empty()
            && graph.open_neighborhood(v).size() == 0
            && hood.iter().all(|&u| graph.degree(u) != 1)
    })
}

/// Homotopy type of the clique complex of `K(graph)` via the special
/// cutpoint `v`. Declines when a component of `graph − v` does not touch
/// `v`, when a component's clique graph is over the size limit, or when its
/// type is not certified.
///
/// # Errors
///
/// Propagates failures from classifying the components' clique graphs.
pub fn classify_special_cutpoint(
    engine: &mut dyn Classify,
    graph: &Graph,
    v: Vertex,
) -> Result<Option<HomotopyType>, EngineError> {
    let components = graph.remove_vertex(v).connected_components();
    let hood = graph.neighbors(v);
    if components
        .iter()
        .any(|component| hood.iter().all(|&u| !component.contains_vertex(u)))
    {
        return Ok(None);
    }
    let limit = engine.clique_graph_limit();

    let mut wedge = HomotopyType::Contractible;
    for component in &components {
        let Some(k) = clique_graph(component, Some(limit)) else {
            return Ok(None);
        };
        let homotopy = engine.homotopy(&pared_graph(&k).relabeled())?;
        if !homotopy.is_certified() {
            return Ok(None);
        }
        wedge = wedge.wedge(&homotopy);
    }

    let degree = graph.degree(v);
    debug!(vertex = v, degree, components = components.len(), "special cutpoint");
    Ok(Some(wedge.combine_suspend((degree + 1).saturating_sub(components.len()))))
}
