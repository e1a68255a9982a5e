//! Structural decompositions tried before any matching.
//!
//! Each strategy inspects a connected, simplified graph and either returns
//! a certified homotopy type or declines with `None`. A strategy that
//! recurses into smaller graphs declines as soon as one sub-result is
//! [`HomotopyType::Unresolved`]; it never mixes certified and uncertified
//! pieces.
//!
//! ```text
//! join               complement disconnected: join of the parts
//! star_cluster       non-neighbours of a vertex form a clique: suspension
//! special_neighbor   link is two disjoint simplices: one extra circle
//! special_edges      cut edges with disjoint neighbourhoods: wedge + circles
//! cutpoint           articulation vertex: wedge of the blocks
//! special_cutpoint   clique graphs around an independent neighbourhood
//! ```

pub mod cutpoint;
pub mod join;
pub mod special_cutpoint;
pub mod special_edges;
pub mod special_neighbor;
pub mod star_cluster;

use cliquetope_core::{Graph, SimplicialComplex};

use crate::driver::{Classification, Stage};
use crate::error::EngineError;
use crate::homotopy::HomotopyType;

/// The recursion surface strategies see.
pub trait Classify {
    /// Full cascade on a smaller graph.
    ///
    /// # Errors
    ///
    /// Propagates oracle failures and cancellation.
    fn homotopy(&mut self, graph: &Graph) -> Result<HomotopyType, EngineError>;

    /// Matching, collapse, and vertex-decomposability on an explicit
    /// complex.
    ///
    /// # Errors
    ///
    /// Propagates oracle failures and cancellation.
    fn resolve_complex(
        &mut self,
        complex: &SimplicialComplex,
    ) -> Result<Classification, EngineError>;

    /// Largest clique graph worth building.
    fn clique_graph_limit(&self) -> usize;
}

/// A graph-level strategy.
pub type Strategy = fn(&mut dyn Classify, &Graph) -> Result<Option<HomotopyType>, EngineError>;

/// Graph-level strategies in the order the driver tries them.
pub const CASCADE: [(Stage, Strategy); 5] = [
    (Stage::JoinComplement, join::try_join),
    (Stage::StarCluster, star_cluster::try_star_cluster),
    (Stage::SpecialNeighbor, special_neighbor::try_special_neighbor),
    (Stage::SpecialEdges, special_edges::try_special_edges),
    (Stage::Cutpoint, cutpoint::try_cutpoint),
];

/// Classify every part, or `None` as soon as one is not certified.
fn classify_all(
    engine: &mut dyn Classify,
    parts: &[Graph],
) -> Result<Option<Vec<HomotopyType>>, EngineError> {
    let mut types = Vec::with_capacity(parts.len());
    for part in parts {
        let homotopy = engine.homotopy(part)?;
        if !homotopy.is_certified() {
            return Ok(None);
        }
        types.push(homotopy);
    }
    Ok(Some(types))
}
