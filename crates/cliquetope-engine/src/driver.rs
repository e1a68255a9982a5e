//! The classification cascade.
//!
//! ```text
//! Simplify -> JoinComplement -> StarCluster -> SpecialNeighbor
//!          -> SpecialEdges -> Cutpoint -> Matching -> CollapsedMatching
//!          -> RandomizedMatching x N -> VertexDecomposable | Unresolved
//! ```
//!
//! Every state either certifies a homotopy type and stops, or hands the
//! graph to the next state. [`Classification::stage`] records which state
//! answered.

use std::fmt;

use cliquetope_core::graph::{clique_graph, pared_graph, simplify};
use cliquetope_core::{
    CoreError, ElementMatching, Face, Graph, HomologyOracle, MatchingOracle, RankHomology,
    SimplicialComplex, clique_complex,
};
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::betti::BettiSequence;
use crate::cancel::Cancellation;
use crate::config::EngineConfig;
use crate::decomposable::is_vertex_decomposable;
use crate::error::EngineError;
use crate::homotopy::HomotopyType;
use crate::matching::{
    IdentityOrder, MatchOutcome, ShuffledOrder, VertexOrder, retry_randomized,
    try_acyclic_matching,
};
use crate::strategy::special_cutpoint::{classify_special_cutpoint, find_special_cutpoint};
use crate::strategy::{CASCADE, Classify};

/// The cascade state that produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Simplify,
    JoinComplement,
    StarCluster,
    SpecialNeighbor,
    SpecialEdges,
    Cutpoint,
    SpecialCutpoint,
    Matching,
    CollapsedMatching,
    RandomizedMatching,
    VertexDecomposable,
    Components,
    Unresolved,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simplify => "simplify",
            Self::JoinComplement => "join_complement",
            Self::StarCluster => "star_cluster",
            Self::SpecialNeighbor => "special_neighbor",
            Self::SpecialEdges => "special_edges",
            Self::Cutpoint => "cutpoint",
            Self::SpecialCutpoint => "special_cutpoint",
            Self::Matching => "matching",
            Self::CollapsedMatching => "collapsed_matching",
            Self::RandomizedMatching => "randomized_matching",
            Self::VertexDecomposable => "vertex_decomposable",
            Self::Components => "components",
            Self::Unresolved => "unresolved",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A homotopy type together with the state that certified it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub homotopy: HomotopyType,
    pub stage: Stage,
}

impl Classification {
    #[must_use]
    pub const fn new(homotopy: HomotopyType, stage: Stage) -> Self {
        Self { homotopy, stage }
    }
}

/// Classification of a clique graph, with the pared, relabeled clique
/// graph it was computed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliqueGraphClassification {
    pub pared: Graph,
    pub classification: Classification,
}

/// Runs the cascade. Generic over the shuffle, the matching oracle, and the
/// homology oracle so tests can pin each one.
#[derive(Debug)]
pub struct HomotopyEngine<O = ShuffledOrder<StdRng>, M = ElementMatching, H = RankHomology> {
    shuffle: O,
    matching: M,
    homology: H,
    random_attempts: usize,
    clique_graph_limit: usize,
    cancel: Cancellation,
}

impl HomotopyEngine {
    /// Default oracles; shuffles seeded from `config.seed` when present.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        let shuffle = config
            .seed
            .map_or_else(ShuffledOrder::from_entropy, ShuffledOrder::seeded);
        Self::with_parts(shuffle, ElementMatching, RankHomology::default(), config)
    }
}

impl<O, M, H> HomotopyEngine<O, M, H>
where
    O: VertexOrder,
    M: MatchingOracle,
    H: HomologyOracle,
{
    pub fn with_parts(shuffle: O, matching: M, homology: H, config: &EngineConfig) -> Self {
        Self {
            shuffle,
            matching,
            homology,
            random_attempts: config.random_attempts,
            clique_graph_limit: config.clique_graph_limit,
            cancel: Cancellation::new(),
        }
    }

    /// Replace the cancellation token checked by every later call.
    pub fn set_cancellation(&mut self, cancel: Cancellation) {
        self.cancel = cancel;
    }

    #[must_use]
    pub const fn cancellation(&self) -> &Cancellation {
        &self.cancel
    }

    /// Classify the clique complex of `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyGraph`] for a graph without vertices,
    /// [`EngineError::Cancelled`] when the token fires, and oracle failures.
    #[instrument(skip_all, fields(order = graph.order(), size = graph.size()))]
    pub fn classify(&mut self, graph: &Graph) -> Result<Classification, EngineError> {
        if graph.is_empty() {
            return Err(EngineError::EmptyGraph);
        }
        self.cancel.check()?;

        if !graph.is_connected() {
            return self
                .classify_components(graph)
                .map(|homotopy| Classification::new(homotopy, Stage::Components));
        }

        let simplified = simplify(graph);
        if simplified.order() == 1 {
            return Ok(Classification::new(HomotopyType::Contractible, Stage::Simplify));
        }

        for (stage, strategy) in CASCADE {
            self.cancel.check()?;
            if let Some(homotopy) = strategy(self, &simplified)? {
                debug!(%stage, %homotopy, "strategy resolved");
                return Ok(Classification::new(homotopy, stage));
            }
        }

        self.resolve_complex(&clique_complex(&simplified))
    }

    /// Classify the clique complex of the clique graph of `graph`.
    ///
    /// Returns `None` when `K(graph)` has more vertices than the configured
    /// limit. A special cutpoint of `graph` is tried first; otherwise the
    /// cascade runs on the pared clique graph.
    ///
    /// # Errors
    ///
    /// As for [`classify`](Self::classify).
    #[instrument(skip_all, fields(order = graph.order()))]
    pub fn classify_clique_graph(
        &mut self,
        graph: &Graph,
    ) -> Result<Option<CliqueGraphClassification>, EngineError> {
        let Some(k) = clique_graph(graph, Some(self.clique_graph_limit)) else {
            return Ok(None);
        };
        let pared = pared_graph(&k).relabeled();

        if let Some(v) = find_special_cutpoint(graph) {
            if let Some(homotopy) = classify_special_cutpoint(self, graph, v)? {
                return Ok(Some(CliqueGraphClassification {
                    pared,
                    classification: Classification::new(homotopy, Stage::SpecialCutpoint),
                }));
            }
        }

        let classification = self.classify(&pared)?;
        Ok(Some(CliqueGraphClassification {
            pared,
            classification,
        }))
    }

    /// Disjoint union: points give a wedge of 0-spheres, anything else is
    /// reported through its Betti numbers only.
    fn classify_components(&mut self, graph: &Graph) -> Result<HomotopyType, EngineError> {
        let components = graph.connected_components();
        let extra_points = BettiSequence::monomial(0, components.len() - 1);

        let mut all_contractible = true;
        let mut betti = extra_points;
        for component in &components {
            let homotopy = self.classify(component)?.homotopy;
            all_contractible &= homotopy == HomotopyType::Contractible;
            betti = &betti + &homotopy.betti();
        }

        if all_contractible {
            Ok(HomotopyType::from_betti(&betti))
        } else {
            Ok(HomotopyType::Unresolved { betti })
        }
    }

    fn matching_tail(
        &mut self,
        complex: &SimplicialComplex,
    ) -> Result<Option<Classification>, EngineError> {
        if let MatchOutcome::Resolved(homotopy) =
            try_acyclic_matching(&self.matching, complex, &mut IdentityOrder)?
        {
            return Ok(Some(Classification::new(homotopy, Stage::Matching)));
        }

        let collapsed = complex.collapse();
        self.cancel.check()?;
        if let MatchOutcome::Resolved(homotopy) =
            try_acyclic_matching(&self.matching, &collapsed, &mut IdentityOrder)?
        {
            return Ok(Some(Classification::new(homotopy, Stage::CollapsedMatching)));
        }

        let found = retry_randomized(
            &self.matching,
            &collapsed,
            &mut self.shuffle,
            self.random_attempts,
            &self.cancel,
        )?;
        Ok(found.map(|homotopy| Classification::new(homotopy, Stage::RandomizedMatching)))
    }
}

impl<O, M, H> Classify for HomotopyEngine<O, M, H>
where
    O: VertexOrder,
    M: MatchingOracle,
    H: HomologyOracle,
{
    fn homotopy(&mut self, graph: &Graph) -> Result<HomotopyType, EngineError> {
        self.classify(graph).map(|c| c.homotopy)
    }

    fn resolve_complex(
        &mut self,
        complex: &SimplicialComplex,
    ) -> Result<Classification, EngineError> {
        if complex.is_void() {
            return Err(CoreError::EmptyComplex.into());
        }
        self.cancel.check()?;

        if let Some(found) = self.matching_tail(complex)? {
            return Ok(found);
        }

        let collapsed = complex.collapse();
        let facets: Vec<Face> = collapsed.facets().iter().cloned().collect();
        let betti = BettiSequence::from_unreduced(self.homology.betti_numbers(&facets)?);
        if is_vertex_decomposable(&collapsed, &self.cancel)? {
            debug!(%betti, "vertex decomposable");
            return Ok(Classification::new(
                HomotopyType::from_betti(&betti),
                Stage::VertexDecomposable,
            ));
        }
        debug!(%betti, "unresolved");
        Ok(Classification::new(
            HomotopyType::Unresolved { betti },
            Stage::Unresolved,
        ))
    }

    fn clique_graph_limit(&self) -> usize {
        self.clique_graph_limit
    }
}
