//! Interpreting acyclic matchings and retrying them with shuffled orders.

use cliquetope_core::{CoreError, Face, MatchingOracle, SimplicialComplex, Vertex};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::cancel::Cancellation;
use crate::error::EngineError;
use crate::homotopy::HomotopyType;

/// What one matching run says about a complex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Resolved(HomotopyType),
    /// Critical faces of different sizes; nothing is certified.
    Inconclusive { critical: usize },
}

/// Chooses the vertex order handed to the matching oracle.
pub trait VertexOrder {
    fn order(&mut self, vertices: &[Vertex]) -> Vec<Vertex>;
}

/// Ascending labels, always the same matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityOrder;

impl VertexOrder for IdentityOrder {
    fn order(&mut self, vertices: &[Vertex]) -> Vec<Vertex> {
        let mut ordered = vertices.to_vec();
        ordered.sort_unstable();
        ordered
    }
}

/// Uniform random permutation drawn from `R`.
#[derive(Debug, Clone)]
pub struct ShuffledOrder<R> {
    rng: R,
}

impl<R> ShuffledOrder<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl ShuffledOrder<StdRng> {
    /// Reproducible shuffles.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: rand::Rng> VertexOrder for ShuffledOrder<R> {
    fn order(&mut self, vertices: &[Vertex]) -> Vec<Vertex> {
        let mut shuffled = vertices.to_vec();
        shuffled.shuffle(&mut self.rng);
        shuffled
    }
}

/// Read critical faces (empty face included) as a homotopy type.
///
/// No critical face means contractible; `k` critical faces that all have
/// `d ≥ 1` vertices mean a wedge of `k` spheres of dimension `d − 1`.
#[must_use]
pub fn interpret(critical: &[Face]) -> MatchOutcome {
    let Some(first) = critical.first() else {
        return MatchOutcome::Resolved(HomotopyType::Contractible);
    };
    let size = first.len();
    if size == 0 || critical.iter().any(|face| face.len() != size) {
        return MatchOutcome::Inconclusive {
            critical: critical.len(),
        };
    }
    MatchOutcome::Resolved(HomotopyType::Spheres {
        dimension: size - 1,
        count: critical.len(),
    })
}

/// Run the oracle once with the order chosen by `order`.
///
/// # Errors
///
/// Propagates oracle failures (for example an empty complex).
pub fn try_acyclic_matching<M, O>(
    oracle: &M,
    complex: &SimplicialComplex,
    order: &mut O,
) -> Result<MatchOutcome, CoreError>
where
    M: MatchingOracle + ?Sized,
    O: VertexOrder + ?Sized,
{
    let vertices: Vec<Vertex> = complex.vertices().iter().copied().collect();
    let sequence = order.order(&vertices);
    let critical = oracle.critical_faces(complex, &sequence)?;
    let outcome = interpret(&critical);
    trace!(critical = critical.len(), ?outcome, "matching run");
    Ok(outcome)
}

/// Up to `attempts` shuffled runs; the first conclusive one wins.
///
/// # Errors
///
/// Propagates oracle failures and cancellation.
pub fn retry_randomized<M, O>(
    oracle: &M,
    complex: &SimplicialComplex,
    order: &mut O,
    attempts: usize,
    cancel: &Cancellation,
) -> Result<Option<HomotopyType>, EngineError>
where
    M: MatchingOracle + ?Sized,
    O: VertexOrder + ?Sized,
{
    for attempt in 1..=attempts {
        cancel.check()?;
        if let MatchOutcome::Resolved(homotopy) = try_acyclic_matching(oracle, complex, order)? {
            debug!(attempt, "shuffled matching resolved");
            return Ok(Some(homotopy));
        }
    }
    Ok(None)
}
