//! Typed homotopy descriptors.
//!
//! Every certified descriptor is a wedge of spheres (possibly empty, i.e.
//! contractible), so its structure is fully captured by a reduced Betti
//! sequence. Combination rules therefore go through [`BettiSequence`] and
//! are normalized back with [`HomotopyType::from_betti`].

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::betti::BettiSequence;

/// Homotopy type of a clique complex, as far as it could be certified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HomotopyType {
    Contractible,
    /// Wedge of `count ≥ 1` spheres of one dimension.
    Spheres { dimension: usize, count: usize },
    /// Wedge of spheres of several dimensions, keyed by dimension.
    MixedWedge { spheres: BTreeMap<usize, usize> },
    /// Betti numbers whose wedge structure could not be certified.
    Unresolved { betti: BettiSequence },
}

impl HomotopyType {
    /// A single sphere.
    #[must_use]
    pub const fn sphere(dimension: usize) -> Self {
        Self::Spheres {
            dimension,
            count: 1,
        }
    }

    /// The wedge of spheres with the given reduced Betti numbers.
    #[must_use]
    pub fn from_betti(betti: &BettiSequence) -> Self {
        let mut terms = betti.nonzero();
        match (terms.next(), terms.next()) {
            (None, _) => Self::Contractible,
            (Some((dimension, count)), None) => Self::Spheres { dimension, count },
            _ => Self::MixedWedge {
                spheres: betti.nonzero().collect(),
            },
        }
    }

    /// Reduced Betti numbers of this descriptor.
    #[must_use]
    pub fn betti(&self) -> BettiSequence {
        match self {
            Self::Contractible => BettiSequence::default(),
            Self::Spheres { dimension, count } => BettiSequence::monomial(*dimension, *count),
            Self::MixedWedge { spheres } => spheres
                .iter()
                .map(|(&d, &c)| BettiSequence::monomial(d, c))
                .sum(),
            Self::Unresolved { betti } => betti.clone(),
        }
    }

    /// `false` only for [`HomotopyType::Unresolved`].
    #[must_use]
    pub const fn is_certified(&self) -> bool {
        !matches!(self, Self::Unresolved { .. })
    }

    /// Keep the certification of `self` while replacing its Betti numbers.
    fn rebuild(&self, betti: &BettiSequence) -> Self {
        if self.is_certified() {
            Self::from_betti(betti)
        } else {
            Self::Unresolved {
                betti: betti.clone(),
            }
        }
    }

    /// Wedge sum. Certified only when both sides are.
    #[must_use]
    pub fn wedge(&self, other: &Self) -> Self {
        let betti = &self.betti() + &other.betti();
        if other.is_certified() {
            self.rebuild(&betti)
        } else {
            Self::Unresolved { betti }
        }
    }

    /// `D ∨ ⋁ₙ₋₁ S¹`: the effect of attaching `n` arcs between points of
    /// a connected space, as for a vertex whose link is `n` points.
    #[must_use]
    pub fn combine_suspend(&self, n: usize) -> Self {
        let circles = BettiSequence::monomial(1, n.saturating_sub(1));
        self.rebuild(&(&self.betti() + &circles))
    }

    /// Suspension: every sphere moves up one dimension.
    #[must_use]
    pub fn suspend(&self) -> Self {
        self.rebuild(&self.betti().shift(1))
    }

    /// A certified descriptor with at least one circle in the wedge.
    #[must_use]
    pub fn mentions_circle(&self) -> bool {
        self.is_certified() && self.betti().get(1) > 0
    }
}

fn write_term(f: &mut fmt::Formatter<'_>, dimension: usize, count: usize) -> fmt::Result {
    if count == 1 {
        write!(f, "S^{{{dimension}}}")
    } else {
        write!(f, "\\vee_{{{count}}}S^{{{dimension}}}")
    }
}

/// TeX rendering: `Contractible`, `\(S^{1}\)`, `\(\vee_{2}S^{1}\)`,
/// `\(S^{1}\vee \vee_{3}S^{2}\)`. Unresolved types print their Betti list.
impl fmt::Display for HomotopyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contractible => write!(f, "Contractible"),
            Self::Spheres { dimension, count } => {
                write!(f, "\\(")?;
                write_term(f, *dimension, *count)?;
                write!(f, "\\)")
            }
            Self::MixedWedge { spheres } => {
                write!(f, "\\(")?;
                for (i, (&dimension, &count)) in spheres.iter().enumerate() {
                    if i > 0 {
                        write!(f, "\\vee ")?;
                    }
                    write_term(f, dimension, count)?;
                }
                write!(f, "\\)")
            }
            Self::Unresolved { betti } => write!(f, "{betti}"),
        }
    }
}
