//! Acyclic matchings on the face poset (discrete Morse theory).
//!
//! An acyclic matching pairs faces `σ ⊂ τ` with `|τ| = |σ| + 1`. The
//! unmatched ("critical") faces bound the homotopy type: a complex with an
//! acyclic matching whose critical faces are all of size `d` is homotopy
//! equivalent to a wedge of `(d − 1)`-spheres. The empty face is part of
//! the poset here, so a contractible complex can end with no critical face
//! at all.

use std::collections::BTreeSet;

use crate::complex::{Face, SimplicialComplex};
use crate::error::CoreError;
use crate::graph::Vertex;

/// Produces the critical faces of an acyclic matching.
///
/// `order` is the vertex order the matching should prefer; different orders
/// give different (equally valid) matchings.
pub trait MatchingOracle {
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyComplex`] when the complex has no facets.
    fn critical_faces(
        &self,
        complex: &SimplicialComplex,
        order: &[Vertex],
    ) -> Result<Vec<Face>, CoreError>;
}

/// Iterated element matching.
///
/// For each vertex `v` in turn, every still-unmatched face `σ` with `v ∉ σ`
/// is paired with `σ ∪ {v}` when that face is also unmatched. A sequence
/// of element matchings is acyclic. Vertices of the complex missing from
/// `order` are processed afterwards in ascending order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementMatching;

impl MatchingOracle for ElementMatching {
    fn critical_faces(
        &self,
        complex: &SimplicialComplex,
        order: &[Vertex],
    ) -> Result<Vec<Face>, CoreError> {
        if complex.is_void() {
            return Err(CoreError::EmptyComplex);
        }

        let mut unmatched = complex.faces(true);
        let listed: BTreeSet<Vertex> = order.iter().copied().collect();
        let sequence = order
            .iter()
            .copied()
            .filter(|v| complex.vertices().contains(v))
            .chain(complex.vertices().iter().copied().filter(|v| !listed.contains(v)));

        for v in sequence {
            let pairs: Vec<(Face, Face)> = unmatched
                .iter()
                .filter(|sigma| !sigma.contains(&v))
                .filter_map(|sigma| {
                    let mut tau = sigma.clone();
                    tau.insert(v);
                    unmatched.contains(&tau).then(|| (sigma.clone(), tau))
                })
                .collect();
            for (sigma, tau) in pairs {
                unmatched.remove(&sigma);
                unmatched.remove(&tau);
            }
        }

        Ok(unmatched.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::clique_complex;
    use crate::graph::Graph;

    fn cycle(n: u32) -> Graph {
        Graph::from_edges((0..n).map(|i| (i, (i + 1) % n)))
    }

    #[test]
    fn simplex_has_no_critical_faces() {
        let simplex = SimplicialComplex::simplex([0, 1, 2, 3]);
        let critical = ElementMatching.critical_faces(&simplex, &[2, 0, 1, 3]).expect("nonempty");
        assert!(critical.is_empty());
    }

    #[test]
    fn square_leaves_one_edge() {
        let square = clique_complex(&cycle(4));
        let critical = ElementMatching.critical_faces(&square, &[0, 1, 2, 3]).expect("nonempty");
        assert_eq!(critical, vec![Face::from([2, 3])]);
    }

    #[test]
    fn two_points_leave_one_vertex() {
        let pair = SimplicialComplex::from_faces([Face::from([0]), Face::from([1])]);
        let critical = ElementMatching.critical_faces(&pair, &[]).expect("nonempty");
        assert_eq!(critical, vec![Face::from([1])]);
    }

    #[test]
    fn same_order_same_answer() {
        let c = clique_complex(&cycle(6));
        let order = [5, 3, 1, 0, 2, 4];
        let first = ElementMatching.critical_faces(&c, &order).expect("nonempty");
        let second = ElementMatching.critical_faces(&c, &order).expect("nonempty");
        assert_eq!(first, second);
    }

    #[test]
    fn void_complex_is_rejected() {
        let void = SimplicialComplex::default();
        assert_eq!(ElementMatching.critical_faces(&void, &[]), Err(CoreError::EmptyComplex));
    }
}
