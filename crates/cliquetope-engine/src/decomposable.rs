//! Vertex-decomposability search.
//!
//! A complex with at most one facet is vertex decomposable. Otherwise it is
//! vertex decomposable when some shedding vertex `v` (no facet of the
//! deletion of `v` is a face of its link) has a vertex-decomposable link
//! and deletion. Vertex-decomposable complexes are homotopy equivalent to
//! wedges of spheres, which is what lets raw Betti numbers stand in for a
//! homotopy type.

use std::collections::HashMap;

use cliquetope_core::{SimplicialComplex, Vertex};
use tracing::trace;

use crate::cancel::{Cancellation, Cancelled};

/// `true` when `complex` is vertex decomposable.
///
/// # Errors
///
/// Returns [`Cancelled`] when `cancel` fires during the search.
pub fn is_vertex_decomposable(
    complex: &SimplicialComplex,
    cancel: &Cancellation,
) -> Result<bool, Cancelled> {
    let mut search = Search {
        memo: HashMap::new(),
        cancel,
    };
    search.decomposable(complex)
}

/// `true` when no facet of the deletion of `v` is a face of its link.
#[must_use]
pub fn is_shedding_vertex(complex: &SimplicialComplex, v: Vertex) -> bool {
    let link = complex.link(v);
    complex
        .deletion(v)
        .facets()
        .iter()
        .all(|facet| !link.contains_face(facet))
}

struct Search<'a> {
    memo: HashMap<SimplicialComplex, bool>,
    cancel: &'a Cancellation,
}

impl Search<'_> {
    fn decomposable(&mut self, complex: &SimplicialComplex) -> Result<bool, Cancelled> {
        if complex.facets().len() <= 1 {
            return Ok(true);
        }
        if let Some(&known) = self.memo.get(complex) {
            return Ok(known);
        }
        self.cancel.check()?;

        let mut found = false;
        for &v in complex.vertices() {
            if !is_shedding_vertex(complex, v) {
                continue;
            }
            if self.decomposable(&complex.link(v))? && self.decomposable(&complex.deletion(v))? {
                trace!(vertex = v, facets = complex.facets().len(), "shedding vertex");
                found = true;
                break;
            }
        }

        self.memo.insert(complex.clone(), found);
        Ok(found)
    }
}
