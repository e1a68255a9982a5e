//! Abstract simplicial complexes stored by their facets.
//!
//! A [`SimplicialComplex`] is the downward closure of its facets. The empty
//! face belongs to every complex, including the one with no facets (the
//! "void" link of an isolated vertex). Every derived view (link, deletion,
//! star, intersection, collapse) returns a new complex.

use std::collections::BTreeSet;

use tracing::trace;

use crate::graph::{Graph, Vertex, maximal_cliques};

/// A face: a finite vertex set.
pub type Face = BTreeSet<Vertex>;

/// A simplicial complex described by its maximal faces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SimplicialComplex {
    vertices: BTreeSet<Vertex>,
    facets: BTreeSet<Face>,
}

impl SimplicialComplex {
    /// Downward closure of `faces`. Non-maximal and empty inputs are
    /// dropped.
    #[must_use]
    pub fn from_faces<I>(faces: I) -> Self
    where
        I: IntoIterator<Item = Face>,
    {
        let mut candidates: Vec<Face> = faces.into_iter().filter(|f| !f.is_empty()).collect();
        candidates.sort_by_key(|f| std::cmp::Reverse(f.len()));

        let mut facets: Vec<Face> = Vec::with_capacity(candidates.len());
        for face in candidates {
            if !facets.iter().any(|kept| face.is_subset(kept)) {
                facets.push(face);
            }
        }

        let vertices = facets.iter().flatten().copied().collect();
        Self {
            vertices,
            facets: facets.into_iter().collect(),
        }
    }

    /// The full simplex on `vertices`.
    #[must_use]
    pub fn simplex<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = Vertex>,
    {
        Self::from_faces([vertices.into_iter().collect()])
    }

    /// A single point.
    #[must_use]
    pub fn point(v: Vertex) -> Self {
        Self::simplex([v])
    }

    #[must_use]
    pub const fn vertices(&self) -> &BTreeSet<Vertex> {
        &self.vertices
    }

    #[must_use]
    pub const fn facets(&self) -> &BTreeSet<Face> {
        &self.facets
    }

    /// `true` when the complex has no vertices (it is `{∅}`).
    #[must_use]
    pub fn is_void(&self) -> bool {
        self.facets.is_empty()
    }

    /// Size of the largest facet minus one; `None` for the void complex.
    #[must_use]
    pub fn dimension(&self) -> Option<usize> {
        self.facets.iter().map(|f| f.len() - 1).max()
    }

    /// `true` when `face` lies in some facet. The empty face always does.
    #[must_use]
    pub fn contains_face(&self, face: &Face) -> bool {
        face.is_empty() || self.facets.iter().any(|f| face.is_subset(f))
    }

    /// Every face, optionally including the empty one.
    #[must_use]
    pub fn faces(&self, include_empty: bool) -> BTreeSet<Face> {
        let mut faces = BTreeSet::new();
        for facet in &self.facets {
            let members: Vec<Vertex> = facet.iter().copied().collect();
            collect_subsets(&members, &mut Face::new(), &mut faces);
        }
        if !include_empty {
            faces.remove(&Face::new());
        }
        faces
    }

    /// Faces `σ` with `v ∉ σ` and `σ ∪ {v}` a face.
    #[must_use]
    pub fn link(&self, v: Vertex) -> Self {
        Self::from_faces(self.facets.iter().filter(|f| f.contains(&v)).map(|f| {
            let mut rest = f.clone();
            rest.remove(&v);
            rest
        }))
    }

    /// Faces not containing `v`.
    #[must_use]
    pub fn deletion(&self, v: Vertex) -> Self {
        Self::from_faces(self.facets.iter().map(|f| {
            let mut rest = f.clone();
            rest.remove(&v);
            rest
        }))
    }

    /// Union of the facets containing `v`.
    #[must_use]
    pub fn star(&self, v: Vertex) -> Self {
        Self::from_faces(self.facets.iter().filter(|f| f.contains(&v)).cloned())
    }

    /// Union of the stars of the vertices of `simplex`.
    #[must_use]
    pub fn star_cluster(&self, simplex: &Face) -> Self {
        Self::from_faces(
            self.facets
                .iter()
                .filter(|f| !f.is_disjoint(simplex))
                .cloned(),
        )
    }

    /// Faces belonging to both complexes.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self::from_faces(self.facets.iter().flat_map(|a| {
            other
                .facets
                .iter()
                .map(move |b| a.intersection(b).copied().collect::<Face>())
        }))
    }

    /// `true` when `face` is not a facet and lies in exactly one facet.
    #[must_use]
    pub fn is_free_face(&self, face: &Face) -> bool {
        !self.facets.contains(face) && self.facets.iter().filter(|f| face.is_subset(f)).count() == 1
    }

    /// A free face of maximal size, if any.
    ///
    /// Any face contained in a single facet `F` sits below a codimension-one
    /// face of `F` with the same property, so only those are inspected.
    #[must_use]
    pub fn find_free_face(&self) -> Option<Face> {
        for facet in &self.facets {
            for &x in facet {
                let mut candidate = facet.clone();
                candidate.remove(&x);
                let shared = self
                    .facets
                    .iter()
                    .any(|other| other != facet && candidate.is_subset(other));
                if !shared {
                    return Some(candidate);
                }
            }
        }
        None
    }

    /// Elementary collapse removing `face` and every face between it and its
    /// unique facet. Returns `None` when `face` is not free.
    #[must_use]
    pub fn remove_free_face(&self, face: &Face) -> Option<Self> {
        if !self.is_free_face(face) {
            return None;
        }
        let owner = self.facets.iter().find(|f| face.is_subset(f))?;
        let remaining = self.facets.iter().filter(|f| *f != owner).cloned();
        let shrunk = face.iter().map(|x| {
            let mut smaller = owner.clone();
            smaller.remove(x);
            smaller
        });
        Some(Self::from_faces(remaining.chain(shrunk)))
    }

    /// Remove free faces until none remain or at most one vertex is left.
    ///
    /// The empty face is never removed: it is free only in a one-vertex
    /// complex, where the loop has already stopped. A lone simplex therefore
    /// shrinks to a single point and a nonempty input never yields an empty
    /// result.
    #[must_use]
    pub fn collapse(&self) -> Self {
        let mut current = self.clone();
        while current.vertices.len() > 1 {
            let Some(face) = current.find_free_face() else {
                break;
            };
            trace!(?face, "removing free face");
            match current.remove_free_face(&face) {
                Some(next) => current = next,
                None => break,
            }
        }
        current
    }
}

fn collect_subsets(members: &[Vertex], prefix: &mut Face, out: &mut BTreeSet<Face>) {
    let Some((&first, rest)) = members.split_first() else {
        out.insert(prefix.clone());
        return;
    };
    collect_subsets(rest, prefix, out);
    prefix.insert(first);
    collect_subsets(rest, prefix, out);
    prefix.remove(&first);
}

/// The clique complex of `graph`: its facets are the maximal cliques.
#[must_use]
pub fn clique_complex(graph: &Graph) -> SimplicialComplex {
    SimplicialComplex::from_faces(maximal_cliques(graph))
}
