//! Finite simple graphs and the combinatorics the homotopy engine consumes.
//!
//! # Overview
//!
//! [`Graph`] is a thin value type over petgraph's `UnGraphMap`. Vertex labels
//! are plain `u32`s and survive every derivation (vertex removal, induced
//! subgraphs, complements), so a vertex found in one graph can be looked up
//! in any graph derived from it. Nothing here mutates a graph in place once
//! it has been handed out; derivations clone.
//!
//! ## Submodules
//!
//! ```text
//! dominated   dominated vertices, pared graphs, dismantlability
//! reduce      s-collapses of vertices and edges (homotopy-preserving)
//! cliques     maximal cliques, clique graphs, the clique-Helly test
//! ```

pub mod cliques;
pub mod dominated;
pub mod reduce;

use std::collections::{BTreeMap, BTreeSet};

use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;

pub use cliques::{clique_graph, is_clique_helly, maximal_cliques};
pub use dominated::{dominated_vertex, has_dominated_vertex, is_dismantlable, pared_graph};
pub use reduce::{s_collapse_edges, s_collapse_vertices, simplify};

/// Vertex label.
pub type Vertex = u32;

/// An undirected simple graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    inner: UnGraphMap<Vertex, ()>,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an edgeless graph on vertices `0..n`.
    #[must_use]
    pub fn with_vertices(n: u32) -> Self {
        let mut graph = Self::new();
        for v in 0..n {
            graph.add_vertex(v);
        }
        graph
    }

    /// Build a graph from an edge list. Endpoints are added as vertices.
    #[must_use]
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Build a graph from an explicit vertex list plus edges, allowing
    /// isolated vertices.
    #[must_use]
    pub fn from_parts<V, E>(vertices: V, edges: E) -> Self
    where
        V: IntoIterator<Item = Vertex>,
        E: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut graph = Self::new();
        for v in vertices {
            graph.add_vertex(v);
        }
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    pub fn add_vertex(&mut self, v: Vertex) {
        self.inner.add_node(v);
    }

    /// Add an undirected edge. Self-loops are ignored so the graph stays simple.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) {
        if u == v {
            self.add_vertex(u);
            return;
        }
        self.inner.add_edge(u, v, ());
    }

    /// Number of vertices.
    #[must_use]
    pub fn order(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of edges.
    #[must_use]
    pub fn size(&self) -> usize {
        self.inner.edge_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order() == 0
    }

    #[must_use]
    pub fn contains_vertex(&self, v: Vertex) -> bool {
        self.inner.contains_node(v)
    }

    /// Vertices in ascending order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices: Vec<Vertex> = self.inner.nodes().collect();
        vertices.sort_unstable();
        vertices
    }

    /// Edges as `(min, max)` pairs in ascending order.
    #[must_use]
    pub fn edges(&self) -> Vec<(Vertex, Vertex)> {
        let mut edges: Vec<(Vertex, Vertex)> = self
            .inner
            .all_edges()
            .map(|(u, v, _)| (u.min(v), u.max(v)))
            .collect();
        edges.sort_unstable();
        edges
    }

    #[must_use]
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.inner.contains_edge(u, v)
    }

    /// Degree of `v`; zero for a vertex not in the graph.
    #[must_use]
    pub fn degree(&self, v: Vertex) -> usize {
        self.inner.neighbors(v).count()
    }

    /// Largest vertex degree, zero for the empty graph.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.inner
            .nodes()
            .map(|v| self.degree(v))
            .max()
            .unwrap_or(0)
    }

    /// Open neighbourhood `N(v)`.
    #[must_use]
    pub fn neighbors(&self, v: Vertex) -> BTreeSet<Vertex> {
        self.inner.neighbors(v).collect()
    }

    /// Closed neighbourhood `N[v] = N(v) ∪ {v}`.
    #[must_use]
    pub fn closed_neighborhood(&self, v: Vertex) -> BTreeSet<Vertex> {
        let mut closed = self.neighbors(v);
        closed.insert(v);
        closed
    }

    /// The graph with `v` (and its edges) removed.
    #[must_use]
    pub fn remove_vertex(&self, v: Vertex) -> Self {
        let mut inner = self.inner.clone();
        inner.remove_node(v);
        Self { inner }
    }

    /// The graph with the edge `uv` removed; vertices are kept.
    #[must_use]
    pub fn remove_edge(&self, u: Vertex, v: Vertex) -> Self {
        self.remove_edges(&[(u, v)])
    }

    #[must_use]
    pub fn remove_edges(&self, edges: &[(Vertex, Vertex)]) -> Self {
        let mut inner = self.inner.clone();
        for &(u, v) in edges {
            inner.remove_edge(u, v);
        }
        Self { inner }
    }

    /// Subgraph induced on `vertices` (labels outside the graph are ignored).
    #[must_use]
    pub fn induced_subgraph(&self, vertices: &BTreeSet<Vertex>) -> Self {
        let mut sub = Self::new();
        for &v in vertices {
            if self.contains_vertex(v) {
                sub.add_vertex(v);
            }
        }
        for (u, v) in self.edges() {
            if vertices.contains(&u) && vertices.contains(&v) {
                sub.add_edge(u, v);
            }
        }
        sub
    }

    /// Subgraph induced on the open neighbourhood of `v`.
    #[must_use]
    pub fn open_neighborhood(&self, v: Vertex) -> Self {
        self.induced_subgraph(&self.neighbors(v))
    }

    /// Vertex sets of the connected components, ordered by smallest vertex.
    #[must_use]
    pub fn component_vertex_sets(&self) -> Vec<BTreeSet<Vertex>> {
        let mut seen: BTreeSet<Vertex> = BTreeSet::new();
        let mut components = Vec::new();

        for start in self.vertices() {
            if seen.contains(&start) {
                continue;
            }
            let mut component = BTreeSet::new();
            let mut bfs = Bfs::new(&self.inner, start);
            while let Some(v) = bfs.next(&self.inner) {
                component.insert(v);
            }
            seen.extend(component.iter().copied());
            components.push(component);
        }

        components
    }

    /// Connected components as induced subgraphs.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Self> {
        self.component_vertex_sets()
            .iter()
            .map(|vertices| self.induced_subgraph(vertices))
            .collect()
    }

    /// `true` for a nonempty graph with a single component.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.is_empty() && self.component_vertex_sets().len() == 1
    }

    /// Complement graph on the same vertex set.
    #[must_use]
    pub fn complement(&self) -> Self {
        let vertices = self.vertices();
        let mut complement = Self::from_parts(vertices.iter().copied(), std::iter::empty());
        for (i, &u) in vertices.iter().enumerate() {
            for &v in &vertices[i + 1..] {
                if !self.has_edge(u, v) {
                    complement.add_edge(u, v);
                }
            }
        }
        complement
    }

    /// `true` when every pair of distinct vertices is adjacent.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let n = self.order();
        self.size() == n * n.saturating_sub(1) / 2
    }

    /// Cut vertices: removing any of them increases the component count.
    #[must_use]
    pub fn articulation_points(&self) -> Vec<Vertex> {
        let mut search = Lowpoint::default();
        for root in self.vertices() {
            if search.discovered.contains_key(&root) {
                continue;
            }
            if search.visit(self, root, None) > 1 {
                search.cuts.insert(root);
            }
        }
        search.cuts.into_iter().collect()
    }

    /// Copy of the graph with vertices renamed to `0..n` in ascending order.
    #[must_use]
    pub fn relabeled(&self) -> Self {
        let index: BTreeMap<Vertex, Vertex> = self
            .vertices()
            .into_iter()
            .zip(0..)
            .collect();
        let mut relabeled = Self::from_parts(index.values().copied(), std::iter::empty());
        for (u, v) in self.edges() {
            relabeled.add_edge(index[&u], index[&v]);
        }
        relabeled
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.vertices() == other.vertices() && self.edges() == other.edges()
    }
}

impl Eq for Graph {}

/// Tarjan lowpoint bookkeeping for [`Graph::articulation_points`].
#[derive(Default)]
struct Lowpoint {
    timer: usize,
    discovered: BTreeMap<Vertex, usize>,
    low: BTreeMap<Vertex, usize>,
    cuts: BTreeSet<Vertex>,
}

impl Lowpoint {
    /// DFS from `v`; returns the number of DFS children.
    fn visit(&mut self, graph: &Graph, v: Vertex, parent: Option<Vertex>) -> usize {
        self.timer += 1;
        let entered = self.timer;
        self.discovered.insert(v, entered);
        self.low.insert(v, entered);

        let mut children = 0;
        for w in graph.neighbors(v) {
            if Some(w) == parent {
                continue;
            }
            if let Some(&seen_at) = self.discovered.get(&w) {
                self.lower(v, seen_at);
                continue;
            }

            children += 1;
            self.visit(graph, w, Some(v));
            let child_low = self.low.get(&w).copied().unwrap_or(usize::MAX);
            self.lower(v, child_low);
            if parent.is_some() && child_low >= entered {
                self.cuts.insert(v);
            }
        }
        children
    }

    fn lower(&mut self, v: Vertex, candidate: usize) {
        if let Some(low) = self.low.get_mut(&v) {
            *low = (*low).min(candidate);
        }
    }
}
