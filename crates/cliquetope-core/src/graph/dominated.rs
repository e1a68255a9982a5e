//! Dominated vertices and pared graphs.
//!
//! A vertex `v` is dominated by `w ≠ v` when `N[v] ⊆ N[w]`. Removing a
//! dominated vertex is a strong collapse of the clique complex, so it
//! preserves the homotopy type of the complex and of the clique graph's
//! complex. Repeating until no dominated vertex remains yields the pared
//! graph; a graph that pares down to a single vertex is dismantlable.

use tracing::trace;

use super::{Graph, Vertex};

/// First dominated vertex (in ascending order) together with a dominator.
#[must_use]
pub fn dominated_vertex(graph: &Graph) -> Option<(Vertex, Vertex)> {
    for v in graph.vertices() {
        let closed = graph.closed_neighborhood(v);
        for w in graph.neighbors(v) {
            if closed.is_subset(&graph.closed_neighborhood(w)) {
                return Some((v, w));
            }
        }
    }
    None
}

#[must_use]
pub fn has_dominated_vertex(graph: &Graph) -> bool {
    dominated_vertex(graph).is_some()
}

/// Remove dominated vertices until none remain.
#[must_use]
pub fn pared_graph(graph: &Graph) -> Graph {
    let mut current = graph.clone();
    while let Some((v, w)) = dominated_vertex(&current) {
        trace!(vertex = v, dominator = w, "removing dominated vertex");
        current = current.remove_vertex(v);
    }
    current
}

/// `true` for a nonempty graph whose pared graph is a single vertex.
#[must_use]
pub fn is_dismantlable(graph: &Graph) -> bool {
    !graph.is_empty() && pared_graph(graph).order() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_graph_pares_to_a_point() {
        let k4 = Graph::from_edges([(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert!(has_dominated_vertex(&k4));
        assert_eq!(pared_graph(&k4).order(), 1);
        assert!(is_dismantlable(&k4));
    }

    #[test]
    fn cycle_has_no_dominated_vertex() {
        let c5 = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        assert!(!has_dominated_vertex(&c5));
        assert_eq!(pared_graph(&c5), c5);
        assert!(!is_dismantlable(&c5));
    }

    #[test]
    fn pendant_vertex_is_dominated() {
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (3, 4)]);
        assert_eq!(dominated_vertex(&g), Some((4, 3)));
        let pared = pared_graph(&g);
        assert_eq!(pared.vertices(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn trees_are_dismantlable() {
        let tree = Graph::from_edges([(0, 1), (0, 2), (2, 3), (2, 4)]);
        assert!(is_dismantlable(&tree));
    }

    #[test]
    fn isolated_vertices_are_not_dismantlable() {
        let two_points = Graph::with_vertices(2);
        assert!(!is_dismantlable(&two_points));
        assert!(is_dismantlable(&Graph::with_vertices(1)));
        assert!(!is_dismantlable(&Graph::new()));
    }
}
