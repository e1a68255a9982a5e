//! Star-cluster reduction around an apex vertex.
//!
//! Let `v` be a vertex whose non-neighbours `S` span a clique. Every maximal
//! clique either contains `v` or meets `S`, so the clique complex is
//! `st(v) ∪ st(S)`. Both pieces are contractible (a cone and a star
//! cluster of a simplex in a flag complex), hence the complex is the
//! suspension of `st(v) ∩ st(S)`.

use cliquetope_core::{Face, Graph, Vertex, clique_complex};
use tracing::debug;

use super::Classify;
use crate::error::EngineError;
use crate::homotopy::HomotopyType;

/// First vertex whose non-neighbours form a clique, with those
/// non-neighbours.
#[must_use]
pub fn apex(graph: &Graph) -> Option<(Vertex, Face)> {
    graph.vertices().into_iter().find_map(|v| {
        let closed = graph.closed_neighborhood(v);
        let rest: Face = graph
            .vertices()
            .into_iter()
            .filter(|u| !closed.contains(u))
            .collect();
        graph.induced_subgraph(&rest).is_complete().then_some((v, rest))
    })
}

/// # Errors
///
/// Propagates failures from resolving the intersection complex.
pub fn try_star_cluster(
    engine: &mut dyn Classify,
    graph: &Graph,
) -> Result<Option<HomotopyType>, EngineError> {
    let Some((v, rest)) = apex(graph) else {
        return Ok(None);
    };
    if rest.is_empty() {
        debug!(vertex = v, "universal vertex");
        return Ok(Some(HomotopyType::Contractible));
    }

    let complex = clique_complex(graph);
    let meet = complex.star(v).intersection(&complex.star_cluster(&rest));
    debug!(vertex = v, facets = meet.facets().len(), "star cluster intersection");
    if meet.is_void() {
        return Ok(Some(HomotopyType::Spheres {
            dimension: 0,
            count: 1,
        }));
    }

    let inner = engine.resolve_complex(&meet)?.homotopy;
    Ok(inner.is_certified().then(|| inner.suspend()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::testing::{cycle, engine, octahedron, two_squares};

    #[test]
    fn apex_of_pentagon() {
        assert_eq!(apex(&cycle(5)), Some((0, Face::from([2, 3]))));
    }

    #[test]
    fn no_apex_in_long_cycles() {
        assert_eq!(apex(&cycle(6)), None);
        assert_eq!(apex(&two_squares()), None);
    }

    #[test]
    fn pentagon_is_a_circle() {
        let found = try_star_cluster(&mut engine(), &cycle(5)).expect("ok");
        assert_eq!(found, Some(HomotopyType::sphere(1)));
    }

    #[test]
    fn universal_vertex_is_a_cone() {
        let star = Graph::from_edges([(0, 1), (0, 2), (0, 3)]);
        let found = try_star_cluster(&mut engine(), &star).expect("ok");
        assert_eq!(found, Some(HomotopyType::Contractible));
    }

    #[test]
    fn twin_of_octahedron_vertex() {
        // Vertex 6 copies the neighbourhood of 1, so the non-neighbours of 0
        // are the clique {1, 6} and the intersection is the square 2-4-3-5.
        let mut g = octahedron(0);
        for v in 1..6 {
            g.add_edge(6, v);
        }
        assert_eq!(apex(&g), Some((0, Face::from([1, 6]))));
        let found = try_star_cluster(&mut engine(), &g).expect("ok");
        assert_eq!(found, Some(HomotopyType::sphere(2)));
    }
}
