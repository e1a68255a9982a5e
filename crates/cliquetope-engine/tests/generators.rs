use cliquetope_core::Graph;
use proptest::prelude::*;

/// Random simple graph on `2..=max_order` vertices with edge density near 1/2.
pub fn arb_graph(max_order: u32) -> impl Strategy<Value = Graph> {
    (2..=max_order).prop_flat_map(|n| {
        let pairs: Vec<(u32, u32)> = (0..n)
            .flat_map(|u| (u + 1..n).map(move |v| (u, v)))
            .collect();
        proptest::collection::vec(any::<bool>(), pairs.len()).prop_map(move |keep| {
            let edges = pairs
                .iter()
                .zip(keep)
                .filter_map(|(&edge, keep)| keep.then_some(edge));
            Graph::from_parts(0..n, edges)
        })
    })
}
