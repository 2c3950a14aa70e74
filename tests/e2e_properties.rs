//! Property tests over random graphs on up to six vertices.

use std::collections::HashSet;
use std::sync::OnceLock;

use orderly_graphs::export::{from_adjacency_string, to_adjacency_string};
use orderly_graphs::{
    are_isomorphic, augment, canonical_code, code, is_canonical, pair_count, unlabeled, Graph,
};
use proptest::prelude::*;

/// A random graph: vertex count plus one coin per pair.
fn arb_graph(max_n: usize) -> impl Strategy<Value = Graph> {
    (1..=max_n).prop_flat_map(|n| {
        proptest::collection::vec(any::<bool>(), pair_count(n)).prop_map(move |bits| {
            let mut edges = Vec::new();
            let mut k = 0;
            for u in 1..=n {
                for v in (u + 1)..=n {
                    if bits[k] {
                        edges.push((u, v));
                    }
                    k += 1;
                }
            }
            Graph::from_edges(n, &edges).unwrap()
        })
    })
}

/// Canonical codes of every class on n vertices, computed once per n.
fn class_codes(n: usize) -> &'static HashSet<u128> {
    static CACHE: OnceLock<Vec<HashSet<u128>>> = OnceLock::new();
    let all = CACHE.get_or_init(|| {
        (1..=5)
            .map(|n| unlabeled(n).unwrap().map(|g| g.natural_code()).collect())
            .collect()
    });
    &all[n - 1]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn complement_is_an_involution(g in arb_graph(6)) {
        let c = g.complement();
        prop_assert_eq!(c.edge_count() + g.edge_count(), pair_count(g.order()));
        prop_assert_eq!(c.complement(), g);
    }

    #[test]
    fn identity_ordering_gives_natural_code(g in arb_graph(6)) {
        let identity: Vec<usize> = g.vertices().collect();
        prop_assert_eq!(code(&g, Some(identity.as_slice())).unwrap(), code(&g, None).unwrap());
        prop_assert_eq!(code(&g, None).unwrap(), code(&g, None).unwrap());
    }

    #[test]
    fn canonical_code_survives_relabeling(g in arb_graph(6), a in 1usize..=6, b in 1usize..=6) {
        prop_assume!(a <= g.order() && b <= g.order());
        let h = g.relabeled(a, b).unwrap();
        prop_assert_eq!(canonical_code(&h), canonical_code(&g));
        prop_assert!(are_isomorphic(&g, &h));
    }

    #[test]
    fn canonicity_means_maximal_natural_code(g in arb_graph(6)) {
        prop_assert_eq!(is_canonical(&g), g.natural_code() == canonical_code(&g));
        prop_assert!(g.natural_code() <= canonical_code(&g));
    }

    #[test]
    fn every_class_is_enumerated(g in arb_graph(5)) {
        prop_assert!(class_codes(g.order()).contains(&canonical_code(&g)));
    }

    #[test]
    fn augmentation_adds_exactly_one_edge(g in arb_graph(6)) {
        let children: Vec<Graph> = augment(&g).collect();
        prop_assert_eq!(children.len(), pair_count(g.order()) - g.edge_count());
        for child in &children {
            prop_assert_eq!(child.edge_count(), g.edge_count() + 1);
            for (u, v) in g.edges() {
                prop_assert!(child.is_adjacent(u, v).unwrap());
            }
        }
    }

    #[test]
    fn adjacency_string_round_trip(g in arb_graph(6)) {
        let bits = to_adjacency_string(&g);
        prop_assert_eq!(bits.len(), pair_count(g.order()));
        prop_assert_eq!(from_adjacency_string(&bits).unwrap(), g);
    }
}
