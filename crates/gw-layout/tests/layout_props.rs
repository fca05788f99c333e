//! Bounds and determinism of the layout solver.

use gw_core::{Point, nearly_equal, Tolerances};
use gw_graph::{EdgeRecord, Graph, parse_edge_lines};
use gw_layout::{LayoutConfig, solve_layout};
use proptest::prelude::*;

fn square() -> Graph {
    Graph::from_records(&parse_edge_lines("A B\nB C\nC D\nA D").unwrap()).unwrap()
}

#[test]
fn fixed_seed_is_deterministic() {
    let cfg = LayoutConfig::default().with_seed(42);
    let a = solve_layout(&square(), &cfg);
    let b = solve_layout(&square(), &cfg);
    assert_eq!(a, b);
}

#[test]
fn different_seeds_differ() {
    let a = solve_layout(&square(), &LayoutConfig::default().with_seed(1));
    let b = solve_layout(&square(), &LayoutConfig::default().with_seed(2));
    assert_ne!(a, b);
}

#[test]
fn every_node_gets_a_position() {
    let g = square();
    let layout = solve_layout(&g, &LayoutConfig::default().with_seed(9));
    assert_eq!(layout.len(), g.nodes().len());
    for node in g.nodes() {
        assert!(layout.position(node.id).is_some());
    }
}

#[test]
fn margin_wider_than_half_the_area_falls_back_to_defaults() {
    let g = Graph::from_records(&[EdgeRecord::new("A", "B")]).unwrap();
    let cfg = LayoutConfig {
        margin: 300.0,
        ..LayoutConfig::default().with_seed(1)
    };
    let layout = solve_layout(&g, &cfg);
    assert_eq!(layout.len(), 2);
    assert_eq!(layout.bounds().min, Point::new(30.0, 30.0));
    assert_eq!(layout.bounds().max, Point::new(470.0, 320.0));
    assert!(layout.is_within_bounds());
}

#[test]
fn nan_width_still_yields_finite_positions() {
    let cfg = LayoutConfig {
        width: f64::NAN,
        ..LayoutConfig::default().with_seed(1)
    };
    let layout = solve_layout(&square(), &cfg);
    assert_eq!(layout.len(), 4);
    assert!(layout.iter().all(|(_, p)| p.is_finite()));
    assert!(layout.is_within_bounds());
}

#[test]
fn isolated_pair_does_not_coincide() {
    // Two disconnected edges: only repulsion keeps the components apart.
    let g = Graph::from_records(&[EdgeRecord::new("A", "B"), EdgeRecord::new("C", "D")]).unwrap();
    let layout = solve_layout(&g, &LayoutConfig::default().with_seed(5));
    let pts: Vec<Point> = layout.iter().map(|(_, p)| p).collect();
    for i in 0..pts.len() {
        for j in (i + 1)..pts.len() {
            assert!(!nearly_equal(pts[i].distance(pts[j]), 0.0, Tolerances::default()));
        }
    }
}

#[test]
fn bounds_follow_config() {
    let cfg = LayoutConfig {
        width: 800.0,
        height: 600.0,
        margin: 10.0,
        ..LayoutConfig::default().with_seed(0)
    };
    let layout = solve_layout(&square(), &cfg);
    assert_eq!(layout.bounds().max, Point::new(790.0, 590.0));
    assert!(layout.is_within_bounds());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn positions_stay_within_bounds(
        pairs in prop::collection::vec((0u8..12, 0u8..12), 1..40),
        seed in any::<u64>(),
    ) {
        let records: Vec<_> = pairs
            .iter()
            .map(|(a, b)| EdgeRecord::new(a.to_string(), b.to_string()))
            .collect();
        let g = Graph::from_records(&records).unwrap();
        let layout = solve_layout(&g, &LayoutConfig::default().with_seed(seed));
        prop_assert_eq!(layout.len(), g.nodes().len());
        prop_assert!(layout.is_within_bounds());
        for (_, p) in layout.iter() {
            prop_assert!(p.is_finite());
        }
    }
}
