//! Fixed-budget force relaxation.

use gw_core::Point;
use gw_graph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::{LayoutConfig, SeedPolicy};
use crate::layout::{Bounds, Layout};

/// Per-iteration progress report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutProgress {
    /// 0-based iteration just completed.
    pub iteration: usize,
    /// Largest distance any node moved during the iteration, after clamping.
    pub max_displacement: f64,
}

/// Compute positions for every node of `graph`.
///
/// Never fails: an invalid `config` is replaced by [`LayoutConfig::sanitized`].
pub fn solve_layout(graph: &Graph, config: &LayoutConfig) -> Layout {
    solve_layout_with_progress(graph, config, None)
}

pub fn solve_layout_with_progress(
    graph: &Graph,
    config: &LayoutConfig,
    mut progress: Option<&mut dyn FnMut(LayoutProgress)>,
) -> Layout {
    let config: &LayoutConfig = &config.sanitized();
    let bounds = Bounds {
        min: Point::new(config.margin, config.margin),
        max: Point::new(config.width - config.margin, config.height - config.margin),
    };
    let n = graph.nodes().len();
    if n == 0 {
        return Layout {
            positions: Vec::new(),
            bounds,
        };
    }

    let mut rng = match config.seed {
        SeedPolicy::Fixed(seed) => StdRng::seed_from_u64(seed),
        SeedPolicy::Entropy => StdRng::from_entropy(),
    };
    let mut positions: Vec<Point> = (0..n)
        .map(|_| spawn_point(&mut rng, config))
        .collect();

    let mut forces = vec![Point::ZERO; n];
    for iteration in 0..config.iterations {
        forces.fill(Point::ZERO);
        accumulate_repulsion(&positions, config, &mut forces);
        accumulate_attraction(graph, &positions, config, &mut forces);

        let mut max_displacement = 0.0_f64;
        for (pos, force) in positions.iter_mut().zip(&forces) {
            let next = bounds.clamp(*pos + *force);
            max_displacement = max_displacement.max(pos.distance(next));
            *pos = next;
        }

        if let Some(cb) = progress.as_mut() {
            cb(LayoutProgress {
                iteration,
                max_displacement,
            });
        }
    }

    debug!(
        nodes = n,
        edges = graph.edges().len(),
        iterations = config.iterations,
        "layout solved"
    );
    Layout { positions, bounds }
}

fn spawn_point(rng: &mut StdRng, config: &LayoutConfig) -> Point {
    let span_x = config.width - 2.0 * config.spawn_margin;
    let span_y = config.height - 2.0 * config.spawn_margin;
    Point::new(
        rng.r#gen::<f64>() * span_x + config.spawn_margin,
        rng.r#gen::<f64>() * span_y + config.spawn_margin,
    )
}

/// Zero distance is treated as 1 so coincident nodes have a finite force.
fn separation(a: Point, b: Point) -> (Point, f64) {
    let delta = a.to(b);
    let d = delta.length();
    (delta, if d == 0.0 { 1.0 } else { d })
}

fn accumulate_repulsion(positions: &[Point], config: &LayoutConfig, forces: &mut [Point]) {
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let (delta, d) = separation(positions[i], positions[j]);
            if d < config.min_distance {
                let push = delta.scale((config.min_distance - d) / d * config.repulsion);
                forces[i] -= push;
                forces[j] += push;
            }
        }
    }
}

fn accumulate_attraction(
    graph: &Graph,
    positions: &[Point],
    config: &LayoutConfig,
    forces: &mut [Point],
) {
    for edge in graph.edges() {
        let (s, t) = (edge.source.slot(), edge.target.slot());
        let (delta, d) = separation(positions[s], positions[t]);
        let pull = delta.scale((d - config.ideal_distance) / d * config.attraction);
        forces[s] += pull;
        forces[t] -= pull;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_graph::{EdgeRecord, parse_edge_lines};

    fn graph(text: &str) -> Graph {
        Graph::from_records(&parse_edge_lines(text).unwrap()).unwrap()
    }

    #[test]
    fn empty_graph_is_empty_layout() {
        let layout = solve_layout(&Graph::default(), &LayoutConfig::default());
        assert!(layout.is_empty());
    }

    #[test]
    fn zero_iterations_keeps_spawn_positions_in_spawn_area() {
        let cfg = LayoutConfig {
            iterations: 0,
            ..LayoutConfig::default().with_seed(3)
        };
        let layout = solve_layout(&graph("A B\nC D"), &cfg);
        for (_, p) in layout.iter() {
            assert!(p.x >= 50.0 && p.x < 450.0);
            assert!(p.y >= 50.0 && p.y < 300.0);
        }
    }

    #[test]
    fn coincident_nodes_are_separated() {
        let mut positions = vec![Point::new(100.0, 100.0), Point::new(100.0, 100.0)];
        let cfg = LayoutConfig::default();
        let mut forces = vec![Point::ZERO; 2];
        accumulate_repulsion(&positions, &cfg, &mut forces);
        // delta is zero, so coincident nodes stay put this round; nothing is NaN
        assert!(forces.iter().all(|f| f.is_finite()));

        positions[1].x += 1.0;
        forces.fill(Point::ZERO);
        accumulate_repulsion(&positions, &cfg, &mut forces);
        assert!(forces[0].x < 0.0);
        assert!(forces[1].x > 0.0);
    }

    #[test]
    fn edge_pulls_far_endpoints_together() {
        let g = Graph::from_records(&[EdgeRecord::new("A", "B")]).unwrap();
        let positions = vec![Point::new(0.0, 0.0), Point::new(400.0, 0.0)];
        let mut forces = vec![Point::ZERO; 2];
        accumulate_attraction(&g, &positions, &LayoutConfig::default(), &mut forces);
        assert!(forces[0].x > 0.0);
        assert!(forces[1].x < 0.0);
        assert_eq!(forces[0].x, -forces[1].x);
    }

    #[test]
    fn progress_reports_every_iteration() {
        let mut seen = Vec::new();
        let cfg = LayoutConfig::default().with_seed(11);
        let mut cb = |p: LayoutProgress| seen.push(p.iteration);
        let _ = solve_layout_with_progress(&graph("A B\nB C"), &cfg, Some(&mut cb));
        assert_eq!(seen, (0..100).collect::<Vec<_>>());
    }
}
