//! A* results cross-checked against an exhaustive Dijkstra baseline on
//! small synthetic grids.

use drover_core::{NodeId, Point};
use drover_grid::{Connectivity, Grid, SquareGrid};
use drover_nav::{Heuristic, Pathfinder};
use proptest::prelude::*;

fn centre(r: f64, c: f64) -> Point {
    Point::new(c + 0.5, r + 0.5, 0.0)
}

/// O(V^2) Dijkstra over the same grid and edge metric; the optimality
/// oracle for A*.
fn dijkstra_cost(grid: &SquareGrid, metric: Heuristic, start: NodeId, end: NodeId) -> Option<f64> {
    let n = grid.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut done = vec![false; n];
    dist[start.index()] = 0.0;

    loop {
        let mut best: Option<usize> = None;
        for i in 0..n {
            if !done[i] && dist[i].is_finite() && best.is_none_or(|b| dist[i] < dist[b]) {
                best = Some(i);
            }
        }
        let Some(u) = best else { return None };
        if u == end.index() {
            return Some(dist[u]);
        }
        done[u] = true;
        let u_pos = grid.position_from_node(NodeId(u as u32));
        for nb in grid.neighbours(NodeId(u as u32)) {
            let alt = dist[u] + metric.distance(&u_pos, &grid.position_from_node(nb));
            if alt < dist[nb.index()] {
                dist[nb.index()] = alt;
            }
        }
    }
}

/// Total length of an A* path, measured from the start cell centre.
fn path_cost(metric: Heuristic, start: Point, path: &[Point]) -> f64 {
    let mut total = 0.0;
    let mut prev = start;
    for p in path {
        total += metric.distance(&prev, p);
        prev = *p;
    }
    total
}

fn grid_with_obstacles(
    rows: u32,
    cols: u32,
    connectivity: Connectivity,
    blocked: &[(u32, u32)],
) -> SquareGrid {
    let mut g = SquareGrid::new(rows, cols, 1.0, Point::ZERO, connectivity).unwrap();
    for &(r, c) in blocked {
        g.set_walkable(r, c, false).unwrap();
    }
    g
}

#[test]
fn matches_dijkstra_on_obstacle_course_manhattan_four() {
    let g = grid_with_obstacles(
        6,
        6,
        Connectivity::Four,
        &[(1, 1), (1, 2), (1, 3), (3, 3), (3, 4), (4, 1), (4, 2)],
    );
    let pf = Pathfinder::new(Heuristic::Manhattan);

    let start = centre(0.0, 0.0);
    let end = centre(5.0, 5.0);
    let path = pf.find_full_path(&g, start, end);
    assert!(!path.is_empty());

    let expected = dijkstra_cost(
        &g,
        Heuristic::Manhattan,
        g.node_from_position(start).unwrap(),
        g.node_from_position(end).unwrap(),
    )
    .unwrap();
    let actual = path_cost(Heuristic::Manhattan, start, &path);
    assert!(
        (actual - expected).abs() < 1e-9,
        "A* cost {actual} != Dijkstra cost {expected}"
    );
}

#[test]
fn matches_dijkstra_on_obstacle_course_euclidean_eight() {
    let g = grid_with_obstacles(
        7,
        7,
        Connectivity::Eight,
        &[(2, 2), (2, 3), (2, 4), (4, 0), (4, 1), (5, 4), (5, 5)],
    );
    let pf = Pathfinder::new(Heuristic::Euclidean);

    let start = centre(0.0, 3.0);
    let end = centre(6.0, 3.0);
    let path = pf.find_full_path(&g, start, end);
    assert!(!path.is_empty());

    let expected = dijkstra_cost(
        &g,
        Heuristic::Euclidean,
        g.node_from_position(start).unwrap(),
        g.node_from_position(end).unwrap(),
    )
    .unwrap();
    let actual = path_cost(Heuristic::Euclidean, start, &path);
    assert!(
        (actual - expected).abs() < 1e-9,
        "A* cost {actual} != Dijkstra cost {expected}"
    );
}

#[test]
fn disconnected_components_agree_with_baseline() {
    // Full-height wall: left and right halves never connect.
    let mut g = SquareGrid::new(5, 5, 1.0, Point::ZERO, Connectivity::Eight).unwrap();
    for r in 0..5 {
        g.set_walkable(r, 2, false).unwrap();
    }
    let pf = Pathfinder::new(Heuristic::Euclidean);
    let start = centre(2.0, 0.0);
    let end = centre(2.0, 4.0);

    assert!(pf.find_full_path(&g, start, end).is_empty());
    assert_eq!(pf.find_next_step(&g, start, end), start);
    assert_eq!(
        dijkstra_cost(
            &g,
            Heuristic::Euclidean,
            g.node_from_position(start).unwrap(),
            g.node_from_position(end).unwrap(),
        ),
        None
    );
}

proptest! {
    // Random obstacle fields: whenever A* finds a path it is optimal,
    // continuous (consecutive waypoints are grid neighbours), and
    // whenever it finds none the baseline agrees the goal is cut off.
    #[test]
    fn optimal_and_continuous_under_random_obstacles(
        blocked in proptest::collection::vec((0u32..6, 0u32..6), 0..14),
        use_eight in any::<bool>(),
    ) {
        let connectivity = if use_eight { Connectivity::Eight } else { Connectivity::Four };
        // Manhattan is only admissible without diagonal moves.
        let metric = if use_eight { Heuristic::Euclidean } else { Heuristic::Manhattan };

        let mut g = SquareGrid::new(6, 6, 1.0, Point::ZERO, connectivity).unwrap();
        for (r, c) in blocked {
            if (r, c) != (0, 0) && (r, c) != (5, 5) {
                g.set_walkable(r, c, false).unwrap();
            }
        }

        let start = centre(0.0, 0.0);
        let end = centre(5.0, 5.0);
        let start_node = g.node_from_position(start).unwrap();
        let end_node = g.node_from_position(end).unwrap();

        let pf = Pathfinder::new(metric);
        let path = pf.find_full_path(&g, start, end);
        let baseline = dijkstra_cost(&g, metric, start_node, end_node);

        match baseline {
            None => prop_assert!(path.is_empty()),
            Some(expected) => {
                prop_assert!(!path.is_empty());
                let actual = path_cost(metric, start, &path);
                prop_assert!((actual - expected).abs() < 1e-9);

                let mut prev = start_node;
                for p in &path {
                    let node = g.node_from_position(*p).unwrap();
                    prop_assert!(
                        g.neighbours(prev).contains(&node),
                        "waypoint {} does not follow {} on the grid", node, prev,
                    );
                    prev = node;
                }
                prop_assert_eq!(prev, end_node);
            }
        }
    }
}
