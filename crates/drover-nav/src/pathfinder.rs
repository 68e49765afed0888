//! The [`Pathfinder`]: A* queries over a [`Grid`].

use crate::heuristic::Heuristic;
use crate::scratch::SearchScratch;
use drover_core::{NodeId, Point};
use drover_grid::Grid;

/// A* search over a navigation grid.
///
/// The pathfinder holds only its configured [`Heuristic`]; each query
/// borrows a grid and allocates its own scratch, so a single
/// `Pathfinder` may serve any number of grids and queries. Queries are
/// read-only with respect to the grid.
///
/// # Failure semantics
///
/// Path queries never fail. An endpoint that does not resolve to a
/// node, or a goal no walk can reach, degrades to a defined in-band
/// result:
///
/// - [`find_next_step`](Self::find_next_step) returns the start
///   position unchanged,
/// - [`find_full_path`](Self::find_full_path) returns an empty path.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pathfinder {
    heuristic: Heuristic,
}

impl Pathfinder {
    /// Create a pathfinder with the given heuristic.
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }

    /// The configured heuristic.
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Position of the first step along the shortest path from `start`
    /// toward `end`.
    ///
    /// If `end` does not resolve to a node the query degenerates to a
    /// zero-length path and returns the start cell's centre. If `start`
    /// does not resolve, or no path exists, the fallback is `start`
    /// itself (the cell centre when the start cell is known). Callers
    /// detect "no meaningful progress" by comparing the result against
    /// the start position.
    pub fn find_next_step(&self, grid: &dyn Grid, start: Point, end: Point) -> Point {
        let Some(start_node) = grid.node_from_position(start) else {
            return start;
        };
        // Unresolvable goal: degrade to a zero-length path at the start cell.
        let end_node = grid.node_from_position(end).unwrap_or(start_node);

        if start_node == end_node {
            return grid.position_from_node(start_node);
        }

        let mut scratch = SearchScratch::new(grid.node_count());
        if !self.search(grid, start_node, end_node, &mut scratch) {
            return grid.position_from_node(start_node);
        }
        let path = retrace(&scratch, start_node, end_node);
        match path.first() {
            Some(&first) => grid.position_from_node(first),
            None => grid.position_from_node(start_node),
        }
    }

    /// Every waypoint from (excluding) `start` to (including) `end`, in
    /// traversal order.
    ///
    /// Empty when either endpoint fails to resolve, when no path
    /// exists, or when both endpoints share a cell (a zero-length
    /// path has no waypoints). An empty result is the unreachable
    /// signal; callers must check it explicitly.
    pub fn find_full_path(&self, grid: &dyn Grid, start: Point, end: Point) -> Vec<Point> {
        let (Some(start_node), Some(end_node)) =
            (grid.node_from_position(start), grid.node_from_position(end))
        else {
            return Vec::new();
        };

        if start_node == end_node {
            return Vec::new();
        }

        let mut scratch = SearchScratch::new(grid.node_count());
        if !self.search(grid, start_node, end_node, &mut scratch) {
            return Vec::new();
        }
        retrace(&scratch, start_node, end_node)
            .into_iter()
            .map(|node| grid.position_from_node(node))
            .collect()
    }

    /// Shared A* core. Returns `true` once `end` is expanded; `scratch`
    /// then holds the parent chain for retracing.
    fn search(
        &self,
        grid: &dyn Grid,
        start: NodeId,
        end: NodeId,
        scratch: &mut SearchScratch,
    ) -> bool {
        let end_pos = grid.position_from_node(end);
        let start_pos = grid.position_from_node(start);
        scratch.relax(start, 0.0, self.heuristic.distance(&start_pos, &end_pos), None);

        while let Some(current) = scratch.pop_best() {
            if current == end {
                return true;
            }
            let current_pos = grid.position_from_node(current);
            let current_g = scratch.g(current);

            for neighbour in grid.neighbours(current) {
                if scratch.is_closed(neighbour) {
                    continue;
                }
                let neighbour_pos = grid.position_from_node(neighbour);
                // The heuristic metric doubles as the edge metric, which
                // keeps the estimate consistent with accumulated cost.
                let tentative =
                    current_g + self.heuristic.distance(&current_pos, &neighbour_pos);
                if tentative < scratch.g(neighbour) {
                    scratch.relax(
                        neighbour,
                        tentative,
                        self.heuristic.distance(&neighbour_pos, &end_pos),
                        Some(current),
                    );
                }
            }
        }
        false
    }
}

/// Walk parent links from `end` back to (excluding) `start`, reversed
/// into traversal order.
fn retrace(scratch: &SearchScratch, start: NodeId, end: NodeId) -> Vec<NodeId> {
    let mut nodes = Vec::new();
    let mut current = end;
    while current != start {
        nodes.push(current);
        match scratch.parent(current) {
            Some(parent) => current = parent,
            None => break,
        }
    }
    nodes.reverse();
    nodes
}
