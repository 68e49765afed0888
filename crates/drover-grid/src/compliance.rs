//! Invariant suite every [`Grid`] backend must pass.
//!
//! Mirrors the contract documented on the trait: stable arena indices,
//! symmetric neighbour relations over walkable cells, and round-trip
//! position mapping. Backend test modules call
//! [`run_grid_compliance`] on representative instances.

use crate::grid::Grid;
use drover_core::NodeId;

/// Run the full compliance suite against a backend instance.
pub(crate) fn run_grid_compliance(grid: &dyn Grid) {
    neighbour_indices_in_arena(grid);
    neighbour_symmetry(grid);
    round_trip_walkable_nodes(grid);
}

/// Every neighbour index must address a cell inside the arena.
fn neighbour_indices_in_arena(grid: &dyn Grid) {
    let count = grid.node_count();
    for node in 0..count as u32 {
        for nb in grid.neighbours(NodeId(node)) {
            assert!(
                nb.index() < count,
                "neighbour {nb} of node {node} outside arena of {count}"
            );
        }
    }
}

/// If `b` is a neighbour of walkable `a`, then `a` is a neighbour of `b`.
///
/// A cell resolves as walkable when its centre maps back to its own
/// node; blocked cells are exempt from the reverse direction.
fn neighbour_symmetry(grid: &dyn Grid) {
    for node in 0..grid.node_count() as u32 {
        let node = NodeId(node);
        let walkable = grid.node_from_position(grid.position_from_node(node)) == Some(node);
        if !walkable {
            continue;
        }
        for nb in grid.neighbours(node) {
            assert!(
                grid.neighbours(nb).contains(&node),
                "neighbour symmetry violated: {nb} in N({node}) but {node} not in N({nb})"
            );
        }
    }
}

/// A walkable node's centre resolves back to the same node.
fn round_trip_walkable_nodes(grid: &dyn Grid) {
    for node in 0..grid.node_count() as u32 {
        let node = NodeId(node);
        if let Some(resolved) = grid.node_from_position(grid.position_from_node(node)) {
            assert_eq!(
                resolved, node,
                "cell centre of {node} resolved to different node {resolved}"
            );
        }
    }
}
