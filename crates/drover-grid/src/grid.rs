//! The core [`Grid`] trait.

use drover_core::{NeighbourList, NodeId, Point};

/// Spatial abstraction consumed by the pathfinder and the cost matrix
/// builder.
///
/// A grid discretizes continuous world space into an arena of cells
/// addressed by stable [`NodeId`] index. Implementations define the
/// lattice shape, the position mapping, and which cells are traversable.
///
/// # Contract
///
/// - Node identity is stable for the lifetime of the grid.
/// - [`neighbours`](Grid::neighbours) returns cells in a deterministic,
///   backend-defined order; path queries inherit their determinism from
///   this ordering.
/// - Neighbour relations are symmetric: if `b` is a neighbour of `a`,
///   then `a` is a neighbour of `b`.
/// - All methods are read-only; concurrent queries against a shared grid
///   are safe, which is why `Sync` is required.
pub trait Grid: Send + Sync + 'static {
    /// Total number of cells in the arena, including blocked cells.
    ///
    /// Per-query scratch state is sized from this value, so it must not
    /// change over the grid's lifetime.
    fn node_count(&self) -> usize;

    /// Resolve a continuous position to the cell containing it.
    ///
    /// Returns `None` when the position lies outside the lattice or on
    /// a blocked cell. Callers treat `None` as an expected outcome, not
    /// an error.
    fn node_from_position(&self, position: Point) -> Option<NodeId>;

    /// The world position of a cell's centre.
    fn position_from_node(&self, node: NodeId) -> Point;

    /// Enumerate the traversable neighbours of a cell.
    ///
    /// Blocked and out-of-bounds cells are omitted.
    fn neighbours(&self, node: NodeId) -> NeighbourList;

    /// Edge length of one cell in world units.
    ///
    /// Consumed by presentation layers (debug drawing, snapping); the
    /// search itself never reads it.
    fn node_size(&self) -> f64;
}
