//! Axis-aligned square lattice with per-cell obstacle support.

use crate::connectivity::Connectivity;
use crate::grid::Grid;
use drover_core::{GridError, NeighbourList, NodeId, Point};
use smallvec::SmallVec;

/// A 2D square lattice embedded in 3D world space.
///
/// Cells are addressed as `(row, col)` and stored row-major; `NodeId`
/// is the row-major arena index. The lattice spans the world X axis
/// (columns) and Y axis (rows) from `origin`, with every cell centre at
/// the origin's elevation. Positions are resolved by the cell that
/// contains them, ignoring elevation.
///
/// Cells start walkable; carve obstacles with
/// [`set_walkable`](SquareGrid::set_walkable). Blocked cells stay in
/// the arena (node indices are stable) but resolve to no node and are
/// omitted from every neighbour list.
#[derive(Clone, Debug)]
pub struct SquareGrid {
    rows: u32,
    cols: u32,
    node_size: f64,
    origin: Point,
    connectivity: Connectivity,
    walkable: Vec<bool>,
}

impl SquareGrid {
    /// Maximum dimension size: cell addresses use `i32` arithmetic, so
    /// each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a fully walkable grid of `rows * cols` cells.
    ///
    /// `origin` is the world position of the lattice's minimum corner;
    /// `node_size` is the cell edge length in world units.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM), and `Err(GridError::InvalidNodeSize)`
    /// if `node_size` is not positive and finite.
    pub fn new(
        rows: u32,
        cols: u32,
        node_size: f64,
        origin: Point,
        connectivity: Connectivity,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        if !(node_size.is_finite() && node_size > 0.0) {
            return Err(GridError::InvalidNodeSize { value: node_size });
        }
        let cells = (rows as usize) * (cols as usize);
        Ok(Self {
            rows,
            cols,
            node_size,
            origin,
            connectivity,
            walkable: vec![true; cells],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Neighbourhood connectivity.
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// World position of the lattice's minimum corner.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The node at `(row, col)`, blocked or not.
    pub fn node_at(&self, row: u32, col: u32) -> Result<NodeId, GridError> {
        self.check_cell(row, col)?;
        Ok(NodeId(row * self.cols + col))
    }

    /// Mark a cell walkable or blocked.
    pub fn set_walkable(&mut self, row: u32, col: u32, walkable: bool) -> Result<(), GridError> {
        self.check_cell(row, col)?;
        let idx = (row as usize) * (self.cols as usize) + col as usize;
        self.walkable[idx] = walkable;
        Ok(())
    }

    /// Whether the cell at `(row, col)` is walkable.
    pub fn is_walkable(&self, row: u32, col: u32) -> Result<bool, GridError> {
        self.check_cell(row, col)?;
        Ok(self.walkable[(row as usize) * (self.cols as usize) + col as usize])
    }

    fn check_cell(&self, row: u32, col: u32) -> Result<(), GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn walkable_rc(&self, r: i32, c: i32) -> bool {
        self.walkable[(r as usize) * (self.cols as usize) + c as usize]
    }
}

impl Grid for SquareGrid {
    fn node_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    fn node_from_position(&self, position: Point) -> Option<NodeId> {
        let c = ((position.x - self.origin.x) / self.node_size).floor();
        let r = ((position.y - self.origin.y) / self.node_size).floor();
        if !(r >= 0.0 && r < self.rows as f64 && c >= 0.0 && c < self.cols as f64) {
            return None;
        }
        let (r, c) = (r as u32, c as u32);
        if !self.walkable[(r as usize) * (self.cols as usize) + c as usize] {
            return None;
        }
        Some(NodeId(r * self.cols + c))
    }

    fn position_from_node(&self, node: NodeId) -> Point {
        let r = node.0 / self.cols;
        let c = node.0 % self.cols;
        Point::new(
            self.origin.x + (c as f64 + 0.5) * self.node_size,
            self.origin.y + (r as f64 + 0.5) * self.node_size,
            self.origin.z,
        )
    }

    fn neighbours(&self, node: NodeId) -> NeighbourList {
        let r = (node.0 / self.cols) as i32;
        let c = (node.0 % self.cols) as i32;
        let mut result = SmallVec::new();
        for &(dr, dc) in self.connectivity.offsets() {
            let nr = r + dr;
            let nc = c + dc;
            if nr < 0 || nr >= self.rows as i32 || nc < 0 || nc >= self.cols as i32 {
                continue;
            }
            if !self.walkable_rc(nr, nc) {
                continue;
            }
            result.push(NodeId(nr as u32 * self.cols + nc as u32));
        }
        result
    }

    fn node_size(&self) -> f64 {
        self.node_size
    }
}
