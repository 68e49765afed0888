//! The square [`CostMatrix`] consumed by the solver.

use drover_core::AssignError;

/// Sentinel cost for cells no real pairing should ever win through:
/// padding rows/columns and unreachable agent→target pairs.
///
/// Large enough to lose against any two real finite costs, small
/// enough that sums of a full padding row stay comfortably finite.
pub const PAD_COST: f64 = 999_999.0;

/// A square matrix of non-negative pairing costs.
///
/// Rows index agents, columns index targets. Built once per assignment
/// request and discarded after solving. Squareness is guaranteed by
/// construction — the solver never has to re-validate it.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl CostMatrix {
    /// A zero-filled `n`×`n` matrix.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![0.0; n * n],
        }
    }

    /// Build a matrix from explicit rows.
    ///
    /// Fails fast with [`AssignError::NonSquareMatrix`] when the rows
    /// do not form a square — the one boundary where malformed input
    /// can enter the solver's precondition.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AssignError> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for row in &rows {
            if row.len() != n {
                return Err(AssignError::NonSquareMatrix {
                    rows: n,
                    cols: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { n, cells })
    }

    /// Side length of the matrix.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Cost of pairing `row` with `col`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.n + col]
    }

    /// Overwrite the cost of pairing `row` with `col`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.cells[row * self.n + col] = value;
    }
}
