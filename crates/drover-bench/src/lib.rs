//! Benchmark profiles and utilities for the Drover workspace.
//!
//! Provides pre-built fixtures shared by the criterion benches:
//!
//! - [`obstacle_course`]: a grid with deterministic pseudo-random walls
//! - [`random_cost_matrix`]: a deterministic pseudo-random cost matrix

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use drover_assign::CostMatrix;
use drover_core::Point;
use drover_grid::{Connectivity, SquareGrid};

/// Multiplicative hash over an index, for deterministic pseudo-random
/// fixtures without pulling an RNG into the bench profile.
fn mix(i: u64, salt: u64) -> u64 {
    (i ^ salt).wrapping_mul(6364136223846793005).rotate_left(31)
}

/// A `rows` x `cols` grid with roughly `fill_pct` percent of cells
/// blocked, deterministically derived from `seed`. Start and goal
/// corners are always left open.
pub fn obstacle_course(rows: u32, cols: u32, fill_pct: u64, seed: u64) -> SquareGrid {
    let mut grid = SquareGrid::new(rows, cols, 1.0, Point::ZERO, Connectivity::Eight).unwrap();
    for r in 0..rows {
        for c in 0..cols {
            let cell = u64::from(r) * u64::from(cols) + u64::from(c);
            if mix(cell, seed) % 100 < fill_pct {
                grid.set_walkable(r, c, false).unwrap();
            }
        }
    }
    for (r, c) in [(0, 0), (rows - 1, cols - 1)] {
        grid.set_walkable(r, c, true).unwrap();
    }
    grid
}

/// An `n` x `n` cost matrix with deterministic pseudo-random costs in
/// `[0, 1000)`.
pub fn random_cost_matrix(n: usize, seed: u64) -> CostMatrix {
    let mut m = CostMatrix::new(n);
    for i in 0..n {
        for j in 0..n {
            let cell = (i * n + j) as u64;
            m.set(i, j, (mix(cell, seed) % 1000) as f64);
        }
    }
    m
}
