//! Minimum-cost perfect matching via the Hungarian (Kuhn–Munkres)
//! algorithm, shortest-augmenting-path formulation with potentials.

use crate::matrix::CostMatrix;

/// Solve the assignment problem for a square cost matrix.
///
/// Returns the permutation `assignment` of `{0..n-1}` minimizing
/// `sum(matrix[i][assignment[i]])`. Deterministic for a given matrix;
/// `O(n^3)`. An empty matrix yields an empty assignment.
///
/// The internal bookkeeping is 1-indexed with a virtual row and column
/// 0 acting as sentinels, the classical formulation: `u`/`v` are the
/// row/column potentials, `p[j]` is the row matched to column `j`
/// (0 = unmatched), `minv[j]` the best reduced cost seen for column
/// `j` during the current augmentation, and `way[j]` the predecessor
/// column used to reconstruct the augmenting path.
pub fn solve_assignment(matrix: &CostMatrix) -> Vec<usize> {
    let n = matrix.n();
    if n == 0 {
        return Vec::new();
    }

    let mut u = vec![0.0f64; n + 1];
    let mut v = vec![0.0f64; n + 1];
    let mut p = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];

    for i in 1..=n {
        // Start an augmenting search for row i from the virtual column.
        p[0] = i;
        let mut j0 = 0usize;
        let mut minv = vec![f64::INFINITY; n + 1];
        let mut used = vec![false; n + 1];

        loop {
            used[j0] = true;
            let i0 = p[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0usize;

            // Relax all unused columns against the row matched at j0.
            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let cur = matrix.get(i0 - 1, j - 1) - u[i0] - v[j];
                if cur < minv[j] {
                    minv[j] = cur;
                    way[j] = j0;
                }
                if minv[j] < delta {
                    delta = minv[j];
                    j1 = j;
                }
            }

            // Standard delta update: grow potentials on the visited
            // tree, shrink the frontier's reduced costs.
            for j in 0..=n {
                if used[j] {
                    u[p[j]] += delta;
                    v[j] -= delta;
                } else {
                    minv[j] -= delta;
                }
            }

            j0 = j1;
            if p[j0] == 0 {
                break;
            }
        }

        // Flip the augmenting path back to the virtual column.
        loop {
            let j1 = way[j0];
            p[j0] = p[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0usize; n];
    for j in 1..=n {
        if p[j] != 0 {
            assignment[p[j] - 1] = j - 1;
        }
    }
    assignment
}
