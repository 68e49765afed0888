//! Hungarian solver cross-checked against brute-force permutation
//! search on seeded random matrices.

use drover_assign::{solve_assignment, CostMatrix};
use proptest::prelude::*;
use rand::{RngExt, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn total_cost(matrix: &CostMatrix, assignment: &[usize]) -> f64 {
    assignment
        .iter()
        .enumerate()
        .map(|(i, &j)| matrix.get(i, j))
        .sum()
}

/// Minimum total cost over every permutation, by exhaustive search.
fn brute_force_min(matrix: &CostMatrix) -> f64 {
    fn recurse(matrix: &CostMatrix, row: usize, taken: &mut Vec<bool>, acc: f64, best: &mut f64) {
        let n = matrix.n();
        if row == n {
            if acc < *best {
                *best = acc;
            }
            return;
        }
        for col in 0..n {
            if !taken[col] {
                taken[col] = true;
                recurse(matrix, row + 1, taken, acc + matrix.get(row, col), best);
                taken[col] = false;
            }
        }
    }

    let mut best = f64::INFINITY;
    let mut taken = vec![false; matrix.n()];
    recurse(matrix, 0, &mut taken, 0.0, &mut best);
    best
}

fn assert_is_permutation(assignment: &[usize]) {
    let n = assignment.len();
    let mut seen = vec![false; n];
    for &j in assignment {
        assert!(j < n);
        assert!(!seen[j], "column {j} assigned twice");
        seen[j] = true;
    }
}

#[test]
fn matches_brute_force_on_seeded_random_matrices() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    for n in 2..=6 {
        for _ in 0..40 {
            let mut m = CostMatrix::new(n);
            for i in 0..n {
                for j in 0..n {
                    m.set(i, j, rng.random_range(0.0..100.0));
                }
            }
            let assignment = solve_assignment(&m);
            assert_is_permutation(&assignment);

            let solved = total_cost(&m, &assignment);
            let expected = brute_force_min(&m);
            assert!(
                (solved - expected).abs() < 1e-6,
                "n = {n}: solver total {solved} != brute-force minimum {expected}"
            );
        }
    }
}

#[test]
fn matches_brute_force_with_duplicate_costs() {
    // Repeated values provoke the tie-handling paths.
    let mut rng = ChaCha8Rng::seed_from_u64(0xd0d0);
    for _ in 0..60 {
        let n = 5;
        let mut m = CostMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                m.set(i, j, rng.random_range(0..8) as f64);
            }
        }
        let assignment = solve_assignment(&m);
        assert_is_permutation(&assignment);
        assert!((total_cost(&m, &assignment) - brute_force_min(&m)).abs() < 1e-9);
    }
}

proptest! {
    // Any square matrix of finite non-negative costs solves to a
    // permutation — no repeats, no omissions.
    #[test]
    fn result_is_always_a_bijection(
        n in 1usize..8,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut m = CostMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                m.set(i, j, rng.random_range(0.0..1e6));
            }
        }
        let assignment = solve_assignment(&m);
        prop_assert_eq!(assignment.len(), n);
        let mut sorted = assignment.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());
    }
}
