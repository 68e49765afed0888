//! Builds the square cost matrix from agent and target rosters.

use crate::matrix::{CostMatrix, PAD_COST};
use drover_core::{AgentId, Point, TargetId};
use drover_grid::Grid;
use drover_nav::Pathfinder;
use indexmap::IndexMap;

/// Which distance feeds the cost matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceMode {
    /// Euclidean distance between agent and target positions.
    StraightLine,
    /// Summed length of the full A* path between them. Unreachable
    /// pairs cost [`PAD_COST`].
    PathCost,
}

/// Stage one of the assignment pipeline: roster in, square matrix out.
///
/// Borrows the pathfinder and grid for the duration of one build; holds
/// no state of its own. The previous-assignment view passed to
/// [`build`](Self::build) is consulted per cell for stability bias.
pub struct CostMatrixBuilder<'a> {
    pathfinder: &'a Pathfinder,
    grid: &'a dyn Grid,
}

impl<'a> CostMatrixBuilder<'a> {
    /// Create a builder over the given collaborators.
    pub fn new(pathfinder: &'a Pathfinder, grid: &'a dyn Grid) -> Self {
        Self { pathfinder, grid }
    }

    /// Build the `N`×`N` matrix, `N = max(agents, targets)`.
    ///
    /// Cells outside the real `agents` × `targets` rectangle are padded
    /// with [`PAD_COST`] so the solver never pairs a real agent with a
    /// nonexistent target or vice versa. A cell whose agent held the
    /// same target in `previous` is discounted by the stability bias.
    pub fn build(
        &self,
        agents: &[(AgentId, Point)],
        targets: &[(TargetId, Point)],
        mode: DistanceMode,
        previous: &IndexMap<AgentId, TargetId>,
    ) -> CostMatrix {
        let n = agents.len().max(targets.len());
        let mut matrix = CostMatrix::new(n);

        for i in 0..n {
            for j in 0..n {
                let cost = if i < agents.len() && j < targets.len() {
                    let (agent_id, agent_pos) = agents[i];
                    let (target_id, target_pos) = targets[j];
                    let raw = match mode {
                        DistanceMode::StraightLine => agent_pos.distance(&target_pos),
                        DistanceMode::PathCost => self.path_cost(agent_pos, target_pos),
                    };
                    if previous.get(&agent_id) == Some(&target_id) {
                        apply_stability_bias(raw)
                    } else {
                        raw
                    }
                } else {
                    PAD_COST
                };
                matrix.set(i, j, cost);
            }
        }
        matrix
    }

    /// Summed segment length of the full path from `start` to `end`,
    /// measured from the agent's actual position through every
    /// waypoint. An empty path (unreachable or unresolvable) costs
    /// [`PAD_COST`].
    fn path_cost(&self, start: Point, end: Point) -> f64 {
        let waypoints = self.pathfinder.find_full_path(self.grid, start, end);
        if waypoints.is_empty() {
            return PAD_COST;
        }
        let mut total = 0.0;
        let mut prev = start;
        for point in waypoints {
            total += prev.distance(&point);
            prev = point;
        }
        total
    }
}

/// Discount a cost for a pairing that held in the previous solve.
///
/// The factor `clamp(200 / cost, 0.02, 0.1)` gives a 2%–10% discount
/// that grows as the absolute cost shrinks — enough to keep an existing
/// pairing over a near-tie, never enough to override a genuinely better
/// reassignment. The clamp also bounds the discount when the cost
/// approaches zero; non-positive and non-finite costs pass through
/// unbiased.
pub(crate) fn apply_stability_bias(cost: f64) -> f64 {
    if !(cost.is_finite() && cost > 0.0) {
        return cost;
    }
    let factor = (200.0 / cost).clamp(0.02, 0.1);
    cost * (1.0 - factor)
}
