//! The [`AssignmentCoordinator`]: sequences build → solve → apply and
//! retains pairings across requests for stability bias.

use crate::builder::{CostMatrixBuilder, DistanceMode};
use crate::hungarian::solve_assignment;
use drover_core::{AgentHandle, AgentId, AssignError, Point, TargetHandle, TargetId, TargetSink};
use drover_grid::Grid;
use drover_nav::Pathfinder;
use indexmap::IndexMap;
use log::{debug, warn};

/// One applied agent→target pairing, reported back to the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pairing {
    /// The steered agent.
    pub agent: AgentId,
    /// The target it was steered toward.
    pub target: TargetId,
    /// The (possibly bias-discounted) matrix cost of the pairing.
    pub cost: f64,
}

/// Coordinates assignment requests end to end.
///
/// Owns the [`Pathfinder`] it plans with — the collaborator cannot be
/// absent at request time — and the retained map of pairings applied by
/// the previous request, which discounts matching cells in the next
/// cost matrix (stability bias). The retained map is the only state
/// that outlives a request; it is rebuilt wholesale from each
/// successful solve, so agents and targets that leave the roster drop
/// out of it on the next call.
///
/// Each request runs to completion within `assign_all` on the caller's
/// thread; nothing is shared between calls except the retained map.
#[derive(Debug, Default)]
pub struct AssignmentCoordinator {
    pathfinder: Pathfinder,
    last_assignments: IndexMap<AgentId, TargetId>,
}

impl AssignmentCoordinator {
    /// Create a coordinator planning with the given pathfinder.
    pub fn new(pathfinder: Pathfinder) -> Self {
        Self {
            pathfinder,
            last_assignments: IndexMap::new(),
        }
    }

    /// The pathfinder this coordinator plans with.
    pub fn pathfinder(&self) -> &Pathfinder {
        &self.pathfinder
    }

    /// Pairings applied by the previous request, keyed by agent.
    pub fn memory(&self) -> &IndexMap<AgentId, TargetId> {
        &self.last_assignments
    }

    /// Forget all retained pairings; the next request runs unbiased.
    pub fn clear_memory(&mut self) {
        self.last_assignments.clear();
    }

    /// Assign every agent an optimal target and steer it there.
    ///
    /// Builds the cost matrix (per `mode`), solves it, and applies each
    /// real pairing through the agent's [`TargetSink`] capability.
    /// Uneven rosters leave `|agents - targets|` participants unpaired;
    /// padding pairings are never applied.
    ///
    /// An empty roster skips the request entirely with
    /// [`AssignError::EmptyRoster`] — a reportable condition, logged at
    /// warn severity, with no partial effects. An agent that rejects
    /// the capability is logged and skipped; remaining pairings still
    /// apply.
    pub fn assign_all<A, T>(
        &mut self,
        grid: &dyn Grid,
        agents: &mut [A],
        targets: &[T],
        mode: DistanceMode,
    ) -> Result<Vec<Pairing>, AssignError>
    where
        A: AgentHandle + TargetSink,
        T: TargetHandle,
    {
        if agents.is_empty() || targets.is_empty() {
            warn!(
                "assignment skipped: {} agents, {} targets",
                agents.len(),
                targets.len()
            );
            return Err(AssignError::EmptyRoster {
                agents: agents.len(),
                targets: targets.len(),
            });
        }

        let agent_keys: Vec<(AgentId, Point)> =
            agents.iter().map(|a| (a.id(), a.position())).collect();
        let target_keys: Vec<(TargetId, Point)> =
            targets.iter().map(|t| (t.id(), t.position())).collect();

        let matrix = CostMatrixBuilder::new(&self.pathfinder, grid).build(
            &agent_keys,
            &target_keys,
            mode,
            &self.last_assignments,
        );
        let assignment = solve_assignment(&matrix);

        let mut applied = Vec::new();
        let mut memory = IndexMap::new();
        for (i, agent) in agents.iter_mut().enumerate() {
            let j = assignment[i];
            if j >= target_keys.len() {
                // Padding column: this agent sits the round out.
                continue;
            }
            let (agent_id, _) = agent_keys[i];
            let (target_id, _) = target_keys[j];
            match agent.set_target(target_id) {
                Ok(()) => {
                    debug!(
                        "agent {agent_id} assigned to target {target_id} (cost {:.2})",
                        matrix.get(i, j)
                    );
                    memory.insert(agent_id, target_id);
                    applied.push(Pairing {
                        agent: agent_id,
                        target: target_id,
                        cost: matrix.get(i, j),
                    });
                }
                Err(err) => {
                    warn!("agent {agent_id} skipped: {err}");
                }
            }
        }
        self.last_assignments = memory;
        Ok(applied)
    }
}
