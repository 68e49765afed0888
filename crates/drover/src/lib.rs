//! Drover: grid pathfinding and optimal multi-agent target assignment.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Drover sub-crates. For most users, adding `drover` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use drover::prelude::*;
//!
//! // Minimal agent/target handles the coordinator can steer.
//! struct Agent {
//!     id: AgentId,
//!     pos: Point,
//!     target: Option<TargetId>,
//! }
//! impl Positioned for Agent {
//!     fn position(&self) -> Point { self.pos }
//! }
//! impl AgentHandle for Agent {
//!     fn id(&self) -> AgentId { self.id }
//! }
//! impl TargetSink for Agent {
//!     fn set_target(&mut self, target: TargetId) -> Result<(), CapabilityError> {
//!         self.target = Some(target);
//!         Ok(())
//!     }
//! }
//!
//! struct Beacon {
//!     id: TargetId,
//!     pos: Point,
//! }
//! impl Positioned for Beacon {
//!     fn position(&self) -> Point { self.pos }
//! }
//! impl TargetHandle for Beacon {
//!     fn id(&self) -> TargetId { self.id }
//! }
//!
//! // An 8x8 walkable grid with one-unit cells.
//! let grid = SquareGrid::new(8, 8, 1.0, Point::ZERO, Connectivity::Eight).unwrap();
//!
//! let mut agents = vec![
//!     Agent { id: AgentId(1), pos: Point::new(0.5, 0.5, 0.0), target: None },
//!     Agent { id: AgentId(2), pos: Point::new(7.5, 0.5, 0.0), target: None },
//! ];
//! let beacons = vec![
//!     Beacon { id: TargetId(1), pos: Point::new(0.5, 7.5, 0.0) },
//!     Beacon { id: TargetId(2), pos: Point::new(7.5, 7.5, 0.0) },
//! ];
//!
//! let mut coordinator = AssignmentCoordinator::new(Pathfinder::new(Heuristic::Euclidean));
//! let applied = coordinator
//!     .assign_all(&grid, &mut agents, &beacons, DistanceMode::StraightLine)
//!     .unwrap();
//! assert_eq!(applied.len(), 2);
//! assert_eq!(agents[0].target, Some(TargetId(1)));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `drover-core` | IDs, `Point`, errors, handle traits |
//! | [`grid`] | `drover-grid` | The `Grid` trait and lattice backends |
//! | [`nav`] | `drover-nav` | A* pathfinding |
//! | [`assign`] | `drover-assign` | Cost matrices, Hungarian solver, coordinator |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, errors, and handle traits (`drover-core`).
pub use drover_core as types;

/// Navigation grids (`drover-grid`).
pub use drover_grid as grid;

/// A* pathfinding (`drover-nav`).
pub use drover_nav as nav;

/// Assignment pipeline (`drover-assign`).
pub use drover_assign as assign;

/// The most commonly used items, re-exported flat.
pub mod prelude {
    pub use drover_assign::{
        solve_assignment, AssignmentCoordinator, CostMatrix, CostMatrixBuilder, DistanceMode,
        Pairing, PAD_COST,
    };
    pub use drover_core::{
        AgentHandle, AgentId, AssignError, CapabilityError, GridError, HeuristicParseError,
        NodeId, Point, Positioned, TargetHandle, TargetId, TargetSink,
    };
    pub use drover_grid::{Connectivity, Grid, SquareGrid};
    pub use drover_nav::{Heuristic, Pathfinder};
}
