//! Optimal agent-to-target assignment for Drover.
//!
//! The pipeline runs in three stages, sequenced by the
//! [`AssignmentCoordinator`]:
//!
//! 1. [`CostMatrixBuilder`] turns agent and target rosters into a
//!    square [`CostMatrix`], using straight-line or path-length
//!    distance, padding uneven rosters, and discounting previously
//!    held pairings (stability bias).
//! 2. [`solve_assignment`] finds the minimum-total-cost perfect
//!    matching with the Hungarian (Kuhn–Munkres) algorithm.
//! 3. The coordinator applies each solved pairing through the agent's
//!    [`TargetSink`](drover_core::TargetSink) capability and retains
//!    the applied pairings to bias the next request.
//!
//! Everything is synchronous and runs to completion within one call;
//! the retained pairing map is the only state that outlives a request.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod coordinator;
pub mod hungarian;
pub mod matrix;

pub use builder::{CostMatrixBuilder, DistanceMode};
pub use coordinator::{AssignmentCoordinator, Pairing};
pub use hungarian::solve_assignment;
pub use matrix::{CostMatrix, PAD_COST};
