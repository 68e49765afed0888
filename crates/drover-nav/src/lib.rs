//! Grid A* pathfinding for Drover.
//!
//! [`Pathfinder`] runs A* over any [`Grid`](drover_grid::Grid) between
//! two continuous positions, with a configurable [`Heuristic`] that
//! doubles as the edge metric. Two query surfaces are exposed:
//! [`find_next_step`](Pathfinder::find_next_step) for steering (first
//! waypoint only) and [`find_full_path`](Pathfinder::find_full_path)
//! for cost measurement and full traversal.
//!
//! Invalid endpoints and unreachable goals are first-class results —
//! a fallback position or an empty path — never errors. Callers check
//! them in-band.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod heuristic;
pub mod pathfinder;

pub(crate) mod scratch;

pub use heuristic::Heuristic;
pub use pathfinder::Pathfinder;
