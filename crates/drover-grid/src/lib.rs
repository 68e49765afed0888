//! Navigation grid abstraction for Drover.
//!
//! This crate defines the [`Grid`] trait — the spatial boundary through
//! which the pathfinder and the assignment pipeline see the world — and
//! the [`SquareGrid`] lattice backend with per-cell obstacle support.
//!
//! The grid owns its cells. Queries address cells by stable [`NodeId`]
//! arena index and never mutate grid state; all search bookkeeping lives
//! in the caller's per-query scratch, sized from
//! [`node_count`](Grid::node_count).
//!
//! [`NodeId`]: drover_core::NodeId

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod connectivity;
pub mod grid;
pub mod square;

#[cfg(test)]
pub(crate) mod compliance;

pub use connectivity::Connectivity;
pub use grid::Grid;
pub use square::SquareGrid;
