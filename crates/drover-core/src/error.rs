//! Error types for the Drover toolkit, organized by subsystem:
//! grid construction, heuristic configuration, assignment solving,
//! and agent capabilities.
//!
//! Path queries deliberately have no error type. Invalid endpoints and
//! unreachable goals are expected outcomes, reported in-band (a fallback
//! position or an empty path), never as errors.

use std::error::Error;
use std::fmt;

/// Errors from navigation grid construction or cell addressing.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// The cell edge length is not a positive, finite number.
    InvalidNodeSize {
        /// The offending value.
        value: f64,
    },
    /// A grid dimension exceeds the addressable maximum.
    DimensionTooLarge {
        /// Which dimension ("rows" or "cols").
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum supported value.
        max: u32,
    },
    /// A cell address lies outside the grid.
    CellOutOfBounds {
        /// Requested row.
        row: u32,
        /// Requested column.
        col: u32,
        /// Grid row count.
        rows: u32,
        /// Grid column count.
        cols: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::InvalidNodeSize { value } => {
                write!(f, "node size must be positive and finite, got {value}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::CellOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(f, "cell ({row}, {col}) out of bounds for {rows}x{cols} grid")
            }
        }
    }
}

impl Error for GridError {}

/// An unrecognized heuristic name at configuration time.
///
/// With a closed heuristic enum the original runtime branch ("missing
/// heuristic, returning 0 distance") is unrepresentable; the defect
/// class surfaces here instead, where configuration is parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeuristicParseError {
    /// The name that failed to parse.
    pub name: String,
}

impl fmt::Display for HeuristicParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized heuristic '{}' (expected 'manhattan' or 'euclidean')",
            self.name
        )
    }
}

impl Error for HeuristicParseError {}

/// Errors from the assignment pipeline.
///
/// Both variants describe a request that was skipped entirely; the
/// coordinator never applies a partial assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// The cost matrix's internal dimensions disagree.
    ///
    /// The builder guarantees squareness; this is a fail-fast guard on
    /// the solver's precondition, not a recoverable input condition.
    NonSquareMatrix {
        /// Number of rows presented.
        rows: usize,
        /// Number of columns presented.
        cols: usize,
    },
    /// The agent or target roster is empty; there is nothing to assign.
    EmptyRoster {
        /// Number of agents presented.
        agents: usize,
        /// Number of targets presented.
        targets: usize,
    },
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonSquareMatrix { rows, cols } => {
                write!(f, "cost matrix must be square, got {rows}x{cols}")
            }
            Self::EmptyRoster { agents, targets } => {
                write!(f, "nothing to assign: {agents} agents, {targets} targets")
            }
        }
    }
}

impl Error for AssignError {}

/// An agent declined a capability invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapabilityError {
    /// The agent does not support being steered to a target.
    Unsupported,
}

impl fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => write!(f, "agent does not support target assignment"),
        }
    }
}

impl Error for CapabilityError {}
