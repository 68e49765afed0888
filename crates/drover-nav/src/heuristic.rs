//! Distance heuristics for the A* search.

use drover_core::{HeuristicParseError, Point};
use std::fmt;
use std::str::FromStr;

/// The distance metric used for both the A* heuristic and edge costs.
///
/// Using one metric for both keeps the heuristic consistent with the
/// costs it estimates: Euclidean is admissible on any grid; Manhattan
/// is admissible only where a single step never covers less than one
/// axis-aligned unit of the metric (4-connected lattices).
///
/// Selection is a closed enum, so an unrecognized heuristic cannot
/// reach a query. The configuration defect surfaces at parse time via
/// [`FromStr`] instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Sum of absolute axis deltas across all three axes.
    Manhattan,
    /// Straight-line distance.
    #[default]
    Euclidean,
}

impl Heuristic {
    /// Distance from `a` to `b` under this metric.
    pub fn distance(self, a: &Point, b: &Point) -> f64 {
        match self {
            Self::Manhattan => a.manhattan(b),
            Self::Euclidean => a.distance(b),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manhattan => write!(f, "manhattan"),
            Self::Euclidean => write!(f, "euclidean"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = HeuristicParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            _ => Err(HeuristicParseError {
                name: s.to_string(),
            }),
        }
    }
}
