//! Handle traits through which the core observes and steers the host's
//! agents and targets.
//!
//! The core never owns agents or targets. It sees them as
//! position-bearing handles with stable identities, and applies solved
//! assignments through the [`TargetSink`] capability rather than by
//! dispatching a host event by name.

use crate::error::CapabilityError;
use crate::id::{AgentId, TargetId};
use crate::point::Point;

/// Anything with a readable world position.
pub trait Positioned {
    /// Current position of this handle.
    fn position(&self) -> Point;
}

/// A mobile agent eligible for assignment.
pub trait AgentHandle: Positioned {
    /// Stable identity of this agent.
    ///
    /// Keys the coordinator's retained last-assignment map; must not
    /// change while stability bias should follow the agent.
    fn id(&self) -> AgentId;
}

/// A location an agent can be assigned to.
pub trait TargetHandle: Positioned {
    /// Stable identity of this target.
    fn id(&self) -> TargetId;
}

/// The "steer toward this target" capability.
///
/// The coordinator invokes this once per solved pairing. Movement is
/// entirely the host's concern; the capability only records intent.
///
/// An agent without the capability returns
/// [`CapabilityError::Unsupported`]; the coordinator logs the skip and
/// continues with the remaining pairings.
pub trait TargetSink {
    /// Redirect this agent toward `target`.
    fn set_target(&mut self, target: TargetId) -> Result<(), CapabilityError>;
}
