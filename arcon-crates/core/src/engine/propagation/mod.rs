//! Arc-consistency maintenance.
//!
//! The propagation engine removes every value of a free variable that lost all support towards
//! one of its neighbours and cascades the consequences of these removals. Every removal is
//! recorded on the trail so that a failed search node can put the values back.
mod arc_consistency;
mod propagation_context;
mod removal;

pub(crate) use arc_consistency::ArcConsistency;
pub(crate) use propagation_context::PropagationContext;
pub(crate) use removal::Removal;

/// Propagation emptied the domain of a free variable; the current search node has no solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EmptyDomain;
