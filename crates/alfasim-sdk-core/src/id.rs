//! Strongly-typed identifiers and the [`InstanceIds`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Identifies one model instance inside a container.
///
/// Instances are created, persisted, and destroyed by the host; plugins
/// only ever see the opaque identifier the host assigned. An `InstanceId`
/// read from a reference attribute is meaningful only to the [`Context`]
/// that produced it (resolve it with [`Context::resolve`]).
///
/// [`Context`]: crate::traits::Context
/// [`Context::resolve`]: crate::traits::Context::resolve
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for InstanceId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Solver-internal index of a tracer.
///
/// Obtained from the host via [`Context::tracer_id`] after the user picks
/// a tracer through a reference attribute. The value indexes the host's
/// tracer arrays; plugins treat it as opaque.
///
/// [`Context::tracer_id`]: crate::traits::Context::tracer_id
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TracerId(pub u32);

impl fmt::Display for TracerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TracerId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// The selection of a multiple-reference attribute.
///
/// Uses `SmallVec<[InstanceId; 4]>` to avoid heap allocation for the
/// common case of a handful of selected instances; larger selections
/// spill to the heap transparently.
pub type InstanceIds = SmallVec<[InstanceId; 4]>;
