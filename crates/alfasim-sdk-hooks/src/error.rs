//! The fatal error channel from hooks back to the host.

use alfasim_sdk_core::{ContextError, UnitError};
use std::error::Error;
use std::fmt;

/// An unrecovered failure inside a hook.
///
/// Hooks distinguish two error classes: diagnostics they construct on
/// purpose travel as [`Message`](crate::message::Message) values in a
/// hook's `Ok` result, while lookup and unit failures propagate here and
/// abort the invocation. The host decides how to report or abort; the
/// plugin performs no retry or recovery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HookError {
    /// A model, attribute, reference, or tracer lookup failed.
    Context(ContextError),
    /// A quantity was read in a unit it is not stored in.
    Unit(UnitError),
}

impl fmt::Display for HookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Context(e) => write!(f, "context lookup failed: {e}"),
            Self::Unit(e) => write!(f, "unit access failed: {e}"),
        }
    }
}

impl Error for HookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Context(e) => Some(e),
            Self::Unit(e) => Some(e),
        }
    }
}

impl From<ContextError> for HookError {
    fn from(e: ContextError) -> Self {
        Self::Context(e)
    }
}

impl From<UnitError> for HookError {
    fn from(e: UnitError) -> Self {
        Self::Unit(e)
    }
}
