//! Error types for host-side lookups and unit access.
//!
//! Lookup failures are fatal by design: a hook that asks for a model or
//! attribute that does not exist propagates the error to the host's
//! caller instead of recovering locally. The host decides how to report
//! or abort.

use crate::id::InstanceId;
use std::error::Error;
use std::fmt;

/// Errors from [`Context`](crate::traits::Context) and
/// [`ModelInstance`](crate::traits::ModelInstance) lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextError {
    /// No model or container with the requested name is known to the host.
    ModelNotFound {
        /// The requested model name.
        model: String,
    },
    /// The model exists but has no attribute with the requested name.
    AttributeNotFound {
        /// The model that was queried.
        model: String,
        /// The missing attribute.
        attribute: String,
    },
    /// The attribute exists but holds a different kind of value.
    WrongAttributeKind {
        /// The model that was queried.
        model: String,
        /// The attribute that was queried.
        attribute: String,
        /// The kind the accessor expected (e.g. `"boolean"`).
        expected: &'static str,
    },
    /// The table attribute has no column with the requested id.
    ColumnNotFound {
        /// The model that was queried.
        model: String,
        /// The table attribute.
        attribute: String,
        /// The missing column id.
        column: String,
    },
    /// A reference points at an instance the host cannot resolve.
    UnresolvedReference {
        /// The dangling instance id.
        instance: InstanceId,
    },
    /// The instance is not a tracer, or the tracer is no longer defined.
    UnknownTracer {
        /// The queried instance id.
        instance: InstanceId,
    },
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelNotFound { model } => write!(f, "model '{model}' not found"),
            Self::AttributeNotFound { model, attribute } => {
                write!(f, "model '{model}' has no attribute '{attribute}'")
            }
            Self::WrongAttributeKind {
                model,
                attribute,
                expected,
            } => {
                write!(
                    f,
                    "attribute '{attribute}' of model '{model}' is not a {expected}"
                )
            }
            Self::ColumnNotFound {
                model,
                attribute,
                column,
            } => {
                write!(
                    f,
                    "table '{attribute}' of model '{model}' has no column '{column}'"
                )
            }
            Self::UnresolvedReference { instance } => {
                write!(f, "reference to unknown instance {instance}")
            }
            Self::UnknownTracer { instance } => {
                write!(f, "instance {instance} is not a known tracer")
            }
        }
    }
}

impl Error for ContextError {}

/// Errors from reading a [`Quantity`](crate::quantity::Quantity) in a
/// specific unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnitError {
    /// The requested unit differs from the stored unit and the plugin
    /// side performs no conversions.
    ConversionUnavailable {
        /// The unit the value is stored in.
        from: String,
        /// The unit that was requested.
        to: String,
    },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConversionUnavailable { from, to } => {
                write!(f, "no conversion from '{from}' to '{to}' on the plugin side")
            }
        }
    }
}

impl Error for UnitError {}
