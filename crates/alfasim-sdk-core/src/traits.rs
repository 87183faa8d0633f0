//! Host-access traits: [`Context`] and [`ModelInstance`].
//!
//! All state lives in the host. A hook receives a `&dyn Context` for the
//! duration of one synchronous invocation and must not retain anything
//! across calls. Both traits use dynamic dispatch so hooks stay
//! object-safe and mock-based tests can substitute the host.

use crate::error::ContextError;
use crate::id::{InstanceId, TracerId};
use crate::quantity::Quantity;

/// Level of a message written to the host's calculation log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational output, recorded but not surfaced to the user.
    Information,
    /// Surfaced to the user alongside solver warnings.
    Warning,
}

/// Read-only typed access to the current values of one form.
///
/// Implemented by the host over its persisted field values, and by
/// `alfasim-sdk-test-utils` mocks for testing. Accessors fail with
/// [`ContextError`] when the attribute is missing or holds a different
/// kind of value; hooks propagate these errors with `?` rather than
/// recovering.
pub trait ModelInstance {
    /// Name of the model this instance was declared with.
    fn model_type(&self) -> &str;

    /// Value of a string attribute.
    fn string(&self, attribute: &str) -> Result<&str, ContextError>;

    /// Value of a boolean attribute.
    fn boolean(&self, attribute: &str) -> Result<bool, ContextError>;

    /// Value of a quantity attribute, in the unit it was declared with.
    fn quantity(&self, attribute: &str) -> Result<&Quantity, ContextError>;

    /// Selected value of an enumeration attribute.
    fn enumeration(&self, attribute: &str) -> Result<&str, ContextError>;

    /// Contents of a file-content attribute, `None` while no file is set.
    fn file_content(&self, attribute: &str) -> Result<Option<&[u8]>, ContextError>;

    /// One column of a table attribute, in the column's declared unit.
    fn table_column(&self, attribute: &str, column: &str) -> Result<&[f64], ContextError>;

    /// Selection of a reference attribute, `None` while unset.
    fn reference(&self, attribute: &str) -> Result<Option<InstanceId>, ContextError>;

    /// Selection of a multiple-reference attribute, empty while unset.
    fn multiple_reference(&self, attribute: &str) -> Result<&[InstanceId], ContextError>;
}

/// The host handle passed to every context-taking hook.
///
/// Invocations are synchronous and serial; the context is only valid for
/// the duration of the call that received it.
pub trait Context {
    /// Identifier the host assigned to this plugin.
    fn plugin_id(&self) -> &str;

    /// Look up a model or container instance by declared name.
    ///
    /// For containers this returns the container's own attributes (such
    /// as an active-selection reference), not the contained instances.
    fn get_model(&self, model: &str) -> Result<&dyn ModelInstance, ContextError>;

    /// Resolve a reference selection to the instance it points at.
    ///
    /// Reference resolution is entirely host-side; plugins never hold
    /// instances directly, only ids read from reference attributes.
    fn resolve(&self, instance: InstanceId) -> Result<&dyn ModelInstance, ContextError>;

    /// Solver-internal index of a tracer picked through a reference.
    fn tracer_id(&self, instance: InstanceId) -> Result<TracerId, ContextError>;

    /// Write a message to the host's calculation log.
    fn log(&self, level: LogLevel, message: &str);
}
