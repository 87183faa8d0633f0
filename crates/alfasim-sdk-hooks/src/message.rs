//! Status diagnostics returned to the host for display.

use std::fmt;

/// Severity of a status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Blocks the simulation from starting.
    Error,
    /// Shown to the user; the simulation may still run.
    Warning,
}

/// One diagnostic produced by the status hook.
///
/// The host displays messages exactly as returned: in production order,
/// without deduplication or reordering. A status hook runs all of its
/// checks on every invocation and appends one message per finding.
///
/// # Examples
///
/// ```
/// use alfasim_sdk_hooks::{Message, Severity};
///
/// let msg = Message::error("ModelSelector", "Template Model not set.");
/// assert_eq!(msg.severity, Severity::Error);
/// assert_eq!(msg.model_name, "ModelSelector");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// How the host renders and weighs the message.
    pub severity: Severity,
    /// The model (or container) the finding is attributed to, shown as
    /// the message source.
    pub model_name: String,
    /// Free-text content shown to the user.
    pub text: String,
}

impl Message {
    /// A blocking error attributed to `model_name`.
    pub fn error(model_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            model_name: model_name.into(),
            text: text.into(),
        }
    }

    /// A non-blocking warning attributed to `model_name`.
    pub fn warning(model_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            model_name: model_name.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "[{tag}] {}: {}", self.model_name, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_severity() {
        assert_eq!(Message::error("M", "x").severity, Severity::Error);
        assert_eq!(Message::warning("M", "x").severity, Severity::Warning);
    }

    #[test]
    fn display_tags_severity_and_source() {
        let msg = Message::warning("Template Model Name", "boolean is set");
        assert_eq!(
            msg.to_string(),
            "[warning] Template Model Name: boolean is set"
        );
    }
}
