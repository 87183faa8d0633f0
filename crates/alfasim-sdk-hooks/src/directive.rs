//! Structural configuration directives.
//!
//! Returned by the `configure_*` hooks and consumed verbatim by the
//! host's hydrodynamic setup: the plugin states what should exist, the
//! host builds it.

/// Registers an additional continuous or dispersed field.
///
/// # Examples
///
/// ```
/// use alfasim_sdk_hooks::AddField;
///
/// let field = AddField {
///     name: "extra".to_string(),
/// };
/// assert_eq!(field.name, "extra");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddField {
    /// Name the field is registered under.
    pub name: String,
}

/// Registers an additional phase built from plugin fields.
///
/// # Examples
///
/// ```
/// use alfasim_sdk_hooks::AddPhase;
///
/// let phase = AddPhase {
///     name: "extra".to_string(),
///     fields: vec!["extra".to_string()],
///     primary_field: "extra".to_string(),
/// };
/// assert!(phase.fields.contains(&phase.primary_field));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddPhase {
    /// Name the phase is registered under.
    pub name: String,
    /// Fields associated with the phase.
    pub fields: Vec<String>,
    /// The field the host solves the phase's state equations on.
    pub primary_field: String,
}

/// Attaches additional fields to an existing layer.
///
/// # Examples
///
/// ```
/// use alfasim_sdk_core::OIL_LAYER;
/// use alfasim_sdk_hooks::UpdateLayer;
///
/// let layer = UpdateLayer {
///     name: OIL_LAYER.to_string(),
///     additional_fields: vec!["extra".to_string()],
/// };
/// assert_eq!(layer.name, "oil");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateLayer {
    /// The layer to update, typically one of the built-in layer names.
    pub name: String,
    /// Fields appended to the layer's composition.
    pub additional_fields: Vec<String>,
}
