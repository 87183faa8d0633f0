//! Secondary (plugin-computed) variable declarations.

/// Who gets to see a secondary variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Available to the plugin during the simulation, never shown.
    Internal,
    /// Offered in the host's trend/profile output selection.
    Output,
}

/// Where on the computational grid the variable lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// Control-volume centers.
    Center,
    /// Control-volume faces.
    Face,
}

/// Which part of the multifield description the variable is computed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// One value per cell, independent of the multifield description.
    Global,
    /// One value per field.
    Field,
    /// One value per phase.
    Phase,
    /// One value per energy equation.
    Energy,
}

/// Declaration of a variable the plugin computes during the simulation.
///
/// The host allocates the storage, exposes the variable in its output
/// selection according to `visibility`, and hands the buffer back to the
/// plugin's solver-side hooks for filling.
///
/// # Examples
///
/// ```
/// use alfasim_sdk_hooks::{Location, Scope, SecondaryVariable, Visibility};
///
/// let var = SecondaryVariable {
///     name: "kinetic_energy_of_oil".to_string(),
///     caption: "Kinetic Energy of Oil".to_string(),
///     unit: "J/kg".to_string(),
///     visibility: Visibility::Output,
///     location: Location::Face,
///     multifield_scope: Scope::Global,
///     checked_on_gui_default: true,
/// };
/// assert_eq!(var.unit, "J/kg");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecondaryVariable {
    /// Name the variable is registered and retrieved under.
    pub name: String,
    /// Label shown in the host's output selection.
    pub caption: String,
    /// Unit the plugin fills the buffer in.
    pub unit: String,
    /// Whether the variable is exposed as simulation output.
    pub visibility: Visibility,
    /// Grid location of the values.
    pub location: Location,
    /// Multifield scope of the values.
    pub multifield_scope: Scope,
    /// Whether the host pre-checks the variable in its output selection.
    pub checked_on_gui_default: bool,
}
