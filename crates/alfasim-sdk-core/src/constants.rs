//! Names of the phases and layers built into the host simulator.
//!
//! User-defined phases and fields are referred to by whatever name the
//! plugin registered; the constants here cover the vocabulary the host
//! ships with, so directives can target built-in entities without
//! spelling risk.

/// The continuous gas phase.
pub const GAS_PHASE: &str = "gas";
/// The continuous oil phase.
pub const OIL_PHASE: &str = "oil";
/// The continuous water phase.
pub const WATER_PHASE: &str = "water";
/// The dispersed solid phase.
pub const SOLID_PHASE: &str = "solid";

/// The gas layer of the stratified flow decomposition.
pub const GAS_LAYER: &str = "gas";
/// The oil layer of the stratified flow decomposition.
pub const OIL_LAYER: &str = "oil";
/// The water layer of the stratified flow decomposition.
pub const WATER_LAYER: &str = "water";
