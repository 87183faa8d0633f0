//! Core types and traits for the ALFAsim plugin SDK.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared by the schema, hook, and plugin
//! crates: identifiers, unit-tagged quantities, phase and layer name
//! constants, error types, and the host-access traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod error;
pub mod id;
pub mod quantity;
pub mod traits;

pub use constants::{
    GAS_LAYER, GAS_PHASE, OIL_LAYER, OIL_PHASE, SOLID_PHASE, WATER_LAYER, WATER_PHASE,
};
pub use error::{ContextError, UnitError};
pub use id::{InstanceId, InstanceIds, TracerId};
pub use quantity::Quantity;
pub use traits::{Context, LogLevel, ModelInstance};
