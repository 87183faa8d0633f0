//! ALFAsim SDK: declarative building blocks for ALFAsim plugins.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all SDK sub-crates. For most plugin authors, adding
//! `alfasim-sdk` as a single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use alfasim_sdk::prelude::*;
//!
//! // A plugin declaring one model with a validity check on it.
//! struct MyPlugin;
//!
//! impl Plugin for MyPlugin {
//!     fn data_model_types(&self) -> Vec<DataModelType> {
//!         vec![DataModelType::Model(ModelDef {
//!             name: "Setup".to_string(),
//!             caption: "Setup".to_string(),
//!             icon: None,
//!             attributes: vec![
//!                 AttributeDef::quantity("flow_rate", 1.0, "m3/s", "Flow Rate"),
//!             ],
//!         })]
//!     }
//!
//!     fn status(&self, ctx: &dyn Context) -> Result<Vec<Message>, HookError> {
//!         let setup = ctx.get_model("Setup")?;
//!         let mut messages = Vec::new();
//!         if setup.quantity("flow_rate")?.get_value("m3/s")? <= 0.0 {
//!             messages.push(Message::error("Setup", "Flow rate must be positive."));
//!         }
//!         Ok(messages)
//!     }
//! }
//!
//! let plugin = MyPlugin;
//! alfasim_sdk::schema::validate_declarations(&plugin.data_model_types()).unwrap();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `alfasim-sdk-core` | IDs, quantities, host traits, built-in phase and layer names |
//! | [`schema`] | `alfasim-sdk-schema` | Model and attribute descriptors, load-time validation |
//! | [`hooks`] | `alfasim-sdk-hooks` | The [`Plugin`](hooks::Plugin) trait, directives, diagnostics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`alfasim-sdk-core`).
///
/// Contains the host-facing traits ([`types::ModelInstance`],
/// [`types::Context`]), instance and tracer IDs, [`types::Quantity`],
/// and the built-in phase and layer name constants.
pub use alfasim_sdk_core as types;

/// Model and attribute descriptors (`alfasim-sdk-schema`).
///
/// Build [`schema::ModelDef`] and [`schema::ContainerDef`] declarations
/// and check them with [`schema::validate_declarations`].
pub use alfasim_sdk_schema as schema;

/// Hook surface (`alfasim-sdk-hooks`).
///
/// The [`hooks::Plugin`] trait is the main extension point: one
/// defaulted method per host hook, plus the directive, variable, and
/// diagnostic types those hooks return.
pub use alfasim_sdk_hooks as hooks;

/// Common imports for typical plugin development.
///
/// ```rust
/// use alfasim_sdk::prelude::*;
/// ```
///
/// This imports the most frequently used types: the plugin trait, the
/// host traits, schema descriptors, directives, and diagnostics.
pub mod prelude {
    // Host traits and core types
    pub use alfasim_sdk_core::{
        Context, InstanceId, InstanceIds, LogLevel, ModelInstance, Quantity, TracerId,
    };

    // Errors
    pub use alfasim_sdk_core::{ContextError, UnitError};

    // Schema descriptors
    pub use alfasim_sdk_schema::{
        AttributeDef, AttributeKind, ContainerDef, DataModelType, ModelDef, ReferenceTarget,
        TableColumn,
    };

    // Hooks
    pub use alfasim_sdk_hooks::{
        AddField, AddPhase, HookError, HookId, Location, Message, Plugin, Scope,
        SecondaryVariable, Severity, UpdateLayer, Visibility,
    };
}
