//! Template plugin for the ALFAsim plugin SDK.
//!
//! Declares one model of every attribute kind, a selectable model
//! container, and an implementation of every hook, so plugin authors
//! can copy a working example of each construct.
//!
//! # Surface (host view)
//!
//! 1. [`declarations`] — the forms the host renders (`CustomModel`,
//!    `CustomModelContainer`, `TemplateModel`, `ModelSelector`)
//! 2. [`TemplatePlugin`] — field/layer/phase configuration, tracer and
//!    secondary-variable registration, the status checks, and an
//!    `initialize` that reads every input kind back

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod models;
pub mod plugin;

pub use models::{
    custom_model, custom_model_container, declarations, file_content_visible, model_selector,
    string_enabled, template_model, CUSTOM_MODEL, CUSTOM_MODEL_CONTAINER, MODEL_SELECTOR,
    SELECTED_MODEL, TEMPLATE_MODEL,
};
pub use plugin::{TemplatePlugin, EXTRA_FIELD, TRACER_NAME};
