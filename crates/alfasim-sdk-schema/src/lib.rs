//! Declarative model schemas for the ALFAsim plugin SDK.
//!
//! A plugin does not build its UI: it declares [`ModelDef`] and
//! [`ContainerDef`] schemas and the host renders them as data-entry
//! forms, owning instantiation and persistence of the field values.
//! [`validate_declarations`] is the load-time structural check the host
//! runs once over everything the declaration hook returned.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod attribute;
pub mod model;
pub mod validate;

pub use attribute::{AttributeDef, AttributeKind, Predicate, ReferenceTarget, TableColumn};
pub use model::{ContainerDef, DataModelType, ModelDef};
pub use validate::{validate_declarations, SchemaError};
