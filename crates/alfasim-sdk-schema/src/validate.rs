//! Load-time validation of plugin declarations.
//!
//! [`validate_declarations`] runs once when the host loads the plugin,
//! over everything the declaration hook returned. It enforces the
//! declared-once invariant and checks cross-declaration wiring before
//! any form is rendered; nothing here runs per invocation.

use indexmap::IndexMap;
use indexmap::IndexSet;

use crate::attribute::{AttributeDef, AttributeKind, ReferenceTarget};
use crate::model::DataModelType;

use std::error::Error;
use std::fmt;

/// Errors from declaration validation (load-time, not per-invocation).
///
/// The first offending declaration in list order is reported; the host
/// refuses to load the plugin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaError {
    /// Two declarations share a name. Models and containers share one
    /// namespace.
    DuplicateDeclaration {
        /// The contested name.
        name: String,
    },
    /// A declaration lists the same attribute name twice.
    DuplicateAttribute {
        /// The offending declaration.
        declaration: String,
        /// The repeated attribute name.
        attribute: String,
    },
    /// A container holds a model that was never declared.
    UnknownContainedModel {
        /// The offending container.
        container: String,
        /// The missing model name.
        model: String,
    },
    /// A container's `model` names a declaration that is itself a
    /// container.
    ContainedModelIsAContainer {
        /// The offending container.
        container: String,
        /// The name that resolved to a container.
        model: String,
    },
    /// An internal reference selects from a container that was never
    /// declared, or from a declaration that is not a container.
    UnknownReferenceContainer {
        /// The declaration carrying the reference.
        declaration: String,
        /// The reference attribute.
        attribute: String,
        /// The missing or non-container name.
        container: String,
    },
    /// An internal reference claims a different model than the container
    /// actually holds.
    ReferenceModelMismatch {
        /// The declaration carrying the reference.
        declaration: String,
        /// The reference attribute.
        attribute: String,
        /// The container selected from.
        container: String,
        /// The model the container holds.
        held: String,
        /// The model the reference claimed.
        claimed: String,
    },
    /// An enumeration declares no values.
    EmptyEnumeration {
        /// The offending declaration.
        declaration: String,
        /// The enumeration attribute.
        attribute: String,
    },
    /// An enumeration lists the same value twice.
    DuplicateEnumerationValue {
        /// The offending declaration.
        declaration: String,
        /// The enumeration attribute.
        attribute: String,
        /// The repeated value.
        value: String,
    },
    /// An enumeration's initial selection is not one of its values.
    InitialNotInEnumeration {
        /// The offending declaration.
        declaration: String,
        /// The enumeration attribute.
        attribute: String,
        /// The out-of-set initial selection.
        initial: String,
    },
    /// A table declares no columns.
    EmptyTable {
        /// The offending declaration.
        declaration: String,
        /// The table attribute.
        attribute: String,
    },
    /// A table lists the same column id twice.
    DuplicateTableColumn {
        /// The offending declaration.
        declaration: String,
        /// The table attribute.
        attribute: String,
        /// The repeated column id.
        column: String,
    },
    /// A quantity attribute or table column declares an empty unit.
    EmptyUnit {
        /// The offending declaration.
        declaration: String,
        /// The attribute missing a unit.
        attribute: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDeclaration { name } => {
                write!(f, "declaration '{name}' appears more than once")
            }
            Self::DuplicateAttribute {
                declaration,
                attribute,
            } => {
                write!(
                    f,
                    "declaration '{declaration}' lists attribute '{attribute}' twice"
                )
            }
            Self::UnknownContainedModel { container, model } => {
                write!(f, "container '{container}' holds undeclared model '{model}'")
            }
            Self::ContainedModelIsAContainer { container, model } => {
                write!(
                    f,
                    "container '{container}' holds '{model}', which is a container"
                )
            }
            Self::UnknownReferenceContainer {
                declaration,
                attribute,
                container,
            } => {
                write!(
                    f,
                    "reference '{declaration}.{attribute}' selects from '{container}', \
                     which is not a declared container"
                )
            }
            Self::ReferenceModelMismatch {
                declaration,
                attribute,
                container,
                held,
                claimed,
            } => {
                write!(
                    f,
                    "reference '{declaration}.{attribute}' claims model '{claimed}' \
                     but container '{container}' holds '{held}'"
                )
            }
            Self::EmptyEnumeration {
                declaration,
                attribute,
            } => {
                write!(f, "enumeration '{declaration}.{attribute}' has no values")
            }
            Self::DuplicateEnumerationValue {
                declaration,
                attribute,
                value,
            } => {
                write!(
                    f,
                    "enumeration '{declaration}.{attribute}' lists value '{value}' twice"
                )
            }
            Self::InitialNotInEnumeration {
                declaration,
                attribute,
                initial,
            } => {
                write!(
                    f,
                    "enumeration '{declaration}.{attribute}' initial selection \
                     '{initial}' is not among its values"
                )
            }
            Self::EmptyTable {
                declaration,
                attribute,
            } => {
                write!(f, "table '{declaration}.{attribute}' has no columns")
            }
            Self::DuplicateTableColumn {
                declaration,
                attribute,
                column,
            } => {
                write!(
                    f,
                    "table '{declaration}.{attribute}' lists column '{column}' twice"
                )
            }
            Self::EmptyUnit {
                declaration,
                attribute,
            } => {
                write!(f, "'{declaration}.{attribute}' declares an empty unit")
            }
        }
    }
}

impl Error for SchemaError {}

/// Validate everything the declaration hook returned.
///
/// Checks, in declaration order:
/// - declaration names are unique across models and containers;
/// - attribute names are unique within each declaration;
/// - every container holds a declared model (not another container);
/// - every internal reference selects from a declared container whose
///   held model matches the one the reference claims;
/// - enumerations have at least one value, no repeats, and an initial
///   selection drawn from the values;
/// - tables have at least one column with unique ids;
/// - quantities and table columns carry a non-empty unit.
///
/// An empty declaration list is accepted: a plugin that only registers
/// solver-side hooks declares no forms.
pub fn validate_declarations(declarations: &[DataModelType]) -> Result<(), SchemaError> {
    let mut by_name: IndexMap<&str, &DataModelType> = IndexMap::new();
    for decl in declarations {
        if by_name.insert(decl.name(), decl).is_some() {
            return Err(SchemaError::DuplicateDeclaration {
                name: decl.name().to_string(),
            });
        }
    }

    for decl in declarations {
        if let DataModelType::Container(container) = decl {
            match by_name.get(container.model.as_str()) {
                Some(DataModelType::Model(_)) => {}
                Some(DataModelType::Container(_)) => {
                    return Err(SchemaError::ContainedModelIsAContainer {
                        container: container.name.clone(),
                        model: container.model.clone(),
                    });
                }
                None => {
                    return Err(SchemaError::UnknownContainedModel {
                        container: container.name.clone(),
                        model: container.model.clone(),
                    });
                }
            }
        }

        let mut seen: IndexSet<&str> = IndexSet::new();
        for attr in decl.attributes() {
            if !seen.insert(attr.name.as_str()) {
                return Err(SchemaError::DuplicateAttribute {
                    declaration: decl.name().to_string(),
                    attribute: attr.name.clone(),
                });
            }
            validate_attribute(decl.name(), attr, &by_name)?;
        }
    }

    Ok(())
}

fn validate_attribute(
    declaration: &str,
    attr: &AttributeDef,
    by_name: &IndexMap<&str, &DataModelType>,
) -> Result<(), SchemaError> {
    match &attr.kind {
        AttributeKind::Quantity { unit, .. } => {
            if unit.is_empty() {
                return Err(SchemaError::EmptyUnit {
                    declaration: declaration.to_string(),
                    attribute: attr.name.clone(),
                });
            }
        }
        AttributeKind::Enumeration { values, initial } => {
            if values.is_empty() {
                return Err(SchemaError::EmptyEnumeration {
                    declaration: declaration.to_string(),
                    attribute: attr.name.clone(),
                });
            }
            let mut seen: IndexSet<&str> = IndexSet::new();
            for value in values {
                if !seen.insert(value.as_str()) {
                    return Err(SchemaError::DuplicateEnumerationValue {
                        declaration: declaration.to_string(),
                        attribute: attr.name.clone(),
                        value: value.clone(),
                    });
                }
            }
            if let Some(initial) = initial {
                if !values.contains(initial) {
                    return Err(SchemaError::InitialNotInEnumeration {
                        declaration: declaration.to_string(),
                        attribute: attr.name.clone(),
                        initial: initial.clone(),
                    });
                }
            }
        }
        AttributeKind::Table { columns } => {
            if columns.is_empty() {
                return Err(SchemaError::EmptyTable {
                    declaration: declaration.to_string(),
                    attribute: attr.name.clone(),
                });
            }
            let mut seen: IndexSet<&str> = IndexSet::new();
            for column in columns {
                if !seen.insert(column.id.as_str()) {
                    return Err(SchemaError::DuplicateTableColumn {
                        declaration: declaration.to_string(),
                        attribute: attr.name.clone(),
                        column: column.id.clone(),
                    });
                }
                if column.unit.is_empty() {
                    return Err(SchemaError::EmptyUnit {
                        declaration: declaration.to_string(),
                        attribute: attr.name.clone(),
                    });
                }
            }
        }
        AttributeKind::Reference { target } | AttributeKind::MultipleReference { target } => {
            if let ReferenceTarget::Model { container, model } = target {
                match by_name.get(container.as_str()) {
                    Some(DataModelType::Container(c)) => {
                        if &c.model != model {
                            return Err(SchemaError::ReferenceModelMismatch {
                                declaration: declaration.to_string(),
                                attribute: attr.name.clone(),
                                container: container.clone(),
                                held: c.model.clone(),
                                claimed: model.clone(),
                            });
                        }
                    }
                    _ => {
                        return Err(SchemaError::UnknownReferenceContainer {
                            declaration: declaration.to_string(),
                            attribute: attr.name.clone(),
                            container: container.clone(),
                        });
                    }
                }
            }
        }
        AttributeKind::String { .. } | AttributeKind::Boolean { .. } | AttributeKind::FileContent => {}
    }
    Ok(())
}
