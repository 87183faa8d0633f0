//! Model and container declarations.

use crate::attribute::AttributeDef;

/// Declaration of one configurable form.
///
/// The host renders the attributes as widgets, in declaration order, and
/// owns every concrete value the user enters. A model is declared once
/// at load time; instantiation happens host-side, either standalone or
/// through a [`ContainerDef`].
#[derive(Clone, Debug)]
pub struct ModelDef {
    /// Unique declaration name, used in [`Context::get_model`] lookups.
    ///
    /// [`Context::get_model`]: alfasim_sdk_core::Context::get_model
    pub name: String,
    /// Title the host shows for the form.
    pub caption: String,
    /// Icon resource name, when the plugin ships one.
    pub icon: Option<String>,
    /// The form's fields, in display order.
    pub attributes: Vec<AttributeDef>,
}

/// Declaration of a named collection of model instances.
///
/// A container holds zero or more instances of `model`, created and
/// removed by the user through the host UI. Its own `attributes`
/// typically include an active-selection reference back into itself.
#[derive(Clone, Debug)]
pub struct ContainerDef {
    /// Unique declaration name, shares a namespace with model names.
    pub name: String,
    /// Title the host shows for the collection.
    pub caption: String,
    /// Icon resource name, when the plugin ships one.
    pub icon: Option<String>,
    /// Name of the [`ModelDef`] the container holds.
    pub model: String,
    /// The container's own fields (e.g. an active-selection reference).
    pub attributes: Vec<AttributeDef>,
}

/// One entry of the declaration hook's return value.
#[derive(Clone, Debug)]
pub enum DataModelType {
    /// A standalone form.
    Model(ModelDef),
    /// A collection of forms.
    Container(ContainerDef),
}

impl DataModelType {
    /// The declaration's unique name.
    pub fn name(&self) -> &str {
        match self {
            Self::Model(m) => &m.name,
            Self::Container(c) => &c.name,
        }
    }

    /// The declaration's attributes, in display order.
    pub fn attributes(&self) -> &[AttributeDef] {
        match self {
            Self::Model(m) => &m.attributes,
            Self::Container(c) => &c.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeDef;

    #[test]
    fn name_and_attributes_dispatch_over_both_variants() {
        let model = DataModelType::Model(ModelDef {
            name: "CustomModel".to_string(),
            caption: "Custom Model".to_string(),
            icon: None,
            attributes: vec![AttributeDef::string("name", "Foo", "Name")],
        });
        assert_eq!(model.name(), "CustomModel");
        assert_eq!(model.attributes().len(), 1);

        let container = DataModelType::Container(ContainerDef {
            name: "CustomModelContainer".to_string(),
            caption: "Custom Property".to_string(),
            icon: None,
            model: "CustomModel".to_string(),
            attributes: Vec::new(),
        });
        assert_eq!(container.name(), "CustomModelContainer");
        assert!(container.attributes().is_empty());
    }
}
