//! Model declarations and form predicates of the template plugin.

use alfasim_sdk_core::{Context, ModelInstance};
use alfasim_sdk_schema::{
    AttributeDef, ContainerDef, DataModelType, ModelDef, ReferenceTarget, TableColumn,
};

/// Declaration name of the standalone custom model.
pub const CUSTOM_MODEL: &str = "CustomModel";
/// Declaration name of the container holding custom models.
pub const CUSTOM_MODEL_CONTAINER: &str = "CustomModelContainer";
/// Declaration name of the model exercising every attribute kind.
pub const TEMPLATE_MODEL: &str = "TemplateModel";
/// Declaration name of the container selecting the active template model.
pub const MODEL_SELECTOR: &str = "ModelSelector";
/// The selector's active-selection attribute.
pub const SELECTED_MODEL: &str = "selected_model";

/// Enablement predicate of the `string` attribute: editable only while
/// the `boolean` check box is ticked.
pub fn string_enabled(attr: &dyn ModelInstance, _ctx: &dyn Context) -> bool {
    attr.boolean("boolean").unwrap_or(false)
}

/// Visibility predicate of the `file_content` attribute: shown only
/// while the combo box is on `VALUE_B`.
pub fn file_content_visible(attr: &dyn ModelInstance, _ctx: &dyn Context) -> bool {
    attr.enumeration("enum").map(|v| v == "VALUE_B").unwrap_or(false)
}

/// A small model referenced from inside [`template_model`].
pub fn custom_model() -> ModelDef {
    ModelDef {
        name: CUSTOM_MODEL.to_string(),
        caption: "Custom Model".to_string(),
        icon: None,
        attributes: vec![
            AttributeDef::string("name", "Template Model Name", "Name"),
            AttributeDef::quantity("quantity", 1.0, "m", "Property"),
        ],
    }
}

/// Container holding any number of [`custom_model`] instances, so the
/// template model's internal references have something to point at.
pub fn custom_model_container() -> ContainerDef {
    ContainerDef {
        name: CUSTOM_MODEL_CONTAINER.to_string(),
        caption: "Custom Property".to_string(),
        icon: None,
        model: CUSTOM_MODEL.to_string(),
        attributes: Vec::new(),
    }
}

/// The model exercising every attribute kind the SDK offers.
pub fn template_model() -> ModelDef {
    ModelDef {
        name: TEMPLATE_MODEL.to_string(),
        caption: "Template Model".to_string(),
        icon: None,
        attributes: vec![
            // The name attribute labels the instance in the host's tree.
            AttributeDef::string("name", "Template Model Name", "Name"),
            AttributeDef::quantity("quantity", 1.0, "m", "Quantity"),
            AttributeDef::enumeration("enum", ["VALUE_A", "VALUE_B"], "ComboBox"),
            AttributeDef::boolean("boolean", false, "Click Me!"),
            AttributeDef::string("string", "Foo", "Write something")
                .with_enable_expr(string_enabled),
            AttributeDef::file_content("file_content", "File Path Caption")
                .with_visible_expr(file_content_visible),
            AttributeDef::table(
                "table",
                vec![
                    TableColumn {
                        id: "pressure".to_string(),
                        caption: "Pressure".to_string(),
                        initial: 1.0,
                        unit: "bar".to_string(),
                    },
                    TableColumn {
                        id: "temperature".to_string(),
                        caption: "Temperature".to_string(),
                        initial: 2.0,
                        unit: "K".to_string(),
                    },
                ],
                "Table",
            ),
            AttributeDef::reference("reference_tracer", ReferenceTarget::Tracer, "Tracer Reference"),
            AttributeDef::reference(
                "reference_internal",
                ReferenceTarget::Model {
                    container: CUSTOM_MODEL_CONTAINER.to_string(),
                    model: CUSTOM_MODEL.to_string(),
                },
                "Custom Model Reference",
            )
            .with_tooltip("Selects ONE of the custom models defined"),
            AttributeDef::multiple_reference(
                "multiple_reference_tracer",
                ReferenceTarget::Tracer,
                "Multiple Tracer Reference",
            ),
            AttributeDef::multiple_reference(
                "multiple_reference_internal",
                ReferenceTarget::Model {
                    container: CUSTOM_MODEL_CONTAINER.to_string(),
                    model: CUSTOM_MODEL.to_string(),
                },
                "Multiple Internal Reference",
            )
            .with_tooltip("Selects one or more of the custom models defined"),
        ],
    }
}

/// Container holding any number of [`template_model`] configurations,
/// with a reference picking the active one.
pub fn model_selector() -> ContainerDef {
    ContainerDef {
        name: MODEL_SELECTOR.to_string(),
        caption: "Models List".to_string(),
        icon: None,
        model: TEMPLATE_MODEL.to_string(),
        attributes: vec![AttributeDef::reference(
            SELECTED_MODEL,
            ReferenceTarget::Model {
                container: MODEL_SELECTOR.to_string(),
                model: TEMPLATE_MODEL.to_string(),
            },
            "Selected Model",
        )],
    }
}

/// Everything the declaration hook returns, in display order.
pub fn declarations() -> Vec<DataModelType> {
    vec![
        DataModelType::Model(template_model()),
        DataModelType::Container(model_selector()),
        DataModelType::Model(custom_model()),
        DataModelType::Container(custom_model_container()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use alfasim_sdk_schema::validate_declarations;
    use alfasim_sdk_test_utils::{MockContext, MockModel};

    #[test]
    fn declarations_pass_load_time_validation() {
        assert_eq!(validate_declarations(&declarations()), Ok(()));
    }

    #[test]
    fn declarations_count_and_order() {
        let decls = declarations();
        assert_eq!(decls.len(), 4);
        assert_eq!(decls[0].name(), TEMPLATE_MODEL);
        assert_eq!(decls[1].name(), MODEL_SELECTOR);
        assert_eq!(decls[2].name(), CUSTOM_MODEL);
        assert_eq!(decls[3].name(), CUSTOM_MODEL_CONTAINER);
    }

    #[test]
    fn template_model_covers_every_attribute_kind() {
        let model = template_model();
        let labels: Vec<&str> = model.attributes.iter().map(|a| a.kind.label()).collect();
        for expected in [
            "string",
            "quantity",
            "enumeration",
            "boolean",
            "file content",
            "table",
            "reference",
            "multiple reference",
        ] {
            assert!(labels.contains(&expected), "missing a {expected} attribute");
        }
    }

    #[test]
    fn string_is_enabled_by_the_boolean() {
        let ctx = MockContext::new("template-plugin");
        let mut attr = MockModel::new(TEMPLATE_MODEL);

        attr.set_boolean("boolean", false);
        assert!(!string_enabled(&attr, &ctx));

        attr.set_boolean("boolean", true);
        assert!(string_enabled(&attr, &ctx));
    }

    #[test]
    fn file_content_is_visible_on_value_b() {
        let ctx = MockContext::new("template-plugin");
        let mut attr = MockModel::new(TEMPLATE_MODEL);

        attr.set_enumeration("enum", "VALUE_A");
        assert!(!file_content_visible(&attr, &ctx));

        attr.set_enumeration("enum", "VALUE_B");
        assert!(file_content_visible(&attr, &ctx));
    }

    #[test]
    fn predicates_default_to_hidden_on_missing_values() {
        // A freshly created instance may not have values yet; predicates
        // must not fail the redraw.
        let ctx = MockContext::new("template-plugin");
        let attr = MockModel::new(TEMPLATE_MODEL);
        assert!(!string_enabled(&attr, &ctx));
        assert!(!file_content_visible(&attr, &ctx));
    }
}
