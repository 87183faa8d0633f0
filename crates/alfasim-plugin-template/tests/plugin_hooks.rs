//! End-to-end exercise of the template plugin against a mock host.

use alfasim_plugin_template::{
    declarations, file_content_visible, string_enabled, TemplatePlugin, CUSTOM_MODEL,
    MODEL_SELECTOR, SELECTED_MODEL, TEMPLATE_MODEL, TRACER_NAME,
};
use alfasim_sdk_core::{InstanceId, LogLevel, TracerId};
use alfasim_sdk_hooks::Plugin;
use alfasim_sdk_schema::validate_declarations;
use alfasim_sdk_test_utils::{MockContext, MockModel};

use proptest::prelude::*;

/// A mock host with every attribute of the template model populated,
/// one referenced custom model and one registered tracer.
fn populated_context() -> MockContext {
    let mut ctx = MockContext::new("template-plugin");

    let mut selector = MockModel::new(MODEL_SELECTOR);
    selector.set_reference(SELECTED_MODEL, Some(InstanceId(1)));
    ctx.add_model(MODEL_SELECTOR, selector);

    let mut model = MockModel::new(TEMPLATE_MODEL);
    model.set_string("name", "Template Model Name");
    model.set_quantity("quantity", 1.0, "m");
    model.set_enumeration("enum", "VALUE_B");
    model.set_boolean("boolean", false);
    model.set_string("string", "Foo");
    model.set_file_content("file_content", Some(b"hello".to_vec()));
    model.set_table_column("table", "pressure", vec![1.0, 2.0]);
    model.set_table_column("table", "temperature", vec![300.0, 310.0]);
    model.set_reference("reference_tracer", Some(InstanceId(10)));
    model.set_multiple_reference("multiple_reference_tracer", [InstanceId(10)]);
    model.set_reference("reference_internal", Some(InstanceId(2)));
    model.set_multiple_reference("multiple_reference_internal", [InstanceId(2)]);
    ctx.add_model(TEMPLATE_MODEL, model.clone());
    ctx.add_instance(InstanceId(1), model);

    let mut custom = MockModel::new(CUSTOM_MODEL);
    custom.set_string("name", "My Custom Model");
    custom.set_quantity("quantity", 1.0, "m");
    ctx.add_instance(InstanceId(2), custom);

    ctx.add_tracer(InstanceId(10), TracerId(0));

    ctx
}

#[test]
fn declared_schemas_are_valid() {
    assert_eq!(validate_declarations(&declarations()), Ok(()));
}

#[test]
fn declares_every_hook_output() {
    let plugin = TemplatePlugin::new();
    assert_eq!(plugin.data_model_types().len(), 4);
    assert_eq!(plugin.user_defined_tracers(), vec![TRACER_NAME.to_string()]);
    assert_eq!(plugin.phase_properties_calculated().len(), 1);
    assert_eq!(plugin.phase_interaction_properties_calculated().len(), 2);
    assert_eq!(plugin.additional_variables().len(), 1);
}

#[test]
fn initialize_reads_every_input_back() {
    let plugin = TemplatePlugin::new();
    let ctx = populated_context();

    plugin.initialize(&ctx).unwrap();

    let log = ctx.log_messages();
    assert!(log.iter().all(|(level, _)| *level == LogLevel::Information));
    assert!(log[0].1.contains("template-plugin"));
    assert!(log.iter().any(|(_, m)| m.contains("quantity = 1 m")));
    assert!(log.iter().any(|(_, m)| m.contains("enum = VALUE_B")));
    assert!(log.iter().any(|(_, m)| m.contains("string = Foo")));
    assert!(log.iter().any(|(_, m)| m.contains("file content of 5 bytes")));
    assert!(log
        .iter()
        .any(|(_, m)| m.contains("2 pressure and 2 temperature rows")));
    // One tracer read through each reference kind.
    assert_eq!(log.iter().filter(|(_, m)| m.contains("tracer 0")).count(), 2);
    assert_eq!(
        log.iter()
            .filter(|(_, m)| m.contains("references My Custom Model"))
            .count(),
        2
    );
}

#[test]
fn simulation_lifecycle_logs_start_and_stop() {
    let plugin = TemplatePlugin::new();
    let ctx = populated_context();

    plugin.initialize(&ctx).unwrap();
    plugin.finalize(&ctx).unwrap();

    let log = ctx.log_messages();
    assert!(log.first().is_some_and(|(_, m)| m.contains("starting up")));
    assert!(log.last().is_some_and(|(_, m)| m.contains("shutting down")));
}

#[test]
fn status_accepts_the_populated_setup() {
    let plugin = TemplatePlugin::new();
    let ctx = populated_context();
    assert!(plugin.status(&ctx).unwrap().is_empty());
}

proptest! {
    // Redraw predicates must be pure: same inputs, same answer, no
    // observable effect on the context.
    #[test]
    fn predicates_are_pure(boolean: bool, value_b: bool) {
        let ctx = MockContext::new("template-plugin");
        let mut attr = MockModel::new(TEMPLATE_MODEL);
        attr.set_boolean("boolean", boolean);
        attr.set_enumeration("enum", if value_b { "VALUE_B" } else { "VALUE_A" });

        prop_assert_eq!(string_enabled(&attr, &ctx), string_enabled(&attr, &ctx));
        prop_assert_eq!(string_enabled(&attr, &ctx), boolean);
        prop_assert_eq!(
            file_content_visible(&attr, &ctx),
            file_content_visible(&attr, &ctx)
        );
        prop_assert_eq!(file_content_visible(&attr, &ctx), value_b);
        prop_assert!(ctx.log_messages().is_empty());
    }
}
