//! The template plugin's hook implementations.

use alfasim_sdk_core::{Context, LogLevel, GAS_PHASE, OIL_LAYER, OIL_PHASE, SOLID_PHASE};
use alfasim_sdk_hooks::{
    AddField, AddPhase, HookError, Location, Message, Plugin, Scope, SecondaryVariable,
    UpdateLayer, Visibility,
};
use alfasim_sdk_schema::DataModelType;

use crate::models::{declarations, MODEL_SELECTOR, SELECTED_MODEL, TEMPLATE_MODEL};

/// Name of the field, phase and layer extension this plugin registers.
pub const EXTRA_FIELD: &str = "extra";
/// Name of the tracer this plugin defines.
pub const TRACER_NAME: &str = "my_tracer";

/// A plugin exercising every hook the SDK offers.
///
/// Stateless by construction: all inputs are read back through the
/// [`Context`] handed into each hook.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplatePlugin;

impl TemplatePlugin {
    /// Creates the plugin.
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for TemplatePlugin {
    fn data_model_types(&self) -> Vec<DataModelType> {
        declarations()
    }

    /// Reads every input kind back through the context, logging as it
    /// goes, so authors can see the read side of each attribute.
    fn initialize(&self, ctx: &dyn Context) -> Result<(), HookError> {
        ctx.log(
            LogLevel::Information,
            &format!("{} starting up", ctx.plugin_id()),
        );

        let selector = ctx.get_model(MODEL_SELECTOR)?;
        let Some(selected) = selector.reference(SELECTED_MODEL)? else {
            ctx.log(LogLevel::Warning, "no template model selected");
            return Ok(());
        };
        let model = ctx.resolve(selected)?;

        let name = model.string("name")?;
        let quantity = model.quantity("quantity")?.get_value("m")?;
        ctx.log(
            LogLevel::Information,
            &format!("{name}: quantity = {quantity} m"),
        );
        ctx.log(
            LogLevel::Information,
            &format!("{name}: enum = {}", model.enumeration("enum")?),
        );
        ctx.log(
            LogLevel::Information,
            &format!("{name}: string = {}", model.string("string")?),
        );
        match model.file_content("file_content")? {
            Some(content) => ctx.log(
                LogLevel::Information,
                &format!("{name}: file content of {} bytes", content.len()),
            ),
            None => ctx.log(LogLevel::Information, &format!("{name}: no file selected")),
        }
        let pressure = model.table_column("table", "pressure")?;
        let temperature = model.table_column("table", "temperature")?;
        ctx.log(
            LogLevel::Information,
            &format!(
                "{name}: table with {} pressure and {} temperature rows",
                pressure.len(),
                temperature.len()
            ),
        );

        if let Some(tracer) = model.reference("reference_tracer")? {
            let id = ctx.tracer_id(tracer)?;
            ctx.log(LogLevel::Information, &format!("{name}: tracer {id}"));
        }
        for tracer in model.multiple_reference("multiple_reference_tracer")? {
            let id = ctx.tracer_id(*tracer)?;
            ctx.log(LogLevel::Information, &format!("{name}: tracer {id}"));
        }
        if let Some(instance) = model.reference("reference_internal")? {
            let custom = ctx.resolve(instance)?;
            ctx.log(
                LogLevel::Information,
                &format!("{name}: references {}", custom.string("name")?),
            );
        }
        for instance in model.multiple_reference("multiple_reference_internal")? {
            let custom = ctx.resolve(*instance)?;
            ctx.log(
                LogLevel::Information,
                &format!("{name}: references {}", custom.string("name")?),
            );
        }

        Ok(())
    }

    fn finalize(&self, ctx: &dyn Context) -> Result<(), HookError> {
        ctx.log(
            LogLevel::Information,
            &format!("{} shutting down", ctx.plugin_id()),
        );
        Ok(())
    }

    fn configure_fields(&self, _ctx: &dyn Context) -> Result<Vec<AddField>, HookError> {
        Ok(vec![AddField {
            name: EXTRA_FIELD.to_string(),
        }])
    }

    fn configure_layers(&self, _ctx: &dyn Context) -> Result<Vec<UpdateLayer>, HookError> {
        Ok(vec![UpdateLayer {
            name: OIL_LAYER.to_string(),
            additional_fields: vec![EXTRA_FIELD.to_string()],
        }])
    }

    fn configure_phases(&self, _ctx: &dyn Context) -> Result<Vec<AddPhase>, HookError> {
        Ok(vec![AddPhase {
            name: EXTRA_FIELD.to_string(),
            fields: vec![EXTRA_FIELD.to_string()],
            primary_field: EXTRA_FIELD.to_string(),
        }])
    }

    fn user_defined_tracers(&self) -> Vec<String> {
        vec![TRACER_NAME.to_string()]
    }

    fn phase_properties_calculated(&self) -> Vec<String> {
        vec![SOLID_PHASE.to_string()]
    }

    fn phase_interaction_properties_calculated(&self) -> Vec<(String, String)> {
        vec![
            (SOLID_PHASE.to_string(), GAS_PHASE.to_string()),
            (SOLID_PHASE.to_string(), OIL_PHASE.to_string()),
        ]
    }

    fn additional_variables(&self) -> Vec<SecondaryVariable> {
        vec![SecondaryVariable {
            name: "kinetic_energy_of_oil".to_string(),
            caption: "Kinetic Energy of Oil".to_string(),
            unit: "J/kg".to_string(),
            visibility: Visibility::Output,
            location: Location::Face,
            multifield_scope: Scope::Global,
            checked_on_gui_default: true,
        }]
    }

    /// Three checks, always all of them, in declaration order.
    fn status(&self, ctx: &dyn Context) -> Result<Vec<Message>, HookError> {
        let mut messages = Vec::new();

        let selector = ctx.get_model(MODEL_SELECTOR)?;
        if selector.reference(SELECTED_MODEL)?.is_none() {
            messages.push(Message::error(MODEL_SELECTOR, "Template Model not set."));
        }

        let model = ctx.get_model(TEMPLATE_MODEL)?;
        let name = model.string("name")?;
        if model.boolean("boolean")? {
            messages.push(Message::warning(
                name,
                "Warning Message example: triggered when boolean is True",
            ));
        }
        if model.quantity("quantity")?.get_value("m")? < 0.0 {
            messages.push(Message::error(
                name,
                "Error Message example: triggered when quantity is below zero",
            ));
        }

        Ok(messages)
    }
}
