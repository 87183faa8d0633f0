//! The [`Plugin`] trait and the host's hook-name convention.

use crate::directive::{AddField, AddPhase, UpdateLayer};
use crate::error::HookError;
use crate::message::Message;
use crate::variable::SecondaryVariable;
use alfasim_sdk_core::Context;
use alfasim_sdk_schema::DataModelType;

/// A hook lifecycle point and its fixed host-recognized symbol.
///
/// Discovery is by name: the host scans the plugin for the symbols in
/// [`host_symbol`](HookId::host_symbol) and calls whatever it finds.
/// The [`Plugin`] trait methods map one-to-one onto these ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookId {
    /// Model and container declarations.
    DataModelTypes,
    /// Once before the simulation run starts.
    Initialize,
    /// Once after the simulation run ends.
    Finalize,
    /// Additional field registration.
    ConfigureFields,
    /// Layer composition updates.
    ConfigureLayers,
    /// Additional phase registration.
    ConfigurePhases,
    /// User-defined tracer names.
    UserDefinedTracers,
    /// Phases whose properties the plugin computes.
    PhaseProperties,
    /// Phase pairs whose interaction properties the plugin computes.
    PhaseInteractionProperties,
    /// Secondary variable declarations.
    AdditionalVariables,
    /// Configuration status and validation diagnostics.
    Status,
}

impl HookId {
    /// Every hook, in the order the host consults them over a plugin's
    /// lifetime.
    pub const ALL: [HookId; 11] = [
        HookId::DataModelTypes,
        HookId::ConfigureFields,
        HookId::ConfigureLayers,
        HookId::ConfigurePhases,
        HookId::UserDefinedTracers,
        HookId::PhaseProperties,
        HookId::PhaseInteractionProperties,
        HookId::AdditionalVariables,
        HookId::Status,
        HookId::Initialize,
        HookId::Finalize,
    ];

    /// The fixed symbol the host looks the hook up by.
    pub fn host_symbol(self) -> &'static str {
        match self {
            Self::DataModelTypes => "alfasim_get_data_model_type",
            Self::Initialize => "alfasim_initialize",
            Self::Finalize => "alfasim_finalize",
            Self::ConfigureFields => "alfasim_configure_fields",
            Self::ConfigureLayers => "alfasim_configure_layers",
            Self::ConfigurePhases => "alfasim_configure_phases",
            Self::UserDefinedTracers => "alfasim_get_user_defined_tracers_from_plugin",
            Self::PhaseProperties => "alfasim_get_phase_properties_calculated_from_plugin",
            Self::PhaseInteractionProperties => {
                "alfasim_get_phase_interaction_properties_calculated_from_plugin"
            }
            Self::AdditionalVariables => "alfasim_get_additional_variables",
            Self::Status => "alfasim_get_status",
        }
    }
}

/// A plugin: a set of declarative hook implementations.
///
/// # Contract
///
/// - The host invokes hooks synchronously and serially; implementations
///   must not block, spawn concurrent work, or retain mutable state
///   across invocations (`&self` receivers).
/// - All state lives in the host and is reached through the
///   [`Context`] passed into the call; the context is only valid for
///   that call.
/// - Lookup failures propagate as [`HookError`] and abort the
///   invocation; diagnostics meant for the user travel as
///   [`Message`] values in the `Ok` result of [`status`](Plugin::status).
///
/// Every method is defaulted: implement only the hooks the plugin
/// registers.
///
/// # Object safety
///
/// The trait is object-safe; hosts hold plugins as `Box<dyn Plugin>`.
///
/// # Examples
///
/// A plugin that declares one tracer and a status check:
///
/// ```
/// use alfasim_sdk_core::Context;
/// use alfasim_sdk_hooks::{HookError, Message, Plugin};
///
/// struct MyPlugin;
///
/// impl Plugin for MyPlugin {
///     fn user_defined_tracers(&self) -> Vec<String> {
///         vec!["my_tracer".to_string()]
///     }
///
///     fn status(&self, ctx: &dyn Context) -> Result<Vec<Message>, HookError> {
///         let model = ctx.get_model("Setup")?;
///         let mut messages = Vec::new();
///         if model.boolean("dry_run")? {
///             messages.push(Message::warning("Setup", "dry run enabled"));
///         }
///         Ok(messages)
///     }
/// }
/// ```
pub trait Plugin: Send + 'static {
    /// Model and container schemas the host should expose
    /// (`alfasim_get_data_model_type`).
    ///
    /// Called once at load time; the host validates the result with
    /// [`validate_declarations`](alfasim_sdk_schema::validate_declarations)
    /// before rendering anything.
    fn data_model_types(&self) -> Vec<DataModelType> {
        Vec::new()
    }

    /// Called once before the simulation run starts
    /// (`alfasim_initialize`). Read configuration, log through the host.
    fn initialize(&self, ctx: &dyn Context) -> Result<(), HookError> {
        let _ = ctx;
        Ok(())
    }

    /// Called once after the simulation run ends (`alfasim_finalize`).
    fn finalize(&self, ctx: &dyn Context) -> Result<(), HookError> {
        let _ = ctx;
        Ok(())
    }

    /// Additional fields to register (`alfasim_configure_fields`).
    fn configure_fields(&self, ctx: &dyn Context) -> Result<Vec<AddField>, HookError> {
        let _ = ctx;
        Ok(Vec::new())
    }

    /// Layer composition updates (`alfasim_configure_layers`).
    fn configure_layers(&self, ctx: &dyn Context) -> Result<Vec<UpdateLayer>, HookError> {
        let _ = ctx;
        Ok(Vec::new())
    }

    /// Additional phases to register (`alfasim_configure_phases`).
    fn configure_phases(&self, ctx: &dyn Context) -> Result<Vec<AddPhase>, HookError> {
        let _ = ctx;
        Ok(Vec::new())
    }

    /// Names of the tracers the plugin defines
    /// (`alfasim_get_user_defined_tracers_from_plugin`). Consumed
    /// verbatim by the host.
    fn user_defined_tracers(&self) -> Vec<String> {
        Vec::new()
    }

    /// Phases whose properties the plugin computes instead of the host
    /// (`alfasim_get_phase_properties_calculated_from_plugin`).
    fn phase_properties_calculated(&self) -> Vec<String> {
        Vec::new()
    }

    /// Phase pairs whose interaction properties the plugin computes
    /// (`alfasim_get_phase_interaction_properties_calculated_from_plugin`).
    fn phase_interaction_properties_calculated(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Secondary variables the plugin fills during the run
    /// (`alfasim_get_additional_variables`).
    fn additional_variables(&self) -> Vec<SecondaryVariable> {
        Vec::new()
    }

    /// Configuration diagnostics (`alfasim_get_status`).
    ///
    /// Called whenever the host re-evaluates the case setup. Runs every
    /// check and returns one ordered list: production order, no
    /// deduplication, no early exit.
    fn status(&self, ctx: &dyn Context) -> Result<Vec<Message>, HookError> {
        let _ = ctx;
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_symbols_are_unique_and_prefixed() {
        let symbols: Vec<&str> = HookId::ALL.iter().map(|h| h.host_symbol()).collect();
        for (i, a) in symbols.iter().enumerate() {
            assert!(a.starts_with("alfasim_"), "symbol '{a}' lacks the prefix");
            for b in &symbols[i + 1..] {
                assert_ne!(a, b, "duplicate host symbol");
            }
        }
    }

    #[test]
    fn every_hook_is_listed_once() {
        assert_eq!(HookId::ALL.len(), 11);
        assert!(HookId::ALL.contains(&HookId::Status));
        assert!(HookId::ALL.contains(&HookId::Finalize));
    }

    #[test]
    fn defaults_declare_nothing() {
        struct Empty;
        impl Plugin for Empty {}

        let plugin = Empty;
        assert!(plugin.data_model_types().is_empty());
        assert!(plugin.user_defined_tracers().is_empty());
        assert!(plugin.phase_properties_calculated().is_empty());
        assert!(plugin.phase_interaction_properties_calculated().is_empty());
        assert!(plugin.additional_variables().is_empty());
    }

    #[test]
    fn default_context_hooks_succeed_with_empty_results() {
        use alfasim_sdk_test_utils::MockContext;

        struct Empty;
        impl Plugin for Empty {}

        let plugin = Empty;
        let ctx = MockContext::new("empty-plugin");
        assert!(plugin.initialize(&ctx).is_ok());
        assert!(plugin.configure_fields(&ctx).unwrap().is_empty());
        assert!(plugin.configure_layers(&ctx).unwrap().is_empty());
        assert!(plugin.configure_phases(&ctx).unwrap().is_empty());
        assert!(plugin.status(&ctx).unwrap().is_empty());
        assert!(plugin.finalize(&ctx).is_ok());
    }
}
