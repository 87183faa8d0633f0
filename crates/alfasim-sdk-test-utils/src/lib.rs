//! Test utilities and mock host types for plugin development.
//!
//! Provides mock implementations of the core host traits
//! ([`ModelInstance`], [`Context`]) with settable values, so hook logic
//! can be exercised without a running host.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;

use indexmap::IndexMap;

use alfasim_sdk_core::{
    Context, ContextError, InstanceId, InstanceIds, LogLevel, ModelInstance, Quantity, TracerId,
};

/// One stored attribute value of a [`MockModel`].
#[derive(Clone, Debug)]
enum Value {
    String(String),
    Boolean(bool),
    Quantity(Quantity),
    Enumeration(String),
    FileContent(Option<Vec<u8>>),
    Table(IndexMap<String, Vec<f64>>),
    Reference(Option<InstanceId>),
    MultipleReference(InstanceIds),
}

/// Mock implementation of [`ModelInstance`].
///
/// Backed by an insertion-ordered name→value map. Pre-populate the
/// attributes under test with the `set_*` methods; any attribute left
/// unset fails lookups with [`ContextError::AttributeNotFound`], which
/// is exactly how a host reacts to a name the model never declared.
#[derive(Clone, Debug)]
pub struct MockModel {
    model_type: String,
    values: IndexMap<String, Value>,
}

impl MockModel {
    pub fn new(model_type: impl Into<String>) -> Self {
        Self {
            model_type: model_type.into(),
            values: IndexMap::new(),
        }
    }

    pub fn set_string(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(attribute.into(), Value::String(value.into()));
    }

    pub fn set_boolean(&mut self, attribute: impl Into<String>, value: bool) {
        self.values.insert(attribute.into(), Value::Boolean(value));
    }

    /// Store a quantity, pre-converted to `unit` as a host would deliver it.
    pub fn set_quantity(&mut self, attribute: impl Into<String>, value: f64, unit: &str) {
        self.values
            .insert(attribute.into(), Value::Quantity(Quantity::new(value, unit)));
    }

    pub fn set_enumeration(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(attribute.into(), Value::Enumeration(value.into()));
    }

    pub fn set_file_content(&mut self, attribute: impl Into<String>, content: Option<Vec<u8>>) {
        self.values
            .insert(attribute.into(), Value::FileContent(content));
    }

    /// Store one column of a table attribute, in the column's declared unit.
    pub fn set_table_column(
        &mut self,
        attribute: impl Into<String>,
        column: impl Into<String>,
        data: Vec<f64>,
    ) {
        let entry = self
            .values
            .entry(attribute.into())
            .or_insert_with(|| Value::Table(IndexMap::new()));
        if let Value::Table(columns) = entry {
            columns.insert(column.into(), data);
        }
    }

    pub fn set_reference(&mut self, attribute: impl Into<String>, selection: Option<InstanceId>) {
        self.values
            .insert(attribute.into(), Value::Reference(selection));
    }

    pub fn set_multiple_reference(
        &mut self,
        attribute: impl Into<String>,
        selection: impl IntoIterator<Item = InstanceId>,
    ) {
        self.values.insert(
            attribute.into(),
            Value::MultipleReference(selection.into_iter().collect::<InstanceIds>()),
        );
    }

    fn get(&self, attribute: &str) -> Result<&Value, ContextError> {
        self.values
            .get(attribute)
            .ok_or_else(|| ContextError::AttributeNotFound {
                model: self.model_type.clone(),
                attribute: attribute.to_string(),
            })
    }

    fn wrong_kind(&self, attribute: &str, expected: &'static str) -> ContextError {
        ContextError::WrongAttributeKind {
            model: self.model_type.clone(),
            attribute: attribute.to_string(),
            expected,
        }
    }
}

impl ModelInstance for MockModel {
    fn model_type(&self) -> &str {
        &self.model_type
    }

    fn string(&self, attribute: &str) -> Result<&str, ContextError> {
        match self.get(attribute)? {
            Value::String(s) => Ok(s),
            _ => Err(self.wrong_kind(attribute, "string")),
        }
    }

    fn boolean(&self, attribute: &str) -> Result<bool, ContextError> {
        match self.get(attribute)? {
            Value::Boolean(b) => Ok(*b),
            _ => Err(self.wrong_kind(attribute, "boolean")),
        }
    }

    fn quantity(&self, attribute: &str) -> Result<&Quantity, ContextError> {
        match self.get(attribute)? {
            Value::Quantity(q) => Ok(q),
            _ => Err(self.wrong_kind(attribute, "quantity")),
        }
    }

    fn enumeration(&self, attribute: &str) -> Result<&str, ContextError> {
        match self.get(attribute)? {
            Value::Enumeration(v) => Ok(v),
            _ => Err(self.wrong_kind(attribute, "enumeration")),
        }
    }

    fn file_content(&self, attribute: &str) -> Result<Option<&[u8]>, ContextError> {
        match self.get(attribute)? {
            Value::FileContent(content) => Ok(content.as_deref()),
            _ => Err(self.wrong_kind(attribute, "file content")),
        }
    }

    fn table_column(&self, attribute: &str, column: &str) -> Result<&[f64], ContextError> {
        match self.get(attribute)? {
            Value::Table(columns) => columns.get(column).map(Vec::as_slice).ok_or_else(|| {
                ContextError::ColumnNotFound {
                    model: self.model_type.clone(),
                    attribute: attribute.to_string(),
                    column: column.to_string(),
                }
            }),
            _ => Err(self.wrong_kind(attribute, "table")),
        }
    }

    fn reference(&self, attribute: &str) -> Result<Option<InstanceId>, ContextError> {
        match self.get(attribute)? {
            Value::Reference(selection) => Ok(*selection),
            _ => Err(self.wrong_kind(attribute, "reference")),
        }
    }

    fn multiple_reference(&self, attribute: &str) -> Result<&[InstanceId], ContextError> {
        match self.get(attribute)? {
            Value::MultipleReference(selection) => Ok(selection),
            _ => Err(self.wrong_kind(attribute, "multiple reference")),
        }
    }
}

/// Mock implementation of [`Context`].
///
/// Register named models with [`add_model`](MockContext::add_model),
/// resolvable instances with [`add_instance`](MockContext::add_instance),
/// and tracers with [`add_tracer`](MockContext::add_tracer). Log output
/// is captured and read back with
/// [`log_messages`](MockContext::log_messages).
#[derive(Debug, Default)]
pub struct MockContext {
    plugin_id: String,
    models: IndexMap<String, MockModel>,
    instances: IndexMap<InstanceId, MockModel>,
    tracers: IndexMap<InstanceId, TracerId>,
    log: RefCell<Vec<(LogLevel, String)>>,
}

impl MockContext {
    pub fn new(plugin_id: impl Into<String>) -> Self {
        Self {
            plugin_id: plugin_id.into(),
            models: IndexMap::new(),
            instances: IndexMap::new(),
            tracers: IndexMap::new(),
            log: RefCell::new(Vec::new()),
        }
    }

    /// Register a model instance under its declared name.
    pub fn add_model(&mut self, name: impl Into<String>, model: MockModel) {
        self.models.insert(name.into(), model);
    }

    /// Register an instance resolvable through reference selections.
    pub fn add_instance(&mut self, id: InstanceId, model: MockModel) {
        self.instances.insert(id, model);
    }

    /// Register a tracer instance with its solver-internal index.
    pub fn add_tracer(&mut self, id: InstanceId, tracer: TracerId) {
        self.tracers.insert(id, tracer);
    }

    /// Everything logged through this context so far.
    pub fn log_messages(&self) -> Vec<(LogLevel, String)> {
        self.log.borrow().clone()
    }
}

impl Context for MockContext {
    fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    fn get_model(&self, model: &str) -> Result<&dyn ModelInstance, ContextError> {
        self.models
            .get(model)
            .map(|m| m as &dyn ModelInstance)
            .ok_or_else(|| ContextError::ModelNotFound {
                model: model.to_string(),
            })
    }

    fn resolve(&self, instance: InstanceId) -> Result<&dyn ModelInstance, ContextError> {
        self.instances
            .get(&instance)
            .map(|m| m as &dyn ModelInstance)
            .ok_or(ContextError::UnresolvedReference { instance })
    }

    fn tracer_id(&self, instance: InstanceId) -> Result<TracerId, ContextError> {
        self.tracers
            .get(&instance)
            .copied()
            .ok_or(ContextError::UnknownTracer { instance })
    }

    fn log(&self, level: LogLevel, message: &str) {
        self.log.borrow_mut().push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_accessors_round_trip() {
        let mut model = MockModel::new("TemplateModel");
        model.set_string("name", "Template Model Name");
        model.set_boolean("boolean", true);
        model.set_quantity("quantity", -1.0, "m");
        model.set_enumeration("enum", "VALUE_B");
        model.set_table_column("table", "pressure", vec![1.0, 2.0]);
        model.set_reference("reference_internal", Some(InstanceId(7)));
        model.set_multiple_reference("multiple", [InstanceId(1), InstanceId(2)]);

        assert_eq!(model.string("name").unwrap(), "Template Model Name");
        assert!(model.boolean("boolean").unwrap());
        assert_eq!(model.quantity("quantity").unwrap().get_value("m").unwrap(), -1.0);
        assert_eq!(model.enumeration("enum").unwrap(), "VALUE_B");
        assert_eq!(model.table_column("table", "pressure").unwrap(), &[1.0, 2.0]);
        assert_eq!(
            model.reference("reference_internal").unwrap(),
            Some(InstanceId(7))
        );
        assert_eq!(
            model.multiple_reference("multiple").unwrap(),
            &[InstanceId(1), InstanceId(2)]
        );
    }

    #[test]
    fn missing_attribute_is_not_found() {
        let model = MockModel::new("TemplateModel");
        assert_eq!(
            model.boolean("boolean"),
            Err(ContextError::AttributeNotFound {
                model: "TemplateModel".to_string(),
                attribute: "boolean".to_string(),
            })
        );
    }

    #[test]
    fn kind_mismatch_is_reported() {
        let mut model = MockModel::new("TemplateModel");
        model.set_string("boolean", "not a flag");
        assert_eq!(
            model.boolean("boolean"),
            Err(ContextError::WrongAttributeKind {
                model: "TemplateModel".to_string(),
                attribute: "boolean".to_string(),
                expected: "boolean",
            })
        );
    }

    #[test]
    fn unset_file_content_reads_as_none() {
        let mut model = MockModel::new("TemplateModel");
        model.set_file_content("file_content", None);
        assert_eq!(model.file_content("file_content").unwrap(), None);
    }

    #[test]
    fn context_lookups_and_log_capture() {
        let mut ctx = MockContext::new("template-plugin");
        ctx.add_model("TemplateModel", MockModel::new("TemplateModel"));
        ctx.add_instance(InstanceId(3), MockModel::new("CustomModel"));
        ctx.add_tracer(InstanceId(9), TracerId(0));

        assert_eq!(ctx.plugin_id(), "template-plugin");
        assert!(ctx.get_model("TemplateModel").is_ok());
        assert_eq!(
            ctx.get_model("Missing").err(),
            Some(ContextError::ModelNotFound {
                model: "Missing".to_string()
            })
        );
        assert!(ctx.resolve(InstanceId(3)).is_ok());
        assert_eq!(ctx.tracer_id(InstanceId(9)).unwrap(), TracerId(0));
        assert_eq!(
            ctx.tracer_id(InstanceId(3)),
            Err(ContextError::UnknownTracer {
                instance: InstanceId(3)
            })
        );

        ctx.log(LogLevel::Information, "hello");
        assert_eq!(
            ctx.log_messages(),
            vec![(LogLevel::Information, "hello".to_string())]
        );
    }
}
