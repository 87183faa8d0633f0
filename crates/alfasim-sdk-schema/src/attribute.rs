//! Attribute descriptors: the typed fields of a declared form.

use alfasim_sdk_core::{Context, ModelInstance};

/// A visibility or enablement predicate over one form.
///
/// Evaluated by the host whenever it redraws the form, against the
/// instance being edited (`attr`) and the invocation context. Plain `fn`
/// pointers by design: predicates are pure, capture no state, and must
/// yield the same boolean for the same arguments with no side effects.
pub type Predicate = fn(attr: &dyn ModelInstance, ctx: &dyn Context) -> bool;

/// One column of a table attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct TableColumn {
    /// Identifier used to read the column back (e.g. `"pressure"`).
    pub id: String,
    /// Column header shown by the host.
    pub caption: String,
    /// Initial value for new rows.
    pub initial: f64,
    /// Unit the column values are expressed in.
    pub unit: String,
}

/// What a reference attribute points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReferenceTarget {
    /// A tracer defined in the host's tracer registry.
    Tracer,
    /// An instance of a plugin-declared model, selected from the named
    /// container.
    Model {
        /// The container the selection is made from.
        container: String,
        /// The model the container holds; resolution yields an instance
        /// of this model.
        model: String,
    },
}

/// Data kind of an attribute, with its initial value where applicable.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeKind {
    /// Free text.
    String {
        /// Initial contents.
        initial: String,
    },
    /// A scalar with a fixed unit (see
    /// [`Quantity`](alfasim_sdk_core::Quantity)).
    Quantity {
        /// Initial value, in `unit`.
        initial: f64,
        /// Unit the attribute is declared and delivered in.
        unit: String,
    },
    /// A fixed set of choices rendered as a combo box.
    Enumeration {
        /// The selectable values, in display order.
        values: Vec<String>,
        /// Initially selected value; the host defaults to the first
        /// entry when `None`.
        initial: Option<String>,
    },
    /// A check box.
    Boolean {
        /// Initial state.
        initial: bool,
    },
    /// A file picker; the host loads the contents.
    FileContent,
    /// A table with a fixed column layout and user-defined rows.
    Table {
        /// The column layout.
        columns: Vec<TableColumn>,
    },
    /// A single selection resolved by the host.
    Reference {
        /// What the selection points at.
        target: ReferenceTarget,
    },
    /// A multi-selection resolved by the host.
    MultipleReference {
        /// What the selections point at.
        target: ReferenceTarget,
    },
}

impl AttributeKind {
    /// Short name of the kind, as used in lookup error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::String { .. } => "string",
            Self::Quantity { .. } => "quantity",
            Self::Enumeration { .. } => "enumeration",
            Self::Boolean { .. } => "boolean",
            Self::FileContent => "file content",
            Self::Table { .. } => "table",
            Self::Reference { .. } => "reference",
            Self::MultipleReference { .. } => "multiple reference",
        }
    }
}

/// Declaration of one attribute of a model or container.
///
/// Constructed with the per-kind constructors and refined with the
/// `with_*` methods:
///
/// ```
/// use alfasim_sdk_schema::AttributeDef;
///
/// let attr = AttributeDef::quantity("quantity", 1.0, "m", "Quantity")
///     .with_tooltip("Measured from the wellhead");
/// assert_eq!(attr.name, "quantity");
/// assert!(attr.enable_expr.is_none());
/// ```
#[derive(Clone, Debug)]
pub struct AttributeDef {
    /// Identifier the attribute is read back with.
    pub name: String,
    /// Label shown next to the widget.
    pub caption: String,
    /// Hover text, when present.
    pub tooltip: Option<String>,
    /// Data kind and initial value.
    pub kind: AttributeKind,
    /// Predicate controlling whether the widget accepts input.
    pub enable_expr: Option<Predicate>,
    /// Predicate controlling whether the widget is shown at all.
    pub visible_expr: Option<Predicate>,
}

impl AttributeDef {
    fn new(name: impl Into<String>, caption: impl Into<String>, kind: AttributeKind) -> Self {
        Self {
            name: name.into(),
            caption: caption.into(),
            tooltip: None,
            kind,
            enable_expr: None,
            visible_expr: None,
        }
    }

    /// A string attribute.
    pub fn string(
        name: impl Into<String>,
        initial: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            caption,
            AttributeKind::String {
                initial: initial.into(),
            },
        )
    }

    /// A quantity attribute with its declared unit.
    pub fn quantity(
        name: impl Into<String>,
        initial: f64,
        unit: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            caption,
            AttributeKind::Quantity {
                initial,
                unit: unit.into(),
            },
        )
    }

    /// An enumeration attribute; the host preselects the first value.
    pub fn enumeration(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
        caption: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            caption,
            AttributeKind::Enumeration {
                values: values.into_iter().map(Into::into).collect(),
                initial: None,
            },
        )
    }

    /// A boolean attribute.
    pub fn boolean(name: impl Into<String>, initial: bool, caption: impl Into<String>) -> Self {
        Self::new(name, caption, AttributeKind::Boolean { initial })
    }

    /// A file-content attribute.
    pub fn file_content(name: impl Into<String>, caption: impl Into<String>) -> Self {
        Self::new(name, caption, AttributeKind::FileContent)
    }

    /// A table attribute with the given column layout.
    pub fn table(
        name: impl Into<String>,
        columns: Vec<TableColumn>,
        caption: impl Into<String>,
    ) -> Self {
        Self::new(name, caption, AttributeKind::Table { columns })
    }

    /// A single-selection reference attribute.
    pub fn reference(
        name: impl Into<String>,
        target: ReferenceTarget,
        caption: impl Into<String>,
    ) -> Self {
        Self::new(name, caption, AttributeKind::Reference { target })
    }

    /// A multi-selection reference attribute.
    pub fn multiple_reference(
        name: impl Into<String>,
        target: ReferenceTarget,
        caption: impl Into<String>,
    ) -> Self {
        Self::new(name, caption, AttributeKind::MultipleReference { target })
    }

    /// Set the hover text.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Set the initially selected enumeration value.
    ///
    /// Only meaningful on [`AttributeKind::Enumeration`]; validation
    /// rejects an initial value outside the declared set.
    pub fn with_initial_selection(mut self, value: impl Into<String>) -> Self {
        if let AttributeKind::Enumeration { initial, .. } = &mut self.kind {
            *initial = Some(value.into());
        }
        self
    }

    /// Attach an enablement predicate.
    pub fn with_enable_expr(mut self, predicate: Predicate) -> Self {
        self.enable_expr = Some(predicate);
        self
    }

    /// Attach a visibility predicate.
    pub fn with_visible_expr(mut self, predicate: Predicate) -> Self {
        self.visible_expr = Some(predicate);
        self
    }
}
