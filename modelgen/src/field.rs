//! Per-field metadata exposed to templates.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::labels::LabelDefaults;
use crate::names::NameCase;
use crate::schema::{FieldKind, FieldSchema};
use crate::tag::TagTable;

/// External-name value meaning "no external name".
pub const SKIP_MARKER: &str = "-";

/// Read-only view over one model field.
///
/// Created by [`crate::TypeDescriptor`] while walking a model; annotation
/// sources are parsed into [`TagTable`]s once, here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    schema: FieldSchema,
    validate: TagTable,
    persist: TagTable,
    default_label: Option<String>,
}

impl FieldDescriptor {
    pub(crate) fn new(schema: FieldSchema, labels: &LabelDefaults) -> Self {
        let annotations = &schema.annotations;
        let validate = TagTable::validation(annotations.validate.as_deref().unwrap_or_default());
        let persist = TagTable::persistence(annotations.persist.as_deref().unwrap_or_default());
        let default_label = labels.get(&schema.name).map(ToOwned::to_owned);
        Self {
            schema,
            validate,
            persist,
            default_label,
        }
    }

    /// Declared field identifier, unconverted.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.schema.name
    }

    /// Case conversions of [`Self::name`].
    #[must_use]
    pub fn names(&self) -> NameCase {
        NameCase::new(self.schema.name.clone())
    }

    /// Declared type as written in the model.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.schema.type_name
    }

    /// Semantic kind of the declared type.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.schema.kind
    }

    fn external_tag(&self) -> Option<&str> {
        self.schema
            .annotations
            .external_name
            .as_deref()
            .filter(|name| !name.is_empty() && *name != SKIP_MARKER)
    }

    /// External (serialisation) name, falling back to [`Self::name`].
    #[must_use]
    pub fn external_name(&self) -> &str {
        self.external_tag().unwrap_or_else(|| self.name())
    }

    /// Whether an explicit, usable external name is present.
    #[must_use]
    pub fn has_external_name(&self) -> bool {
        self.external_tag().is_some()
    }

    /// Whether the field is marked as required.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.schema.annotations.required
    }

    /// Human-readable label.
    ///
    /// Resolution order: the `label` annotation, the persistence `comment`
    /// entry, the default label for the declared name, the declared name.
    #[must_use]
    pub fn label(&self) -> &str {
        let non_empty = |value: &&str| !value.is_empty();
        self.schema
            .annotations
            .label
            .as_deref()
            .filter(non_empty)
            .or_else(|| self.persist.get("comment").filter(non_empty))
            .or_else(|| self.default_label.as_deref().filter(non_empty))
            .unwrap_or_else(|| self.name())
    }

    /// Free-text remark, empty when absent.
    #[must_use]
    pub fn remark(&self) -> &str {
        self.schema.annotations.remark.as_deref().unwrap_or_default()
    }

    /// Parsed validation annotation.
    #[must_use]
    pub const fn validate_tags(&self) -> &TagTable {
        &self.validate
    }

    /// Parsed persistence annotation.
    #[must_use]
    pub const fn persist_tags(&self) -> &TagTable {
        &self.persist
    }

    /// Integer, float or decimal.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.kind() == FieldKind::Numeric
    }

    /// Text.
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.kind() == FieldKind::String
    }

    /// `bool`.
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        self.kind() == FieldKind::Boolean
    }

    /// Date, time or timestamp.
    #[must_use]
    pub fn is_temporal(&self) -> bool {
        self.kind() == FieldKind::Temporal
    }
}

impl Serialize for FieldDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldDescriptor", 15)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("names", &self.names())?;
        state.serialize_field("type_name", self.type_name())?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("external_name", self.external_name())?;
        state.serialize_field("has_external_name", &self.has_external_name())?;
        state.serialize_field("required", &self.is_required())?;
        state.serialize_field("label", self.label())?;
        state.serialize_field("remark", self.remark())?;
        state.serialize_field("is_numeric", &self.is_numeric())?;
        state.serialize_field("is_string", &self.is_string())?;
        state.serialize_field("is_boolean", &self.is_boolean())?;
        state.serialize_field("is_temporal", &self.is_temporal())?;
        state.serialize_field("validate", &self.validate)?;
        state.serialize_field("persist", &self.persist)?;
        state.end()
    }
}
