//! Compile-time model descriptions.
//!
//! `#[derive(Model)]` implements [`Model`] for structs with named fields,
//! producing a [`Schema::Record`] whose entries follow declaration order.
//! Hand-written implementations can build the same structure through the
//! builder methods on [`RecordSchema`], [`FieldSchema`] and
//! [`FieldAnnotations`].

use std::rc::Rc;
use std::sync::Arc;

use serde::Serialize;

/// Capability implemented by every type that can drive generation.
pub trait Model {
    /// Returns the ordered description of this type.
    fn describe() -> Schema;
}

/// Shape reported by [`Model::describe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    /// A structured record with named fields.
    Record(RecordSchema),
    /// One layer of reference, pointer or optional wrapping.
    Wrapped(Box<Schema>),
    /// Any type that is not a structured record.
    Opaque {
        /// Name of the described type.
        type_name: String,
    },
}

impl Schema {
    /// Describes a non-record type.
    #[must_use]
    pub fn opaque(type_name: impl Into<String>) -> Self {
        Self::Opaque {
            type_name: type_name.into(),
        }
    }

    /// Wraps `inner` in one optional/reference layer.
    #[must_use]
    pub fn wrapped(inner: Self) -> Self {
        Self::Wrapped(Box::new(inner))
    }

    /// Name of the described type, looking through wrapper layers.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Record(record) => &record.type_name,
            Self::Wrapped(inner) => inner.type_name(),
            Self::Opaque { type_name } => type_name,
        }
    }

    /// Removes at most one wrapper layer and returns the record underneath.
    pub(crate) fn into_record(self) -> Result<RecordSchema, Self> {
        let unwrapped = match self {
            Self::Wrapped(inner) => *inner,
            other => other,
        };
        match unwrapped {
            Self::Record(record) => Ok(record),
            other => Err(other),
        }
    }
}

/// Ordered description of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    /// Declared name of the record type.
    pub type_name: String,
    /// Fields and flattened members in declaration order.
    pub entries: Vec<SchemaEntry>,
}

impl RecordSchema {
    /// Starts an empty description for `type_name`.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            entries: Vec::new(),
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: FieldSchema) -> Self {
        self.entries.push(SchemaEntry::Field(field));
        self
    }

    /// Appends an embedded member whose fields are promoted into this record.
    #[must_use]
    pub fn flatten(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.entries.push(SchemaEntry::Flatten {
            name: name.into(),
            schema,
        });
        self
    }
}

/// One entry of a [`RecordSchema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaEntry {
    /// A plain field.
    Field(FieldSchema),
    /// An embedded member whose own fields are promoted.
    Flatten {
        /// Declared name of the embedded member.
        name: String,
        /// Description of the member's type.
        schema: Schema,
    },
}

/// Description of a single declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    /// Identifier as written in the model.
    pub name: String,
    /// Declared type as written in the model.
    pub type_name: String,
    /// Semantic classification of the declared type.
    pub kind: FieldKind,
    /// Declarative metadata attached to the field.
    pub annotations: FieldAnnotations,
}

impl FieldSchema {
    /// Describes a field with no annotations.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind,
            annotations: FieldAnnotations::default(),
        }
    }

    /// Replaces the field's annotations.
    #[must_use]
    pub fn annotations(mut self, annotations: FieldAnnotations) -> Self {
        self.annotations = annotations;
        self
    }
}

/// Semantic kind of a field's declared type.
///
/// Resolved after removing one layer of `Option`, `Box`, `Rc`, `Arc` or `&`,
/// so `Option<i64>` is as numeric as `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Integers, floats and decimal types.
    Numeric,
    /// Text types.
    String,
    /// `bool`.
    Boolean,
    /// Dates, times and timestamps, including soft-delete markers.
    Temporal,
    /// Anything else.
    #[default]
    Other,
}

impl FieldKind {
    /// Lowercase name as exposed to templates.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Temporal => "temporal",
            Self::Other => "other",
        }
    }
}

/// Declarative metadata attached to a field.
///
/// `validate` and `persist` keep the annotation source strings; they are
/// parsed into tag tables once, when the field descriptor is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAnnotations {
    /// External (serialisation) name; `-` means none.
    pub external_name: Option<String>,
    /// Human-readable label, highest label precedence.
    pub label: Option<String>,
    /// Whether the field is marked as required.
    pub required: bool,
    /// Free-text remark.
    pub remark: Option<String>,
    /// Validation annotation source (`key=value,flag`).
    pub validate: Option<String>,
    /// Persistence annotation source (`key:value;flag`).
    pub persist: Option<String>,
}

impl FieldAnnotations {
    /// Empty annotations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the external name.
    #[must_use]
    pub fn external_name(mut self, value: impl Into<String>) -> Self {
        self.external_name = Some(value.into());
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, value: impl Into<String>) -> Self {
        self.label = Some(value.into());
        self
    }

    /// Sets the required flag.
    #[must_use]
    pub const fn required(mut self, value: bool) -> Self {
        self.required = value;
        self
    }

    /// Sets the required flag from a textual marker. Only the literal
    /// string `true` marks the field as required.
    #[must_use]
    pub fn required_tag(mut self, value: &str) -> Self {
        self.required = value == "true";
        self
    }

    /// Sets the remark.
    #[must_use]
    pub fn remark(mut self, value: impl Into<String>) -> Self {
        self.remark = Some(value.into());
        self
    }

    /// Sets the validation annotation source.
    #[must_use]
    pub fn validate(mut self, value: impl Into<String>) -> Self {
        self.validate = Some(value.into());
        self
    }

    /// Sets the persistence annotation source.
    #[must_use]
    pub fn persist(mut self, value: impl Into<String>) -> Self {
        self.persist = Some(value.into());
        self
    }
}

macro_rules! opaque_model {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Model for $ty {
                fn describe() -> Schema {
                    Schema::opaque(stringify!($ty))
                }
            }
        )*
    };
}

opaque_model!(
    (),
    bool,
    char,
    str,
    String,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
);

impl<T> Model for Vec<T> {
    fn describe() -> Schema {
        Schema::opaque("Vec")
    }
}

impl<T: Model> Model for Option<T> {
    fn describe() -> Schema {
        Schema::wrapped(T::describe())
    }
}

impl<T: Model + ?Sized> Model for &T {
    fn describe() -> Schema {
        Schema::wrapped(T::describe())
    }
}

impl<T: Model + ?Sized> Model for Box<T> {
    fn describe() -> Schema {
        Schema::wrapped(T::describe())
    }
}

impl<T: Model + ?Sized> Model for Rc<T> {
    fn describe() -> Schema {
        Schema::wrapped(T::describe())
    }
}

impl<T: Model + ?Sized> Model for Arc<T> {
    fn describe() -> Schema {
        Schema::wrapped(T::describe())
    }
}
