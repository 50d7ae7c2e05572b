//! Flat, ordered descriptions of model types.

use serde::Serialize;
use tracing::debug;

use crate::error::{ModelgenError, Result};
use crate::field::FieldDescriptor;
use crate::labels::LabelDefaults;
use crate::names::NameCase;
use crate::schema::{Model, RecordSchema, Schema, SchemaEntry};

/// A model type and its fields, in declaration order.
///
/// Fields of flattened members are promoted in place, so the descriptor is
/// always a flat list. This is the usual data context handed to
/// [`crate::TemplateEngine::render`]; templates see it as
/// `{ type_name: {...}, fields: [...] }`.
///
/// ```
/// use modelgen::{Model, TypeDescriptor};
///
/// #[derive(Model)]
/// struct CertModel {
///     id: i64,
///     #[model(persist = "comment:证书名称")]
///     name: String,
/// }
///
/// let descriptor = TypeDescriptor::of::<CertModel>().expect("record type");
/// assert_eq!(descriptor.type_name().to_snake(), "cert_model");
/// assert_eq!(descriptor.fields()[1].label(), "证书名称");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    type_name: NameCase,
    fields: Vec<FieldDescriptor>,
}

/// Builds [`TypeDescriptor`]s with a chosen [`LabelDefaults`] table.
#[derive(Debug, Clone, Default)]
pub struct DescriptorBuilder {
    labels: LabelDefaults,
}

impl DescriptorBuilder {
    /// Replaces the default label table.
    #[must_use]
    pub fn labels(mut self, labels: LabelDefaults) -> Self {
        self.labels = labels;
        self
    }

    /// Describes the type of `model`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelgenError::InvalidModel`] when the type is not a record.
    pub fn build<M: Model + ?Sized>(&self, _model: &M) -> Result<TypeDescriptor> {
        self.build_type::<M>()
    }

    /// Describes `M` without needing a value.
    ///
    /// # Errors
    ///
    /// Returns [`ModelgenError::InvalidModel`] when the type is not a record.
    pub fn build_type<M: Model + ?Sized>(&self) -> Result<TypeDescriptor> {
        TypeDescriptor::from_schema(M::describe(), &self.labels)
    }
}

impl TypeDescriptor {
    /// Starts a builder using the built-in label table.
    #[must_use]
    pub fn builder() -> DescriptorBuilder {
        DescriptorBuilder::default()
    }

    /// Describes the type of `model` using the built-in label table.
    ///
    /// `model` may be the record itself or one layer of `Option`, `Box`,
    /// `Rc`, `Arc` or reference around it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelgenError::InvalidModel`] when the type is not a record.
    pub fn build<M: Model + ?Sized>(model: &M) -> Result<Self> {
        Self::builder().build(model)
    }

    /// Describes `M` using the built-in label table.
    ///
    /// # Errors
    ///
    /// Returns [`ModelgenError::InvalidModel`] when the type is not a record.
    pub fn of<M: Model + ?Sized>() -> Result<Self> {
        Self::builder().build_type::<M>()
    }

    /// Describes an explicit schema.
    ///
    /// # Errors
    ///
    /// Returns [`ModelgenError::InvalidModel`] when `schema`, or any
    /// flattened member inside it, is not a record.
    pub fn from_schema(schema: Schema, labels: &LabelDefaults) -> Result<Self> {
        let record = schema.into_record().map_err(invalid_model)?;
        let type_name = NameCase::new(record.type_name.clone());
        let mut fields = Vec::new();
        collect_fields(record, labels, &mut fields)?;
        debug!(model = %type_name, fields = fields.len(), "described model");
        Ok(Self { type_name, fields })
    }

    /// Declared name of the model type.
    #[must_use]
    pub const fn type_name(&self) -> &NameCase {
        &self.type_name
    }

    /// Field descriptors in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Looks up a field by declared name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name() == name)
    }
}

fn invalid_model(schema: Schema) -> ModelgenError {
    ModelgenError::InvalidModel {
        type_name: schema.type_name().to_owned(),
    }
}

fn collect_fields(
    record: RecordSchema,
    labels: &LabelDefaults,
    out: &mut Vec<FieldDescriptor>,
) -> Result<()> {
    for entry in record.entries {
        match entry {
            SchemaEntry::Field(field) => out.push(FieldDescriptor::new(field, labels)),
            SchemaEntry::Flatten { name, schema } => {
                let embedded = schema.into_record().map_err(invalid_model)?;
                debug!(member = %name, model = %embedded.type_name, "promoting embedded fields");
                collect_fields(embedded, labels, out)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, FieldSchema};
    use rstest::{fixture, rstest};

    struct Timestamps;

    impl Model for Timestamps {
        fn describe() -> Schema {
            Schema::Record(
                RecordSchema::new("Timestamps")
                    .field(FieldSchema::new("create_time", "DateTime<Utc>", FieldKind::Temporal))
                    .field(FieldSchema::new("update_time", "DateTime<Utc>", FieldKind::Temporal)),
            )
        }
    }

    struct Article;

    impl Model for Article {
        fn describe() -> Schema {
            Schema::Record(
                RecordSchema::new("Article")
                    .field(FieldSchema::new("id", "u64", FieldKind::Numeric))
                    .flatten("stamps", Option::<Timestamps>::describe())
                    .field(FieldSchema::new("title", "String", FieldKind::String)),
            )
        }
    }

    struct Broken;

    impl Model for Broken {
        fn describe() -> Schema {
            Schema::Record(RecordSchema::new("Broken").flatten("tags", Vec::<String>::describe()))
        }
    }

    #[fixture]
    fn article() -> TypeDescriptor {
        TypeDescriptor::of::<Article>().expect("Article is a record")
    }

    #[rstest]
    fn flattened_fields_keep_declaration_order(article: TypeDescriptor) {
        let names: Vec<_> = article.fields().iter().map(FieldDescriptor::name).collect();
        assert_eq!(names, ["id", "create_time", "update_time", "title"]);
        assert_eq!(article.type_name().as_str(), "Article");
    }

    #[rstest]
    fn values_and_wrappers_are_accepted() -> anyhow::Result<()> {
        let value = Article;
        let direct = TypeDescriptor::build(&value)?;
        let optional = TypeDescriptor::build(&Some(Article))?;
        let boxed = TypeDescriptor::build(&Box::new(Article))?;
        let by_ref = TypeDescriptor::build(&&value)?;
        anyhow::ensure!(direct == optional && optional == boxed && boxed == by_ref);
        Ok(())
    }

    #[rstest]
    fn double_wrapping_is_invalid() {
        let err = TypeDescriptor::build(&Some(Some(Article))).err();
        assert!(matches!(
            err,
            Some(ModelgenError::InvalidModel { ref type_name }) if type_name == "Article"
        ));
    }

    #[rstest]
    #[case::string(TypeDescriptor::build(&String::from("CertModel")).err(), "String")]
    #[case::integer(TypeDescriptor::build(&7_u32).err(), "u32")]
    #[case::flattened_vec(TypeDescriptor::of::<Broken>().err(), "Vec")]
    fn non_records_are_rejected(#[case] err: Option<ModelgenError>, #[case] expected: &str) {
        match err {
            Some(ModelgenError::InvalidModel { type_name }) => assert_eq!(type_name, expected),
            other => panic!("expected InvalidModel, got {other:?}"),
        }
    }

    #[rstest]
    fn builder_threads_label_table() -> anyhow::Result<()> {
        let labels = LabelDefaults::empty().with("title", "标题");
        let descriptor = TypeDescriptor::builder().labels(labels).build_type::<Article>()?;
        let title = descriptor.field("title").map(FieldDescriptor::label);
        let id = descriptor.field("id").map(FieldDescriptor::label);
        anyhow::ensure!(title == Some("标题"), "title label: {title:?}");
        anyhow::ensure!(id == Some("id"), "id label: {id:?}");
        Ok(())
    }

    #[rstest]
    fn serialises_as_template_context(article: TypeDescriptor) -> anyhow::Result<()> {
        let value = serde_json::to_value(&article)?;
        anyhow::ensure!(value["type_name"]["snake"] == "article", "type name: {value}");
        anyhow::ensure!(value["fields"][0]["label"] == "ID", "id label: {value}");
        anyhow::ensure!(
            value["fields"][1]["label"] == "创建时间",
            "create_time label: {value}"
        );
        Ok(())
    }
}
