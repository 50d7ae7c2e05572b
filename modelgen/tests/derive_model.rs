//! Tests for `#[derive(Model)]` as seen through `TypeDescriptor`.

mod support;

use anyhow::{Context, Result, ensure};
use modelgen::{FieldKind, LabelDefaults, Model, ModelgenError, TypeDescriptor};
use rstest::{fixture, rstest};
use serde::Serialize;
use support::{Article, CertModel};

#[fixture]
fn cert() -> TypeDescriptor {
    TypeDescriptor::of::<CertModel>().expect("CertModel is a record")
}

fn field<'a>(descriptor: &'a TypeDescriptor, name: &str) -> Result<&'a modelgen::FieldDescriptor> {
    descriptor
        .field(name)
        .with_context(|| format!("field '{name}' missing"))
}

#[rstest]
fn fields_keep_declaration_order(cert: TypeDescriptor) {
    let names: Vec<&str> = cert.fields().iter().map(|f| f.name()).collect();
    assert_eq!(
        names,
        [
            "id",
            "default",
            "name",
            "public_name",
            "cert_path",
            "mobileprovision",
            "remark",
            "status",
            "check_time",
            "issue_time",
            "expire_time",
            "create_time",
            "delete_time",
        ]
    );
}

#[rstest]
fn type_name_has_case_views(cert: TypeDescriptor) {
    assert_eq!(cert.type_name().as_str(), "CertModel");
    assert_eq!(cert.type_name().to_snake(), "cert_model");
    assert_eq!(cert.type_name().to_kebab(), "cert-model");
    assert_eq!(cert.type_name().to_camel(), "certModel");
}

#[rstest]
#[case::persist_comment("name", "证书名称")]
#[case::persist_comment_with_flags("status", "状态")]
#[case::comment_beats_default("create_time", "创建时间")]
#[case::built_in_default("id", "ID")]
#[case::no_comment_falls_back_to_default("delete_time", "删除时间")]
#[case::declared_name("issue_time", "issue_time")]
#[case::persist_without_comment("default", "default")]
fn labels_follow_the_resolution_chain(
    cert: TypeDescriptor,
    #[case] name: &str,
    #[case] expected: &str,
) -> Result<()> {
    let label = field(&cert, name)?.label();
    ensure!(label == expected, "{name}: expected {expected}, got {label}");
    Ok(())
}

#[rstest]
fn configured_labels_replace_built_ins() -> Result<()> {
    let labels = LabelDefaults::empty().with("issue_time", "签发时间");
    let descriptor = TypeDescriptor::builder()
        .labels(labels)
        .build_type::<CertModel>()?;
    ensure!(field(&descriptor, "issue_time")?.label() == "签发时间");
    ensure!(field(&descriptor, "id")?.label() == "id");
    ensure!(field(&descriptor, "name")?.label() == "证书名称");
    Ok(())
}

#[rstest]
#[case::renamed_by_container("public_name", "public_name", true)]
#[case::serde_skip("cert_path", "cert_path", false)]
#[case::serde_skip_with_persist("delete_time", "delete_time", false)]
fn external_names(
    cert: TypeDescriptor,
    #[case] name: &str,
    #[case] external: &str,
    #[case] explicit: bool,
) -> Result<()> {
    let f = field(&cert, name)?;
    ensure!(f.external_name() == external, "{name}: {}", f.external_name());
    ensure!(f.has_external_name() == explicit, "{name}: has_external_name");
    Ok(())
}

#[rstest]
#[case("id", FieldKind::Numeric)]
#[case("status", FieldKind::Numeric)]
#[case("default", FieldKind::Boolean)]
#[case("name", FieldKind::String)]
#[case("check_time", FieldKind::Temporal)]
#[case("issue_time", FieldKind::Temporal)]
#[case("delete_time", FieldKind::Temporal)]
fn kinds_are_inferred(cert: TypeDescriptor, #[case] name: &str, #[case] kind: FieldKind) -> Result<()> {
    let f = field(&cert, name)?;
    ensure!(f.kind() == kind, "{name}: {:?}", f.kind());
    ensure!(f.is_temporal() == (kind == FieldKind::Temporal));
    Ok(())
}

#[rstest]
fn annotations_are_parsed(cert: TypeDescriptor) -> Result<()> {
    let name = field(&cert, "name")?;
    ensure!(name.is_required());
    ensure!(name.validate_tags().has("required"));
    ensure!(name.validate_tags().get("max") == Some("64"));

    let status = field(&cert, "status")?;
    ensure!(!status.is_required());
    ensure!(status.validate_tags().get("oneof") == Some("0 1 2"));
    ensure!(status.persist_tags().has("index"));

    let default = field(&cert, "default")?;
    ensure!(default.persist_tags().get("default") == Some("0"));

    let id = field(&cert, "id")?;
    ensure!(id.persist_tags().get("primaryKey") == Some("primaryKey"));
    ensure!(id.remark().is_empty());
    ensure!(field(&cert, "remark")?.remark() == "free text shown in lists");
    Ok(())
}

#[rstest]
fn declared_types_are_kept_verbatim(cert: TypeDescriptor) -> Result<()> {
    ensure!(field(&cert, "issue_time")?.type_name() == "Option<SystemTime>");
    ensure!(field(&cert, "name")?.type_name() == "String");
    Ok(())
}

#[rstest]
fn flattened_members_are_promoted_in_place() -> Result<()> {
    let article = TypeDescriptor::of::<Article>()?;
    let names: Vec<&str> = article.fields().iter().map(|f| f.name()).collect();
    ensure!(
        names == ["id", "create_time", "update_time", "delete_time", "title", "reviewer"],
        "got {names:?}"
    );
    ensure!(field(&article, "delete_time")?.kind() == FieldKind::Temporal);
    ensure!(field(&article, "update_time")?.label() == "更新时间");
    ensure!(field(&article, "reviewer")?.label() == "审核人");
    ensure!(article.type_name().to_snake() == "article");
    Ok(())
}

#[derive(Model)]
struct Counter {
    hits: Option<i64>,
    ratio: Box<f64>,
    tags: Vec<String>,
    nested: Option<Option<u8>>,
    #[model(kind = "temporal")]
    epoch_seconds: u64,
    #[model(skip)]
    scratch: String,
}

#[rstest]
fn wrappers_and_overrides_shape_the_kind() -> Result<()> {
    let counter = TypeDescriptor::of::<Counter>()?;
    ensure!(field(&counter, "hits")?.is_numeric());
    ensure!(field(&counter, "ratio")?.is_numeric());
    ensure!(field(&counter, "tags")?.kind() == FieldKind::Other);
    ensure!(field(&counter, "nested")?.kind() == FieldKind::Other);
    ensure!(field(&counter, "epoch_seconds")?.is_temporal());
    ensure!(counter.field("scratch").is_none());
    Ok(())
}

#[derive(Serialize, Model)]
#[serde(rename_all = "camelCase")]
#[model(rename = "Certificate")]
struct ApiCert {
    public_name: String,
    #[serde(rename = "pem")]
    cert_body: String,
    #[model(external_name = "expires")]
    #[serde(rename = "expiry")]
    expire_time: std::time::SystemTime,
    #[model(external_name = "-")]
    internal_note: String,
}

#[rstest]
fn serde_naming_feeds_external_names() -> Result<()> {
    let api = TypeDescriptor::of::<ApiCert>()?;
    ensure!(api.type_name().as_str() == "Certificate");
    ensure!(field(&api, "public_name")?.external_name() == "publicName");
    ensure!(field(&api, "cert_body")?.external_name() == "pem");
    ensure!(field(&api, "expire_time")?.external_name() == "expires");
    let note = field(&api, "internal_note")?;
    ensure!(!note.has_external_name());
    ensure!(note.external_name() == "internal_note");
    Ok(())
}

#[rstest]
fn one_wrapper_layer_is_accepted() -> Result<()> {
    let direct = TypeDescriptor::of::<CertModel>()?;
    ensure!(TypeDescriptor::of::<Option<CertModel>>()? == direct);
    ensure!(TypeDescriptor::of::<Box<CertModel>>()? == direct);
    ensure!(TypeDescriptor::of::<&CertModel>()? == direct);
    Ok(())
}

#[rstest]
fn two_wrapper_layers_are_rejected() {
    let err = TypeDescriptor::of::<Option<Box<CertModel>>>().err();
    assert!(
        matches!(err, Some(ModelgenError::InvalidModel { .. })),
        "expected InvalidModel, got {err:?}"
    );
}

#[rstest]
fn non_records_are_rejected() {
    let err = TypeDescriptor::of::<Vec<CertModel>>().err();
    assert!(
        matches!(err, Some(ModelgenError::InvalidModel { .. })),
        "expected InvalidModel, got {err:?}"
    );
}

#[rstest]
fn descriptor_serialises_for_templates(cert: TypeDescriptor) -> Result<()> {
    let value = serde_json::to_value(&cert)?;
    ensure!(value["type_name"]["snake"] == "cert_model");
    ensure!(value["type_name"]["pascal"] == "CertModel");
    let name = &value["fields"][2];
    ensure!(name["name"] == "name", "third field: {name}");
    ensure!(name["names"]["pascal"] == "Name");
    ensure!(name["label"] == "证书名称");
    ensure!(name["kind"] == "string");
    ensure!(name["required"] == true);
    ensure!(name["is_string"] == true);
    ensure!(name["validate"]["max"] == "64");
    ensure!(value["fields"][0]["persist"]["primaryKey"] == "primaryKey");
    Ok(())
}
