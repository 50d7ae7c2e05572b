//! Model-driven scaffolding.
//!
//! `modelgen` turns a model type into a flat, ordered description of its
//! fields and expands a set of [Tera](https://keats.github.io/tera/)
//! templates against that description to produce source files.
//!
//! The pipeline has three parts:
//!
//! * [`macro@Model`] derives a compile-time [`Schema`] for a struct,
//!   carrying field annotations (`label`, `required`, `remark`, `validate`,
//!   `persist`) and serde naming.
//! * [`TypeDescriptor`] flattens that schema into [`FieldDescriptor`]s with
//!   case conversions, parsed [`TagTable`]s and resolved labels.
//! * [`TemplateEngine`] renders every emitting template and writes the
//!   results, reporting each file as written or skipped.
//!
//! ```no_run
//! use modelgen::{GeneratorConfig, Model};
//!
//! #[derive(Model)]
//! struct CertModel {
//!     id: i64,
//!     #[model(persist = "comment:证书名称", validate = "required,max=64")]
//!     name: String,
//! }
//!
//! # fn main() -> modelgen::Result<()> {
//! let config = GeneratorConfig::load()?;
//! let descriptor = config.descriptor_builder().build_type::<CertModel>()?;
//! config.engine().render(&descriptor)?;
//! # Ok(())
//! # }
//! ```

extern crate self as modelgen;

mod config;
mod descriptor;
mod error;
mod field;
mod labels;
mod names;
mod render;
mod schema;
mod tag;

pub use modelgen_macros::Model;

pub use config::{CONFIG_FILE, DEFAULT_GLOB, ENV_PREFIX, GeneratorConfig};
pub use descriptor::{DescriptorBuilder, TypeDescriptor};
pub use error::{ModelgenError, Result};
pub use field::{FieldDescriptor, SKIP_MARKER};
pub use labels::LabelDefaults;
pub use names::NameCase;
pub use render::{
    DEFAULT_OUT_DIR, EMIT_MARKER, FileOutcome, OutputDecl, RenderReport, RenderedFile,
    TEMPLATE_SUFFIX, TemplateDecl, TemplateEngine, TemplateRole, render,
};
pub use schema::{FieldAnnotations, FieldKind, FieldSchema, Model, RecordSchema, Schema, SchemaEntry};
pub use tag::{PERSIST_ITEM_SEP, PERSIST_KV_SEP, TagTable, VALIDATE_ITEM_SEP, VALIDATE_KV_SEP};
