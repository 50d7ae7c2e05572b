//! Error types produced while describing models and rendering templates.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by descriptor construction, template rendering and
/// configuration loading.
///
/// Files skipped because they already exist are not errors; they are
/// reported through [`crate::FileOutcome::Skipped`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelgenError {
    /// The model is not a structured record after removing one wrapper layer.
    #[error("'{type_name}' is not a structured record type")]
    InvalidModel {
        /// Name of the rejected type.
        type_name: String,
    },

    /// A template matched by the glob failed to parse, or the glob is invalid.
    #[error("template parse failed for '{glob}': {source}")]
    TemplateParse {
        /// Glob the templates were loaded from.
        glob: String,
        /// Underlying Tera error.
        #[source]
        source: tera::Error,
    },

    /// An output declaration names a template the glob did not load.
    #[error("output declared for unknown template '{template}'")]
    UnknownTemplate {
        /// Name given in the declaration.
        template: String,
    },

    /// The data context could not be turned into a template context.
    #[error("template context is invalid: {source}")]
    InvalidContext {
        /// Underlying Tera error.
        #[source]
        source: tera::Error,
    },

    /// Rendering the output path of an emit template failed.
    #[error("path render failed for '{template}': {source}")]
    PathRender {
        /// Template whose path could not be rendered.
        template: String,
        /// Underlying Tera error.
        #[source]
        source: tera::Error,
    },

    /// Rendering the body of an emit template failed.
    #[error("template render failed for '{template}': {source}")]
    ContentRender {
        /// Template whose body could not be rendered.
        template: String,
        /// Underlying Tera error.
        #[source]
        source: tera::Error,
    },

    /// The glob produced no emit templates.
    #[error("no templates resolved from '{glob}'")]
    NoTemplatesResolved {
        /// Glob the templates were loaded from.
        glob: String,
    },

    /// Writing a generated file failed.
    #[error("failed to write '{path}': {source}")]
    Write {
        /// Output path that could not be written.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Layered configuration could not be extracted.
    #[error("failed to load generator configuration: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ModelgenError {
    fn from(value: figment::Error) -> Self {
        Self::Config(Box::new(value))
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = ModelgenError> = std::result::Result<T, E>;
