//! Expanding template sets into generated files.
//!
//! A render run loads every template matched by a glob, decides which of
//! them emit files, renders all output paths, renders all bodies and only
//! then writes. Path or body failures therefore leave the output directory
//! untouched.
//!
//! Template file names starting with `-` emit a file; the rest of the name,
//! minus a trailing `.tera`, is the output path template. Any template can
//! also be declared emitting with an [`OutputDecl`]. Everything else is a
//! fragment available to `include`, `import` and `extends`.

mod filters;
mod templates;
mod writer;

use camino::Utf8PathBuf;
use serde::Serialize;
use tera::Context;
use tracing::info;

use crate::error::{ModelgenError, Result};
use templates::TemplateSet;
pub use templates::{EMIT_MARKER, OutputDecl, TEMPLATE_SUFFIX, TemplateDecl, TemplateRole};

/// Default output directory.
pub const DEFAULT_OUT_DIR: &str = ".";

/// A file produced by an emit template but not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Template the file was rendered from.
    pub template: String,
    /// Output path, relative to the output directory.
    pub path: Utf8PathBuf,
    /// Rendered body.
    pub content: Vec<u8>,
}

/// What happened to one output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was created or replaced.
    Written(Utf8PathBuf),
    /// The file already existed and overwriting was disabled.
    Skipped(Utf8PathBuf),
}

impl FileOutcome {
    /// Path the outcome refers to, including the output directory.
    #[must_use]
    pub fn path(&self) -> &Utf8PathBuf {
        match self {
            Self::Written(path) | Self::Skipped(path) => path,
        }
    }
}

/// Per-file outcomes of a render run, ordered by output path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    outcomes: Vec<FileOutcome>,
}

impl RenderReport {
    /// All outcomes in write order.
    #[must_use]
    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    /// Paths that were written.
    pub fn written(&self) -> impl Iterator<Item = &Utf8PathBuf> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FileOutcome::Written(path) => Some(path),
            FileOutcome::Skipped(_) => None,
        })
    }

    /// Paths that were left alone because they already existed.
    pub fn skipped(&self) -> impl Iterator<Item = &Utf8PathBuf> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FileOutcome::Skipped(path) => Some(path),
            FileOutcome::Written(_) => None,
        })
    }
}

/// Renders a template set against a data context and writes the results.
///
/// ```no_run
/// use modelgen::{Model, TemplateEngine, TypeDescriptor};
///
/// #[derive(Model)]
/// struct CertModel {
///     id: i64,
///     name: String,
/// }
///
/// # fn main() -> modelgen::Result<()> {
/// let descriptor = TypeDescriptor::of::<CertModel>()?;
/// let report = TemplateEngine::new("templates/**/*.tera")
///     .out_dir("generated")
///     .render(&descriptor)?;
/// for path in report.written() {
///     println!("wrote {path}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    glob: String,
    overwrite: bool,
    out_dir: Utf8PathBuf,
    outputs: Vec<OutputDecl>,
}

impl TemplateEngine {
    /// Creates an engine for templates matching `glob`.
    ///
    /// A `glob` without `*`, `?` or `[` names a single template file, which
    /// is registered under its file name.
    ///
    /// Existing files are kept and output goes to the current directory
    /// unless configured otherwise.
    #[must_use]
    pub fn new(glob: impl Into<String>) -> Self {
        Self {
            glob: glob.into(),
            overwrite: false,
            out_dir: Utf8PathBuf::from(DEFAULT_OUT_DIR),
            outputs: Vec::new(),
        }
    }

    /// Whether existing files are replaced.
    #[must_use]
    pub const fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Directory rendered paths are resolved against.
    #[must_use]
    pub fn out_dir(mut self, out_dir: impl Into<Utf8PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Declares an additional emitting template.
    #[must_use]
    pub fn output(mut self, decl: OutputDecl) -> Self {
        self.outputs.push(decl);
        self
    }

    /// Declares several emitting templates.
    #[must_use]
    pub fn outputs(mut self, decls: impl IntoIterator<Item = OutputDecl>) -> Self {
        self.outputs.extend(decls);
        self
    }

    /// The configured glob.
    #[must_use]
    pub fn glob(&self) -> &str {
        &self.glob
    }

    /// Loads the template set and reports each template's role, sorted by
    /// template name.
    ///
    /// # Errors
    ///
    /// Returns [`ModelgenError::TemplateParse`] or
    /// [`ModelgenError::UnknownTemplate`].
    pub fn declarations(&self) -> Result<Vec<TemplateDecl>> {
        Ok(TemplateSet::load(&self.glob, &self.outputs)?.decls().to_vec())
    }

    /// Renders every emitting template without writing anything.
    ///
    /// Files are returned in ascending path order. When two templates
    /// resolve to the same path the later template (by name) wins.
    ///
    /// # Errors
    ///
    /// Returns the load errors of [`Self::declarations`], then
    /// [`ModelgenError::InvalidContext`], [`ModelgenError::NoTemplatesResolved`],
    /// [`ModelgenError::PathRender`] or [`ModelgenError::ContentRender`].
    pub fn resolve<T: Serialize + ?Sized>(&self, data: &T) -> Result<Vec<RenderedFile>> {
        let set = TemplateSet::load(&self.glob, &self.outputs)?;
        let context =
            Context::from_serialize(data).map_err(|source| ModelgenError::InvalidContext { source })?;
        set.resolve(&context)
    }

    /// Renders every emitting template and writes the results beneath the
    /// output directory in ascending path order.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::resolve`], in which case nothing is
    /// written, or [`ModelgenError::Write`] for the first file that cannot
    /// be written. Files written before that failure remain.
    pub fn render<T: Serialize + ?Sized>(&self, data: &T) -> Result<RenderReport> {
        let files = self.resolve(data)?;
        let outcomes = writer::write_files(&self.out_dir, &files, self.overwrite)?;
        let report = RenderReport { outcomes };
        info!(
            glob = %self.glob,
            written = report.written().count(),
            skipped = report.skipped().count(),
            "render finished"
        );
        Ok(report)
    }
}

/// Renders templates matching `glob` into the current directory.
///
/// # Errors
///
/// See [`TemplateEngine::render`].
pub fn render<T: Serialize + ?Sized>(glob: &str, data: &T, overwrite: bool) -> Result<RenderReport> {
    TemplateEngine::new(glob).overwrite(overwrite).render(data)
}
