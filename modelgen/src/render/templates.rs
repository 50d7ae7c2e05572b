//! Loading template sets and deciding which templates emit files.

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use tracing::{debug, warn};

use super::RenderedFile;
use super::filters;
use crate::error::{ModelgenError, Result};

/// Leading character of a template file name that marks it as emitting.
pub const EMIT_MARKER: char = '-';

/// Suffix removed from a marked file name to obtain its path template.
pub const TEMPLATE_SUFFIX: &str = ".tera";

/// Explicit declaration that `template` emits a file at `path`.
///
/// `path` is itself a template rendered against the data context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDecl {
    /// Name of a loaded template (relative to the glob's base directory).
    pub template: String,
    /// Output path template.
    pub path: String,
}

impl OutputDecl {
    /// Declares `template` as emitting to `path`.
    #[must_use]
    pub fn new(template: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            path: path.into(),
        }
    }
}

/// What a loaded template is used for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateRole {
    /// Rendered into a file whose path comes from `path_template`.
    Emit {
        /// Template for the output path.
        path_template: String,
    },
    /// Only available to `include`, `import` and `extends`.
    Fragment,
}

/// A loaded template and its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDecl {
    /// Registered template name.
    pub name: String,
    /// Whether and where the template emits.
    pub role: TemplateRole,
}

impl TemplateDecl {
    /// Classifies a template by name.
    ///
    /// A file name starting with [`EMIT_MARKER`] emits; its path template is
    /// the name without the marker and without a trailing
    /// [`TEMPLATE_SUFFIX`]. Directory components are kept.
    ///
    /// ```
    /// use modelgen::{TemplateDecl, TemplateRole};
    ///
    /// let decl = TemplateDecl::classify("api/-{{ type_name.snake }}.go.tera");
    /// assert_eq!(
    ///     decl.role,
    ///     TemplateRole::Emit { path_template: "api/{{ type_name.snake }}.go".into() }
    /// );
    /// assert!(!TemplateDecl::classify("macros.tera").is_emit());
    /// ```
    #[must_use]
    pub fn classify(name: &str) -> Self {
        let (dir, file) = name
            .rsplit_once('/')
            .map_or((None, name), |(dir, file)| (Some(dir), file));
        let role = file.strip_prefix(EMIT_MARKER).map_or(TemplateRole::Fragment, |rest| {
            let stem = rest.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(rest);
            TemplateRole::Emit {
                path_template: dir.map_or_else(|| stem.to_owned(), |parent| format!("{parent}/{stem}")),
            }
        });
        Self {
            name: name.to_owned(),
            role,
        }
    }

    /// Whether this template produces a file.
    #[must_use]
    pub const fn is_emit(&self) -> bool {
        matches!(self.role, TemplateRole::Emit { .. })
    }

    /// The output path template of an emitting template.
    #[must_use]
    pub fn path_template(&self) -> Option<&str> {
        match &self.role {
            TemplateRole::Emit { path_template } => Some(path_template),
            TemplateRole::Fragment => None,
        }
    }
}

/// Templates loaded from one glob, with their roles.
#[derive(Debug)]
pub(super) struct TemplateSet {
    glob: String,
    tera: Tera,
    decls: Vec<TemplateDecl>,
}

/// A pattern without wildcards names a single file, registered under its
/// file name.
fn parse(glob: &str) -> tera::Result<Tera> {
    if glob.contains(['*', '?', '[']) {
        return Tera::new(glob);
    }
    let path = Utf8Path::new(glob);
    let name = path.file_name().unwrap_or(glob);
    let mut tera = Tera::default();
    tera.add_template_file(path, Some(name))?;
    Ok(tera)
}

impl TemplateSet {
    pub(super) fn load(glob: &str, outputs: &[OutputDecl]) -> Result<Self> {
        let mut tera = parse(glob).map_err(|source| ModelgenError::TemplateParse {
            glob: glob.to_owned(),
            source,
        })?;
        tera.autoescape_on(Vec::new());
        filters::register(&mut tera);

        let mut names: Vec<String> = tera.get_template_names().map(ToOwned::to_owned).collect();
        names.sort_unstable();
        let mut decls: Vec<TemplateDecl> = names
            .iter()
            .map(|name| TemplateDecl::classify(name))
            .collect();

        for output in outputs {
            let decl = decls
                .iter_mut()
                .find(|decl| decl.name == output.template)
                .ok_or_else(|| ModelgenError::UnknownTemplate {
                    template: output.template.clone(),
                })?;
            decl.role = TemplateRole::Emit {
                path_template: output.path.clone(),
            };
        }

        for decl in &decls {
            debug!(template = %decl.name, emit = decl.is_emit(), "loaded template");
        }

        Ok(Self {
            glob: glob.to_owned(),
            tera,
            decls,
        })
    }

    pub(super) fn decls(&self) -> &[TemplateDecl] {
        &self.decls
    }

    /// Renders every output path, then every body. Nothing is returned
    /// unless both stages succeed for all emitting templates.
    pub(super) fn resolve(&self, context: &Context) -> Result<Vec<RenderedFile>> {
        let emits: Vec<(&TemplateDecl, &str)> = self
            .decls
            .iter()
            .filter_map(|decl| decl.path_template().map(|path| (decl, path)))
            .collect();
        if emits.is_empty() {
            return Err(ModelgenError::NoTemplatesResolved {
                glob: self.glob.clone(),
            });
        }

        let paths = self.resolve_paths(&emits, context)?;

        let mut files: BTreeMap<Utf8PathBuf, RenderedFile> = BTreeMap::new();
        for ((decl, _), path) in emits.into_iter().zip(paths) {
            let content =
                self.tera
                    .render(&decl.name, context)
                    .map_err(|source| ModelgenError::ContentRender {
                        template: decl.name.clone(),
                        source,
                    })?;
            let file = RenderedFile {
                template: decl.name.clone(),
                path: path.clone(),
                content: content.into_bytes(),
            };
            if let Some(previous) = files.insert(path, file) {
                warn!(
                    path = %previous.path,
                    replaced = %previous.template,
                    by = %decl.name,
                    "two templates resolved to the same path"
                );
            }
        }
        Ok(files.into_values().collect())
    }

    fn resolve_paths(
        &self,
        emits: &[(&TemplateDecl, &str)],
        context: &Context,
    ) -> Result<Vec<Utf8PathBuf>> {
        // Inline path templates are added to a copy so the loaded set stays
        // exactly what the glob matched.
        let mut inline = self.tera.clone();
        let mut paths = Vec::with_capacity(emits.len());
        for (decl, path_template) in emits {
            let path_error = |source| ModelgenError::PathRender {
                template: decl.name.clone(),
                source,
            };
            let rendered = inline.render_str(path_template, context).map_err(path_error)?;
            if rendered.trim().is_empty() {
                return Err(path_error(tera::Error::msg(format!(
                    "path template '{path_template}' rendered an empty path"
                ))));
            }
            debug!(template = %decl.name, path = %rendered, "resolved output path");
            paths.push(Utf8PathBuf::from(rendered));
        }
        Ok(paths)
    }
}
