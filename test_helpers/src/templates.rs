//! Temporary template trees for render tests.
//!
//! A [`TemplateTree`] owns a temporary directory holding a `templates/`
//! directory and an `out/` directory. Tests add template files, point an
//! engine at [`TemplateTree::glob`] and [`TemplateTree::out_dir`], and read
//! generated files back.
//!
//! # Examples
//!
//! ```
//! use modelgen_test_helpers::templates::TemplateTree;
//!
//! let tree = TemplateTree::new()?
//!     .with("-{{ type_name.snake }}.rs.tera", "// {{ type_name.pascal }}")?;
//! assert!(tree.glob().ends_with("templates/**/*.tera"));
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Directory name for templates beneath the tree root.
pub const TEMPLATES_DIR: &str = "templates";

/// Directory name for generated output beneath the tree root.
pub const OUT_DIR: &str = "out";

/// A temporary directory with template and output subdirectories.
#[derive(Debug)]
pub struct TemplateTree {
    _temp: TempDir,
    root: Utf8PathBuf,
}

impl TemplateTree {
    /// Creates an empty tree. The output directory is not created.
    ///
    /// # Errors
    ///
    /// Returns an error when the temporary directory cannot be created or its
    /// path is not UTF-8.
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create temp dir")?;
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
            .map_err(|path| anyhow!("temp dir is not valid UTF-8: {}", path.display()))?;
        std::fs::create_dir_all(root.join(TEMPLATES_DIR)).context("create templates dir")?;
        Ok(Self { _temp: temp, root })
    }

    /// Adds a template at `name`, relative to the templates directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    pub fn with(self, name: &str, body: &str) -> Result<Self> {
        self.write_template(name, body)?;
        Ok(self)
    }

    /// Writes a template at `name`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    pub fn write_template(&self, name: &str, body: &str) -> Result<()> {
        write(&self.templates_dir().join(name), body)
    }

    /// Writes a file beneath the output directory, e.g. to simulate an
    /// earlier run.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    pub fn write_output(&self, path: &str, body: &str) -> Result<()> {
        write(&self.out_dir().join(path), body)
    }

    /// Root of the temporary tree.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Directory holding the templates.
    #[must_use]
    pub fn templates_dir(&self) -> Utf8PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    /// Glob matching every `.tera` file under the templates directory.
    #[must_use]
    pub fn glob(&self) -> String {
        format!("{}/**/*.tera", self.templates_dir())
    }

    /// Directory generated files are written to.
    #[must_use]
    pub fn out_dir(&self) -> Utf8PathBuf {
        self.root.join(OUT_DIR)
    }

    /// Reads a generated file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file is missing or not UTF-8.
    pub fn read_output(&self, path: &str) -> Result<String> {
        let target = self.out_dir().join(path);
        std::fs::read_to_string(&target).with_context(|| format!("read {target}"))
    }

    /// Whether anything exists at `path` beneath the output directory.
    #[must_use]
    pub fn output_exists(&self, path: &str) -> bool {
        self.out_dir().join(path).exists()
    }

    /// Relative paths of every file beneath the output directory, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be walked.
    pub fn output_files(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        let out = self.out_dir();
        if out.exists() {
            collect(&out, &out, &mut files)?;
        }
        files.sort();
        Ok(files)
    }
}

fn write(path: &Utf8Path, body: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
    }
    std::fs::write(path, body).with_context(|| format!("write {path}"))
}

fn collect(base: &Utf8Path, dir: &Utf8Path, files: &mut Vec<String>) -> Result<()> {
    for entry in dir.read_dir_utf8().with_context(|| format!("read dir {dir}"))? {
        let entry = entry.with_context(|| format!("read entry in {dir}"))?;
        let path = entry.path();
        if path.is_dir() {
            collect(base, path, files)?;
        } else {
            let relative = path
                .strip_prefix(base)
                .with_context(|| format!("{path} is outside {base}"))?;
            files.push(relative.as_str().to_owned());
        }
    }
    Ok(())
}
