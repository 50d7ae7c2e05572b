//! Library facade for the `cert-scaffold` demo so integration tests can drive
//! generation without spawning the binary.

use std::io::Write;

use camino::Utf8PathBuf;
use modelgen::{FileOutcome, GeneratorConfig, TemplateRole};
use tracing::info;

pub mod cli;
pub mod error;
pub mod model;

use crate::cli::Cli;
use crate::error::Result;
use crate::model::CertModel;

/// What happened to one generated path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Planned {
    /// Written during this run.
    Written(Utf8PathBuf),
    /// Left alone because it already existed.
    Skipped(Utf8PathBuf),
    /// Would be written; dry runs only.
    Pending(Utf8PathBuf),
}

impl From<FileOutcome> for Planned {
    fn from(outcome: FileOutcome) -> Self {
        match outcome {
            FileOutcome::Written(path) => Self::Written(path),
            FileOutcome::Skipped(path) => Self::Skipped(path),
        }
    }
}

/// Renders the configured template set for [`CertModel`].
///
/// # Errors
///
/// Returns any description or rendering failure from `modelgen`.
pub fn generate(config: &GeneratorConfig, dry_run: bool) -> Result<Vec<Planned>> {
    let descriptor = config.descriptor_builder().build_type::<CertModel>()?;
    let engine = config.engine();
    if dry_run {
        let files = engine.resolve(&descriptor)?;
        return Ok(files
            .into_iter()
            .map(|file| Planned::Pending(config.out_dir.join(file.path)))
            .collect());
    }
    let report = engine.render(&descriptor)?;
    Ok(report.outcomes().iter().cloned().map(Planned::from).collect())
}

/// Executes the command line, writing a summary to `out`.
///
/// # Errors
///
/// Returns configuration, rendering or output failures.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = cli.load_config()?;
    info!(glob = %config.glob, out_dir = %config.out_dir, "configuration loaded");

    if cli.list_templates {
        for decl in config.engine().declarations()? {
            match decl.role {
                TemplateRole::Emit { path_template } => {
                    writeln!(out, "emit      {} -> {path_template}", decl.name)?;
                }
                TemplateRole::Fragment => writeln!(out, "fragment  {}", decl.name)?,
            }
        }
        return Ok(());
    }

    for planned in generate(&config, cli.dry_run)? {
        match planned {
            Planned::Written(path) => writeln!(out, "wrote     {path}")?,
            Planned::Skipped(path) => writeln!(out, "skipped   {path}")?,
            Planned::Pending(path) => writeln!(out, "would add {path}")?,
        }
    }
    Ok(())
}
