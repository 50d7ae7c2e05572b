//! Command-line surface of `cert-scaffold`.
//!
//! Flags are the highest-precedence configuration layer: they are merged
//! over defaults, the configuration file and `MODELGEN_*` variables, and
//! only flags the user actually passed take part.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use figment::Figment;
use figment::providers::Serialized;
use modelgen::GeneratorConfig;
use serde::Serialize;

use crate::error::{Result, ScaffoldError};

/// Generates CRUD scaffolding for the certificate model.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cert-scaffold", bin_name = "cert-scaffold", version)]
pub struct Cli {
    /// Configuration file to read instead of `modelgen.toml`.
    #[arg(long = "config", short = 'c', value_name = "PATH")]
    pub config_path: Option<Utf8PathBuf>,
    /// Glob selecting the template set.
    #[arg(long, short = 't', value_name = "GLOB")]
    pub templates: Option<String>,
    /// Directory generated files are written beneath.
    #[arg(long, short = 'o', value_name = "DIR")]
    pub out_dir: Option<Utf8PathBuf>,
    /// Replace files that already exist.
    #[arg(long)]
    pub overwrite: bool,
    /// Print the files that would be generated without writing them.
    #[arg(long)]
    pub dry_run: bool,
    /// List loaded templates and their roles, then exit.
    #[arg(long)]
    pub list_templates: bool,
}

/// Values supplied on the command line, in configuration shape.
#[derive(Debug, Default, Serialize)]
struct CliOverrides<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    glob: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    out_dir: Option<&'a Utf8Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overwrite: Option<bool>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides<'_> {
        CliOverrides {
            glob: self.templates.as_deref(),
            out_dir: self.out_dir.as_deref(),
            overwrite: self.overwrite.then_some(true),
        }
    }

    /// Configuration layers with the command line merged last.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::MissingConfig`] when `--config` names a file
    /// that does not exist.
    pub fn figment(&self) -> Result<Figment> {
        let base = match &self.config_path {
            Some(path) if !path.is_file() => {
                return Err(ScaffoldError::MissingConfig(path.clone()));
            }
            Some(path) => GeneratorConfig::figment_from(path),
            None => GeneratorConfig::figment(),
        };
        Ok(base.merge(Serialized::defaults(self.overrides())))
    }

    /// Resolves the effective generator configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::MissingConfig`] or a configuration error when
    /// a layer holds values of the wrong shape.
    pub fn load_config(&self) -> Result<GeneratorConfig> {
        Ok(GeneratorConfig::extract(&self.figment()?)?)
    }
}
