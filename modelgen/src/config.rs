//! Layered generator configuration.
//!
//! Values are merged from, lowest precedence first: built-in defaults, a
//! TOML file (`modelgen.toml` unless a path is given) and `MODELGEN_*`
//! environment variables. Callers can merge further providers onto
//! [`GeneratorConfig::figment`] before extracting, as the command-line demo
//! does with its flags.

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::descriptor::DescriptorBuilder;
use crate::error::Result;
use crate::labels::LabelDefaults;
use crate::render::{DEFAULT_OUT_DIR, OutputDecl, TemplateEngine};

/// File read by [`GeneratorConfig::load`].
pub const CONFIG_FILE: &str = "modelgen.toml";

/// Prefix of environment variables read by [`GeneratorConfig::load`].
pub const ENV_PREFIX: &str = "MODELGEN_";

/// Glob used when none is configured.
pub const DEFAULT_GLOB: &str = "templates/*.tera";

/// Settings for one generation run.
///
/// ```toml
/// glob = "templates/**/*.tera"
/// overwrite = true
/// out_dir = "generated"
///
/// [labels]
/// status = "状态"
///
/// [[outputs]]
/// template = "model.rs.tera"
/// path = "src/{{ type_name.snake }}.rs"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Glob selecting the template set.
    pub glob: String,
    /// Whether existing files are replaced.
    pub overwrite: bool,
    /// Directory generated paths are resolved against.
    pub out_dir: Utf8PathBuf,
    /// Labels overlaid on the built-in default label table.
    pub labels: BTreeMap<String, String>,
    /// Explicitly declared emitting templates.
    pub outputs: Vec<OutputDecl>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            glob: DEFAULT_GLOB.to_owned(),
            overwrite: false,
            out_dir: Utf8PathBuf::from(DEFAULT_OUT_DIR),
            labels: BTreeMap::new(),
            outputs: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Defaults, then [`CONFIG_FILE`] if present, then the environment.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_from(Utf8Path::new(CONFIG_FILE))
    }

    /// Defaults, then the TOML file at `path` if present, then the
    /// environment.
    #[must_use]
    pub fn figment_from(path: &Utf8Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_std_path()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads configuration using [`Self::figment`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::ModelgenError::Config`] when a layer holds values of
    /// the wrong shape.
    pub fn load() -> Result<Self> {
        Self::extract(&Self::figment())
    }

    /// Loads configuration with an explicit file that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ModelgenError::Config`] when the file is missing or
    /// a layer holds values of the wrong shape.
    pub fn load_from(path: &Utf8Path) -> Result<Self> {
        if !path.is_file() {
            return Err(figment::Error::from(format!("configuration file '{path}' not found")).into());
        }
        Self::extract(&Self::figment_from(path))
    }

    /// Extracts configuration from a caller-assembled figment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ModelgenError::Config`] on extraction failure.
    pub fn extract(figment: &Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }

    /// Built-in labels overlaid with [`Self::labels`].
    #[must_use]
    pub fn label_defaults(&self) -> LabelDefaults {
        let mut labels = LabelDefaults::default();
        labels.extend(self.labels.iter().map(|(field, label)| (field.as_str(), label.as_str())));
        labels
    }

    /// Descriptor builder using [`Self::label_defaults`].
    #[must_use]
    pub fn descriptor_builder(&self) -> DescriptorBuilder {
        DescriptorBuilder::default().labels(self.label_defaults())
    }

    /// Template engine configured from these settings.
    #[must_use]
    pub fn engine(&self) -> TemplateEngine {
        TemplateEngine::new(self.glob.clone())
            .overwrite(self.overwrite)
            .out_dir(self.out_dir.clone())
            .outputs(self.outputs.iter().cloned())
    }
}
