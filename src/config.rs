//! Configuration file support for mdep.
//!
//! Provides YAML-based configuration through `mdep.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use mdep::application::dto::{validate_encoding, OutputType};
use mdep::dependency_graph::domain::{Coordinate, Scope, TokenStyle};
use mdep::dependency_graph::services::NamingOptions;
use mdep::shared::error::MdepError;
use mdep::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILENAME: &str = "mdep.config.yml";

/// Top-level configuration file schema.
///
/// List-valued filters are YAML sequences; they are joined into the
/// comma-separated form the filters take.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub graph: Option<PathBuf>,
    pub output_type: Option<String>,
    pub tokens: Option<String>,
    pub encoding: Option<String>,
    pub includes: Option<Vec<String>>,
    pub excludes: Option<Vec<String>>,
    pub verbose: Option<bool>,

    pub exclude_transitive: Option<bool>,
    pub include_scope: Option<String>,
    pub exclude_scope: Option<String>,
    pub include_types: Option<Vec<String>>,
    pub exclude_types: Option<Vec<String>>,
    pub include_classifiers: Option<Vec<String>>,
    pub exclude_classifiers: Option<Vec<String>>,
    pub include_group_ids: Option<Vec<String>>,
    pub exclude_group_ids: Option<Vec<String>>,
    pub include_artifact_ids: Option<Vec<String>>,
    pub exclude_artifact_ids: Option<Vec<String>>,
    pub exclude_reactor: Option<bool>,
    pub reactor_projects: Option<Vec<String>>,

    pub stop_on_failure: Option<bool>,
    pub classifier: Option<String>,
    #[serde(rename = "type")]
    pub artifact_type: Option<String>,
    pub local_repository: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub overwrite_releases: Option<bool>,
    pub overwrite_snapshots: Option<bool>,
    pub overwrite_if_newer: Option<bool>,
    pub naming: Option<NamingConfig>,

    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// `naming:` block controlling destination file names and directories.
#[derive(Debug, Deserialize, Default, Clone, Copy)]
#[serde(deny_unknown_fields)]
pub struct NamingConfig {
    pub remove_version: Option<bool>,
    pub remove_classifier: Option<bool>,
    pub remove_type: Option<bool>,
    pub prepend_group_id: Option<bool>,
    pub use_base_version: Option<bool>,
    pub use_sub_directory_per_artifact: Option<bool>,
    pub use_sub_directory_per_type: Option<bool>,
    pub use_sub_directory_per_scope: Option<bool>,
    pub use_repository_layout: Option<bool>,
}

impl NamingConfig {
    pub fn to_options(self) -> NamingOptions {
        NamingOptions {
            remove_version: self.remove_version.unwrap_or_default(),
            remove_classifier: self.remove_classifier.unwrap_or_default(),
            remove_type: self.remove_type.unwrap_or_default(),
            prepend_group_id: self.prepend_group_id.unwrap_or_default(),
            use_base_version: self.use_base_version.unwrap_or_default(),
            use_sub_directory_per_artifact: self.use_sub_directory_per_artifact.unwrap_or_default(),
            use_sub_directory_per_type: self.use_sub_directory_per_type.unwrap_or_default(),
            use_sub_directory_per_scope: self.use_sub_directory_per_scope.unwrap_or_default(),
            use_repository_layout: self.use_repository_layout.unwrap_or_default(),
        }
    }
}

impl ConfigFile {
    /// Naming options from the `naming:` block, all off when absent
    pub fn naming_options(&self) -> NamingOptions {
        self.naming.unwrap_or_default().to_options()
    }
}

/// Joins a YAML list into the comma-separated filter form
pub fn join_list(list: &Option<Vec<String>>) -> Option<String> {
    list.as_ref().map(|items| items.join(","))
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the keyword-valued settings of the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(output_type) = &config.output_type {
        output_type.parse::<OutputType>()?;
    }
    if let Some(tokens) = &config.tokens {
        tokens.parse::<TokenStyle>()?;
    }
    if let Some(encoding) = &config.encoding {
        validate_encoding(encoding)?;
    }
    for (field, scope) in [
        ("include_scope", &config.include_scope),
        ("exclude_scope", &config.exclude_scope),
    ] {
        if let Some(scope) = scope.as_deref().filter(|s| !s.trim().is_empty()) {
            scope.parse::<Scope>().map_err(|_| {
                MdepError::configuration(
                    field,
                    scope,
                    "Invalid scope; expected one of compile, provided, runtime, system, test",
                )
            })?;
        }
    }
    for project in config.reactor_projects.iter().flatten() {
        Coordinate::parse(project)?;
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = %key, "Unknown config field");
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
