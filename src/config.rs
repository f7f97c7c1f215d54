//! Configuration file support for snapcraft-sbom.
//!
//! Provides YAML-based configuration through `snapcraft-sbom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use snapcraft_sbom::shared::error::SbomError;
use snapcraft_sbom::shared::security::read_checked;
use snapcraft_sbom::shared::Result;

pub const CONFIG_FILENAME: &str = "snapcraft-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Organisation recorded as SBOM supplier and tool vendor.
    pub supplier: Option<String>,
    /// Part name patterns to drop, merged with `--exclude`.
    pub exclude_parts: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to null; treat it as an empty config.
    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(path, &config)?;
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

/// Validate the loaded configuration.
fn validate_config(path: &Path, config: &ConfigFile) -> Result<()> {
    if let Some(ref patterns) = config.exclude_parts {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                return Err(SbomError::InvalidConfig {
                    path: path.to_path_buf(),
                    reason: format!("exclude_parts[{}] must not be empty", i),
                    hint: "Each exclude_parts entry must be a part name or a pattern such as \"lib-*\"."
                        .to_string(),
                }
                .into());
            }
        }
    }

    if let Some(ref supplier) = config.supplier {
        if supplier.trim().is_empty() {
            return Err(SbomError::InvalidConfig {
                path: path.to_path_buf(),
                reason: "supplier must not be empty".to_string(),
                hint: "Remove the field to use the default supplier, or set an organisation name."
                    .to_string(),
            }
            .into());
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
