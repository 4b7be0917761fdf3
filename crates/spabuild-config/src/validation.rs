//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for
//! library use). Both operate on a resolved [`BuildConfiguration`], so every
//! path they see is already absolute.

use std::collections::HashSet;
use std::path::{Component, Path};

use crate::error::{ConfigError, Result};
use crate::paths::is_within;
use crate::resolve::BuildConfiguration;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use spabuild_config::{BuildConfiguration, ConfigOptions, ConfigValidator, SchemaValidator};
/// use std::path::Path;
///
/// let config = BuildConfiguration::resolve(&ConfigOptions::default(), Path::new("/proj")).unwrap();
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()> {
        validate_entries(config)?;
        validate_aliases(config)?;
        validate_plugins(config)?;
        validate_base(config.base())?;
        validate_manifest_name(config.build().manifest_file_name())?;
        validate_output_dir(config)?;
        Ok(())
    }
}

fn validate_entries(config: &BuildConfiguration) -> Result<()> {
    if config.entry_points().is_empty() {
        return Err(ConfigError::NoEntries);
    }

    if config.entry_points().keys().any(|name| name.trim().is_empty()) {
        return Err(ConfigError::SchemaValidation {
            message: "entry names cannot be empty".to_string(),
            hint: Some("Give every entry under [entries] a name".to_string()),
        });
    }

    Ok(())
}

fn validate_aliases(config: &BuildConfiguration) -> Result<()> {
    if config.path_aliases().keys().any(|alias| alias.is_empty()) {
        return Err(ConfigError::SchemaValidation {
            message: "alias prefixes cannot be empty".to_string(),
            hint: Some("Remove the empty key from [alias]".to_string()),
        });
    }
    Ok(())
}

fn validate_plugins(config: &BuildConfiguration) -> Result<()> {
    let mut seen = HashSet::new();
    for plugin in config.plugins() {
        if plugin.name().trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "plugin name cannot be empty".to_string(),
                hint: Some("Specify a name for each [[plugins]] entry".to_string()),
            });
        }
        if !seen.insert(plugin.name()) {
            return Err(ConfigError::SchemaValidation {
                message: format!("plugin '{}' is declared more than once", plugin.name()),
                hint: Some("Merge the duplicate declarations into one".to_string()),
            });
        }
    }
    Ok(())
}

fn validate_base(base: &str) -> Result<()> {
    if base.chars().any(|c| c.is_whitespace() || c == '?' || c == '#') {
        return Err(ConfigError::SchemaValidation {
            message: format!("base '{base}' contains whitespace, '?' or '#'"),
            hint: Some("Use a plain URL path such as /static/app/".to_string()),
        });
    }

    if base.contains("//") {
        return Err(ConfigError::SchemaValidation {
            message: format!("base '{base}' contains an empty path segment"),
            hint: Some("Use a path prefix, not a full URL".to_string()),
        });
    }

    Ok(())
}

fn validate_manifest_name(name: &str) -> Result<()> {
    let path = Path::new(name);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

    if name.trim().is_empty() || escapes {
        return Err(ConfigError::SchemaValidation {
            message: format!("manifest file name '{name}' must be a relative path inside the output directory"),
            hint: Some("Use a file name such as manifest.json".to_string()),
        });
    }

    Ok(())
}

fn validate_output_dir(config: &BuildConfiguration) -> Result<()> {
    let out_dir = config.build().output_directory();

    for (name, entry) in config.entry_points() {
        let Some(source_dir) = entry.parent() else {
            continue;
        };
        if is_within(source_dir, out_dir) {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "output directory {} would overwrite the sources of entry '{name}'",
                    out_dir.display()
                ),
                hint: Some("Point build.out_dir at a directory outside the source tree".to_string()),
            });
        }
    }

    Ok(())
}

/// Filesystem validator (for CLI use)
///
/// Runs the schema checks, then verifies that entries exist as files, alias
/// targets exist as directories, and the output path (if present) is a
/// directory.
pub struct FsValidator;

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()> {
        SchemaValidator.validate(config)?;

        for entry in config.entry_points().values() {
            if !entry.is_file() {
                return Err(ConfigError::EntryNotFound {
                    path: entry.clone(),
                });
            }
        }

        for (alias, target) in config.path_aliases() {
            if !target.is_dir() {
                return Err(ConfigError::AliasTargetNotFound {
                    alias: alias.clone(),
                    path: target.clone(),
                });
            }
        }

        let out_dir = config.build().output_directory();
        if out_dir.exists() && !out_dir.is_dir() {
            return Err(ConfigError::OutputNotDirectory {
                path: out_dir.to_path_buf(),
            });
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfiguration) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfiguration) -> Result<()> {
    FsValidator.validate(config)
}
