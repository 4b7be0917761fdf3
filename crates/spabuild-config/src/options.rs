//! Raw configuration as written in the project file.
//!
//! Paths here may be relative; they only become absolute once the options are
//! resolved into a [`BuildConfiguration`](crate::BuildConfiguration).

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::helpers::{
    default_alias, default_base, default_entries, default_manifest, default_out_dir,
    scalar_path, scalar_path_map, scalar_string,
};
use crate::plugin::{default_plugins, PluginOptions};

/// Unresolved build configuration.
///
/// Every field falls back to the single-page application defaults, so an
/// empty project file describes the canonical setup: the `vue` and
/// `vue-devtools` plugins, assets served from `/static/vite/`, `@` aliased to
/// `src`, a `main` entry at `src/main.js`, and `manifest.json` written into
/// `build/`.
///
/// A field present in the file replaces its default wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigOptions {
    /// Plugins in the order the bundler should apply them
    #[serde(default = "default_plugins")]
    pub plugins: Vec<PluginOptions>,

    /// Public path prefix under which built assets are served
    #[serde(default = "default_base", deserialize_with = "scalar_string")]
    pub base: String,

    /// Import prefix to directory (relative to the project root or absolute)
    #[serde(default = "default_alias", deserialize_with = "scalar_path_map")]
    pub alias: IndexMap<String, PathBuf>,

    /// Output settings
    #[serde(default)]
    pub build: BuildSection,

    /// Logical entry name to source file
    #[serde(default = "default_entries", deserialize_with = "scalar_path_map")]
    pub entries: IndexMap<String, PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSection {
    /// File name of the manifest the bundler writes into `out_dir`
    #[serde(default = "default_manifest", deserialize_with = "scalar_string")]
    pub manifest: String,

    /// Directory receiving build artifacts
    #[serde(default = "default_out_dir", deserialize_with = "scalar_path")]
    pub out_dir: PathBuf,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            out_dir: default_out_dir(),
        }
    }
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            plugins: default_plugins(),
            base: default_base(),
            alias: default_alias(),
            build: BuildSection::default(),
            entries: default_entries(),
        }
    }
}

impl ConfigOptions {
    /// Options with no plugins, aliases, or entries; only the scalar defaults.
    ///
    /// Useful for building a configuration programmatically without
    /// inheriting the SPA defaults.
    pub fn empty() -> Self {
        Self {
            plugins: Vec::new(),
            base: default_base(),
            alias: IndexMap::new(),
            build: BuildSection::default(),
            entries: IndexMap::new(),
        }
    }

    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use spabuild_config::ConfigOptions;
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let options = ConfigOptions::from_value(json!({
    ///     "entries": { "admin": "src/admin.js" }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(options.entries.len(), 1);
    /// assert_eq!(options.entries["admin"], PathBuf::from("src/admin.js"));
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn with_plugin(mut self, plugin: PluginOptions) -> Self {
        self.plugins.push(plugin);
        self
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Add a path alias for import resolution
    ///
    /// # Example
    /// ```
    /// use spabuild_config::ConfigOptions;
    ///
    /// let options = ConfigOptions::empty()
    ///     .with_alias("@", "src")
    ///     .with_alias("@components", "src/components");
    /// assert_eq!(options.alias.len(), 2);
    /// ```
    pub fn with_alias(mut self, alias: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.alias.insert(alias.into(), path.into());
        self
    }

    pub fn with_entry(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.entries.insert(name.into(), path.into());
        self
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.build.out_dir = out_dir.into();
        self
    }

    pub fn with_manifest(mut self, manifest: impl Into<String>) -> Self {
        self.build.manifest = manifest.into();
        self
    }
}
