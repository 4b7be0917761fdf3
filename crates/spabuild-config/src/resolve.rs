//! The resolved, immutable build configuration handed to the bundler.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use path_clean::PathClean;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::options::ConfigOptions;
use crate::paths::{absolutize, normalize_base};
use crate::plugin::PluginHandle;

/// Fully resolved build configuration.
///
/// Every path is absolute and the public base always starts and ends with
/// `/`. The value cannot be modified after construction; share it freely
/// (it is `Send + Sync`).
///
/// # Example
///
/// ```
/// use spabuild_config::{BuildConfiguration, ConfigOptions};
/// use std::path::{Path, PathBuf};
///
/// let config = BuildConfiguration::resolve(&ConfigOptions::default(), Path::new("/proj")).unwrap();
///
/// assert_eq!(config.base(), "/static/vite/");
/// assert_eq!(config.entry("main"), Some(Path::new("/proj/src/main.js")));
/// assert_eq!(config.build().output_directory(), Path::new("/proj/build"));
/// assert_eq!(config.manifest_path(), PathBuf::from("/proj/build/manifest.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    plugins: Vec<PluginHandle>,
    base_public_path: String,
    path_aliases: IndexMap<String, PathBuf>,
    build_options: BuildOptions,
    entry_points: IndexMap<String, PathBuf>,
}

/// Output settings of a resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    manifest_file_name: String,
    output_directory: PathBuf,
}

impl BuildOptions {
    pub fn manifest_file_name(&self) -> &str {
        &self.manifest_file_name
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }
}

impl BuildConfiguration {
    /// Resolve raw options against an absolute root directory.
    ///
    /// Relative paths are joined to `root`; all paths are lexically cleaned.
    /// Disabled plugins are dropped, the rest keep their declared order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::RelativeRoot` if `root` is not absolute.
    pub fn resolve(options: &ConfigOptions, root: &Path) -> Result<Self> {
        if !root.is_absolute() {
            return Err(ConfigError::RelativeRoot {
                path: root.to_path_buf(),
            });
        }
        let root = root.clean();

        let plugins: Vec<PluginHandle> = options
            .plugins
            .iter()
            .filter(|plugin| plugin.enabled)
            .map(|plugin| plugin.to_handle())
            .collect();

        let path_aliases = options
            .alias
            .iter()
            .map(|(alias, target)| (alias.clone(), absolutize(&root, target)))
            .collect();

        let entry_points = options
            .entries
            .iter()
            .map(|(name, path)| (name.clone(), absolutize(&root, path)))
            .collect();

        let config = Self {
            plugins,
            base_public_path: normalize_base(&options.base),
            path_aliases,
            build_options: BuildOptions {
                manifest_file_name: options.build.manifest.clone(),
                output_directory: absolutize(&root, &options.build.out_dir),
            },
            entry_points,
        };

        debug!(
            root = %root.display(),
            plugins = config.plugins.len(),
            entries = config.entry_points.len(),
            "resolved build configuration"
        );

        Ok(config)
    }

    /// Resolve raw options against the process working directory.
    pub fn resolve_from_current_dir(options: &ConfigOptions) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::resolve(options, &cwd)
    }

    pub fn plugins(&self) -> &[PluginHandle] {
        &self.plugins
    }

    pub fn base(&self) -> &str {
        &self.base_public_path
    }

    pub fn path_aliases(&self) -> &IndexMap<String, PathBuf> {
        &self.path_aliases
    }

    pub fn build(&self) -> &BuildOptions {
        &self.build_options
    }

    pub fn entry_points(&self) -> &IndexMap<String, PathBuf> {
        &self.entry_points
    }

    pub fn entry(&self, name: &str) -> Option<&Path> {
        self.entry_points.get(name).map(PathBuf::as_path)
    }

    /// Location of the manifest the bundler writes.
    pub fn manifest_path(&self) -> PathBuf {
        self.build_options
            .output_directory
            .join(&self.build_options.manifest_file_name)
    }

    /// Resolve an import specifier through the alias table.
    ///
    /// An alias applies when the specifier equals it or continues with `/`
    /// after it, so `@` matches `@/views/Home.vue` but not `@vue/runtime`.
    /// The longest matching alias wins.
    ///
    /// # Example
    ///
    /// ```
    /// use spabuild_config::{BuildConfiguration, ConfigOptions};
    /// use std::path::{Path, PathBuf};
    ///
    /// let config = BuildConfiguration::resolve(&ConfigOptions::default(), Path::new("/proj")).unwrap();
    ///
    /// assert_eq!(
    ///     config.resolve_alias("@/views/Home.vue"),
    ///     Some(PathBuf::from("/proj/src/views/Home.vue"))
    /// );
    /// assert_eq!(config.resolve_alias("@vue/runtime-core"), None);
    /// ```
    pub fn resolve_alias(&self, specifier: &str) -> Option<PathBuf> {
        self.path_aliases
            .iter()
            .filter_map(|(alias, target)| {
                let rest = specifier.strip_prefix(alias.as_str())?;
                let rest = if rest.is_empty() || alias.ends_with('/') {
                    rest
                } else {
                    rest.strip_prefix('/')?
                };
                // An absolute remainder would replace the target on join.
                let rest = rest.trim_start_matches('/');
                let resolved = if rest.is_empty() {
                    target.clone()
                } else {
                    target.join(rest).clean()
                };
                Some((alias.len(), resolved))
            })
            .max_by_key(|(len, _)| *len)
            .map(|(_, resolved)| resolved)
    }

    /// The configuration in the bundler's own schema.
    pub fn to_bundler_value(&self) -> Value {
        let alias: Map<String, Value> = self
            .path_aliases
            .iter()
            .map(|(alias, path)| (alias.clone(), path_value(path)))
            .collect();

        let input: Map<String, Value> = self
            .entry_points
            .iter()
            .map(|(name, path)| (name.clone(), path_value(path)))
            .collect();

        let plugins: Vec<Value> = self
            .plugins
            .iter()
            .map(|plugin| {
                let mut entry = Map::new();
                entry.insert("name".to_string(), Value::from(plugin.name()));
                if let Some(package) = plugin.package() {
                    entry.insert("package".to_string(), Value::from(package));
                }
                if !plugin.options().is_null() {
                    entry.insert("options".to_string(), plugin.options().clone());
                }
                Value::Object(entry)
            })
            .collect();

        json!({
            "plugins": plugins,
            "base": self.base_public_path,
            "resolve": { "alias": alias },
            "build": {
                "manifest": self.build_options.manifest_file_name,
                "outDir": path_value(&self.build_options.output_directory),
                "rollupOptions": { "input": input },
            },
        })
    }

    /// Pretty-printed JSON of [`to_bundler_value`](Self::to_bundler_value).
    pub fn to_bundler_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_bundler_value()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "configuration".to_string(),
                hint: Some(e.to_string()),
            }
        })
    }

    /// Pretty-printed JSON of the descriptor record itself.
    pub fn to_descriptor_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

fn path_value(path: &Path) -> Value {
    Value::String(path.to_string_lossy().into_owned())
}
