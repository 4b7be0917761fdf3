//! File-based config discovery for CLI use
//!
//! Handles finding and loading spabuild project files from the filesystem.
//! Values come from the file first and `SPABUILD_*` environment variables
//! second, so the environment always wins.

use std::fs;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use path_clean::PathClean;
use serde_json::Value;
use tracing::debug;

use crate::config::ProjectConfig;
use crate::error::{ConfigError, Result};
use crate::resolve::BuildConfiguration;

/// Project file name searched for first.
pub const CONFIG_FILE_NAME: &str = "spabuild.toml";

/// Field of `package.json` holding the configuration.
pub const PACKAGE_JSON_FIELD: &str = "spabuild";

/// Prefix of environment overrides; `__` separates nested keys
/// (`SPABUILD_BUILD__OUT_DIR=dist`).
pub const ENV_PREFIX: &str = "SPABUILD_";

/// File-based configuration discovery
///
/// Searches for a project file in the root directory and loads it. Library
/// users can construct [`ProjectConfig`] or [`ConfigOptions`](crate::ConfigOptions)
/// directly instead.
///
/// # Example
///
/// ```no_run
/// use spabuild_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.resolve(Some("production")).unwrap();
/// println!("{}", config.base());
/// ```
#[derive(Debug)]
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. spabuild.toml
    /// 2. package.json (spabuild field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE_NAME);
        if toml_path.is_file() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.is_file() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed
                        .get(PACKAGE_JSON_FIELD)
                        .is_some_and(|field| !field.is_null())
                    {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<ProjectConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load config with profile merging
    ///
    /// The profile is applied to the file values before the environment is
    /// layered on top.
    pub fn load_with_profile(&self, profile: &str) -> Result<ProjectConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_profile_from(&path, Some(profile))
    }

    /// Load, apply the profile, and resolve against the root directory.
    pub fn resolve(&self, profile: Option<&str>) -> Result<BuildConfiguration> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        let project = self.load_profile_from(&path, profile)?;
        self.resolve_project(&project)
    }

    /// Resolve an already loaded project against the root directory.
    pub fn resolve_project(&self, project: &ProjectConfig) -> Result<BuildConfiguration> {
        let root = self.absolute_root()?;
        BuildConfiguration::resolve(&project.options, &root)
    }

    /// The root directory as an absolute, cleaned path.
    pub fn absolute_root(&self) -> Result<PathBuf> {
        if self.root.is_absolute() {
            Ok(self.root.clean())
        } else {
            Ok(std::env::current_dir()?.join(&self.root).clean())
        }
    }

    /// Load config from a specific file path
    pub fn load_from(&self, path: &Path) -> Result<ProjectConfig> {
        self.load_profile_from(path, None)
    }

    /// Load config from a specific file path with an optional profile.
    ///
    /// Layers, lowest first: file values, the profile's overrides, then
    /// `SPABUILD_*` environment variables.
    pub fn load_profile_from(&self, path: &Path, profile: Option<&str>) -> Result<ProjectConfig> {
        debug!(path = %path.display(), profile = ?profile, "loading project config");

        let file = if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            Figment::from(Serialized::defaults(package_json_field(path)?))
        } else {
            Figment::from(Toml::file(path))
        };

        let project: ProjectConfig = file.extract().map_err(|e| invalid_file(path, e))?;
        let profiles = project.profiles.clone();
        let project = project.materialize_profile(profile)?;

        let mut layered: ProjectConfig = Figment::from(Serialized::defaults(&project))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| invalid_file(path, e))?;
        layered.profiles = profiles;

        Ok(layered)
    }
}

fn invalid_file(path: &Path, err: figment::Error) -> ConfigError {
    ConfigError::InvalidValue {
        field: path.display().to_string(),
        hint: Some(err.to_string()),
    }
}

fn package_json_field(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "package.json".to_string(),
        hint: Some(format!("Invalid JSON: {}", e)),
    })?;

    match parsed.get(PACKAGE_JSON_FIELD) {
        Some(value) if !value.is_null() => Ok(value.clone()),
        Some(_) => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some(format!("The '{PACKAGE_JSON_FIELD}' field cannot be null")),
        }),
        None => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some(format!(
                "Add a '{PACKAGE_JSON_FIELD}' field to your package.json"
            )),
        }),
    }
}

/// Discover and load config from current directory (convenience function)
pub fn discover() -> Result<ProjectConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

/// Discover and load config with profile (convenience function)
pub fn discover_with_profile(profile: &str) -> Result<ProjectConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_with_profile(profile)
}
