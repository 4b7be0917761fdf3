//! Project file model and profile merging.
//!
//! For file discovery, see the `discovery` module.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::options::ConfigOptions;
use crate::plugin::PluginOptions;
use crate::settings::GlobalSettings;

/// Template written by `spabuild init`. Parses to the default options.
pub const EXAMPLE_TOML: &str = r#"# Public path prefix under which built assets are served.
base = "/static/vite/"

# Plugins run in the order listed.
[[plugins]]
name = "vue"
package = "@vitejs/plugin-vue"

[[plugins]]
name = "vue-devtools"
package = "vite-plugin-vue-devtools"

[alias]
"@" = "src"

[build]
manifest = "manifest.json"
out_dir = "build"

[entries]
main = "src/main.js"

# Overrides applied with `--profile production`.
# [profiles.production]
# base = "/static/app/"
"#;

/// Contents of a project file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(flatten)]
    pub options: ConfigOptions,

    /// Named overrides layered over the base values
    #[serde(default, skip_serializing)]
    pub profiles: HashMap<String, Value>,

    #[serde(default)]
    pub settings: GlobalSettings,
}

impl ProjectConfig {
    /// Create from serde_json::Value
    ///
    /// # Example
    ///
    /// ```
    /// use spabuild_config::ProjectConfig;
    /// use serde_json::json;
    ///
    /// let config = ProjectConfig::from_value(json!({
    ///     "base": "/assets/",
    ///     "profiles": { "production": { "base": "/cdn/" } }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(config.options.base, "/assets/");
    /// assert!(config.profiles.contains_key("production"));
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Parse project file contents without consulting the environment.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some(format!("Invalid TOML syntax: {}", e)),
        })
    }

    /// Convert to serde_json::Value (profiles are not included)
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Starter project file text, as written by `spabuild init`.
    pub fn example_toml() -> &'static str {
        EXAMPLE_TOML
    }

    /// Apply the named profile on top of the base values.
    ///
    /// Objects merge key by key; arrays and scalars are replaced. Plugin-level
    /// `profiles` entries for the same name are applied afterwards. An
    /// unknown profile leaves the configuration unchanged.
    pub fn materialize_profile(mut self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        match self.profiles.get(name).cloned() {
            Some(overrides) if !overrides.is_null() => {
                debug!(profile = name, "applying profile overrides");
                let profiles = std::mem::take(&mut self.profiles);
                let mut base = serde_json::to_value(&self).map_err(override_error)?;
                merge_values(&mut base, &overrides);
                self = serde_json::from_value(base).map_err(override_error)?;
                self.profiles = profiles;
            }
            Some(_) => {}
            None => debug!(profile = name, "profile not declared, using base values"),
        }

        apply_plugin_profiles(&mut self.options.plugins, name)?;
        Ok(self)
    }
}

fn override_error(err: serde_json::Error) -> ConfigError {
    ConfigError::InvalidProfileOverride {
        message: err.to_string(),
    }
}

pub(crate) fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}

fn apply_plugin_profiles(plugins: &mut [PluginOptions], profile: &str) -> ConfigResult<()> {
    for plugin in plugins {
        let Some(overrides) = plugin.profiles.get(profile).cloned() else {
            continue;
        };

        if overrides.is_null() {
            continue;
        }

        let original_profiles = std::mem::take(&mut plugin.profiles);
        let mut merged = serde_json::to_value(&*plugin).map_err(override_error)?;
        merge_values(&mut merged, &overrides);
        let mut updated: PluginOptions = serde_json::from_value(merged).map_err(override_error)?;
        updated.profiles = original_profiles;
        *plugin = updated;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn example_toml_parses_to_defaults() {
        let config = ProjectConfig::from_toml(ProjectConfig::example_toml()).unwrap();
        assert_eq!(config.options, ConfigOptions::default());
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn profile_merging_works() {
        let config = ProjectConfig::from_value(json!({
            "base": "/static/vite/",
            "build": { "out_dir": "build", "manifest": "manifest.json" },
            "profiles": {
                "production": {
                    "base": "/static/app/",
                    "build": { "out_dir": "dist" }
                }
            }
        }))
        .unwrap()
        .materialize_profile(Some("production"))
        .unwrap();

        assert_eq!(config.options.base, "/static/app/");
        assert_eq!(config.options.build.out_dir, PathBuf::from("dist"));
        assert_eq!(config.options.build.manifest, "manifest.json");
        assert!(config.profiles.contains_key("production"));
    }

    #[test]
    fn profile_can_override_settings() {
        let config = ProjectConfig::from_value(json!({
            "profiles": { "ci": { "settings": { "log_level": "warn" } } }
        }))
        .unwrap()
        .materialize_profile(Some("ci"))
        .unwrap();

        assert_eq!(config.settings.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn no_profile_is_identity() {
        let config = ProjectConfig::from_value(json!({ "base": "/x/" })).unwrap();
        let same = config.clone().materialize_profile(None).unwrap();
        assert_eq!(config, same);
    }

    #[test]
    fn plugin_profile_overrides_apply() {
        let config = ProjectConfig::from_value(json!({
            "plugins": [
                {
                    "name": "vue-devtools",
                    "profiles": { "production": { "enabled": false } }
                },
                { "name": "vue", "options": { "isProduction": false } }
            ]
        }))
        .unwrap()
        .materialize_profile(Some("production"))
        .unwrap();

        assert!(!config.options.plugins[0].enabled);
        assert!(config.options.plugins[0].profiles.contains_key("production"));
        assert!(config.options.plugins[1].enabled);
    }

    #[test]
    fn invalid_override_type_is_reported() {
        let result = ProjectConfig::from_value(json!({
            "profiles": { "broken": { "entries": "not-a-map" } }
        }))
        .unwrap()
        .materialize_profile(Some("broken"));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidProfileOverride { .. })
        ));
    }

    #[test]
    fn merge_replaces_arrays() {
        let mut target = json!({ "a": [1, 2, 3], "b": { "c": 1, "d": 2 } });
        merge_values(&mut target, &json!({ "a": [4], "b": { "d": 5 } }));
        assert_eq!(target, json!({ "a": [4], "b": { "c": 1, "d": 5 } }));
    }
}
