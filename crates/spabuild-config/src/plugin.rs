//! Plugin declarations and the opaque handles handed to the bundler.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::helpers::{default_true, is_null};

/// A plugin as declared in the project file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions {
    /// Name the bundler knows the plugin by (e.g. `vue`)
    pub name: String,

    /// Module specifier providing the plugin factory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Plugin-specific options forwarded to the factory untouched
    #[serde(default, skip_serializing_if = "is_null")]
    pub options: Value,

    /// Whether the plugin should be handed to the bundler
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Profile-specific overrides for this plugin
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub profiles: HashMap<String, Value>,
}

impl PluginOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            options: Value::Null,
            enabled: true,
            profiles: HashMap::new(),
        }
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = options;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub(crate) fn to_handle(&self) -> PluginHandle {
        PluginHandle {
            name: self.name.clone(),
            package: self.package.clone(),
            options: self.options.clone(),
        }
    }
}

/// Resolved plugin reference. Nothing here interprets it; the bundler does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginHandle {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    package: Option<String>,
    #[serde(skip_serializing_if = "is_null")]
    options: Value,
}

impl PluginHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn options(&self) -> &Value {
        &self.options
    }
}

pub(crate) fn default_plugins() -> Vec<PluginOptions> {
    vec![
        PluginOptions::new("vue").with_package("@vitejs/plugin-vue"),
        PluginOptions::new("vue-devtools").with_package("vite-plugin-vue-devtools"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_applies_defaults() {
        let plugin: PluginOptions = serde_json::from_value(json!({ "name": "vue" })).unwrap();
        assert_eq!(plugin.name, "vue");
        assert!(plugin.enabled);
        assert!(plugin.package.is_none());
        assert!(plugin.options.is_null());
        assert!(plugin.profiles.is_empty());
    }

    #[test]
    fn handle_keeps_options_verbatim() {
        let plugin = PluginOptions::new("legacy")
            .with_package("@vitejs/plugin-legacy")
            .with_options(json!({ "targets": ["defaults", "not IE 11"] }));

        let handle = plugin.to_handle();
        assert_eq!(handle.name(), "legacy");
        assert_eq!(handle.package(), Some("@vitejs/plugin-legacy"));
        assert_eq!(handle.options()["targets"][1], json!("not IE 11"));
    }

    #[test]
    fn handle_serialization_skips_empty_fields() {
        let handle = PluginOptions::new("vue").to_handle();
        assert_eq!(serde_json::to_value(&handle).unwrap(), json!({ "name": "vue" }));
    }
}
