//! Tests for default values and edge cases.

use spabuild_config::{
    BuildSection, ConfigOptions, GlobalSettings, PluginOptions, ProjectConfig,
};
use std::path::PathBuf;

#[test]
fn config_options_defaults() {
    let opts = ConfigOptions::default();
    assert_eq!(opts.base, "/static/vite/");
    assert_eq!(opts.alias.len(), 1);
    assert_eq!(opts.alias["@"], PathBuf::from("src"));
    assert_eq!(opts.entries.len(), 1);
    assert_eq!(opts.entries["main"], PathBuf::from("src/main.js"));
    assert_eq!(opts.build.manifest, "manifest.json");
    assert_eq!(opts.build.out_dir, PathBuf::from("build"));
}

#[test]
fn default_plugins_in_order() {
    let opts = ConfigOptions::default();
    let plugins: Vec<_> = opts
        .plugins
        .iter()
        .map(|p| (p.name.as_str(), p.package.as_deref()))
        .collect();

    assert_eq!(
        plugins,
        vec![
            ("vue", Some("@vitejs/plugin-vue")),
            ("vue-devtools", Some("vite-plugin-vue-devtools")),
        ]
    );
    assert!(opts.plugins.iter().all(|p| p.enabled));
}

#[test]
fn empty_options_have_no_implicit_entries() {
    let opts = ConfigOptions::empty();
    assert!(opts.plugins.is_empty());
    assert!(opts.alias.is_empty());
    assert!(opts.entries.is_empty());
    assert_eq!(opts.build, BuildSection::default());
}

#[test]
fn project_config_defaults() {
    let config = ProjectConfig::default();
    assert_eq!(config.options, ConfigOptions::default());
    assert!(config.profiles.is_empty());
    assert_eq!(config.settings, GlobalSettings::default());
}

#[test]
fn global_settings_defaults() {
    let settings = GlobalSettings::default();
    assert!(settings.log_level.is_none());
}

#[test]
fn empty_profiles_map() {
    let config = ProjectConfig::default();
    let result = config.materialize_profile(Some("nonexistent"));
    assert!(result.is_ok());
    assert_eq!(result.unwrap().options, ConfigOptions::default());
}

#[test]
fn disabled_plugin_parses_from_toml() {
    let config = ProjectConfig::from_toml(
        r#"
[[plugins]]
name = "vue"
enabled = false
"#,
    )
    .unwrap();

    assert_eq!(config.options.plugins, vec![PluginOptions::new("vue").disabled()]);
}
