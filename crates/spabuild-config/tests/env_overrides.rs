//! Environment overrides for project files.
//!
//! Every test runs inside a `figment::Jail` so environment changes never leak
//! between tests.

use figment::Jail;
use spabuild_config::ConfigDiscovery;
use std::path::PathBuf;

#[test]
fn env_overrides_file_values() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "spabuild.toml",
            r#"
base = "/from-file/"

[build]
out_dir = "build"
manifest = "manifest.json"
"#,
        )?;
        jail.set_env("SPABUILD_BASE", "/from-env/");
        jail.set_env("SPABUILD_BUILD__OUT_DIR", "dist");

        let config = ConfigDiscovery::new(jail.directory()).load().unwrap();
        assert_eq!(config.options.base, "/from-env/");
        assert_eq!(config.options.build.out_dir, PathBuf::from("dist"));
        assert_eq!(config.options.build.manifest, "manifest.json");
        Ok(())
    });
}

#[test]
fn env_overrides_package_json_values() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "package.json",
            r#"{ "spabuild": { "build": { "manifest": "assets.json" } } }"#,
        )?;
        jail.set_env("SPABUILD_BUILD__MANIFEST", "bundle-manifest.json");

        let config = ConfigDiscovery::new(jail.directory()).load().unwrap();
        assert_eq!(config.options.build.manifest, "bundle-manifest.json");
        Ok(())
    });
}

#[test]
fn env_can_set_global_settings() {
    Jail::expect_with(|jail| {
        jail.create_file("spabuild.toml", "")?;
        jail.set_env("SPABUILD_SETTINGS__LOG_LEVEL", "debug");

        let config = ConfigDiscovery::new(jail.directory()).load().unwrap();
        assert_eq!(config.settings.log_level.as_deref(), Some("debug"));
        Ok(())
    });
}

#[test]
fn resolved_paths_follow_env_override() {
    Jail::expect_with(|jail| {
        jail.create_file("spabuild.toml", "")?;
        jail.set_env("SPABUILD_BUILD__OUT_DIR", "public/bundles");

        let root = jail.directory().to_path_buf();
        let config = ConfigDiscovery::new(&root).resolve(None).unwrap();
        assert_eq!(
            config.build().output_directory(),
            root.join("public/bundles")
        );
        Ok(())
    });
}

#[test]
fn env_beats_profile_overrides() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "spabuild.toml",
            r#"
base = "/file/"

[build]
out_dir = "build"

[profiles.production]
base = "/prof/"

[profiles.production.build]
out_dir = "dist"
manifest = "prod-manifest.json"
"#,
        )?;
        jail.set_env("SPABUILD_BASE", "/env/");
        jail.set_env("SPABUILD_BUILD__OUT_DIR", "public");

        let root = jail.directory().to_path_buf();
        let config = ConfigDiscovery::new(&root)
            .resolve(Some("production"))
            .unwrap();

        assert_eq!(config.base(), "/env/");
        assert_eq!(config.build().output_directory(), root.join("public"));
        // Keys the environment leaves alone still come from the profile.
        assert_eq!(config.build().manifest_file_name(), "prod-manifest.json");
        Ok(())
    });
}

#[test]
fn profile_applies_without_env() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "spabuild.toml",
            r#"
base = "/file/"

[profiles.production]
base = "/prof/"
"#,
        )?;

        let config = ConfigDiscovery::new(jail.directory())
            .load_with_profile("production")
            .unwrap();
        assert_eq!(config.options.base, "/prof/");
        assert!(config.profiles.contains_key("production"));
        Ok(())
    });
}

#[test]
fn numeric_env_values_set_path_and_string_fields() {
    Jail::expect_with(|jail| {
        jail.create_file("spabuild.toml", "")?;
        jail.set_env("SPABUILD_BUILD__OUT_DIR", "2024");
        jail.set_env("SPABUILD_BUILD__MANIFEST", "42");
        jail.set_env("SPABUILD_ENTRIES__MAIN", "7");

        let config = ConfigDiscovery::new(jail.directory()).load().unwrap();
        assert_eq!(config.options.build.out_dir, PathBuf::from("2024"));
        assert_eq!(config.options.build.manifest, "42");
        assert_eq!(config.options.entries["main"], PathBuf::from("7"));
        Ok(())
    });
}
