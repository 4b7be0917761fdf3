//! Shared project loading for the commands that read a project file.

use std::fs;
use std::path::{Path, PathBuf};

use spabuild_config::{BuildConfiguration, ConfigDiscovery, ConfigError, ProjectConfig};
use tracing::{debug, warn};

use crate::cli::{Command, ProjectArgs};
use crate::error::{CliError, Result};

/// Find the project file selected by `args`.
///
/// With `--config`, the file's directory is the project root. Otherwise the
/// root directory is searched for `spabuild.toml`, then `package.json`.
///
/// # Errors
///
/// Returns `CliError::FileNotFound` for a missing `--config` file or root
/// directory, and `ConfigError::NotFound` when the root has no project file.
pub fn locate(args: &ProjectArgs) -> Result<(ConfigDiscovery, PathBuf)> {
    if let Some(file) = &args.config {
        if !file.is_file() {
            return Err(CliError::FileNotFound(file.clone()));
        }
        let root = file
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        return Ok((ConfigDiscovery::new(root), file.clone()));
    }

    if !args.root.is_dir() {
        return Err(CliError::FileNotFound(args.root.clone()));
    }

    let discovery = ConfigDiscovery::new(&args.root);
    let path = discovery.find().ok_or(ConfigError::NotFound)?;
    Ok((discovery, path))
}

/// Load the project file and apply the selected profile.
pub fn load_project(args: &ProjectArgs) -> Result<(ConfigDiscovery, ProjectConfig)> {
    let (discovery, path) = locate(args)?;
    let project = discovery.load_profile_from(&path, args.profile.as_deref())?;

    if let Some(profile) = &args.profile {
        if !project.profiles.contains_key(profile) {
            warn!(profile = %profile, "profile is not declared, using base values");
        }
    }

    Ok((discovery, project))
}

/// Load, apply the profile, and resolve against the project root.
pub fn resolve_project(args: &ProjectArgs) -> Result<BuildConfiguration> {
    let (discovery, project) = load_project(args)?;
    let config = discovery.resolve_project(&project)?;
    debug!(base = config.base(), entries = config.entry_points().len(), "resolved project");
    Ok(config)
}

/// `settings.log_level` of the project the command will load, if any.
///
/// Runs before logging is initialized, so failures are ignored here; the
/// command itself reports them.
pub fn configured_log_level(command: &Command) -> Option<String> {
    let args = command.project()?;
    let (discovery, path) = locate(args).ok()?;
    discovery
        .load_profile_from(&path, args.profile.as_deref())
        .ok()?
        .settings
        .log_level
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
