//! Error types for configuration loading, resolution, and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Resolution errors
    #[error("root directory must be absolute: {}", path.display())]
    RelativeRoot { path: PathBuf },

    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    // Schema validation errors (no filesystem checks)
    #[error("no entries specified")]
    NoEntries,

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Filesystem validation errors (for CLI use)
    #[error("entry path not found: {}", path.display())]
    EntryNotFound { path: PathBuf },

    #[error("alias '{alias}' points to a missing directory: {}", path.display())]
    AliasTargetNotFound { alias: String, path: PathBuf },

    #[error("output path exists but is not a directory: {}", path.display())]
    OutputNotDirectory { path: PathBuf },

    // Manifest errors
    #[error("manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("no entry named '{name}' is configured")]
    UnknownEntry { name: String },

    #[error("entry '{entry}' is not present in the manifest")]
    ManifestEntryNotFound { entry: String },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Actionable hint attached to the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidValue { hint, .. } | ConfigError::SchemaValidation { hint, .. } => {
                hint.as_deref()
            }
            ConfigError::NotFound => Some("Create a spabuild.toml file or run 'spabuild init'"),
            ConfigError::NoEntries => Some("Declare at least one entry under [entries]"),
            ConfigError::ManifestNotFound { .. } => {
                Some("Run the bundler first so it writes the manifest into the output directory")
            }
            _ => None,
        }
    }
}
