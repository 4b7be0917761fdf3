//! Build configuration for single-page application bundles.
//!
//! Raw [`ConfigOptions`] (from a project file or code) are resolved into an
//! immutable [`BuildConfiguration`] whose paths are all absolute, ready to be
//! handed to the bundler.

pub mod config;
pub mod discovery;
pub mod error;
pub mod manifest;
pub mod options;
pub mod paths;
pub mod plugin;
pub mod resolve;
pub mod settings;
pub mod validation;

mod helpers;

// Re-export main types
pub use config::*;
pub use error::*;
pub use options::*;
pub use plugin::{PluginHandle, PluginOptions};
pub use resolve::{BuildConfiguration, BuildOptions};
pub use settings::*;

// Re-export discovery, validation, and manifest entry points
pub use discovery::{discover, discover_with_profile, ConfigDiscovery};
pub use manifest::{EntryAssets, Manifest, ManifestChunk};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
