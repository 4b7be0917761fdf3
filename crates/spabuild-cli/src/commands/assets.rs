//! Assets command implementation.
//!
//! Reads the bundler manifest from the output directory and prints the
//! URLs a page needs to load one entry.

use spabuild_config::{EntryAssets, Manifest};
use tracing::debug;

use crate::cli::{AssetsArgs, AssetsFormat};
use crate::commands::utils;
use crate::error::Result;

/// Execute the assets command.
///
/// # Errors
///
/// Returns `ConfigError::ManifestNotFound` when the bundler has not written
/// a manifest yet, `ConfigError::UnknownEntry` for an undeclared entry name,
/// and `ConfigError::ManifestEntryNotFound` when the manifest has no chunk
/// for the entry.
pub fn execute(args: AssetsArgs) -> Result<()> {
    let config = utils::resolve_project(&args.project)?;
    let manifest = Manifest::load_for(&config)?;
    debug!(chunks = manifest.len(), "manifest loaded");

    let assets = manifest.entry_assets(&config, &args.entry)?;

    match args.format {
        AssetsFormat::Html => println!("{}", render_html(&assets)),
        AssetsFormat::Json => println!("{}", serde_json::to_string_pretty(&assets)?),
    }

    Ok(())
}

/// Tags for a page head: stylesheets, module preloads, then the entry script.
fn render_html(assets: &EntryAssets) -> String {
    let mut tags = Vec::with_capacity(assets.styles.len() + assets.preloads.len() + 1);

    for href in &assets.styles {
        tags.push(format!(r#"<link rel="stylesheet" href="{href}">"#));
    }
    for href in &assets.preloads {
        tags.push(format!(r#"<link rel="modulepreload" href="{href}">"#));
    }
    tags.push(format!(
        r#"<script type="module" src="{}"></script>"#,
        assets.script
    ));

    tags.join("\n")
}
