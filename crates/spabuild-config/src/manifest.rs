//! Reading the manifest the bundler writes into the output directory.
//!
//! The manifest maps source keys (root-relative source paths, or `_`-prefixed
//! names for shared chunks) to the hashed files the bundler emitted. Servers
//! use it to turn an entry name into the URLs of its script, stylesheets, and
//! preloadable imports.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::resolve::BuildConfiguration;

/// One emitted chunk or asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestChunk {
    /// Output file, relative to the output directory
    pub file: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub is_entry: bool,

    #[serde(default)]
    pub is_dynamic_entry: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub css: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<String>,

    /// Keys of statically imported chunks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dynamic_imports: Vec<String>,
}

/// Parsed bundler manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    chunks: IndexMap<String, ManifestChunk>,
}

/// URLs needed to load one entry in a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryAssets {
    pub script: String,
    pub styles: Vec<String>,
    pub preloads: Vec<String>,
}

impl Manifest {
    /// Read the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ConfigError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), "reading manifest");
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Read the manifest the given configuration points at.
    pub fn load_for(config: &BuildConfiguration) -> Result<Self> {
        Self::load(&config.manifest_path())
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::InvalidValue {
            field: "manifest".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn chunk(&self, key: &str) -> Option<&ManifestChunk> {
        self.chunks.get(key)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Entry chunks, in manifest order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ManifestChunk)> {
        self.chunks
            .iter()
            .filter(|(_, chunk)| chunk.is_entry)
            .map(|(key, chunk)| (key.as_str(), chunk))
    }

    /// Locate the chunk built from the configured entry `name`.
    ///
    /// A chunk matches when its source path (`src`, or the key when `src` is
    /// absent) is a path suffix of the entry's absolute source file. The
    /// longest match wins.
    pub fn entry_chunk(
        &self,
        config: &BuildConfiguration,
        name: &str,
    ) -> Result<(&str, &ManifestChunk)> {
        let entry = config.entry(name).ok_or_else(|| ConfigError::UnknownEntry {
            name: name.to_string(),
        })?;

        self.entries()
            .filter_map(|(key, chunk)| {
                let src = Path::new(chunk.src.as_deref().unwrap_or(key));
                let depth = src.components().count();
                (depth > 0 && entry.ends_with(src)).then_some((depth, key, chunk))
            })
            .max_by_key(|(depth, _, _)| *depth)
            .map(|(_, key, chunk)| (key, chunk))
            .ok_or_else(|| ConfigError::ManifestEntryNotFound {
                entry: name.to_string(),
            })
    }

    /// Script, stylesheet, and preload URLs for the entry `name`.
    ///
    /// Stylesheets include those of statically imported chunks, transitively;
    /// each URL appears once, in first-seen order.
    pub fn entry_assets(&self, config: &BuildConfiguration, name: &str) -> Result<EntryAssets> {
        let (key, chunk) = self.entry_chunk(config, name)?;

        let mut assets = EntryAssets {
            script: asset_url(config.base(), &chunk.file),
            styles: Vec::new(),
            preloads: Vec::new(),
        };

        let mut visited = HashSet::from([key]);
        self.collect_imports(config.base(), chunk, &mut visited, &mut assets);

        Ok(assets)
    }

    fn collect_imports<'a>(
        &'a self,
        base: &str,
        chunk: &'a ManifestChunk,
        visited: &mut HashSet<&'a str>,
        assets: &mut EntryAssets,
    ) {
        for css in &chunk.css {
            push_unique(&mut assets.styles, asset_url(base, css));
        }

        for import in &chunk.imports {
            if !visited.insert(import.as_str()) {
                continue;
            }
            let Some(imported) = self.chunks.get(import) else {
                debug!(import = %import, "manifest import has no chunk");
                continue;
            };
            push_unique(&mut assets.preloads, asset_url(base, &imported.file));
            self.collect_imports(base, imported, visited, assets);
        }
    }
}

/// URL of an emitted file under the public base path.
///
/// # Example
///
/// ```
/// use spabuild_config::manifest::asset_url;
///
/// assert_eq!(asset_url("/static/vite/", "assets/main-4f2a.js"), "/static/vite/assets/main-4f2a.js");
/// ```
pub fn asset_url(base: &str, file: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        file.trim_start_matches('/')
    )
}

fn push_unique(list: &mut Vec<String>, url: String) {
    if !list.contains(&url) {
        list.push(url);
    }
}
