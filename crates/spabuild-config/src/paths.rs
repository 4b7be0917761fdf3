//! Path helpers used while resolving a configuration.
//!
//! All helpers are lexical: they never touch the filesystem, so resolution
//! stays deterministic and works for directories that do not exist yet
//! (e.g. an output directory before the first build).

use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Resolve `path` against `root` and normalize `.`/`..` components.
///
/// Absolute inputs keep their location and are only cleaned.
///
/// # Example
///
/// ```
/// use spabuild_config::paths::absolutize;
/// use std::path::{Path, PathBuf};
///
/// let resolved = absolutize(Path::new("/proj"), Path::new("./src/../build"));
/// assert_eq!(resolved, PathBuf::from("/proj/build"));
/// ```
pub fn absolutize(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        root.join(path).clean()
    }
}

/// Normalize a public base path so it starts and ends with `/`.
///
/// An empty or whitespace-only base becomes `/`.
///
/// # Example
///
/// ```
/// use spabuild_config::paths::normalize_base;
///
/// assert_eq!(normalize_base("static/vite"), "/static/vite/");
/// assert_eq!(normalize_base(""), "/");
/// ```
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim();
    if trimmed.is_empty() || trimmed == "/" {
        return "/".to_string();
    }

    let mut normalized = String::with_capacity(trimmed.len() + 2);
    if !trimmed.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(trimmed);
    if !trimmed.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

/// Whether `path` is `dir` itself or lies underneath it (component-wise).
pub fn is_within(path: &Path, dir: &Path) -> bool {
    path.starts_with(dir)
}
