//! Path normalization utilities
//!
//! Output paths use '/' as separator; config paths and search prefixes are
//! interpreted relative to the project root unless absolute.

use std::path::{Path, PathBuf};

/// Default location of the search-prefix configuration, relative to the root
pub const DEFAULT_CONFIG_FILE: &str = ".goto-file.toml";

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Resolve a possibly-relative path against the project root.
///
/// Absolute inputs are returned unchanged.
pub fn resolve_against(root: &Path, path: impl AsRef<Path>) -> PathBuf {
    root.join(path)
}

/// Absolute path of the config file, honouring a user override
pub fn config_path(root: &Path, override_path: Option<&Path>) -> PathBuf {
    resolve_against(root, override_path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE)))
}
