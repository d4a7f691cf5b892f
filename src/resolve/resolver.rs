//! File resolution
//!
//! Loads the search config, then walks the configured prefixes strictly in
//! declared order (or the project root alone on fallback) and returns the
//! first match.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::paths::resolve_against;
use crate::resolve::config::{self, FallbackReason, SearchConfig};
use crate::resolve::extract::Reference;
use crate::resolve::report::{Level, Reporter};
use crate::resolve::search::search;

/// Outcome of one resolution request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// First matching file, if any
    pub found: Option<PathBuf>,

    /// Roots searched, in order, up to and including the one that matched
    pub searched: Vec<PathBuf>,

    /// Set when the default root was used instead of configured prefixes
    pub fallback: Option<FallbackReason>,
}

/// Resolves references against a project tree
pub struct FileResolver<'a> {
    reporter: &'a dyn Reporter,
}

impl<'a> FileResolver<'a> {
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        Self { reporter }
    }

    /// Resolve `reference` to an absolute path, or `None` when not found
    pub fn resolve(
        &self,
        reference: &Reference,
        project_root: &Path,
        config_path: &Path,
    ) -> Option<PathBuf> {
        let resolution = self.resolve_detailed(reference, project_root, config_path);
        debug!(
            searched = resolution.searched.len(),
            fallback = ?resolution.fallback,
            "resolution finished"
        );
        resolution.found
    }

    /// Resolve and record which roots were visited.
    ///
    /// Never fails: an unreadable config is reported and resolves to nothing.
    pub fn resolve_detailed(
        &self,
        reference: &Reference,
        project_root: &Path,
        config_path: &Path,
    ) -> Resolution {
        let search_config = match config::load(config_path, self.reporter) {
            Ok(c) => c,
            Err(err) => {
                self.reporter
                    .report(Level::Error, &format!("Error reading config: {}", err));
                return Resolution::default();
            }
        };

        let (roots, fallback): (Vec<PathBuf>, Option<FallbackReason>) = match search_config {
            SearchConfig::DefaultRoot(reason) => {
                debug!(reason = reason.as_str(), "falling back to workspace root");
                (vec![project_root.to_path_buf()], Some(reason))
            }
            SearchConfig::Prefixes(prefixes) => (
                prefixes
                    .iter()
                    .map(|p| resolve_against(project_root, p))
                    .collect(),
                None,
            ),
        };

        let mut resolution = Resolution {
            fallback,
            ..Resolution::default()
        };

        for root in roots {
            debug!(prefix = %root.display(), "searching in prefix");
            let found = search(&root, reference);
            resolution.searched.push(root);
            if found.is_some() {
                resolution.found = found;
                return resolution;
            }
        }

        debug!(reference = %reference, "file not found in any search root");
        resolution
    }
}
