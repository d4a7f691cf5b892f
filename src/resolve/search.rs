//! Directory search
//!
//! Depth-first walk of one root directory looking for a file whose base name
//! equals the reference exactly. The first hit in listing order wins.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::resolve::extract::Reference;

/// Search `root` recursively for a file named `target`.
///
/// Unreadable or missing directories yield nothing for that subtree; siblings
/// are still visited. A `root` that is not a directory finds nothing.
pub fn search(root: &Path, target: &Reference) -> Option<PathBuf> {
    debug!(root = %root.display(), target = %target, "searching directory");

    let walker = WalkDir::new(root).min_depth(1).follow_links(true);

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        // walkdir descends into directories on its own, right after yielding them
        if entry.file_type().is_dir() {
            debug!(dir = %entry.path().display(), "recursing into directory");
            continue;
        }

        if entry.file_name() == target.as_str() {
            let found = absolute(entry.path());
            debug!(path = %found.display(), "found matching file");
            return Some(found);
        }
    }

    None
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
