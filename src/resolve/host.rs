//! Host capabilities and the goto command flow
//!
//! The flow depends only on [`Host`], so an editor integration, the CLI, and
//! tests can each supply their own implementation.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::paths::config_path;
use crate::resolve::extract::{extract, word_at, Reference};
use crate::resolve::report::{Level, Reporter};
use crate::resolve::resolver::FileResolver;

/// What a host must provide to run the goto flow
pub trait Host: Reporter {
    /// Text of the line under the cursor
    fn active_line_text(&self) -> Option<String>;

    /// Cursor column (0-indexed chars) within the active line, when known
    fn cursor_column(&self) -> Option<usize> {
        None
    }

    /// Project root directory
    fn workspace_root(&self) -> Option<PathBuf>;

    /// User override for the config location, relative to the root unless absolute
    fn config_override_path(&self) -> Option<PathBuf>;

    /// Show the resolved file to the user
    fn open_path(&self, path: &Path) -> Result<()>;
}

/// How a goto request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GotoOutcome {
    NoActiveLine,
    NoWordAtCursor,
    NoReference,
    NoWorkspace,
    Opened { reference: Reference, path: PathBuf },
    NotFound(Reference),
}

/// Run the user-triggered lookup: line → reference → path → open.
///
/// Only a failure of the host's own open action is returned as an error.
pub fn goto_file<H: Host>(host: &H) -> Result<GotoOutcome> {
    let Some(line) = host.active_line_text() else {
        debug!("no active line");
        return Ok(GotoOutcome::NoActiveLine);
    };
    debug!(line = %line, "current line text");

    if let Some(column) = host.cursor_column() {
        if word_at(&line, column).is_none() {
            debug!(column, "no word found at cursor position");
            return Ok(GotoOutcome::NoWordAtCursor);
        }
    }

    let Some(reference) = extract(&line) else {
        debug!("no file reference could be extracted from the line");
        return Ok(GotoOutcome::NoReference);
    };

    let Some(root) = host.workspace_root() else {
        host.report(Level::Warning, "No workspace root available.");
        return Ok(GotoOutcome::NoWorkspace);
    };

    let config = config_path(&root, host.config_override_path().as_deref());
    debug!(root = %root.display(), config = %config.display(), "resolving");

    match FileResolver::new(host).resolve(&reference, &root, &config) {
        Some(path) => {
            host.open_path(&path)?;
            debug!(path = %path.display(), "opened file");
            Ok(GotoOutcome::Opened { reference, path })
        }
        None => {
            host.report(Level::Error, &format!("File not found: {}", reference));
            Ok(GotoOutcome::NotFound(reference))
        }
    }
}
