//! Reference extraction
//!
//! Pulls the first `name.ext`-shaped token out of a line of text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::ops::Range;

/// Word characters or hyphens, a dot, then word characters.
///
/// Matching is leftmost-first, so `archive.tar.gz` yields `archive.tar`.
/// `\w` is the Unicode word class, so `naïve.txt` is taken whole.
pub static REFERENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[\w-]+\.\w+\b").expect("Invalid REFERENCE_RE regex"));

/// A bare filename token, never containing a path separator
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference(String);

impl Reference {
    /// Build a reference from user input, rejecting empty names and paths
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() || token.contains(['/', '\\']) {
            return None;
        }
        Some(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the first filename-like token from a line
pub fn extract(line: &str) -> Option<Reference> {
    let token = REFERENCE_RE.find(line)?.as_str();
    tracing::debug!(token, "extracted reference");
    Some(Reference(token.to_string()))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

/// Byte range of the word touching `column` (a 0-indexed char offset).
///
/// A cursor sitting just past the last character of a word still touches it.
pub fn word_at(line: &str, column: usize) -> Option<Range<usize>> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    if column > chars.len() {
        return None;
    }

    let anchor = if chars.get(column).is_some_and(|&(_, c)| is_word_char(c)) {
        column
    } else if column > 0 && is_word_char(chars[column - 1].1) {
        column - 1
    } else {
        return None;
    };

    let mut start = anchor;
    while start > 0 && is_word_char(chars[start - 1].1) {
        start -= 1;
    }
    let mut end = anchor + 1;
    while end < chars.len() && is_word_char(chars[end].1) {
        end += 1;
    }

    let byte_end = chars.get(end).map(|&(i, _)| i).unwrap_or(line.len());
    Some(chars[start].0..byte_end)
}
