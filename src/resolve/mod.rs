//! Resolve module - Turns a line of text into an absolute file path
//!
//! Provides:
//! - extract: filename token extraction from a line
//! - search: depth-first search of one root directory
//! - config: optional search-prefix configuration
//! - resolver: prefix-ordered resolution with default-root fallback
//! - report: user-facing notice channel
//! - host: the capabilities a host (editor, CLI) supplies, and the goto flow

pub mod config;
pub mod extract;
pub mod host;
pub mod report;
pub mod resolver;
pub mod search;
