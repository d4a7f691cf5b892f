//! Search-prefix configuration
//!
//! Reads the optional project config (TOML) holding an ordered `prefixes`
//! list. Every problem short of an unreadable file degrades to searching the
//! project root.
//!
//! ```toml
//! prefixes = ["src", "lib", "/opt/shared"]
//! ```

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::resolve::report::{Level, Reporter};

/// Key holding the ordered prefix list
pub const PREFIXES_KEY: &str = "prefixes";

/// Why the configured prefixes were not used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No config file at the expected path
    Missing,
    /// The file is not valid TOML
    Malformed,
    /// Valid TOML without a non-empty list of prefix strings
    NoPrefixes,
}

impl FallbackReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::Missing => "missing",
            FallbackReason::Malformed => "malformed",
            FallbackReason::NoPrefixes => "no_prefixes",
        }
    }
}

/// Parsed search configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchConfig {
    /// Prefixes in declared order, unvalidated
    Prefixes(Vec<String>),
    /// Search only the project root
    DefaultRoot(FallbackReason),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid TOML in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parse config text into its prefix list.
///
/// `Ok(None)` means the document parsed but has no usable `prefixes` list.
/// An empty `prefixes = []` counts as unusable, so the caller searches the
/// project root instead of searching nothing.
pub fn parse_prefixes(content: &str) -> Result<Option<Vec<String>>, toml::de::Error> {
    let table: toml::Table = content.parse()?;

    let Some(toml::Value::Array(values)) = table.get(PREFIXES_KEY) else {
        return Ok(None);
    };

    let prefixes: Option<Vec<String>> = values
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect();

    Ok(prefixes.filter(|p| !p.is_empty()))
}

/// Load the search configuration at `path`.
///
/// A missing file emits an info notice; a syntax error emits an error notice.
/// Both fall back to the default root. Only an existing file that cannot be
/// read is returned as an error.
pub fn load(path: &Path, reporter: &dyn Reporter) -> Result<SearchConfig, ConfigError> {
    debug!(path = %path.display(), "loading config");

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            reporter.report(
                Level::Info,
                "Configuration file not found. Searching in workspace root.",
            );
            return Ok(SearchConfig::DefaultRoot(FallbackReason::Missing));
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    match parse_prefixes(&content) {
        Ok(Some(prefixes)) => {
            debug!(?prefixes, "parsed config");
            Ok(SearchConfig::Prefixes(prefixes))
        }
        Ok(None) => {
            debug!("no valid prefixes in config, using workspace root");
            Ok(SearchConfig::DefaultRoot(FallbackReason::NoPrefixes))
        }
        Err(source) => {
            let err = ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            };
            reporter.report(Level::Error, &err.to_string());
            Ok(SearchConfig::DefaultRoot(FallbackReason::Malformed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::report::MemoryReporter;
    use std::fs;
    use tempfile::tempdir;

    fn load_str(content: &str) -> (SearchConfig, MemoryReporter) {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".goto-file.toml");
        fs::write(&path, content).unwrap();
        let reporter = MemoryReporter::new();
        let config = load(&path, &reporter).unwrap();
        (config, reporter)
    }

    #[test]
    fn test_load_prefixes_in_order() {
        let (config, reporter) = load_str(r#"prefixes = ["src", "/opt/lib", "vendor"]"#);
        assert_eq!(
            config,
            SearchConfig::Prefixes(vec![
                "src".to_string(),
                "/opt/lib".to_string(),
                "vendor".to_string()
            ])
        );
        assert!(reporter.notices().is_empty());
    }

    #[test]
    fn test_load_ignores_other_keys() {
        let (config, _) = load_str("name = \"demo\"\nprefixes = [\"a\"]\n\n[extra]\nx = 1\n");
        assert_eq!(config, SearchConfig::Prefixes(vec!["a".to_string()]));
    }

    #[test]
    fn test_load_missing_file_is_info() {
        let temp = tempdir().unwrap();
        let reporter = MemoryReporter::new();
        let config = load(&temp.path().join("absent.toml"), &reporter).unwrap();

        assert_eq!(config, SearchConfig::DefaultRoot(FallbackReason::Missing));
        assert_eq!(reporter.at(Level::Info).len(), 1);
        assert!(reporter.at(Level::Error).is_empty());
    }

    #[test]
    fn test_load_malformed_reports_error() {
        let (config, reporter) = load_str("prefixes = [\"src\"");
        assert_eq!(config, SearchConfig::DefaultRoot(FallbackReason::Malformed));

        let errors = reporter.at(Level::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("invalid TOML"));
    }

    #[test]
    fn test_load_missing_key_is_silent() {
        let (config, reporter) = load_str("roots = [\"src\"]");
        assert_eq!(config, SearchConfig::DefaultRoot(FallbackReason::NoPrefixes));
        assert!(reporter.notices().is_empty());
    }

    #[test]
    fn test_load_wrong_shapes_fall_back() {
        for content in [
            "prefixes = \"src\"",
            "prefixes = [1, 2]",
            "prefixes = [\"src\", 3]",
            "prefixes = []",
            "[prefixes]\nsrc = true",
        ] {
            let (config, reporter) = load_str(content);
            assert_eq!(
                config,
                SearchConfig::DefaultRoot(FallbackReason::NoPrefixes),
                "content: {content}"
            );
            assert!(reporter.notices().is_empty());
        }
    }

    #[test]
    fn test_load_unreadable_is_error() {
        let temp = tempdir().unwrap();
        // a directory where the file should be
        let path = temp.path().join(".goto-file.toml");
        fs::create_dir(&path).unwrap();

        let reporter = MemoryReporter::new();
        let err = load(&path, &reporter).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("cannot read config"));
    }

    #[test]
    fn test_parse_prefixes_empty_document() {
        assert_eq!(parse_prefixes("").unwrap(), None);
    }

    #[test]
    fn test_fallback_reason_as_str() {
        assert_eq!(FallbackReason::Missing.as_str(), "missing");
        assert_eq!(FallbackReason::Malformed.as_str(), "malformed");
        assert_eq!(FallbackReason::NoPrefixes.as_str(), "no_prefixes");
    }
}
