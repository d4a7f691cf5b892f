//! Unified Result Model
//!
//! Every subcommand maps its outcome to this model before rendering output.

use serde::{Deserialize, Serialize};

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// A resolved file path
    File,
    /// A filename token extracted from a line of text
    Reference,
    /// A configured search prefix
    Prefix,
    /// The configuration degraded to the default root
    Fallback,
    Error,
}

/// Which stage of the lookup produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Extract,
    Config,
    Search,
    Resolve,
}

/// Error information for a result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GotoError {
    pub code: String,
    pub message: String,
}

impl GotoError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The unified result item that all commands produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    pub kind: Kind,

    /// Absolute path, using '/' as separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Path relative to the project root, when the path lies under it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative: Option<String>,

    /// Extracted reference, prefix string, or fallback reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    pub stage: Stage,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GotoError>,
}

impl ResultItem {
    fn bare(kind: Kind, stage: Stage) -> Self {
        Self {
            kind,
            path: None,
            relative: None,
            text: None,
            stage,
            errors: Vec::new(),
        }
    }

    /// Create a file result
    pub fn file(path: impl Into<String>, stage: Stage) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::bare(Kind::File, stage)
        }
    }

    /// Create an extracted-reference result
    pub fn reference(token: impl Into<String>) -> Self {
        Self {
            text: Some(token.into()),
            ..Self::bare(Kind::Reference, Stage::Extract)
        }
    }

    /// Create a configured-prefix result
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self {
            text: Some(prefix.into()),
            ..Self::bare(Kind::Prefix, Stage::Config)
        }
    }

    /// Create a fallback result carrying the reason and the root searched instead
    pub fn fallback(reason: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            text: Some(reason.into()),
            path: Some(root.into()),
            ..Self::bare(Kind::Fallback, Stage::Config)
        }
    }

    /// Create an error result
    pub fn error(error: GotoError, stage: Stage) -> Self {
        Self {
            errors: vec![error],
            ..Self::bare(Kind::Error, stage)
        }
    }

    /// Set the absolute path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the root-relative path
    pub fn with_relative(mut self, relative: Option<String>) -> Self {
        self.relative = relative;
        self
    }

    /// Set the text payload
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// A collection of result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_item_file() {
        let item = ResultItem::file("/project/src/main.rs", Stage::Resolve);
        assert_eq!(item.kind, Kind::File);
        assert_eq!(item.path, Some("/project/src/main.rs".to_string()));
        assert!(item.text.is_none());
    }

    #[test]
    fn test_result_item_reference() {
        let item = ResultItem::reference("utils.ts");
        assert_eq!(item.kind, Kind::Reference);
        assert_eq!(item.stage, Stage::Extract);
        assert_eq!(item.text.as_deref(), Some("utils.ts"));
    }

    #[test]
    fn test_result_item_fallback() {
        let item = ResultItem::fallback("missing", "/project");
        assert_eq!(item.kind, Kind::Fallback);
        assert_eq!(item.text.as_deref(), Some("missing"));
        assert_eq!(item.path.as_deref(), Some("/project"));
    }

    #[test]
    fn test_result_item_error() {
        let item = ResultItem::error(GotoError::new("NOT_FOUND", "File not found"), Stage::Resolve);
        assert_eq!(item.kind, Kind::Error);
        assert_eq!(item.errors.len(), 1);
        assert_eq!(item.errors[0].code, "NOT_FOUND");
    }

    #[test]
    fn test_with_relative_and_text() {
        let item = ResultItem::file("/p/a.rs", Stage::Search)
            .with_relative(Some("a.rs".to_string()))
            .with_text("a.rs");
        assert_eq!(item.relative.as_deref(), Some("a.rs"));
        assert_eq!(item.text.as_deref(), Some("a.rs"));
    }

    #[test]
    fn test_kind_serialization() {
        let item = ResultItem::prefix("src");
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"kind\":\"prefix\""));
        assert!(json.contains("\"stage\":\"config\""));
        assert!(!json.contains("\"path\""));
        assert!(!json.contains("\"errors\""));
    }

    #[test]
    fn test_result_item_deserialization() {
        let json = r#"{"kind":"file","path":"/p/x.rs","stage":"search"}"#;
        let item: ResultItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, Kind::File);
        assert_eq!(item.stage, Stage::Search);
        assert!(item.errors.is_empty());
    }

    #[test]
    fn test_result_set_from_iter() {
        let set: ResultSet = vec![ResultItem::prefix("a"), ResultItem::prefix("b")]
            .into_iter()
            .collect();
        assert_eq!(set.items.len(), 2);
        assert!(!set.is_empty());
    }
}
