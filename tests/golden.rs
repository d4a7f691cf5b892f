//! Golden tests for goto-file
//!
//! Runs the binary against the checked-in sample project and pins the
//! resolved paths, so ordering and fallback behavior cannot drift silently.

use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the sample project
fn sample_project() -> PathBuf {
    fixtures_dir().join("sample_project")
}

fn goto_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("goto-file"));
    cmd.env_remove("GOTO_FILE_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--no-color")
        .arg("--root")
        .arg(sample_project());
    cmd
}

/// Parse JSONL output into a vector of JSON values
fn parse_jsonl(output: &str) -> Vec<Value> {
    output
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str::<Value>(l).ok())
        .collect()
}

/// Drop the absolute path, which depends on where the repo is checked out
fn normalize_item(mut item: Value) -> Value {
    if let Some(obj) = item.as_object_mut() {
        obj.remove("path");
    }
    item
}

fn goto_notes_line(line_number: usize) -> (Option<i32>, Vec<Value>) {
    let output = goto_cmd()
        .args(["goto", "--file", "docs/notes.md", "--line-number"])
        .arg(line_number.to_string())
        .output()
        .expect("Failed to execute goto-file");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let items = parse_jsonl(&stdout)
        .into_iter()
        .map(normalize_item)
        .collect();
    (output.status.code(), items)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Goto Tests ====================

    #[test]
    fn test_golden_goto_first_prefix() {
        let (code, items) = goto_notes_line(3);
        assert_eq!(code, Some(0));
        assert_eq!(
            items,
            vec![serde_json::json!({
                "kind": "file",
                "relative": "src/app/config.json",
                "text": "config.json",
                "stage": "resolve"
            })]
        );
    }

    #[test]
    fn test_golden_goto_second_prefix() {
        let (code, items) = goto_notes_line(4);
        assert_eq!(code, Some(0));
        assert_eq!(items[0]["relative"], "lib/helpers/format-date.ts");
    }

    #[test]
    fn test_golden_goto_skips_missing_prefix() {
        let (code, items) = goto_notes_line(5);
        assert_eq!(code, Some(0));
        assert_eq!(items[0]["relative"], "vendor/lib/vendored.rs");
    }

    #[test]
    fn test_golden_goto_outside_prefixes_not_found() {
        // docs/ holds the file but is not a configured prefix
        let (code, items) = goto_notes_line(6);
        assert_eq!(code, Some(1));
        assert_eq!(
            items,
            vec![serde_json::json!({
                "kind": "error",
                "text": "notes.md",
                "stage": "resolve",
                "errors": [{ "code": "NOT_FOUND", "message": "File not found: notes.md" }]
            })]
        );
    }

    #[test]
    fn test_golden_goto_heading_is_noop() {
        let (code, items) = goto_notes_line(1);
        assert_eq!(code, Some(0));
        assert!(items.is_empty());
    }

    // ==================== Config Tests ====================

    #[test]
    fn test_golden_config() {
        let output = goto_cmd().arg("config").output().unwrap();
        assert!(output.status.success());

        let items: Vec<Value> = parse_jsonl(&String::from_utf8_lossy(&output.stdout))
            .into_iter()
            .map(normalize_item)
            .collect();
        let expected: Vec<Value> = ["src", "lib", "missing", "vendor"]
            .iter()
            .map(|p| serde_json::json!({ "kind": "prefix", "text": p, "stage": "config" }))
            .collect();
        assert_eq!(items, expected);
    }

    #[test]
    fn test_golden_config_json_format() {
        let output = goto_cmd()
            .args(["--format", "json", "config"])
            .output()
            .unwrap();
        let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(parsed.as_array().map(|a| a.len()), Some(4));
    }

    // ==================== Search Tests ====================

    #[test]
    fn test_golden_search_whole_project() {
        let output = goto_cmd()
            .args(["--format", "raw", "search", "lib", "config.json"])
            .output()
            .unwrap();
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.trim_end().ends_with("lib/config.json"));
    }
}
