//! Document reading for the CLI host
//!
//! Stands in for the editor's "active document": reads one line of a file,
//! handling non-UTF-8, binary, and oversized inputs consistently.

use std::fs;
use std::path::Path;

/// Default maximum document size in bytes (16 MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Configuration for document reading
#[derive(Debug, Clone, Copy)]
pub struct FileReadConfig {
    pub max_file_size: u64,
}

impl Default for FileReadConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Warning codes for document reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    LossyConversion,
    BinaryFile,
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::LossyConversion => "LOSSY_CONVERSION",
            WarningCode::BinaryFile => "BINARY_FILE",
        }
    }
}

/// A structured, non-fatal warning
#[derive(Debug, Clone)]
pub struct FileWarning {
    pub code: WarningCode,
    pub message: String,
}

impl FileWarning {
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Result of reading a document line
#[derive(Debug, Clone, Default)]
pub struct LineReadResult {
    /// The requested line, without its terminator
    pub line: Option<String>,

    pub warnings: Vec<FileWarning>,

    /// Why no line was produced
    pub skip_reason: Option<String>,
}

impl LineReadResult {
    fn skipped(reason: impl Into<String>) -> Self {
        Self {
            line: None,
            warnings: Vec::new(),
            skip_reason: Some(reason.into()),
        }
    }
}

/// Read line `line_number` (1-indexed) of a document
pub fn read_line(path: &Path, line_number: usize, config: &FileReadConfig) -> LineReadResult {
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) => return LineReadResult::skipped(format!("Cannot read metadata: {}", e)),
    };

    if metadata.len() > config.max_file_size {
        return LineReadResult::skipped(format!(
            "File size {} exceeds limit {}",
            metadata.len(),
            config.max_file_size
        ));
    }

    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => return LineReadResult::skipped(format!("Cannot read file: {}", e)),
    };

    let mut warnings = Vec::new();

    // Null bytes in the first 8KB mark the document as binary
    let check_len = std::cmp::min(8192, bytes.len());
    if bytes[..check_len].contains(&0) {
        warnings.push(FileWarning::new(
            WarningCode::BinaryFile,
            format!("{} appears to be binary (contains null bytes)", path.display()),
        ));
    }

    // Invalid UTF-8 is replaced with U+FFFD
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(err) => {
            warnings.push(FileWarning::new(
                WarningCode::LossyConversion,
                format!("{} is not valid UTF-8; invalid bytes replaced", path.display()),
            ));
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };

    if line_number == 0 {
        return LineReadResult {
            warnings,
            ..LineReadResult::skipped("Line numbers start at 1")
        };
    }

    match content.lines().nth(line_number - 1) {
        Some(line) => LineReadResult {
            line: Some(line.to_string()),
            warnings,
            skip_reason: None,
        },
        None => LineReadResult {
            warnings,
            ..LineReadResult::skipped(format!("{} has no line {}", path.display(), line_number))
        },
    }
}
