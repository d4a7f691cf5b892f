//! Renderer module
//!
//! Renders ResultSet to different output formats: jsonl, json, md, raw

use crate::core::model::{Kind, ResultItem, ResultSet};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
            OutputFormat::Raw => self.render_raw(result_set),
        }
    }

    /// Print a result set to stdout, skipping empty sets entirely
    pub fn print(&self, result_set: &ResultSet) {
        if result_set.is_empty() && self.config.format != OutputFormat::Json {
            return;
        }
        println!("{}", self.render(result_set));
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        let mut files = Vec::new();
        let mut references = Vec::new();
        let mut config = Vec::new();
        let mut errors = Vec::new();

        for item in &result_set.items {
            match item.kind {
                Kind::File => files.push(item),
                Kind::Reference => references.push(item),
                Kind::Prefix | Kind::Fallback => config.push(item),
                Kind::Error => errors.push(item),
            }
        }

        if !errors.is_empty() {
            output.push_str("## Errors\n\n");
            for item in errors {
                for error in &item.errors {
                    output.push_str(&format!("- **{}**: {}\n", error.code, error.message));
                }
            }
            output.push('\n');
        }

        if !references.is_empty() {
            output.push_str("## References\n\n");
            for item in references {
                if let Some(text) = &item.text {
                    output.push_str(&format!("- `{}`\n", text));
                }
            }
            output.push('\n');
        }

        if !config.is_empty() {
            output.push_str("## Search Roots\n\n");
            for (index, item) in config.into_iter().enumerate() {
                self.render_config_md(&mut output, index + 1, item);
            }
            output.push('\n');
        }

        if !files.is_empty() {
            output.push_str("## Files\n\n");
            for item in files {
                if let Some(path) = &item.path {
                    output.push_str(&format!("- `{}`", path));
                    if let Some(relative) = &item.relative {
                        output.push_str(&format!(" ({})", relative));
                    }
                    output.push('\n');
                }
            }
            output.push('\n');
        }

        output
    }

    fn render_config_md(&self, output: &mut String, position: usize, item: &ResultItem) {
        match item.kind {
            Kind::Fallback => {
                output.push_str(&format!(
                    "- default root `{}` ({})\n",
                    item.path.as_deref().unwrap_or("."),
                    item.text.as_deref().unwrap_or("fallback")
                ));
            }
            _ => {
                if let Some(text) = &item.text {
                    output.push_str(&format!("{}. `{}`\n", position, text));
                }
            }
        }
    }

    /// Render as raw output: one bare value per line
    fn render_raw(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| match item.kind {
                Kind::File | Kind::Fallback => item.path.clone(),
                Kind::Reference | Kind::Prefix => item.text.clone(),
                Kind::Error => item.errors.first().map(|e| e.message.clone()),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
