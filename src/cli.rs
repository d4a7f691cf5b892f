//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::core::file_reader::{read_line, FileReadConfig};
use crate::core::model::{GotoError, ResultItem, ResultSet, Stage};
use crate::core::paths::{config_path, make_relative, normalize_path, resolve_against};
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::resolve::config::{self, SearchConfig};
use crate::resolve::extract::{extract, Reference};
use crate::resolve::host::{goto_file, GotoOutcome, Host};
use crate::resolve::report::{ConsoleReporter, Level, Reporter};
use crate::resolve::search::search;

/// goto-file - jump from a filename mentioned in text to the file itself.
#[derive(Parser, Debug)]
#[command(name = "goto-file")]
#[command(
    author,
    version,
    about,
    long_about = r#"goto-file finds the first `name.ext` token in a line of text and resolves it
to an absolute path inside the project.

Search roots come from an optional TOML file (default: .goto-file.toml under ROOT):

    prefixes = ["src", "lib", "/opt/shared"]

Prefixes are searched strictly in declared order; the first match wins. Without a
usable config, ROOT itself is searched.

Examples:
    goto-file goto --line "see utils.ts and helper.js"
    goto-file goto --file notes.md --line-number 12 --column 8
    echo "open config.json" | goto-file goto --print
    goto-file search src main.rs
    goto-file config
"#
)]
pub struct Cli {
    /// Project root directory.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Project root directory (defaults to the current directory).\n\n\
Used as the fallback search root, as the base for relative prefixes, and as the\n\
base for a relative --config path."
    )]
    pub root: PathBuf,

    /// Config file location (relative to ROOT unless absolute).
    #[arg(
        long,
        global = true,
        env = "GOTO_FILE_CONFIG",
        value_name = "PATH",
        long_help = "Location of the search-prefix config. Relative paths are joined to ROOT.\n\n\
Defaults to .goto-file.toml."
    )]
    pub config: Option<PathBuf>,

    /// Output format (jsonl/json/md/raw).
    #[arg(long, global = true, default_value = "jsonl", value_name = "FORMAT")]
    pub format: String,

    /// Disable colored notices.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress informational notices.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr.
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug logging on stderr. RUST_LOG is honoured when this flag is absent."
    )]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the file mentioned on a line and emit its path.
    #[command(
        long_about = "Extract the first filename token from a line, resolve it against the\n\
configured prefixes (or ROOT), and emit the absolute path.\n\n\
The line comes from --line, from --file/--line-number, or from the first line of stdin.\n\
A line without a filename token is a silent no-op. An unresolved token is reported and\n\
the command exits with status 1.\n\n\
Examples:\n\
  goto-file goto --line \"see utils.ts\"\n\
  goto-file goto --file README.md --line-number 3 --column 10\n"
    )]
    Goto {
        /// Line of text to read the reference from.
        #[arg(long, value_name = "TEXT", conflicts_with = "file")]
        line: Option<String>,

        /// Document to take the line from (relative to ROOT unless absolute).
        #[arg(long, value_name = "FILE", requires = "line_number")]
        file: Option<PathBuf>,

        /// 1-indexed line number within --file.
        #[arg(long, value_name = "N", requires = "file")]
        line_number: Option<usize>,

        /// 0-indexed cursor column; no word at this column makes the command a no-op.
        #[arg(long, value_name = "N")]
        column: Option<usize>,

        /// Print only the bare resolved path.
        #[arg(long)]
        print: bool,
    },

    /// Extract the filename token from a line without searching.
    Extract {
        /// Line of text (reads the first line of stdin when omitted).
        #[arg(long, value_name = "TEXT")]
        line: Option<String>,
    },

    /// Search one directory tree for a file with an exact name.
    Search {
        /// Directory to search (relative to ROOT unless absolute).
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Exact file name to look for.
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Show the search roots the config resolves to.
    Config,
}

/// Host backed by command-line arguments
struct CommandLineHost {
    line: Option<String>,
    column: Option<usize>,
    root: PathBuf,
    config: Option<PathBuf>,
    reporter: ConsoleReporter,
}

impl Reporter for CommandLineHost {
    fn report(&self, level: Level, message: &str) {
        self.reporter.report(level, message);
    }
}

impl Host for CommandLineHost {
    fn active_line_text(&self) -> Option<String> {
        self.line.clone()
    }

    fn cursor_column(&self) -> Option<usize> {
        self.column
    }

    fn workspace_root(&self) -> Option<PathBuf> {
        Some(self.root.clone())
    }

    fn config_override_path(&self) -> Option<PathBuf> {
        self.config.clone()
    }

    // The resolved path is emitted by `run_goto`; opening it is the caller's job
    fn open_path(&self, path: &Path) -> Result<()> {
        tracing::debug!(path = %path.display(), "emitting resolved path");
        Ok(())
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<ExitCode> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let renderer = Renderer::with_config(RenderConfig::with_pretty(format, cli.pretty));
    let reporter = ConsoleReporter::new(cli.quiet);

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    match cli.command {
        Commands::Goto {
            line,
            file,
            line_number,
            column,
            print,
        } => {
            let line = match (line, file, line_number) {
                (Some(line), _, _) => Some(line),
                (None, Some(file), Some(number)) => {
                    document_line(&resolve_against(&root, file), number, &reporter)
                }
                _ => stdin_line()?,
            };
            let host = CommandLineHost {
                line,
                column,
                root,
                config: cli.config,
                reporter,
            };
            run_goto(&host, &renderer, print)
        }

        Commands::Extract { line } => {
            let line = match line {
                Some(line) => Some(line),
                None => stdin_line()?,
            };
            let result_set: ResultSet = line
                .as_deref()
                .and_then(extract)
                .map(|r| ResultItem::reference(r.as_str()))
                .into_iter()
                .collect();
            renderer.print(&result_set);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Search { dir, name } => {
            let reference = Reference::new(name.as_str()).with_context(|| {
                format!("invalid file name {:?}: must not be empty or contain separators", name)
            })?;
            let result_set: ResultSet = search(&resolve_against(&root, dir), &reference)
                .map(|path| file_item(&path, &root, Stage::Search))
                .into_iter()
                .collect();
            renderer.print(&result_set);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Config => {
            let path = config_path(&root, cli.config.as_deref());
            let result_set = config_items(&path, &root, &reporter)?;
            renderer.print(&result_set);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_goto(host: &CommandLineHost, renderer: &Renderer, print: bool) -> Result<ExitCode> {
    match goto_file(host)? {
        GotoOutcome::Opened { reference, path } => {
            if print {
                println!("{}", path.display());
            } else {
                let item =
                    file_item(&path, &host.root, Stage::Resolve).with_text(reference.as_str());
                renderer.print(&ResultSet::from_iter([item]));
            }
            Ok(ExitCode::SUCCESS)
        }
        GotoOutcome::NotFound(reference) => {
            if !print {
                let item = ResultItem::error(
                    GotoError::new("NOT_FOUND", format!("File not found: {}", reference)),
                    Stage::Resolve,
                )
                .with_text(reference.as_str());
                renderer.print(&ResultSet::from_iter([item]));
            }
            Ok(ExitCode::FAILURE)
        }
        GotoOutcome::NoWorkspace => Ok(ExitCode::FAILURE),
        GotoOutcome::NoActiveLine | GotoOutcome::NoWordAtCursor | GotoOutcome::NoReference => {
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn file_item(path: &Path, root: &Path, stage: Stage) -> ResultItem {
    ResultItem::file(normalize_path(path), stage).with_relative(make_relative(path, root))
}

fn config_items(path: &Path, root: &Path, reporter: &dyn Reporter) -> Result<ResultSet> {
    let search_config = config::load(path, reporter)?;

    let result_set = match search_config {
        SearchConfig::Prefixes(prefixes) => prefixes
            .iter()
            .map(|prefix| {
                let dir = resolve_against(root, prefix);
                ResultItem::prefix(prefix.as_str()).with_path(normalize_path(&dir))
            })
            .collect(),
        SearchConfig::DefaultRoot(reason) => {
            ResultSet::from_iter([ResultItem::fallback(reason.as_str(), normalize_path(root))])
        }
    };

    Ok(result_set)
}

fn document_line(path: &Path, line_number: usize, reporter: &dyn Reporter) -> Option<String> {
    let result = read_line(path, line_number, &FileReadConfig::default());
    for warning in &result.warnings {
        reporter.report(
            Level::Warning,
            &format!("{}: {}", warning.code.as_str(), warning.message),
        );
    }
    if let Some(reason) = &result.skip_reason {
        reporter.report(Level::Warning, reason);
    }
    result.line
}

fn stdin_line() -> Result<Option<String>> {
    let stdin = std::io::stdin();
    let line = stdin
        .lock()
        .lines()
        .next()
        .transpose()
        .context("failed to read line from stdin")?;
    Ok(line)
}
