//! Reporting channel
//!
//! User-facing notices are categorized messages, kept apart from tracing
//! diagnostics. The host decides how they are presented.

use colored::Colorize;

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

/// A single categorized message
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

/// Sink for user-facing notices
pub trait Reporter {
    fn report(&self, level: Level, message: &str);
}

/// Prints notices to stderr, one per line
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter {
    /// Drop informational notices
    pub quiet: bool,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn format(level: Level, message: &str) -> String {
        let label = match level {
            Level::Info => level.as_str().cyan(),
            Level::Warning => level.as_str().yellow().bold(),
            Level::Error => level.as_str().red().bold(),
        };
        format!("{}: {}", label, message)
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, level: Level, message: &str) {
        if self.quiet && level == Level::Info {
            return;
        }
        eprintln!("{}", Self::format(level, message));
    }
}

/// Collects notices in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryReporter {
    notices: std::cell::RefCell<Vec<Notice>>,
}

#[cfg(test)]
impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn at(&self, level: Level) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .filter(|n| n.level == level)
            .map(|n| n.message.clone())
            .collect()
    }
}

#[cfg(test)]
impl Reporter for MemoryReporter {
    fn report(&self, level: Level, message: &str) {
        self.notices.borrow_mut().push(Notice {
            level,
            message: message.to_string(),
        });
    }
}
