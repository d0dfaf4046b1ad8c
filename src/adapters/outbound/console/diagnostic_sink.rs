use crate::ports::outbound::{DiagnosticSink, LogLevel};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// StderrDiagnosticSink adapter writing diagnostics to stderr
///
/// Messages below `min_level` are dropped. Level tags are colored only when
/// stderr is a terminal, so redirected output stays plain.
#[derive(Debug, Clone, Copy)]
pub struct StderrDiagnosticSink {
    min_level: LogLevel,
    colored: bool,
}

impl StderrDiagnosticSink {
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            min_level,
            colored: std::io::stderr().is_terminal(),
        }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn render(&self, level: LogLevel, message: &str) -> String {
        let tag = match level {
            LogLevel::Debug => "debug:",
            LogLevel::Info => "info:",
            LogLevel::Warning => "⚠️  warning:",
            LogLevel::Error => "❌ error:",
        };

        if !self.colored {
            return format!("{} {}", tag, message);
        }

        let tag = match level {
            LogLevel::Debug => tag.dimmed().to_string(),
            LogLevel::Info => tag.cyan().to_string(),
            LogLevel::Warning => tag.yellow().bold().to_string(),
            LogLevel::Error => tag.red().bold().to_string(),
        };
        format!("{} {}", tag, message)
    }
}

impl Default for StderrDiagnosticSink {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl DiagnosticSink for StderrDiagnosticSink {
    fn log(&self, level: LogLevel, message: &str) {
        if self.enabled(level) {
            eprintln!("{}", self.render(level, message));
        }
    }
}
