use std::fmt;

/// Severity of a diagnostic message, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// DiagnosticSink port for reporting diagnostics from the filtering core
///
/// Injected by the caller. The core never writes to a global logger; every
/// fallback, omission and skipped candidate is reported through this port.
/// Implementations must be `Send + Sync` so one sink can serve concurrent
/// filter requests.
pub trait DiagnosticSink: Send + Sync {
    /// Records a message at the given level
    fn log(&self, level: LogLevel, message: &str);

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn log(&self, level: LogLevel, message: &str) {
        (**self).log(level, message);
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<T> {
    fn log(&self, level: LogLevel, message: &str) {
        (**self).log(level, message);
    }
}

/// Sink that discards every message
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnosticSink;

impl DiagnosticSink for NullDiagnosticSink {
    fn log(&self, _level: LogLevel, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        entries: Mutex<Vec<(LogLevel, String)>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn log(&self, level: LogLevel, message: &str) {
            self.entries.lock().unwrap().push((level, message.to_string()));
        }
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_convenience_methods_forward_level() {
        let sink = RecordingSink::default();
        sink.debug("d");
        sink.warn("w");
        sink.error("e");

        let entries = sink.entries.lock().unwrap();
        assert_eq!(entries[0], (LogLevel::Debug, "d".to_string()));
        assert_eq!(entries[1], (LogLevel::Warning, "w".to_string()));
        assert_eq!(entries[2], (LogLevel::Error, "e".to_string()));
    }

    #[test]
    fn test_reference_forwards() {
        let sink = RecordingSink::default();
        let by_ref: &dyn DiagnosticSink = &sink;
        by_ref.info("hello");
        assert_eq!(sink.entries.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_null_sink_is_silent() {
        NullDiagnosticSink.error("ignored");
    }
}
