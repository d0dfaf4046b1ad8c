use depfilter::prelude::*;

/// Mock DiagnosticSink for testing that captures messages
#[derive(Default, Clone)]
pub struct MockDiagnosticSink {
    pub messages: std::sync::Arc<std::sync::Mutex<Vec<(LogLevel, String)>>>,
}

impl MockDiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|(level, message)| format!("{}: {}", level, message))
            .collect()
    }

    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl DiagnosticSink for MockDiagnosticSink {
    fn log(&self, level: LogLevel, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}
