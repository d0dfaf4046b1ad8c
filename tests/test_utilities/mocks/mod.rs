/// Mock implementations for testing
mod mock_diagnostic_sink;
mod mock_settings_source;
mod mock_version_control_client;

pub use mock_diagnostic_sink::MockDiagnosticSink;
pub use mock_settings_source::MockSettingsSource;
pub use mock_version_control_client::MockVersionControlClient;
