/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (settings stores, version control,
/// console, output destinations).
pub mod diagnostic_sink;
pub mod formatter;
pub mod output_presenter;
pub mod settings_source;
pub mod version_control_client;

pub use diagnostic_sink::{DiagnosticSink, LogLevel, NullDiagnosticSink};
pub use formatter::ResultFormatter;
pub use output_presenter::OutputPresenter;
pub use settings_source::{SettingsSource, StaticSettingsSource};
pub use version_control_client::{Revision, VersionControlClient};
