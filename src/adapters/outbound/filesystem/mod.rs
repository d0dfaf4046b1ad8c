/// Filesystem adapters for file I/O operations
mod config_settings_source;
mod file_reader;
mod file_writer;

pub use config_settings_source::ConfigSettingsSource;
pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
