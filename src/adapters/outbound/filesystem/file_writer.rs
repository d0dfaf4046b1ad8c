use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ResolutionError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing output to files
///
/// Refuses to write through a symbolic link or into a missing directory.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> anyhow::Error {
        ResolutionError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }

    fn validate(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(self.write_error(format!(
                    "Parent directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        if fs::symlink_metadata(&self.output_path).is_ok() {
            validate_not_symlink(&self.output_path, "write")
                .map_err(|e| self.write_error(e.to_string()))?;
        }

        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate()?;

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;

        eprintln!("✅ Output written: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("components.txt");

        FileSystemWriter::new(output_path.clone())
            .present("Core\n")
            .unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "Core\n");
    }

    #[test]
    fn test_file_writer_overwrites_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("components.txt");
        fs::write(&output_path, "old").unwrap();

        FileSystemWriter::new(output_path.clone())
            .present("new")
            .unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "new");
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let writer = FileSystemWriter::new(PathBuf::from("/nonexistent/directory/out.txt"));
        let err = writer.present("Core\n").unwrap_err();
        assert!(err.to_string().contains("Parent directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.txt");
        let link = temp_dir.path().join("link.txt");
        fs::write(&target, "keep").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = FileSystemWriter::new(link).present("Core\n").unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep");
    }

    #[test]
    fn test_stdout_presenter_success() {
        assert!(StdoutPresenter::new().present("").is_ok());
    }
}
