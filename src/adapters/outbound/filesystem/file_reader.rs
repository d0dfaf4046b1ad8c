use crate::shared::error::ResolutionError;
use crate::shared::security::read_input_file;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading candidate lists
///
/// A candidate list holds one component name per line. Blank lines and lines
/// starting with `#` are skipped; surrounding whitespace is trimmed.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_candidate_list(&self, path: &Path) -> Result<Vec<String>> {
        let content = read_input_file(path, "candidate list").map_err(|e| {
            ResolutionError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        Ok(parse_candidate_list(&content))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_candidate_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
