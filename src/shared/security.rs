use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of any input file (config, candidate list): 10 MB
pub const MAX_INPUT_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Rejects symbolic links
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Reads a small text input file after validating it
///
/// The path must be a regular file (not a symlink or directory) no larger
/// than [`MAX_INPUT_FILE_SIZE`].
pub fn read_input_file(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not allowed for {}.",
            path.display(),
            file_description
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > MAX_INPUT_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_INPUT_FILE_SIZE
        );
    }

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}
