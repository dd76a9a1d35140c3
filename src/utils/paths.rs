use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum chat log size: 64MB
const MAX_FILE_SIZE_BYTES: u64 = 64 * 1024 * 1024;

const CHAT_LOG_EXTENSION: &str = "txt";

/// Validates that a file's size is within acceptable limits (64MB)
///
/// Takes an open file handle so the size check and the subsequent read see the
/// same file.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 64MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<u64> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(file_size)
}

/// Returns true if the path looks like a chat log (`.txt`, any case)
pub fn is_chat_log_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CHAT_LOG_EXTENSION))
}
