use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::warn;
use walkdir::WalkDir;

use crate::utils::is_chat_log_file;

/// Maximum number of chat logs to index (prevents resource exhaustion)
const MAX_LOG_FILES: usize = 10_000;

/// Find every chat log file under `log_dir`, sorted by path
///
/// Symlinks are not followed and unreadable entries are logged and skipped.
///
/// # Errors
///
/// Returns an error if:
/// - `log_dir` does not exist or is not a directory
/// - More than [`MAX_LOG_FILES`] (10000) chat logs are found
pub fn discover_chat_logs(log_dir: &Path) -> Result<Vec<PathBuf>> {
    if !log_dir.is_dir() {
        bail!("Chat log directory not found: {}", log_dir.display());
    }

    let mut logs = Vec::new();

    for entry in WalkDir::new(log_dir).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", log_dir.display(), e);
                continue;
            }
        };

        // Symlinks report their own file type here, so they are skipped as well
        if !entry.file_type().is_file() || !is_chat_log_file(entry.path()) {
            continue;
        }

        if logs.len() >= MAX_LOG_FILES {
            bail!(
                "Resource limit exceeded: Found more than {} chat logs under {}",
                MAX_LOG_FILES,
                log_dir.display()
            );
        }
        logs.push(entry.into_path());
    }

    logs.sort();
    Ok(logs)
}
