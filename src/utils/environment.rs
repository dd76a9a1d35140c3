use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Environment variable naming the default chat log directory
pub const LOG_DIR_ENV: &str = "CHATLOG_DIR";

/// Get the default chat log directory from `CHATLOG_DIR`
pub fn get_log_dir() -> Result<PathBuf> {
    let dir = env::var(LOG_DIR_ENV)
        .with_context(|| format!("{LOG_DIR_ENV} environment variable not set"))?;
    if dir.trim().is_empty() {
        bail!("{LOG_DIR_ENV} environment variable is empty");
    }
    Ok(PathBuf::from(dir))
}
