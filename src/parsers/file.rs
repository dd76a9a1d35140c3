use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::{ParseOptions, ParseResult};
use crate::parsers::chatlog::parse_chat_log;
use crate::utils::validate_file_size;

/// Read a chat log from disk and parse it
///
/// The core [`ParseError`](crate::ParseError) is kept as the error source, so callers
/// can still `downcast_ref` it out of the returned `anyhow::Error`.
pub fn parse_chat_log_file(path: &Path, options: &ParseOptions) -> Result<ParseResult> {
    // Open once and validate the same handle that gets read
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open chat log: {}", path.display()))?;
    let file_size = validate_file_size(&file, path)?;

    let mut buffer = Vec::with_capacity(usize::try_from(file_size).unwrap_or_default());
    file.read_to_end(&mut buffer)
        .with_context(|| format!("Failed to read chat log: {}", path.display()))?;

    debug!(path = %path.display(), bytes = buffer.len(), "read chat log");

    parse_chat_log(&buffer, options)
        .with_context(|| format!("Failed to parse chat log: {}", path.display()))
}
