//! Index builder for a directory of chat logs.
//!
//! # Error Handling Strategy
//!
//! - **File-level errors**: Logs that cannot be read or do not follow the chat log
//!   layout are reported with `tracing::warn!` and skipped, so one stray `.txt` file
//!   does not hide the rest of the directory.
//! - **Failure threshold**: Indexing fails if more than 50% of the discovered files
//!   fail, which usually means the directory is not a chat log directory at all.
//! - **Line-level errors**: Handled by the parser itself (skipped lines, unparseable
//!   timestamps) and never surface here.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::indexer::discovery::discover_chat_logs;
use crate::models::{ChatLogIndex, IndexedMessage, ParseOptions, ParseResult};
use crate::parsers::parse_chat_log_file;

const CHANNEL_NAME_KEY: &str = "channelName";

/// Build a unified, newest-first index of every message under `log_dir`
///
/// Files are parsed in parallel. Messages with unparseable timestamps sort after
/// all dated messages; ties keep file and line order.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be walked (see [`discover_chat_logs`])
/// - More than 50% of the discovered chat logs fail to parse
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use chatlog_explorer::build_index;
///
/// let index = build_index(&PathBuf::from("/home/pilot/logs/Chatlogs"))?;
/// println!("Indexed {} messages", index.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_index(log_dir: &Path) -> Result<ChatLogIndex> {
    let files = discover_chat_logs(log_dir)?;
    let options = ParseOptions::default();

    let outcomes: Vec<(PathBuf, Result<ParseResult>)> = files
        .into_par_iter()
        .map(|path| {
            let outcome = parse_chat_log_file(&path, &options);
            (path, outcome)
        })
        .collect();

    let mut index = ChatLogIndex::default();

    for (path, outcome) in outcomes {
        match outcome {
            Ok(parsed) => {
                index.files_parsed += 1;
                let channel_name = parsed.header.get(CHANNEL_NAME_KEY).map(str::to_string);
                index.messages.extend(parsed.messages.into_iter().map(|message| IndexedMessage {
                    source_file: path.clone(),
                    channel_name: channel_name.clone(),
                    message,
                }));
            }
            Err(e) => {
                index.files_failed += 1;
                warn!("Skipping chat log {}: {:#}", path.display(), e);
            }
        }
    }

    let total_files = index.files_parsed + index.files_failed;
    if total_files > 0 {
        let failure_rate = index.files_failed as f64 / total_files as f64;
        if failure_rate > 0.5 {
            bail!(
                "Index building failed: {}/{} chat logs failed to parse ({}% failure rate)",
                index.files_failed,
                total_files,
                (failure_rate * 100.0) as u32
            );
        }
    }

    info!(
        "Indexed {} messages ({} chat logs parsed, {} failed)",
        index.messages.len(),
        index.files_parsed,
        index.files_failed
    );

    // Newest first; `None` (unparseable) orders below every instant
    index.messages.sort_by(|a, b| {
        b.message.timestamp.as_datetime().cmp(&a.message.timestamp.as_datetime())
    });

    Ok(index)
}
