use std::path::PathBuf;

use serde::Serialize;

use super::chatlog::MessageRecord;

/// A message collected from a directory of chat logs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedMessage {
    pub source_file: PathBuf,
    pub channel_name: Option<String>,
    #[serde(flatten)]
    pub message: MessageRecord,
}

/// Messages from every readable log in a directory, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatLogIndex {
    pub messages: Vec<IndexedMessage>,
    pub files_parsed: usize,
    pub files_failed: usize,
}

impl ChatLogIndex {
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
