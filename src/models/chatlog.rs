use std::collections::BTreeMap;

use serde::Serialize;

use super::timestamp::Timestamp;

/// Header key holding the session start time, after key normalization
pub const SESSION_STARTED_KEY: &str = "sessionStarted";

/// Metadata fields from the header block of a chat log.
///
/// Keys are normalized to lower camel case. The `sessionStarted` entry holds the
/// normalized timestamp string; its typed form is available via
/// [`ChatLogHeader::session_started`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChatLogHeader {
    fields: BTreeMap<String, String>,
    #[serde(skip)]
    session_started: Option<Timestamp>,
}

impl ChatLogHeader {
    pub fn new(fields: BTreeMap<String, String>, session_started: Option<Timestamp>) -> Self {
        Self { fields, session_started }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn session_started(&self) -> Option<&Timestamp> {
        self.session_started.as_ref()
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    pub timestamp: Timestamp,
    pub sender: String,
    pub text: String,
}

/// Everything decoded from one chat log buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub header: ChatLogHeader,
    pub messages: Vec<MessageRecord>,
    /// Total length of the input buffer, usable as a resume offset
    pub byte_length: usize,
}
