//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const MAGIC: [u8; 16] = [
    0xFF, 0xFE, 0x0D, 0x00, 0x0A, 0x00, 0x0D, 0x00, 0x0A, 0x00, 0x0A, 0x00, 0x20, 0x00, 0x20, 0x00,
];

/// Encode text as UTF-16LE without a byte order mark
pub fn utf16(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Builder for chat log buffers laid out the way the game client writes them
pub struct ChatLogBuilder {
    header: Vec<String>,
    messages: Vec<String>,
    dashes: usize,
    line_ending: &'static str,
}

impl ChatLogBuilder {
    pub fn new() -> Self {
        Self { header: Vec::new(), messages: Vec::new(), dashes: 65, line_ending: "\r\n" }
    }

    /// A header with the fields a real channel log carries
    pub fn local_channel() -> Self {
        Self::new()
            .header_line("Channel ID:      local")
            .header_line("Channel Name:    Local")
            .header_line("Listener:        Some Pilot")
            .header_line("Session started: 2020.01.02 03:04:05")
    }

    pub fn header_line(mut self, line: &str) -> Self {
        self.header.push(line.to_string());
        self
    }

    /// Add a message line with a bracketed timestamp column
    pub fn message(self, timestamp: &str, sender: &str, text: &str) -> Self {
        let line = format!("[ {timestamp} ] {sender} > {text}");
        self.raw_line(&line)
    }

    /// Add a line to the message region verbatim
    pub fn raw_line(mut self, line: &str) -> Self {
        self.messages.push(line.to_string());
        self
    }

    pub fn dashes(mut self, dashes: usize) -> Self {
        self.dashes = dashes;
        self
    }

    pub fn line_ending(mut self, line_ending: &'static str) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Encode only the message lines, for appending to an existing log
    pub fn message_bytes(&self) -> Vec<u8> {
        let mut text = String::new();
        for line in &self.messages {
            text.push_str(line);
            text.push_str(self.line_ending);
        }
        utf16(&text)
    }

    pub fn build(&self) -> Vec<u8> {
        let eol = self.line_ending;
        let row = "-".repeat(self.dashes);

        let mut text = format!("      {row}{eol}{eol}");
        for line in &self.header {
            text.push_str(&format!("          {line}{eol}"));
        }
        text.push_str(&format!("      {row}{eol}{eol}{eol}"));

        let mut buffer = MAGIC.to_vec();
        buffer.extend(utf16(&text));
        buffer.extend(self.message_bytes());
        buffer
    }
}

/// Temporary directory holding chat log files
pub struct LogDirBuilder {
    temp_dir: TempDir,
}

impl LogDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file relative to the directory root, creating parent directories
    pub fn with_file(self, relative: &str, content: &[u8]) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write chat log");
        self
    }

    pub fn with_log(self, relative: &str, log: &ChatLogBuilder) -> Self {
        self.with_file(relative, &log.build())
    }

    pub fn file_path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}
