//! Binary layout of a chat log: magic number and header boundaries.
//!
//! A log starts with a UTF-16LE byte order mark and blank lines, followed by a
//! header block framed by two rows of dashes, followed by the message lines:
//!
//! ```text
//! FF FE 0D 00 0A 00 ...         magic number
//! ------------------------      header boundary
//!   Channel Name: Local         header fields
//!   Session started: ...
//! ------------------------      header boundary
//! [ 2020.01.02 03:04:06 ] ...   messages
//! ```
//!
//! The boundary pattern is searched at byte granularity. It starts at the high byte
//! of the character before a dash row, which is why the region offsets below are
//! shifted by one byte relative to the match.

use std::ops::Range;

use tracing::debug;

use crate::error::{FormatViolation, ParseError};

/// Byte order mark, `\r\n\r\n\n` and two spaces, encoded as UTF-16LE
pub const MAGIC_NUMBER: [u8; 16] = [
    0xFF, 0xFE, 0x0D, 0x00, 0x0A, 0x00, 0x0D, 0x00, 0x0A, 0x00, 0x0A, 0x00, 0x20, 0x00, 0x20, 0x00,
];

pub const HEADER_BOUNDARY_LEN: usize = 126;

/// 63 repetitions of `00 2D` (a run of UTF-16LE dashes, seen off by one byte)
pub const HEADER_BOUNDARY: [u8; HEADER_BOUNDARY_LEN] = tile_boundary([0x00, 0x2D]);

const fn tile_boundary(tile: [u8; 2]) -> [u8; HEADER_BOUNDARY_LEN] {
    let mut pattern = [0u8; HEADER_BOUNDARY_LEN];
    let mut i = 0;
    while i < HEADER_BOUNDARY_LEN {
        pattern[i] = tile[i % 2];
        i += 1;
    }
    pattern
}

/// Byte ranges of the header and message regions within a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionLayout {
    pub header: Range<usize>,
    /// Start of the message region as computed from the header boundaries
    pub default_messages_start: usize,
    /// Start actually used, after applying any caller offset
    pub messages_start: usize,
}

impl RegionLayout {
    pub fn header_region<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        &buffer[self.header.clone()]
    }

    /// Message bytes; empty when the start lies at or past the end of the buffer
    pub fn message_region<'a>(&self, buffer: &'a [u8]) -> &'a [u8] {
        buffer.get(self.messages_start..).unwrap_or_default()
    }
}

/// Finds the first occurrence of `needle` in `haystack` at or after `from`
pub fn find_pattern(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let tail = haystack.get(from..)?;
    let first = needle[0];

    tail.windows(needle.len())
        .position(|window| window[0] == first && window == needle)
        .map(|position| position + from)
}

/// Checks that the buffer contains the magic number
///
/// # Errors
///
/// Returns [`FormatViolation::MissingMagicNumber`] if it does not.
pub fn validate_magic(buffer: &[u8]) -> Result<(), ParseError> {
    match find_pattern(buffer, &MAGIC_NUMBER, 0) {
        Some(_) => Ok(()),
        None => Err(FormatViolation::MissingMagicNumber.into()),
    }
}

/// Locates the header region between the first two boundary occurrences and the
/// start of the message region after the second
///
/// `offset` replaces the computed message start only when it lies strictly past it.
///
/// # Errors
///
/// Returns [`FormatViolation::MissingHeaderBoundary`] if the boundary never occurs and
/// [`FormatViolation::TruncatedHeader`] if there is no second occurrence after the
/// header start.
pub fn locate_regions(buffer: &[u8], offset: Option<usize>) -> Result<RegionLayout, ParseError> {
    let opening = find_pattern(buffer, &HEADER_BOUNDARY, 0)
        .ok_or(FormatViolation::MissingHeaderBoundary)?;
    let header_start = opening + HEADER_BOUNDARY_LEN + 1;

    let header_end = find_pattern(buffer, &HEADER_BOUNDARY, header_start)
        .filter(|&closing| closing > header_start)
        .ok_or(FormatViolation::TruncatedHeader)?;

    let default_messages_start = header_end + 1 + HEADER_BOUNDARY_LEN;
    let messages_start = match offset {
        Some(offset) if offset > default_messages_start => offset,
        _ => default_messages_start,
    };

    debug!(
        header_start,
        header_end,
        default_messages_start,
        messages_start,
        "located chat log regions"
    );

    Ok(RegionLayout { header: header_start..header_end, default_messages_start, messages_start })
}
