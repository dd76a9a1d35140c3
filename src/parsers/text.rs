//! UTF-16LE decoding and logical line splitting.
//!
//! Regions are decoded into UTF-16 code units rather than `String`s so that the
//! fixed-width message columns can be cut by code unit position.

const CR: u16 = 0x000D;
const LF: u16 = 0x000A;

/// Decodes little-endian UTF-16 code units; a dangling odd byte is ignored
pub fn decode_utf16le(bytes: &[u8]) -> Vec<u16> {
    bytes.chunks_exact(2).map(|pair| u16::from_le_bytes([pair[0], pair[1]])).collect()
}

/// Converts code units to a `String`, replacing unpaired surrogates with U+FFFD
pub fn units_to_string(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}

/// Splits code units into lines ending in `\r\n`, `\n` or a bare `\r`
///
/// Behaves like a split: a trailing terminator yields a final empty line.
pub fn logical_lines(units: &[u16]) -> LogicalLines<'_> {
    LogicalLines { rest: Some(units) }
}

pub struct LogicalLines<'a> {
    rest: Option<&'a [u16]>,
}

impl<'a> Iterator for LogicalLines<'a> {
    type Item = &'a [u16];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match rest.iter().position(|&unit| unit == CR || unit == LF) {
            Some(index) => {
                let terminator_len = if rest[index] == CR && rest.get(index + 1) == Some(&LF) {
                    2
                } else {
                    1
                };
                self.rest = Some(&rest[index + terminator_len..]);
                Some(&rest[..index])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

/// Trims Unicode whitespace and stray byte order marks from both ends
pub fn trim_field(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}
