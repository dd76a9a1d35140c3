//! Terminal output sanitization
//!
//! Sender names and message text come straight from untrusted log files. Before
//! they are printed in text mode, escape sequences and control characters are
//! removed so a crafted log cannot move the cursor, clear the screen or recolor
//! the terminal. JSON output is escaped by `serde_json` and needs no treatment.

use std::borrow::Cow;

const ESC: char = '\x1b';

/// Removes ANSI CSI sequences (`ESC [ ... letter`) and control characters
///
/// Text without any control characters is returned borrowed.
///
/// # Examples
///
/// ```
/// use chatlog_explorer::utils::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[2JSpai o7"), "Spai o7");
/// assert_eq!(sanitize_for_terminal("plain"), "plain");
/// ```
pub fn sanitize_for_terminal(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters run until the final letter of the sequence
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && ch != '\t' {
            continue;
        }
        result.push(ch);
    }

    Cow::Owned(result)
}
