//! Splits a transcript line into timestamp, sender and content.
//!
//! Recognized shape:
//!
//! ```text
//! [1/15/24, 10:30:45 AM] Alice: Check this out
//!  ^^^^^^^^^^^^^^^^^^^^  ^^^^^  ^^^^^^^^^^^^^^
//!  timestamp             sender content
//! ```
//!
//! Lines that do not have this shape (encryption notices, wrapped
//! continuation lines, headers) are rejected with `None`. Rejection is the
//! normal outcome for noise, not an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::Message;

/// `[<timestamp>] <sender>: <content>`, both leading fields non-greedy.
///
/// No field may contain a line terminator (`\r`, `\n`, U+2028, U+2029), so a
/// line holding a stray terminator is rejected as a whole.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\[([^\r\n\x{2028}\x{2029}]*?)\] ([^\r\n\x{2028}\x{2029}]*?): ([^\r\n\x{2028}\x{2029}]*)$",
    )
    .unwrap()
});

/// Tokenizes a single trimmed, non-empty line.
///
/// Returns `None` when the line is not a chat message. A returned [`Message`]
/// always has a non-empty timestamp, sender and content.
///
/// # Example
///
/// ```rust
/// use chatsift::tokenizer::tokenize;
///
/// let msg = tokenize("[1/1/24, 9:00 AM] Alice: time: 9am [draft]").unwrap();
/// assert_eq!(msg.timestamp(), "1/1/24, 9:00 AM");
/// assert_eq!(msg.sender(), "Alice");
/// assert_eq!(msg.content(), "time: 9am [draft]");
///
/// assert!(tokenize("Messages and calls are end-to-end encrypted.").is_none());
/// ```
pub fn tokenize(line: &str) -> Option<Message> {
    let caps = LINE_PATTERN.captures(line)?;
    let timestamp = caps.get(1)?.as_str();
    let sender = caps.get(2)?.as_str();
    let content = caps.get(3)?.as_str();

    if timestamp.is_empty() || sender.is_empty() || content.is_empty() {
        return None;
    }

    Some(Message::new(timestamp, sender, content))
}
