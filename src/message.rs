//! Message parsing.
//!
//! Lines look like `Alan> Hello there`. The author is everything before the
//! first `>`, taken verbatim; the text is everything after it, trimmed.

use std::fmt;

use serde::Serialize;

use crate::error::FormatError;

/// Separator between author and text.
pub const MESSAGE_SEPARATOR: char = '>';

/// A single authored message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Author name, not trimmed.
    pub author: String,
    /// Message text, trimmed.
    pub text: String,
}

impl Message {
    /// Create a message.
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }

    /// Parse one message line.
    pub fn parse(line: &str) -> Option<Self> {
        let (author, text) = line.split_once(MESSAGE_SEPARATOR)?;
        Some(Self::new(author, text.trim()))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}: {}", self.author, self.text)
    }
}

/// Parse message lines in order.
///
/// Duplicates are kept. Blank lines are skipped.
///
/// # Errors
///
/// `MalformedMessageLine` for a line without `>`.
pub fn parse_messages<I>(lines: I) -> Result<Vec<Message>, FormatError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut messages = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            tracing::warn!(line = index + 1, "skipping blank line in message data");
            continue;
        }

        let message = Message::parse(line).ok_or_else(|| FormatError::MalformedMessageLine {
            line: index + 1,
            content: line.to_string(),
        })?;
        messages.push(message);
    }

    tracing::debug!(messages = messages.len(), "parsed messages");
    Ok(messages)
}
