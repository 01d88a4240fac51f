//! WhatsApp TXT transcript parser.
//!
//! Android exports start every logical turn with a header of the form
//! `D/M/YY, H:MM AM - `. The parser uses those headers as the only
//! segmentation markers: everything between two consecutive headers belongs
//! to one message, so bodies that wrap across lines stay attached to the
//! header that opened them.
//!
//! ```text
//! 1/2/24, 9:00 AM - Alice: hello world
//! 1/2/24, 9:05 AM - Bob: first line
//! still Bob's message
//! 1/2/24, 9:06 AM - Bob added Carol
//! ```
//!
//! The third entry has no `sender: ` prefix and becomes a system
//! notification.
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::new();
//! let log = parser.parse_str("1/2/24, 9:00 AM - Alice: hello\n1/2/24, 9:05 AM - Bob: hi")?;
//! assert_eq!(log.len(), 2);
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use log::debug;
use regex::Regex;

use crate::chatlog::ChatLog;
use crate::config::TranscriptConfig;
use crate::error::ChatstatError;
use crate::Message;

/// `D/M/YY, H:MM AM - ` with the date, time and meridiem captured.
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2})\s([AaPp][Mm])\s-\s")
        .expect("header pattern is valid")
});

/// Narrow no-break space that some exporters put between the time and AM/PM.
const NARROW_NBSP: char = '\u{202f}';

/// Phrases that only occur in notification lines, never in a sender name.
const NOTIFICATION_PHRASES: &[&str] = &[
    "changed the subject",
    "changed the group",
    "changed this group",
    "deleted this group",
    "changed their phone number",
    "joined using",
    "created group",
    "end-to-end encrypted",
    "security code",
    "now an admin",
    "disappearing messages",
];

/// Parser for WhatsApp TXT transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: TranscriptConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: TranscriptConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::Io`] if the file cannot be read and
    /// [`ChatstatError::Parse`] if it contains no headers.
    pub fn parse(&self, path: &Path) -> Result<ChatLog, ChatstatError> {
        let content = fs::read_to_string(path)?;
        self.parse_content(&content, Some(path))
    }

    /// Parses transcript text.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::Parse`] if the text contains no headers or
    /// a header names an impossible date.
    pub fn parse_str(&self, content: &str) -> Result<ChatLog, ChatstatError> {
        self.parse_content(content, None)
    }

    fn parse_content(&self, content: &str, path: Option<&Path>) -> Result<ChatLog, ChatstatError> {
        let normalized = normalize(content);
        let text: &str = &normalized;

        // Step 1: locate every header
        let headers: Vec<Header<'_>> = HEADER
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some(Header {
                    start: whole.start(),
                    end: whole.end(),
                    raw: whole.as_str(),
                    date: caps.get(1).map_or("", |m| m.as_str()),
                    time: caps.get(2).map_or("", |m| m.as_str()),
                    meridiem: caps.get(3).map_or("", |m| m.as_str()),
                })
            })
            .collect();

        if headers.is_empty() {
            return Err(ChatstatError::no_headers(path.map(Path::to_path_buf)));
        }

        let preamble = &text[..headers[0].start];
        if !preamble.trim().is_empty() {
            debug!(
                "dropping {} bytes of text before the first header",
                preamble.len()
            );
        }

        // Step 2: each header owns the text up to the next header
        let mut messages = Vec::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            let chunk_end = headers.get(i + 1).map_or(text.len(), |next| next.start);
            let chunk = text[header.end..chunk_end].trim_end_matches(['\n', '\r']);

            let timestamp = self.parse_timestamp(header).ok_or_else(|| {
                ChatstatError::invalid_timestamp(
                    header.raw.trim_end_matches(|c: char| c == '-' || c.is_whitespace()),
                    path.map(Path::to_path_buf),
                )
            })?;

            // Step 3: sender/body split, falling back to a notification
            let msg = match split_sender(chunk) {
                Some((sender, body)) => Message::new(timestamp, sender, body),
                None => Message::system(timestamp, chunk),
            };
            messages.push(msg);
        }

        debug!(
            "parsed {} messages ({} system notifications)",
            messages.len(),
            messages.iter().filter(|m| m.is_system()).count()
        );

        Ok(ChatLog::new(messages))
    }

    fn parse_timestamp(&self, header: &Header<'_>) -> Option<NaiveDateTime> {
        let datetime_str = format!(
            "{}, {} {}",
            header.date,
            header.time,
            header.meridiem.to_ascii_uppercase()
        );

        for parse_format in self.config.date_order.parse_formats() {
            if let Ok(ts) = NaiveDateTime::parse_from_str(&datetime_str, parse_format) {
                return Some(ts);
            }
        }

        None
    }
}

/// One header occurrence, with byte offsets into the normalized text.
struct Header<'a> {
    start: usize,
    end: usize,
    raw: &'a str,
    date: &'a str,
    time: &'a str,
    meridiem: &'a str,
}

/// Counts header occurrences; equals the number of messages a successful
/// parse produces.
pub fn count_headers(content: &str) -> usize {
    HEADER.find_iter(&normalize(content)).count()
}

fn normalize(content: &str) -> Cow<'_, str> {
    if content.contains(NARROW_NBSP) {
        Cow::Owned(content.replace(NARROW_NBSP, " "))
    } else {
        Cow::Borrowed(content)
    }
}

/// Splits `sender: body` on the first colon followed by whitespace.
///
/// Returns `None` when the text before that colon is not a plausible
/// sender name: empty, spanning lines, or worded like a notification.
fn split_sender(chunk: &str) -> Option<(&str, &str)> {
    let mut chars = chunk.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != ':' || i == 0 {
            continue;
        }
        let &(j, next) = chars.peek()?;
        if !next.is_whitespace() {
            continue;
        }

        let sender = &chunk[..i];
        if sender.contains('\n') || sender.trim().is_empty() || looks_like_notification(sender) {
            return None;
        }
        return Some((sender, &chunk[j + next.len_utf8()..]));
    }

    None
}

/// Membership events ("You added Bob", "Carol left") carry no `": "` and
/// never reach this check, so names like "Left Hand Rosa" stay senders.
fn looks_like_notification(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    NOTIFICATION_PHRASES.iter().any(|p| lower.contains(p))
}
