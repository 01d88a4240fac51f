//! The message record produced by the transcript parser.
//!
//! A [`Message`] is one logical turn of the transcript: a timestamp, a sender
//! and a body, plus the calendar fields derived from the timestamp. System
//! notifications (member joined, subject changed, ...) have no human sender
//! and carry the [`SYSTEM_SENDER`] sentinel instead.
//!
//! # Examples
//!
//! ```
//! use chatstat::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//!
//! let msg = Message::new(ts, "Alice", "hello world");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.time().period, "9-10");
//! assert!(msg.is_text());
//!
//! let notice = Message::system(ts, "Bob joined using this group's invite link");
//! assert!(notice.is_system());
//! ```

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::enrich::TimeFields;

/// Sender sentinel for entries with no human author.
pub const SYSTEM_SENDER: &str = "group_notification";

/// Body that WhatsApp writes in place of an attachment when exporting
/// without media.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// What kind of entry a message is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Ordinary text written by a person.
    Text,
    /// A media-omitted placeholder written by a person.
    Media,
    /// A group notification without a human sender.
    System,
}

/// A single parsed and enriched transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    /// When the message was sent, in the exporter's local wall-clock time.
    pub timestamp: NaiveDateTime,

    /// Display name of the author, or [`SYSTEM_SENDER`] for notifications.
    pub sender: String,

    /// Raw body text. May contain newlines and may be empty.
    pub body: String,

    /// Classification assigned at parse time.
    pub kind: MessageKind,

    /// Calendar fields derived from `timestamp`.
    pub time: TimeFields,
}

impl Message {
    /// Creates a message written by `sender`.
    ///
    /// A body equal to [`MEDIA_OMITTED`] is classified as
    /// [`MessageKind::Media`].
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let body = body.into();
        let kind = if body == MEDIA_OMITTED {
            MessageKind::Media
        } else {
            MessageKind::Text
        };
        Self::with_kind(timestamp, sender, body, kind)
    }

    /// Creates a system notification carrying the [`SYSTEM_SENDER`] sentinel.
    pub fn system(timestamp: NaiveDateTime, body: impl Into<String>) -> Self {
        Self::with_kind(timestamp, SYSTEM_SENDER, body, MessageKind::System)
    }

    /// Creates a message with an explicit kind.
    pub fn with_kind(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
        kind: MessageKind,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
            kind,
            time: TimeFields::from_timestamp(timestamp),
        }
    }

    /// Recomputes the derived calendar fields from the timestamp.
    pub fn enrich(&mut self) {
        self.time = TimeFields::from_timestamp(self.timestamp);
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn time(&self) -> &TimeFields {
        &self.time
    }

    /// Returns `true` for group notifications.
    pub fn is_system(&self) -> bool {
        self.kind == MessageKind::System
    }

    /// Returns `true` for media-omitted placeholders.
    pub fn is_media(&self) -> bool {
        self.kind == MessageKind::Media
    }

    /// Returns `true` for text written by a person.
    pub fn is_text(&self) -> bool {
        self.kind == MessageKind::Text
    }

    /// Returns `true` if a person wrote this entry (text or media).
    pub fn is_human(&self) -> bool {
        !self.is_system()
    }

    /// Body length in Unicode scalar values.
    pub fn char_len(&self) -> usize {
        self.body.chars().count()
    }

    /// Number of whitespace-delimited words in the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_message_new() {
        let msg = Message::new(ts(), "Alice", "Hello");
        assert_eq!(msg.sender(), "Alice");
        assert_eq!(msg.body(), "Hello");
        assert_eq!(msg.kind(), MessageKind::Text);
        assert_eq!(msg.time().hour, 12);
    }

    #[test]
    fn test_media_placeholder_kind() {
        let msg = Message::new(ts(), "Bob", MEDIA_OMITTED);
        assert!(msg.is_media());
        assert!(msg.is_human());
        assert!(!msg.is_text());
    }

    #[test]
    fn test_system_message() {
        let msg = Message::system(ts(), "Alice added Bob");
        assert_eq!(msg.sender(), SYSTEM_SENDER);
        assert!(msg.is_system());
        assert!(!msg.is_human());
    }

    #[test]
    fn test_enrich_is_idempotent() {
        let mut msg = Message::new(ts(), "Alice", "Hello");
        let before = msg.time().clone();
        msg.enrich();
        msg.enrich();
        assert_eq!(msg.time(), &before);
    }

    #[test]
    fn test_lengths() {
        let msg = Message::new(ts(), "Alice", "héllo  wörld 🎉");
        assert_eq!(msg.char_len(), 14);
        assert_eq!(msg.word_count(), 3);

        let empty = Message::new(ts(), "Alice", "");
        assert_eq!(empty.char_len(), 0);
        assert_eq!(empty.word_count(), 0);
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new(ts(), "Alice", "Hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"sender\":\"Alice\""));
        assert!(json.contains("\"kind\":\"text\""));
        assert!(json.contains("\"period\":\"12-13\""));
    }
}
