//! Select the slice of a chat log an analytic runs over.
//!
//! Every analytic takes a [`ViewFilter`]. The default filter is
//! "Overall": every message, no date bounds. A filter never copies or
//! mutates the log; it is only a predicate over borrowed messages.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Sender | [`with_sender`](ViewFilter::with_sender) | Messages from one sender (exact match) |
//! | Date from | [`with_date_from`](ViewFilter::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](ViewFilter::with_date_to) | Messages on or before date |
//!
//! # Examples
//!
//! ```
//! use chatstat::core::filter::ViewFilter;
//!
//! # fn main() -> chatstat::Result<()> {
//! let log = chatstat::parse_transcript(
//!     "1/2/24, 9:00 AM - Alice: hello\n1/2/24, 9:01 AM - Bob: hi\n",
//! )?;
//!
//! let only_alice = ViewFilter::for_selection("Alice");
//! assert_eq!(log.view(&only_alice).count(), 1);
//!
//! let overall = ViewFilter::for_selection("Overall");
//! assert_eq!(log.view(&overall).count(), 2);
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Message;
use crate::error::ChatstatError;

/// Selector value that means "no sender restriction".
pub const OVERALL: &str = "Overall";

/// Which senders an analytic looks at.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderFilter {
    /// Every sender, system notifications included.
    #[default]
    Overall,
    /// Exactly one sender, matched case-sensitively.
    Sender(String),
}

impl SenderFilter {
    /// Maps a selector value to a filter; `"Overall"` means no restriction.
    pub fn from_selection(selection: &str) -> Self {
        if selection == OVERALL {
            SenderFilter::Overall
        } else {
            SenderFilter::Sender(selection.to_string())
        }
    }

    /// Returns `true` if `sender` passes this filter.
    pub fn accepts(&self, sender: &str) -> bool {
        match self {
            SenderFilter::Overall => true,
            SenderFilter::Sender(name) => name == sender,
        }
    }

    /// Selector label of this filter.
    pub fn label(&self) -> &str {
        match self {
            SenderFilter::Overall => OVERALL,
            SenderFilter::Sender(name) => name,
        }
    }
}

/// A sender restriction plus optional inclusive calendar-date bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewFilter {
    /// Sender restriction.
    pub sender: SenderFilter,

    /// Include only messages on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only messages on or before this date.
    pub before: Option<NaiveDate>,
}

impl ViewFilter {
    /// The unrestricted "Overall" view.
    pub fn overall() -> Self {
        Self::default()
    }

    /// Builds a view from a selector value such as `"Overall"` or `"Alice"`.
    pub fn for_selection(selection: &str) -> Self {
        Self {
            sender: SenderFilter::from_selection(selection),
            ..Self::default()
        }
    }

    /// Restricts the view to a single sender.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = SenderFilter::Sender(sender.into());
        self
    }

    /// Sets the start date bound (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatstatError> {
        self.after = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date bound (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatstatError> {
        self.before = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Returns `true` if no restriction is active.
    pub fn is_overall(&self) -> bool {
        self.sender == SenderFilter::Overall && !self.has_date_filter()
    }

    /// Returns `true` if date bounds are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `msg` passes every active restriction.
    pub fn matches(&self, msg: &Message) -> bool {
        if !self.sender.accepts(&msg.sender) {
            return false;
        }

        let date = msg.time.date;
        if self.after.is_some_and(|after| date < after) {
            return false;
        }
        if self.before.is_some_and(|before| date > before) {
            return false;
        }

        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ChatstatError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatstatError::invalid_date(date_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_msg(sender: &str, date: &str) -> Message {
        let ts = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Message::new(ts, sender, "body")
    }

    #[test]
    fn test_selection_mapping() {
        assert_eq!(SenderFilter::from_selection("Overall"), SenderFilter::Overall);
        assert_eq!(
            SenderFilter::from_selection("Alice"),
            SenderFilter::Sender("Alice".into())
        );
        assert_eq!(SenderFilter::from_selection("Alice").label(), "Alice");
    }

    #[test]
    fn test_sender_match_is_exact() {
        let filter = ViewFilter::overall().with_sender("Alice");
        assert!(filter.matches(&make_msg("Alice", "2024-01-01")));
        assert!(!filter.matches(&make_msg("alice", "2024-01-01")));
        assert!(!filter.matches(&make_msg("Bob", "2024-01-01")));
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let filter = ViewFilter::overall()
            .with_date_from("2024-06-01")
            .unwrap()
            .with_date_to("2024-06-30")
            .unwrap();

        assert!(filter.matches(&make_msg("Alice", "2024-06-01")));
        assert!(filter.matches(&make_msg("Alice", "2024-06-30")));
        assert!(!filter.matches(&make_msg("Alice", "2024-05-31")));
        assert!(!filter.matches(&make_msg("Alice", "2024-07-01")));
    }

    #[test]
    fn test_invalid_date_format() {
        let result = ViewFilter::overall().with_date_from("01-01-2024");
        assert!(matches!(result, Err(ChatstatError::InvalidDate { .. })));
    }

    #[test]
    fn test_is_overall() {
        assert!(ViewFilter::overall().is_overall());
        assert!(ViewFilter::for_selection("Overall").is_overall());
        assert!(!ViewFilter::for_selection("Bob").is_overall());
        assert!(
            !ViewFilter::overall()
                .with_date_to("2024-01-01")
                .unwrap()
                .is_overall()
        );
    }
}
