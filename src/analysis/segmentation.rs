//! Conversation segmentation by inactivity gap.
//!
//! Messages are ordered by timestamp (stable on ties) and a new
//! conversation opens whenever the gap to the previous message exceeds the
//! threshold. The sender of each opening message is credited with a
//! conversation start.
//!
//! Gaps are always measured against the chronological predecessor among
//! all human messages in the date range; a sender view only decides which
//! of the resulting sessions are reported.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::Message;
use crate::chatlog::ChatLog;
use crate::core::filter::{SenderFilter, ViewFilter};
use crate::core::ranking::{Counter, Ranked};

/// A run of messages with no gap above the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub starter: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub messages: usize,
}

/// Splitting policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
    /// Gaps strictly longer than this open a new conversation.
    pub threshold: Duration,
    /// Whether the first message of the whole sequence opens a conversation.
    pub count_opening_message: bool,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self {
            threshold: Duration::minutes(30),
            count_opening_message: true,
        }
    }
}

impl Segmenter {
    pub fn new(threshold: Duration, count_opening_message: bool) -> Self {
        Self {
            threshold,
            count_opening_message,
        }
    }

    /// Splits human messages within the view's date range into sessions,
    /// keeping those opened by a sender the view accepts.
    ///
    /// Fewer than two messages yield no sessions. When the opening message
    /// is not counted, the messages before the first qualifying gap belong
    /// to no session.
    pub fn sessions(&self, log: &ChatLog, filter: &ViewFilter) -> Vec<Session> {
        let timeline = ViewFilter {
            sender: SenderFilter::Overall,
            ..filter.clone()
        };
        let mut ordered: Vec<&Message> = log.view(&timeline).filter(|m| m.is_human()).collect();
        if ordered.len() < 2 {
            return Vec::new();
        }
        ordered.sort_by_key(|m| m.timestamp);

        let mut sessions: Vec<Session> = Vec::new();
        let mut open = self.count_opening_message;
        if open {
            sessions.push(Session::opened_by(ordered[0]));
        }

        for pair in ordered.windows(2) {
            let (prev, msg) = (pair[0], pair[1]);
            if msg.timestamp - prev.timestamp > self.threshold {
                sessions.push(Session::opened_by(msg));
                open = true;
            } else if open {
                if let Some(current) = sessions.last_mut() {
                    current.end = msg.timestamp;
                    current.messages += 1;
                }
            }
        }

        sessions.retain(|s| filter.sender.accepts(&s.starter));
        sessions
    }

    /// Conversation starts per sender, most starts first.
    pub fn starters(&self, log: &ChatLog, filter: &ViewFilter) -> Vec<Ranked<String>> {
        self.sessions(log, filter)
            .into_iter()
            .map(|s| s.starter)
            .collect::<Counter<String>>()
            .ranked()
    }
}

impl Session {
    fn opened_by(msg: &Message) -> Self {
        Self {
            starter: msg.sender.clone(),
            start: msg.timestamp,
            end: msg.timestamp,
            messages: 1,
        }
    }
}

/// Conversation starts per sender using `segmenter`'s policy.
pub fn conversation_starters(
    log: &ChatLog,
    filter: &ViewFilter,
    segmenter: &Segmenter,
) -> Vec<Ranked<String>> {
    segmenter.starters(log, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(minutes: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + Duration::minutes(minutes)
    }

    fn log_of(entries: &[(i64, &str)]) -> ChatLog {
        ChatLog::new(
            entries
                .iter()
                .map(|&(min, sender)| Message::new(at(min), sender, "msg"))
                .collect(),
        )
    }

    #[test]
    fn test_gap_above_threshold_starts_conversation() {
        let log = log_of(&[(0, "Alice"), (5, "Bob"), (60, "Alice")]);
        let starters = Segmenter::default().starters(&log, &ViewFilter::overall());
        assert_eq!(starters, vec![Ranked { key: "Alice".to_string(), count: 2 }]);
    }

    #[test]
    fn test_gap_equal_to_threshold_does_not_split() {
        let log = log_of(&[(0, "Alice"), (30, "Bob")]);
        let sessions = Segmenter::default().sessions(&log, &ViewFilter::overall());
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].messages, 2);
        assert_eq!(sessions[0].end, at(30));
    }

    #[test]
    fn test_uniform_short_gaps_give_one_start() {
        let entries: Vec<(i64, &str)> = (0..10).map(|i| (i * 10, "Alice")).collect();
        let starters = Segmenter::default().starters(&log_of(&entries), &ViewFilter::overall());
        assert_eq!(starters[0].count, 1);
    }

    #[test]
    fn test_uniform_long_gaps_give_n_starts() {
        let entries: Vec<(i64, &str)> = (0..6).map(|i| (i * 31, "Bob")).collect();
        let starters = Segmenter::default().starters(&log_of(&entries), &ViewFilter::overall());
        assert_eq!(starters[0].count, 6);
    }

    #[test]
    fn test_without_opening_message() {
        let log = log_of(&[(0, "Alice"), (5, "Bob"), (60, "Alice")]);
        let segmenter = Segmenter::new(Duration::minutes(30), false);
        let sessions = segmenter.sessions(&log, &ViewFilter::overall());
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].starter, "Alice");
        assert_eq!(sessions[0].start, at(60));
    }

    #[test]
    fn test_out_of_order_input_is_sorted() {
        let log = log_of(&[(100, "Carol"), (0, "Alice"), (10, "Bob")]);
        let sessions = Segmenter::default().sessions(&log, &ViewFilter::overall());
        let starters: Vec<_> = sessions.iter().map(|s| s.starter.as_str()).collect();
        assert_eq!(starters, vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_fewer_than_two_messages_is_empty() {
        let single = log_of(&[(0, "Alice")]);
        assert!(Segmenter::default().starters(&single, &ViewFilter::overall()).is_empty());
        assert!(Segmenter::default().starters(&ChatLog::default(), &ViewFilter::overall()).is_empty());
    }

    #[test]
    fn test_system_messages_are_skipped() {
        let mut messages = vec![Message::system(at(0), "Alice created group")];
        messages.push(Message::new(at(120), "Bob", "hello"));
        messages.push(Message::new(at(125), "Alice", "hey"));
        let log = ChatLog::new(messages);
        let starters = Segmenter::default().starters(&log, &ViewFilter::overall());
        assert_eq!(starters, vec![Ranked { key: "Bob".to_string(), count: 1 }]);
    }

    #[test]
    fn test_sender_view_measures_gaps_against_everyone() {
        let log = log_of(&[(0, "Bob"), (30, "Alice"), (55, "Alice"), (60, "Bob")]);
        let segmenter = Segmenter::default();
        let one = |key: &str| vec![Ranked { key: key.to_string(), count: 1 }];

        assert_eq!(segmenter.starters(&log, &ViewFilter::overall()), one("Bob"));
        assert_eq!(segmenter.starters(&log, &ViewFilter::for_selection("Bob")), one("Bob"));
        assert!(segmenter.starters(&log, &ViewFilter::for_selection("Alice")).is_empty());
    }

    #[test]
    fn test_sender_view_keeps_whole_session() {
        let log = log_of(&[(0, "Alice"), (5, "Bob"), (60, "Bob"), (65, "Alice")]);
        let sessions = Segmenter::default().sessions(&log, &ViewFilter::for_selection("Bob"));
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].start, at(60));
        assert_eq!(sessions[0].end, at(65));
        assert_eq!(sessions[0].messages, 2);
    }
}
