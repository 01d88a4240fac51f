//! The owning container for a parsed transcript.
//!
//! A [`ChatLog`] is built once per transcript and then only read. Analytics
//! borrow views of it through [`ChatLog::view`] and the typed grouping
//! accessors below instead of slicing it ad hoc.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::Message;
use crate::core::filter::{OVERALL, ViewFilter};

/// Ordered sequence of messages in transcript order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatLog {
    messages: Vec<Message>,
}

impl ChatLog {
    /// Wraps messages in transcript order. Order is kept as given.
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Recomputes the derived calendar fields of every message.
    ///
    /// The parser already enriches each message, so calling this is only
    /// needed after constructing messages by hand. Idempotent.
    pub fn enrich(&mut self) {
        for msg in &mut self.messages {
            msg.enrich();
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Messages passing `filter`, in transcript order.
    pub fn view<'a>(&'a self, filter: &'a ViewFilter) -> impl Iterator<Item = &'a Message> + 'a {
        self.messages.iter().filter(move |m| filter.matches(m))
    }

    /// Human text messages passing `filter`: no system notifications, no
    /// media placeholders.
    pub fn text_view<'a>(
        &'a self,
        filter: &'a ViewFilter,
    ) -> impl Iterator<Item = &'a Message> + 'a {
        self.view(filter).filter(|m| m.is_text())
    }

    /// Unique human senders, sorted.
    pub fn senders(&self) -> Vec<&str> {
        let mut senders: Vec<&str> = self
            .messages
            .iter()
            .filter(|m| m.is_human())
            .map(|m| m.sender.as_str())
            .collect();
        senders.sort_unstable();
        senders.dedup();
        senders
    }

    /// Selector values for a sender picker: `"Overall"` followed by the
    /// sorted human senders.
    pub fn sender_options(&self) -> Vec<String> {
        std::iter::once(OVERALL.to_string())
            .chain(self.senders().into_iter().map(String::from))
            .collect()
    }

    /// Messages passing `filter`, grouped by `year-month` key in
    /// chronological order.
    pub fn group_by_month<'a>(&'a self, filter: &'a ViewFilter) -> BTreeMap<String, Vec<&'a Message>> {
        let mut groups: BTreeMap<String, Vec<&Message>> = BTreeMap::new();
        for msg in self.view(filter) {
            groups.entry(msg.time.month_key()).or_default().push(msg);
        }
        groups
    }

    /// Messages passing `filter`, grouped by calendar date.
    pub fn group_by_day<'a>(&'a self, filter: &'a ViewFilter) -> BTreeMap<NaiveDate, Vec<&'a Message>> {
        let mut groups: BTreeMap<NaiveDate, Vec<&Message>> = BTreeMap::new();
        for msg in self.view(filter) {
            groups.entry(msg.time.date).or_default().push(msg);
        }
        groups
    }

    /// Messages passing `filter`, grouped by hour of day (0-23).
    pub fn group_by_hour<'a>(&'a self, filter: &'a ViewFilter) -> BTreeMap<u32, Vec<&'a Message>> {
        let mut groups: BTreeMap<u32, Vec<&Message>> = BTreeMap::new();
        for msg in self.view(filter) {
            groups.entry(msg.time.hour).or_default().push(msg);
        }
        groups
    }
}

impl From<Vec<Message>> for ChatLog {
    fn from(messages: Vec<Message>) -> Self {
        Self::new(messages)
    }
}

impl<'a> IntoIterator for &'a ChatLog {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
