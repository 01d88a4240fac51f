//! Counts, extrema and sender distributions.

use serde::Serialize;

use crate::analysis::links::UrlExtractor;
use crate::chatlog::ChatLog;
use crate::core::filter::ViewFilter;
use crate::core::ranking::{Counter, Ranked};

/// Headline counters for a view of the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChatStats {
    /// Messages in the view, system notifications included.
    pub messages: usize,
    /// Whitespace-delimited words across all bodies.
    pub words: usize,
    /// Media-omitted placeholders.
    pub media: usize,
    /// URL occurrences, duplicates counted.
    pub links: usize,
}

/// A sender's share of the whole log, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderShare {
    pub sender: String,
    pub percent: f64,
}

/// Busiest senders plus the full percentage breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// Top senders by message count.
    pub top: Vec<Ranked<String>>,
    /// Every sender in the view with its share of the unfiltered total.
    pub shares: Vec<SenderShare>,
}

/// The longest human-written body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongestMessage {
    pub sender: String,
    pub text: String,
    /// Length in characters.
    pub length: usize,
}

/// Message, word, media and link counts.
pub fn fetch_stats(log: &ChatLog, filter: &ViewFilter, urls: &UrlExtractor) -> ChatStats {
    log.view(filter).fold(ChatStats::default(), |mut acc, msg| {
        acc.messages += 1;
        acc.words += msg.word_count();
        if msg.is_media() {
            acc.media += 1;
        }
        acc.links += urls.count(&msg.body);
        acc
    })
}

/// Senders ranked by message count, with percentages of the unfiltered
/// total rounded to two decimals.
///
/// System notifications count as their own sentinel sender, so over the
/// unfiltered log the percentages sum to 100 up to rounding.
pub fn most_busy_users(log: &ChatLog, filter: &ViewFilter, top_n: usize) -> BusyUsers {
    let total = log.len();
    if total == 0 {
        return BusyUsers::default();
    }

    let ranked = log
        .view(filter)
        .map(|m| m.sender.clone())
        .collect::<Counter<String>>()
        .ranked();

    let shares = ranked
        .iter()
        .map(|r| SenderShare {
            sender: r.key.clone(),
            percent: round2(r.count as f64 / total as f64 * 100.0),
        })
        .collect();

    let mut top = ranked;
    top.truncate(top_n);

    BusyUsers { top, shares }
}

/// The longest body not written by the system; the first one wins ties.
pub fn longest_message_sender(log: &ChatLog, filter: &ViewFilter) -> Option<LongestMessage> {
    let mut best: Option<(&crate::Message, usize)> = None;

    for msg in log.view(filter).filter(|m| m.is_human()) {
        let len = msg.char_len();
        if best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((msg, len));
        }
    }

    best.map(|(msg, length)| LongestMessage {
        sender: msg.sender.clone(),
        text: msg.body.clone(),
        length,
    })
}

/// The sender with the most messages before `before_hour`, with that count.
pub fn early_morning_starter(
    log: &ChatLog,
    filter: &ViewFilter,
    before_hour: u32,
) -> Option<Ranked<String>> {
    log.view(filter)
        .filter(|m| m.is_human() && m.time.hour < before_hour)
        .map(|m| m.sender.clone())
        .collect::<Counter<String>>()
        .most_common(1)
        .into_iter()
        .next()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
