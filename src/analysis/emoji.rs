//! Emoji extraction and ranking.

use crate::chatlog::ChatLog;
use crate::core::filter::ViewFilter;
use crate::core::ranking::{Counter, Ranked};

/// Fitzpatrick skin-tone modifiers, which the table only lists inside
/// toned sequences.
const SKIN_TONES: std::ops::RangeInclusive<char> = '\u{1F3FB}'..='\u{1F3FF}';

/// Classifies single code points against the Unicode emoji table.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiClassifier;

impl EmojiClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` if `c` on its own is a listed emoji or a skin-tone
    /// modifier.
    pub fn is_emoji(&self, c: char) -> bool {
        // ASCII covers '#', '*' and digits, which the table only lists as keycap sequences
        if c.is_ascii() {
            return false;
        }
        if SKIN_TONES.contains(&c) {
            return true;
        }
        let mut buf = [0u8; 4];
        emojis::get(c.encode_utf8(&mut buf)).is_some()
    }

    /// Emoji code points of `text`, in order.
    pub fn extract<'a>(&'a self, text: &'a str) -> impl Iterator<Item = char> + 'a {
        text.chars().filter(|&c| self.is_emoji(c))
    }
}

/// Every emoji in the view ranked by frequency, uncapped.
///
/// Scans code point by code point, so a multi-code-point sequence such as
/// a flag or a skin-toned hand contributes its emoji components separately:
/// `👍🏽` counts once for `👍` and once for the `🏽` modifier.
pub fn emoji_ranking(
    log: &ChatLog,
    filter: &ViewFilter,
    classifier: &EmojiClassifier,
) -> Vec<Ranked<String>> {
    log.view(filter)
        .flat_map(|m| classifier.extract(&m.body))
        .map(String::from)
        .collect::<Counter<String>>()
        .ranked()
}
