//! Word frequency and per-month trending topics.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::chatlog::ChatLog;
use crate::config::StopwordMode;
use crate::core::filter::ViewFilter;
use crate::core::ranking::{Counter, Ranked};
use crate::error::{ChatstatError, Result};

const BUNDLED_STOPWORDS: &str = include_str!("../resources/stop_hinglish.txt");

/// A mixed-language stopword list.
///
/// Keeps both the raw text, for substring matching, and the set of listed
/// words, for exact matching.
#[derive(Debug, Clone)]
pub struct Stopwords {
    raw: String,
    words: HashSet<String>,
}

impl Stopwords {
    /// The bundled Hinglish/English list.
    pub fn bundled() -> Self {
        Self::from_text(BUNDLED_STOPWORDS)
    }

    /// Builds a list from whitespace-separated words.
    pub fn from_text(text: &str) -> Self {
        let raw = text.to_lowercase();
        let words = raw.split_whitespace().map(String::from).collect();
        Self { raw, words }
    }

    /// Loads a list from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::ResourceMissing`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| ChatstatError::resource_missing("stopword list", path, e))?;
        let list = Self::from_text(&text);
        debug!("loaded {} stopwords from {}", list.len(), path.display());
        Ok(list)
    }

    /// Number of listed words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Tests a lowercase token.
    pub fn contains(&self, word: &str, mode: StopwordMode) -> bool {
        match mode {
            StopwordMode::Substring => self.raw.contains(word),
            StopwordMode::Exact => self.words.contains(word),
        }
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Top words for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTopics {
    /// `year-month` key, e.g. `"2024-02"`.
    pub month: String,
    pub words: Vec<Ranked<String>>,
}

/// Lowercase word tokens with punctuation stripped.
///
/// Splits on anything that is neither alphanumeric nor an apostrophe, so
/// `"Hello, world!"` yields `hello` and `world`.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

/// Most frequent non-stopword tokens over human text messages.
pub fn most_common_words(
    log: &ChatLog,
    filter: &ViewFilter,
    stopwords: &Stopwords,
    mode: StopwordMode,
    top_n: usize,
) -> Vec<Ranked<String>> {
    log.text_view(filter)
        .flat_map(|m| tokenize(&m.body))
        .filter(|w| !stopwords.contains(w, mode))
        .collect::<Counter<String>>()
        .most_common(top_n)
}

/// Most frequent non-stopword tokens per calendar month, oldest month first.
///
/// Tokens are the lowercased whitespace-separated words of each body.
/// Months whose messages are all stopwords still appear, with no words.
pub fn trending_topics_by_month(
    log: &ChatLog,
    filter: &ViewFilter,
    stopwords: &Stopwords,
    mode: StopwordMode,
    top_n: usize,
) -> Vec<MonthlyTopics> {
    let mut months: BTreeMap<String, Counter<String>> = BTreeMap::new();

    for msg in log.text_view(filter) {
        let counter = months.entry(msg.time.month_key()).or_default();
        for word in msg.body.to_lowercase().split_whitespace() {
            if !stopwords.contains(word, mode) {
                counter.add(word.to_string());
            }
        }
    }

    months
        .into_iter()
        .map(|(month, counter)| MonthlyTopics {
            month,
            words: counter.most_common(top_n),
        })
        .collect()
}
