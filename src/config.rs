//! Configuration types for parsing and analysis.
//!
//! Plain structs with builder methods and `serde` derives, so library users
//! can construct them in code and the CLI can load them from JSON.
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{AnalysisConfig, StopwordMode};
//!
//! let config = AnalysisConfig::new()
//!     .with_conversation_gap_minutes(45)
//!     .with_stopword_mode(StopwordMode::Exact);
//!
//! assert_eq!(config.conversation_gap_minutes, 45);
//! ```

use serde::{Deserialize, Serialize};

/// Order of the day and month fields in transcript headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `D/M/YY`, as written by most non-US locales.
    #[default]
    DayFirst,
    /// `M/D/YY`, as written by US-locale exports.
    MonthFirst,
}

impl DateOrder {
    /// chrono format strings for this order, two-digit year first.
    pub(crate) fn parse_formats(self) -> &'static [&'static str] {
        match self {
            DateOrder::DayFirst => &["%d/%m/%y, %I:%M %p", "%d/%m/%Y, %I:%M %p"],
            DateOrder::MonthFirst => &["%m/%d/%y, %I:%M %p", "%m/%d/%Y, %I:%M %p"],
        }
    }
}

/// Configuration for the transcript parser.
///
/// # Example
///
/// ```rust
/// use chatstat::config::{DateOrder, TranscriptConfig};
///
/// let config = TranscriptConfig::new().with_date_order(DateOrder::MonthFirst);
/// assert_eq!(config.date_order, DateOrder::MonthFirst);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// How to read the numeric date in each header (default: day first)
    pub date_order: DateOrder,
}

impl TranscriptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header date order.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }
}

/// How tokens are tested against the stopword list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordMode {
    /// A token is dropped if it occurs anywhere inside the raw stopword
    /// text. Loose: `"he"` is dropped because `"the"` is listed.
    #[default]
    Substring,
    /// A token is dropped only if it is listed as a whole word.
    Exact,
}

/// Tuning knobs for the analytics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Inactivity gap that opens a new conversation (default: 30)
    pub conversation_gap_minutes: i64,

    /// Credit the very first message of the log as a conversation start
    /// (default: true)
    pub count_opening_message: bool,

    /// Rows in the overall word-frequency table (default: 20)
    pub top_words: usize,

    /// Rows per month in the trending-topics table (default: 10)
    pub trending_top: usize,

    /// Rows in the busiest-senders table (default: 5)
    pub busy_users_top: usize,

    /// Bodies must be strictly longer than this to be language-tagged (default: 20)
    pub language_min_chars: usize,

    /// Maximum number of messages sent to the language detector (default: 1000)
    pub language_sample_size: usize,

    /// Seed for the language sample (default: 42)
    pub language_sample_seed: u64,

    /// Languages reported in the language mix (default: 3)
    pub top_languages: usize,

    /// Stopword matching strategy (default: substring)
    pub stopword_mode: StopwordMode,

    /// Messages before this hour count as early-morning (default: 7)
    pub early_morning_before_hour: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            conversation_gap_minutes: 30,
            count_opening_message: true,
            top_words: 20,
            trending_top: 10,
            busy_users_top: 5,
            language_min_chars: 20,
            language_sample_size: 1000,
            language_sample_seed: 42,
            top_languages: 3,
            stopword_mode: StopwordMode::Substring,
            early_morning_before_hour: 7,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the conversation inactivity threshold in minutes.
    #[must_use]
    pub fn with_conversation_gap_minutes(mut self, minutes: i64) -> Self {
        self.conversation_gap_minutes = minutes;
        self
    }

    /// Sets whether the opening message of the log counts as a start.
    #[must_use]
    pub fn with_count_opening_message(mut self, count: bool) -> Self {
        self.count_opening_message = count;
        self
    }

    /// Sets the size of the overall word-frequency table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the per-month size of the trending-topics table.
    #[must_use]
    pub fn with_trending_top(mut self, n: usize) -> Self {
        self.trending_top = n;
        self
    }

    /// Sets the language sample size and seed.
    #[must_use]
    pub fn with_language_sample(mut self, size: usize, seed: u64) -> Self {
        self.language_sample_size = size;
        self.language_sample_seed = seed;
        self
    }

    /// Sets the stopword matching strategy.
    #[must_use]
    pub fn with_stopword_mode(mut self, mode: StopwordMode) -> Self {
        self.stopword_mode = mode;
        self
    }
}
