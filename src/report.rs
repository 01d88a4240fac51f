//! One-shot analysis of a log into a serializable [`Report`].
//!
//! # Example
//!
//! ```rust
//! use chatstat::core::ViewFilter;
//! use chatstat::parser::TranscriptParser;
//! use chatstat::report::Analyzer;
//!
//! let log = TranscriptParser::new()
//!     .parse_str("1/2/24, 9:00 AM - Alice: hi\n1/2/24, 9:01 AM - Bob: hello")
//!     .unwrap();
//!
//! let report = Analyzer::new().analyze(&log, &ViewFilter::overall());
//! assert_eq!(report.stats.messages, 2);
//! assert_eq!(report.selected, "Overall");
//! ```

use chrono::{Duration, NaiveDate};
use log::debug;
use serde::Serialize;

use crate::analysis::activity::{
    DailyPoint, Heatmap, MonthlyPoint, activity_heatmap, daily_timeline, hourly_heatmap,
    month_activity_map, monthly_timeline, week_activity_map,
};
use crate::analysis::emoji::{EmojiClassifier, emoji_ranking};
use crate::analysis::language::{LanguageDetector, LanguageMemo, LanguageShare, WhatlangDetector, detect_languages};
use crate::analysis::lexical::{MonthlyTopics, Stopwords, most_common_words, trending_topics_by_month};
use crate::analysis::links::UrlExtractor;
use crate::analysis::segmentation::{Segmenter, conversation_starters};
use crate::analysis::sentiment::{
    LexiconScorer, PolarityScorer, SentimentDistribution, sentiment_analysis,
};
use crate::analysis::stats::{
    BusyUsers, ChatStats, LongestMessage, early_morning_starter, fetch_stats,
    longest_message_sender, most_busy_users,
};
use crate::chatlog::ChatLog;
use crate::config::AnalysisConfig;
use crate::core::filter::ViewFilter;
use crate::core::ranking::Ranked;

/// Everything the analytics produce for one view of a log.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Selector label: `"Overall"` or the sender name.
    pub selected: String,
    pub after: Option<NaiveDate>,
    pub before: Option<NaiveDate>,
    /// Selector list for the log: `"Overall"` then every human sender.
    pub senders: Vec<String>,
    pub stats: ChatStats,
    pub busy_users: BusyUsers,
    pub longest_message: Option<LongestMessage>,
    pub conversation_starters: Vec<Ranked<String>>,
    pub early_morning_starter: Option<Ranked<String>>,
    pub common_words: Vec<Ranked<String>>,
    pub trending_topics: Vec<MonthlyTopics>,
    pub emojis: Vec<Ranked<String>>,
    pub languages: Vec<LanguageShare>,
    pub sentiment: SentimentDistribution,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub week_activity: Vec<Ranked<String>>,
    pub month_activity: Vec<Ranked<String>>,
    pub activity_heatmap: Heatmap,
    pub hourly_heatmap: Heatmap,
}

/// Bundles the services and tuning the analytics need.
///
/// Defaults to the bundled stopword list, `whatlang` language detection and
/// the lexicon sentiment scorer. Each service can be swapped with a `with_*`
/// method.
pub struct Analyzer {
    config: AnalysisConfig,
    urls: UrlExtractor,
    stopwords: Stopwords,
    emoji: EmojiClassifier,
    detector: Box<dyn LanguageDetector>,
    scorer: Box<dyn PolarityScorer>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            config,
            urls: UrlExtractor::new(),
            stopwords: Stopwords::bundled(),
            emoji: EmojiClassifier::new(),
            detector: Box::new(WhatlangDetector::new()),
            scorer: Box::new(LexiconScorer::new()),
        }
    }

    #[must_use]
    pub fn with_stopwords(mut self, stopwords: Stopwords) -> Self {
        self.stopwords = stopwords;
        self
    }

    #[must_use]
    pub fn with_language_detector(mut self, detector: impl LanguageDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    #[must_use]
    pub fn with_polarity_scorer(mut self, scorer: impl PolarityScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The segmentation policy derived from the config.
    pub fn segmenter(&self) -> Segmenter {
        Segmenter::new(
            Duration::minutes(self.config.conversation_gap_minutes),
            self.config.count_opening_message,
        )
    }

    /// Runs every analytic over `log` restricted to `filter`.
    ///
    /// Language detections are memoized for the duration of this call only.
    pub fn analyze(&self, log: &ChatLog, filter: &ViewFilter) -> Report {
        let config = &self.config;
        let mut memo = LanguageMemo::new();

        let report = Report {
            selected: filter.sender.label().to_string(),
            after: filter.after,
            before: filter.before,
            senders: log.sender_options(),
            stats: fetch_stats(log, filter, &self.urls),
            busy_users: most_busy_users(log, filter, config.busy_users_top),
            longest_message: longest_message_sender(log, filter),
            conversation_starters: conversation_starters(log, filter, &self.segmenter()),
            early_morning_starter: early_morning_starter(
                log,
                filter,
                config.early_morning_before_hour,
            ),
            common_words: most_common_words(
                log,
                filter,
                &self.stopwords,
                config.stopword_mode,
                config.top_words,
            ),
            trending_topics: trending_topics_by_month(
                log,
                filter,
                &self.stopwords,
                config.stopword_mode,
                config.trending_top,
            ),
            emojis: emoji_ranking(log, filter, &self.emoji),
            languages: detect_languages(log, filter, self.detector.as_ref(), &mut memo, config),
            sentiment: sentiment_analysis(log, filter, self.scorer.as_ref()),
            monthly_timeline: monthly_timeline(log, filter),
            daily_timeline: daily_timeline(log, filter),
            week_activity: week_activity_map(log, filter),
            month_activity: month_activity_map(log, filter),
            activity_heatmap: activity_heatmap(log, filter),
            hourly_heatmap: hourly_heatmap(log, filter),
        };

        debug!(
            "analyzed {} messages for {} ({} distinct bodies language-tagged, {} memo hits)",
            report.stats.messages,
            report.selected,
            memo.len(),
            memo.hits()
        );
        report
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
