//! Analytics over a parsed [`ChatLog`](crate::ChatLog).
//!
//! Every analytic is a free function taking the log, a
//! [`ViewFilter`](crate::core::ViewFilter) and whatever services it needs.
//! [`Analyzer`](crate::report::Analyzer) bundles the services and runs them
//! all at once.
//!
//! - [`stats`] - Message, word, media and link counts; busiest senders
//! - [`segmentation`] - Conversation sessions and starters
//! - [`lexical`] - Word frequency and trending topics
//! - [`emoji`] - Emoji ranking
//! - [`language`] - Language mix
//! - [`sentiment`] - Polarity distribution
//! - [`activity`] - Timelines and heatmaps
//! - [`links`] - URL extraction

pub mod activity;
pub mod emoji;
pub mod language;
pub mod lexical;
pub mod links;
pub mod segmentation;
pub mod sentiment;
pub mod stats;

pub use activity::{
    DailyPoint, Heatmap, MonthlyPoint, activity_heatmap, daily_timeline, hourly_heatmap,
    month_activity_map, monthly_timeline, week_activity_map,
};
pub use emoji::{EmojiClassifier, emoji_ranking};
pub use language::{
    LanguageDetector, LanguageMemo, LanguageShare, WhatlangDetector, detect_languages,
    language_name,
};
pub use lexical::{MonthlyTopics, Stopwords, most_common_words, tokenize, trending_topics_by_month};
pub use links::UrlExtractor;
pub use segmentation::{Segmenter, Session, conversation_starters};
pub use sentiment::{LexiconScorer, PolarityScorer, SentimentDistribution, sentiment_analysis};
pub use stats::{
    BusyUsers, ChatStats, LongestMessage, SenderShare, early_morning_starter, fetch_stats,
    longest_message_sender, most_busy_users,
};
