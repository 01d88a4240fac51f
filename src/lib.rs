//! # Chatstat
//!
//! A Rust library for turning WhatsApp chat exports into group-chat
//! analytics: activity counts, busiest members, conversation starters,
//! trending topics, emoji usage, language mix and sentiment.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let log = parse_transcript(
//!         "1/2/24, 9:00 AM - Alice: hi\n\
//!          1/2/24, 9:01 AM - Bob: hello there\n\
//!          1/2/24, 9:02 AM - Bob added Carol",
//!     )?;
//!
//!     let filter = ViewFilter::overall();
//!     let stats = fetch_stats(&log, &filter, &UrlExtractor::new());
//!     assert_eq!(stats.messages, 3);
//!
//!     let report = Analyzer::new().analyze(&log, &ViewFilter::for_selection("Bob"));
//!     assert_eq!(report.stats.messages, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. [`parser`] splits the raw transcript on its timestamp headers into
//!    [`Message`] records, classifying notifications and media placeholders.
//! 2. [`enrich`] derives calendar fields from each timestamp.
//! 3. [`analysis`] computes the analytics over a [`ChatLog`] restricted by a
//!    [`ViewFilter`](core::ViewFilter); [`report::Analyzer`] runs them all.
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser)
//! - [`chatlog`] - [`ChatLog`] and its filtered views
//! - [`message`] - [`Message`], [`MessageKind`](message::MessageKind)
//! - [`enrich`] - [`TimeFields`](enrich::TimeFields)
//! - [`config`] - [`TranscriptConfig`](config::TranscriptConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`core`] - [`ViewFilter`](core::ViewFilter), [`Counter`](core::Counter)
//! - [`analysis`] - The analytics and their services
//! - [`report`] - [`Analyzer`](report::Analyzer), [`Report`](report::Report)
//! - [`error`] - [`ChatstatError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

pub mod analysis;
pub mod chatlog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod enrich;
pub mod error;
pub mod message;
pub mod parser;
pub mod report;

// Re-export the main types at the crate root for convenience
pub use chatlog::ChatLog;
pub use error::{ChatstatError, Result};
pub use message::Message;

/// Parses transcript text with the default (day-first) configuration.
///
/// # Errors
///
/// Returns [`ChatstatError::Parse`] if the text holds no timestamp header or
/// a header carries an impossible date.
pub fn parse_transcript(content: &str) -> Result<ChatLog> {
    parser::TranscriptParser::new().parse_str(content)
}

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{ChatLog, Message, parse_transcript};

    pub use crate::error::{ChatstatError, Result};

    pub use crate::config::{AnalysisConfig, DateOrder, StopwordMode, TranscriptConfig};

    pub use crate::core::{OVERALL, Ranked, SenderFilter, ViewFilter};

    pub use crate::message::{MessageKind, MEDIA_OMITTED, SYSTEM_SENDER};

    pub use crate::parser::TranscriptParser;

    pub use crate::analysis::{
        EmojiClassifier, LanguageDetector, LexiconScorer, PolarityScorer, Stopwords,
        UrlExtractor, WhatlangDetector, fetch_stats,
    };

    pub use crate::report::{Analyzer, Report};
}
