//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - Helpers turning the arguments into library types
//!
//! # Example
//!
//! ```rust
//! use clap::Parser;
//! use chatstat::cli::Args;
//!
//! let args = Args::parse_from(["chatstat", "chat.txt", "--user", "Alice"]);
//! let filter = args.view_filter().unwrap();
//! assert_eq!(filter.sender.label(), "Alice");
//! ```

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::{LevelFilter, debug};

use crate::config::{AnalysisConfig, DateOrder, TranscriptConfig};
use crate::core::filter::{OVERALL, ViewFilter};
use crate::error::{ChatstatError, Result};

/// Group-chat analytics for WhatsApp exports.
///
/// Parses the transcript, analyzes it and prints the report as JSON.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt --user Alice --pretty
    chatstat chat.txt --after 2024-01-01 --before 2024-03-31
    chatstat us_export.txt --month-first --config analysis.json")]
pub struct Args {
    /// Path to the exported transcript
    pub input: PathBuf,

    /// Analyze a single sender ("Overall" for everyone)
    #[arg(short, long, value_name = "NAME", default_value = OVERALL)]
    pub user: String,

    /// Include messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Include messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// JSON file with analysis settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stopword list to use instead of the bundled one
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Read header dates as M/D/YY
    #[arg(long)]
    pub month_first: bool,

    /// Pretty-print the JSON report
    #[arg(short, long)]
    pub pretty: bool,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The view selected by `--user`, `--after` and `--before`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if a date bound is malformed.
    pub fn view_filter(&self) -> Result<ViewFilter> {
        let mut filter = ViewFilter::for_selection(&self.user);
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        Ok(filter)
    }

    /// Parser settings from `--month-first`.
    pub fn transcript_config(&self) -> TranscriptConfig {
        let order = if self.month_first {
            DateOrder::MonthFirst
        } else {
            DateOrder::DayFirst
        };
        TranscriptConfig::new().with_date_order(order)
    }

    /// Analysis settings from `--config`, or the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::ResourceMissing`] if the file cannot be read
    /// and [`ChatstatError::Json`] if it is not a valid settings object.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let Some(ref path) = self.config else {
            return Ok(AnalysisConfig::default());
        };
        let text = fs::read_to_string(path)
            .map_err(|e| ChatstatError::resource_missing("analysis config", path, e))?;
        let config = serde_json::from_str(&text)?;
        debug!("loaded analysis config from {}", path.display());
        Ok(config)
    }

    /// Log level implied by `--verbose`.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["chatstat", "chat.txt"]);
        assert_eq!(args.user, "Overall");
        assert!(args.view_filter().unwrap().is_overall());
        assert_eq!(args.transcript_config().date_order, DateOrder::DayFirst);
        assert_eq!(args.log_level(), LevelFilter::Warn);
        assert_eq!(args.analysis_config().unwrap().top_words, 20);
    }

    #[test]
    fn test_filter_flags() {
        let args = Args::parse_from([
            "chatstat",
            "chat.txt",
            "--user",
            "Bob",
            "--after",
            "2024-01-01",
            "--month-first",
            "-v",
        ]);
        let filter = args.view_filter().unwrap();
        assert_eq!(filter.sender.label(), "Bob");
        assert!(filter.has_date_filter());
        assert_eq!(args.transcript_config().date_order, DateOrder::MonthFirst);
        assert_eq!(args.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_bad_date() {
        let args = Args::parse_from(["chatstat", "chat.txt", "--before", "31/12/2024"]);
        assert!(args.view_filter().unwrap_err().is_invalid_date());
    }

    #[test]
    fn test_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"top_words": 3, "stopword_mode": "exact"}}"#).unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let args = Args::parse_from(["chatstat", "chat.txt", "--config", &path]);
        let config = args.analysis_config().unwrap();
        assert_eq!(config.top_words, 3);
        assert_eq!(config.conversation_gap_minutes, 30);
    }

    #[test]
    fn test_missing_config_file() {
        let args = Args::parse_from(["chatstat", "chat.txt", "--config", "/no/such/file.json"]);
        assert!(args.analysis_config().unwrap_err().is_resource_missing());
    }
}
