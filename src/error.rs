//! Unified error types for chatstat.
//!
//! Only two things can stop an analysis run: a transcript that contains no
//! recognizable message headers, and an external resource (such as a
//! stopword file) that cannot be loaded. Everything else degrades to empty
//! or partial results inside the analytics themselves.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::ChatLog;
///
/// fn load() -> Result<ChatLog> {
///     chatstat::parse_transcript("1/2/24, 9:00 AM - Alice: hi")
/// }
/// # load().unwrap();
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// An I/O error occurred while reading a transcript.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript could not be turned into a chat log.
    ///
    /// Fatal: no analytic can run without a parsed log.
    #[error("Failed to parse {format} transcript{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The transcript convention being parsed
        format: &'static str,
        /// What went wrong
        #[source]
        source: ParseErrorKind,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A fixed external resource (stopword list, lexicon) is unavailable.
    #[error("Missing {resource} resource at {}: {source}", path.display())]
    ResourceMissing {
        /// Which resource failed to load
        resource: &'static str,
        /// Where it was looked up
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Invalid date bound in a view filter.
    ///
    /// Date bounds expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// JSON serialization or config deserialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Kinds of transcript parse errors.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// The input contains zero date-time headers.
    #[error("no message headers found; expected lines like 'D/M/YY, H:MM AM - Sender: text'")]
    NoHeaders,
    /// A header matched the pattern but does not name a real point in time.
    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),
}

impl ChatstatError {
    /// Format label used for every transcript parse error.
    pub const TRANSCRIPT_FORMAT: &'static str = "WhatsApp TXT";

    /// Creates the error for a transcript without any headers.
    pub fn no_headers(path: Option<PathBuf>) -> Self {
        ChatstatError::Parse {
            format: Self::TRANSCRIPT_FORMAT,
            source: ParseErrorKind::NoHeaders,
            path,
        }
    }

    /// Creates the error for a header whose date cannot be parsed.
    pub fn invalid_timestamp(header: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatstatError::Parse {
            format: Self::TRANSCRIPT_FORMAT,
            source: ParseErrorKind::InvalidTimestamp(header.into()),
            path,
        }
    }

    /// Creates a missing-resource error.
    pub fn resource_missing(
        resource: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        ChatstatError::ResourceMissing {
            resource,
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatstatError::Parse { .. })
    }

    /// Returns `true` if an external resource could not be loaded.
    pub fn is_resource_missing(&self) -> bool {
        matches!(self, ChatstatError::ResourceMissing { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatError::InvalidDate { .. })
    }
}
