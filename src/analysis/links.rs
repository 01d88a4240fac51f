//! URL extraction from message bodies.

use regex::Regex;

const URL_PATTERN: &str = r#"(?i)\b(?:https?://|ftp://|www\.)[^\s<>"']+"#;

/// Finds URLs in free text.
///
/// Matches explicit schemes and `www.` hosts; trailing sentence punctuation
/// is not part of the link. Built once and shared across calls.
#[derive(Debug, Clone)]
pub struct UrlExtractor {
    regex: Regex,
}

impl UrlExtractor {
    /// Compiles the URL pattern.
    pub fn new() -> Self {
        Self {
            regex: Regex::new(URL_PATTERN).expect("URL pattern is valid"),
        }
    }

    /// Every URL in `text`, duplicates included, in order of appearance.
    pub fn find_urls<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().trim_end_matches(['.', ',', ';', ':', '!', '?', ')', ']']))
            .filter(|url| !url.is_empty())
            .collect()
    }

    /// Number of URLs in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.find_urls(text).len()
    }
}

impl Default for UrlExtractor {
    fn default() -> Self {
        Self::new()
    }
}
