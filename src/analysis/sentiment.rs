//! Positive / negative / neutral mix of a chat.

use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use crate::analysis::lexical::tokenize;
use crate::chatlog::ChatLog;
use crate::core::filter::ViewFilter;

/// Scores the polarity of a piece of text.
pub trait PolarityScorer: Send + Sync {
    /// Polarity in `[-1.0, 1.0]`, or `None` if the text cannot be scored.
    fn polarity(&self, text: &str) -> Option<f64>;
}

/// Counts per polarity bucket. All three buckets are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    /// Adds one message with the given polarity.
    pub fn record(&mut self, polarity: f64) {
        if polarity > 0.0 {
            self.positive += 1;
        } else if polarity < 0.0 {
            self.negative += 1;
        } else {
            self.neutral += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Word-lexicon polarity scorer.
///
/// Averages the polarity of every lexicon word in the text. An intensifier
/// right before a word scales it up; a negator within the two preceding
/// tokens flips and halves it. Text without lexicon words scores 0.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

const POSITIVE: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("nice", 0.6),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("happy", 0.8),
    ("glad", 0.5),
    ("best", 1.0),
    ("better", 0.5),
    ("beautiful", 0.85),
    ("cool", 0.35),
    ("fun", 0.3),
    ("funny", 0.25),
    ("perfect", 1.0),
    ("thanks", 0.2),
    ("thank", 0.2),
    ("welcome", 0.8),
    ("congrats", 0.8),
    ("congratulations", 0.8),
    ("yay", 0.6),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("exciting", 0.3),
    ("excited", 0.4),
    ("sweet", 0.35),
    ("kind", 0.6),
    ("brilliant", 0.9),
    ("well", 0.2),
    ("win", 0.8),
    ("won", 0.8),
    ("mast", 0.6),
    ("badhiya", 0.7),
    ("accha", 0.5),
    ("acha", 0.5),
    ("sahi", 0.4),
    ("khush", 0.7),
];

const NEGATIVE: &[(&str, f64)] = &[
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("hate", -0.8),
    ("hated", -0.9),
    ("sad", -0.5),
    ("angry", -0.5),
    ("annoying", -0.8),
    ("annoyed", -0.4),
    ("boring", -1.0),
    ("bored", -0.5),
    ("sorry", -0.5),
    ("sick", -0.7),
    ("tired", -0.4),
    ("wrong", -0.5),
    ("stupid", -0.8),
    ("ugly", -0.7),
    ("poor", -0.4),
    ("problem", -0.3),
    ("fail", -0.5),
    ("failed", -0.5),
    ("miss", -0.2),
    ("late", -0.3),
    ("pain", -0.6),
    ("ugh", -0.6),
    ("bakwas", -0.8),
    ("bura", -0.6),
    ("ganda", -0.6),
    ("pareshan", -0.5),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("so", 1.2),
    ("extremely", 1.5),
    ("super", 1.3),
    ("too", 1.2),
    ("bahut", 1.3),
    ("bohot", 1.3),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "dont", "don't", "didn't", "isn't", "wasn't", "can't", "cannot",
    "won't", "nahi", "nahin", "nhi", "mat",
];

/// How far back a negator reaches.
const NEGATION_WINDOW: usize = 2;

impl LexiconScorer {
    /// The bundled English/Hinglish lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: POSITIVE.iter().chain(NEGATIVE).copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// Number of words with a polarity.
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> Option<f64> {
        let tokens: Vec<String> = tokenize(text).collect();

        let mut total = 0.0;
        let mut scored = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.lexicon.get(token.as_str()) else {
                continue;
            };

            let mut score = base;
            if let Some(prev) = i.checked_sub(1).map(|p| tokens[p].as_str()) {
                if let Some(&factor) = self.intensifiers.get(prev) {
                    score *= factor;
                }
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i]
                .iter()
                .any(|t| NEGATORS.contains(&t.as_str()))
            {
                score *= -0.5;
            }

            total += score.clamp(-1.0, 1.0);
            scored += 1;
        }

        if scored == 0 {
            return Some(0.0);
        }
        Some((total / scored as f64).clamp(-1.0, 1.0))
    }
}

/// Polarity buckets over human text messages.
///
/// System notifications and media placeholders are not scored. A message
/// the scorer cannot handle is left out of every bucket.
pub fn sentiment_analysis(
    log: &ChatLog,
    filter: &ViewFilter,
    scorer: &dyn PolarityScorer,
) -> SentimentDistribution {
    let mut distribution = SentimentDistribution::default();
    let mut misses = 0usize;

    for msg in log.text_view(filter) {
        match scorer.polarity(&msg.body) {
            Some(p) if p.is_finite() => distribution.record(p),
            _ => misses += 1,
        }
    }

    if misses > 0 {
        debug!("{} messages could not be scored for sentiment", misses);
    }

    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TranscriptParser;

    #[test]
    fn test_lexicon_polarity() {
        let scorer = LexiconScorer::new();
        assert!(scorer.polarity("what a great day").unwrap() > 0.0);
        assert!(scorer.polarity("this is terrible").unwrap() < 0.0);
        assert_eq!(scorer.polarity("the meeting is at noon").unwrap(), 0.0);
        assert_eq!(scorer.polarity("").unwrap(), 0.0);
    }

    #[test]
    fn test_negation_flips() {
        let scorer = LexiconScorer::new();
        assert!(scorer.polarity("not good").unwrap() < 0.0);
        assert!(scorer.polarity("not bad at all").unwrap() > 0.0);
    }

    #[test]
    fn test_intensifier_scales() {
        let scorer = LexiconScorer::new();
        let plain = scorer.polarity("good").unwrap();
        let boosted = scorer.polarity("very good").unwrap();
        assert!(boosted > plain);
        assert!(boosted <= 1.0);
    }

    #[test]
    fn test_distribution_has_all_buckets() {
        let log = TranscriptParser::new()
            .parse_str(
                "1/2/24, 9:00 AM - Alice: great news everyone\n\
                 1/2/24, 9:01 AM - Bob: that is awful\n\
                 1/2/24, 9:02 AM - Bob: see you at five\n\
                 1/2/24, 9:03 AM - Bob: <Media omitted>\n\
                 1/2/24, 9:04 AM - Bob added Carol",
            )
            .unwrap();

        let dist = sentiment_analysis(&log, &ViewFilter::overall(), &LexiconScorer::new());
        assert_eq!(
            dist,
            SentimentDistribution {
                positive: 1,
                negative: 1,
                neutral: 1
            }
        );
        assert_eq!(dist.total(), 3);

        let json = serde_json::to_string(&SentimentDistribution::default()).unwrap();
        assert_eq!(json, r#"{"positive":0,"negative":0,"neutral":0}"#);
    }

    struct FailingScorer;

    impl PolarityScorer for FailingScorer {
        fn polarity(&self, text: &str) -> Option<f64> {
            if text.contains("boom") { None } else { Some(0.5) }
        }
    }

    #[test]
    fn test_misses_are_dropped() {
        let log = TranscriptParser::new()
            .parse_str("1/2/24, 9:00 AM - Alice: boom\n1/2/24, 9:01 AM - Bob: fine")
            .unwrap();
        let dist = sentiment_analysis(&log, &ViewFilter::overall(), &FailingScorer);
        assert_eq!(dist.positive, 1);
        assert_eq!(dist.total(), 1);
    }
}
