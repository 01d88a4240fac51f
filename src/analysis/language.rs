//! Language mix of a chat.
//!
//! Only messages long enough to classify are considered, large pools are
//! down-sampled with a fixed seed, and each distinct body is classified at
//! most once per run through a [`LanguageMemo`] owned by the caller.

use std::collections::HashMap;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use serde::Serialize;
use whatlang::Lang;

use crate::Message;
use crate::chatlog::ChatLog;
use crate::config::AnalysisConfig;
use crate::core::filter::ViewFilter;
use crate::core::ranking::Counter;

/// Identifies the language of a piece of text.
pub trait LanguageDetector: Send + Sync {
    /// ISO 639-3 code of the language, or `None` if it cannot be told.
    fn detect(&self, text: &str) -> Option<String>;
}

/// Trigram-based detector backed by `whatlang`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        whatlang::detect(text).map(|info| info.lang().code().to_string())
    }
}

/// Per-run cache from message body to detected language.
///
/// Failed detections are cached too, so a body that cannot be classified is
/// not retried.
#[derive(Debug, Clone, Default)]
pub struct LanguageMemo {
    cache: HashMap<String, Option<String>>,
    hits: usize,
}

impl LanguageMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached result for `body`, classifying it on first sight.
    pub fn get_or_detect(&mut self, body: &str, detector: &dyn LanguageDetector) -> Option<String> {
        if let Some(cached) = self.cache.get(body) {
            self.hits += 1;
            return cached.clone();
        }
        let detected = detector.detect(body);
        self.cache.insert(body.to_string(), detected.clone());
        detected
    }

    /// Distinct bodies classified so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }
}

/// One row of the language mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageShare {
    /// ISO 639-3 code as reported by the detector.
    pub code: String,
    /// English display name.
    pub language: String,
    pub count: usize,
}

/// English display name for an ISO 639-3 code; unknown codes pass through.
pub fn language_name(code: &str) -> String {
    Lang::from_code(code)
        .map(|lang| lang.eng_name().to_string())
        .unwrap_or_else(|| code.to_string())
}

/// The most common languages among eligible messages.
///
/// Eligible: human text (no notifications, no media placeholders) longer
/// than `config.language_min_chars` characters. If more than
/// `config.language_sample_size` messages qualify, a seeded uniform sample
/// of that size is classified instead. Messages the detector cannot
/// classify are left out of the counts.
pub fn detect_languages(
    log: &ChatLog,
    filter: &ViewFilter,
    detector: &dyn LanguageDetector,
    memo: &mut LanguageMemo,
    config: &AnalysisConfig,
) -> Vec<LanguageShare> {
    let pool: Vec<&Message> = log
        .text_view(filter)
        .filter(|m| m.char_len() > config.language_min_chars)
        .collect();

    let sample = sample_pool(&pool, config.language_sample_size, config.language_sample_seed);
    debug!(
        "language pool: {} eligible, {} sampled",
        pool.len(),
        sample.len()
    );

    let mut counts: Counter<String> = Counter::new();
    let mut misses = 0usize;
    for msg in sample {
        match memo.get_or_detect(&msg.body, detector) {
            Some(code) => counts.add(code),
            None => misses += 1,
        }
    }
    if misses > 0 {
        debug!("{} messages could not be language-tagged", misses);
    }

    counts
        .most_common(config.top_languages)
        .into_iter()
        .map(|r| LanguageShare {
            language: language_name(&r.key),
            code: r.key,
            count: r.count,
        })
        .collect()
}

/// Deterministic uniform sample without replacement, kept in log order.
fn sample_pool<'a>(pool: &[&'a Message], size: usize, seed: u64) -> Vec<&'a Message> {
    if pool.len() <= size {
        return pool.to_vec();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut picked = index::sample(&mut rng, pool.len(), size).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| pool[i]).collect()
}
