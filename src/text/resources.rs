//! Process-wide language resources.
//!
//! Loaded once on first use and read-only afterwards. Pipelines receive them
//! by reference; nothing here is reloaded per request.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Abbreviations that never end a sentence when followed by a period.
/// Stored lowercase and without the trailing period.
const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "rev", "gen", "col", "lt", "sgt",
    "capt", "gov", "sen", "rep", "hon", "vs", "e.g", "i.e", "cf", "approx", "fig", "figs", "vol",
    "vols", "pp", "dept", "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
];

static ENGLISH: Lazy<EnglishResources> = Lazy::new(EnglishResources::load);

/// Stop words and abbreviations for the English pipeline.
#[derive(Debug)]
pub struct EnglishResources {
    stop_words: FxHashSet<String>,
    abbreviations: FxHashSet<&'static str>,
}

impl EnglishResources {
    fn load() -> Self {
        let stop_words = get(LANGUAGE::English)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        let abbreviations = ENGLISH_ABBREVIATIONS.iter().copied().collect();

        tracing::debug!("loaded english language resources");
        Self {
            stop_words,
            abbreviations,
        }
    }

    /// Case-insensitive stop-word check.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// `word` is expected lowercase and without its trailing period.
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(word)
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }
}

/// Shared English resources, initialized on first access.
pub fn english() -> &'static EnglishResources {
    &ENGLISH
}
