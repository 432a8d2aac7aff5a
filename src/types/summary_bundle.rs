use serde::{Deserialize, Serialize};

use crate::text::Sentence;

/// A sentence kept in the summary.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    /// Zero-based index of the sentence in the segmented document.
    pub position: usize,
    /// Verbatim surface text of the sentence.
    pub text: String,
    pub score: f64,
}

/// Metadata describing the outcome of the selection process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionMetadata {
    pub language: String,
    pub ratio: f64,

    /// Sentences produced by segmentation, scored or not.
    pub sentences_considered: usize,
    /// Sentences with at least one word found in the frequency table.
    pub sentences_scored: usize,
    pub sentences_selected: usize,
}

/// The final result of summarizing one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Selected sentences in original document order.
    pub sentences: Vec<SelectedSentence>,
    pub selection: SelectionMetadata,
}

impl SummaryResult {
    pub fn empty(language: &str, ratio: f64, sentences_considered: usize) -> Self {
        Self {
            sentences: Vec::new(),
            selection: SelectionMetadata {
                language: language.to_string(),
                ratio,
                sentences_considered,
                sentences_scored: 0,
                sentences_selected: 0,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Selected sentences joined by a single space. Line breaks inside a
    /// sentence become single spaces too.
    pub fn render(&self) -> String {
        self.sentences
            .iter()
            .flat_map(|s| s.text.lines())
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Internal: a sentence that has been scored but not yet selected.
/// Holds a reference to the segmented sentence to avoid cloning its text prematurely.
#[derive(Debug, Clone)]
pub struct ScoredSentence<'a> {
    pub sentence: &'a Sentence,
    pub score: f64,
}

impl ScoredSentence<'_> {
    pub fn position(&self) -> usize {
        self.sentence.position
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("Invalid summary ratio: {0} (expected 0 < ratio <= 1)")]
    InvalidRatio(f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
