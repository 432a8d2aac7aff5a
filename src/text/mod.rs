//! Sentence segmentation and word tokenization.
//!
//! Each language has its own strategy:
//! - English uses Unicode sentence boundaries refined by an abbreviation pass,
//!   and Unicode word boundaries with punctuation tokens flagged.
//! - Arabic strips diacritics, splits sentences on the literal period and
//!   tokenizes with a script-aware word tokenizer.

pub mod arabic;
pub mod english;
pub mod resources;

use std::ops::Range;

/// A word or punctuation token inside a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub is_punct: bool,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let is_punct = is_punctuation(&text);
        Self { text, is_punct }
    }
}

/// A contiguous span of the segmented text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Zero-based index in document order.
    pub position: usize,
    /// Byte range into the segmented text.
    pub span: Range<usize>,
    /// Surface text, without surrounding whitespace.
    pub text: String,
    pub tokens: Vec<Token>,
}

/// Output of a segmenter.
///
/// `text` is the text the spans point into. For Arabic this is the
/// diacritic-stripped text, not the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub text: String,
    pub sentences: Vec<Sentence>,
    /// Sentence count the summary quota is taken from. Equals
    /// `sentences.len()` except for Arabic, where every period-delimited
    /// piece counts, blank ones included.
    pub sentence_count: usize,
}

impl Segmentation {
    pub fn new(text: String, sentences: Vec<Sentence>) -> Self {
        let sentence_count = sentences.len();
        Self {
            text,
            sentences,
            sentence_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }
}

/// A token is punctuation when it carries no letter or digit.
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_alphanumeric)
}

/// Narrow `span` so it excludes leading and trailing whitespace of `text[span]`.
/// Returns `None` when nothing but whitespace is left.
pub(crate) fn trim_span(text: &str, span: Range<usize>) -> Option<Range<usize>> {
    let slice = &text[span.clone()];
    let trimmed_start = slice.trim_start();
    if trimmed_start.is_empty() {
        return None;
    }
    let start = span.start + (slice.len() - trimmed_start.len());
    let end = start + trimmed_start.trim_end().len();
    Some(start..end)
}
