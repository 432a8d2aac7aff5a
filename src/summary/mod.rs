pub mod cleaning;
pub mod config;
pub mod frequency;
pub mod scoring;
pub mod selector;

use std::fmt;

use crate::document::{Document, Language};
use crate::text::{self, resources, Segmentation, Sentence};
use crate::types::summary_bundle::{ScoredSentence, SelectionMetadata, SummaryError, SummaryResult};
pub use cleaning::clean_response;
pub use config::{SummarizerConfig, SummaryRatio, DEFAULT_RATIO};
pub use frequency::{WordCounts, WordFrequencyTable};
pub use scoring::{score_sentence, score_sentences, CaseFolding};
pub use selector::{select_top, sentence_quota};

/// Rendered text of [`SummaryOutcome::UnsupportedLanguage`].
pub const UNSUPPORTED_LANGUAGE: &str = "Language not supported";

/// A language-specific summarization pipeline.
///
/// English counts only non-stop-word, non-punctuation tokens and scores with
/// lowercased words. Arabic counts every token of the diacritic-stripped text
/// and scores words as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    English,
    Arabic,
}

impl Pipeline {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => Pipeline::English,
            Language::Arabic => Pipeline::Arabic,
        }
    }

    pub fn language(&self) -> Language {
        match self {
            Pipeline::English => Language::English,
            Pipeline::Arabic => Language::Arabic,
        }
    }

    pub fn segment(&self, text: &str) -> Segmentation {
        match self {
            Pipeline::English => text::english::segment(text, resources::english()),
            Pipeline::Arabic => text::arabic::segment(text),
        }
    }

    pub fn build_frequencies(&self, segmentation: &Segmentation) -> WordFrequencyTable {
        match self {
            Pipeline::English => {
                let resources = resources::english();
                let words = segmentation
                    .sentences
                    .iter()
                    .flat_map(|s| &s.tokens)
                    .filter(|t| !t.is_punct)
                    .map(|t| t.text.to_lowercase())
                    .filter(|w| !resources.is_stop_word(w));
                WordFrequencyTable::from_words(words)
            }
            // Whole stripped text, tokenized apart from the sentences.
            Pipeline::Arabic => {
                let words = text::arabic::tokenize(&segmentation.text)
                    .into_iter()
                    .map(|t| t.text);
                WordFrequencyTable::from_words(words)
            }
        }
    }

    pub fn score<'a>(
        &self,
        sentences: &'a [Sentence],
        table: &WordFrequencyTable,
    ) -> Vec<ScoredSentence<'a>> {
        let folding = match self {
            Pipeline::English => CaseFolding::Lowercase,
            Pipeline::Arabic => CaseFolding::Preserve,
        };
        score_sentences(sentences, table, folding)
    }

    /// Segment, count, score and select.
    pub fn run(&self, text: &str, ratio: SummaryRatio) -> SummaryResult {
        let language = self.language().code();
        let segmentation = self.segment(text);
        let total = segmentation.sentence_count;

        let table = self.build_frequencies(&segmentation);
        if table.is_empty() {
            tracing::debug!(language, sentences = total, "empty vocabulary, nothing to summarize");
            return SummaryResult::empty(language, ratio.get(), total);
        }

        let scored = self.score(&segmentation.sentences, &table);
        let sentences_scored = scored.len();
        let k = sentence_quota(total, ratio);
        let selected = select_top(scored, k);

        tracing::debug!(
            language,
            sentences = total,
            vocabulary = table.len(),
            scored = sentences_scored,
            selected = selected.len(),
            "summarized text"
        );

        SummaryResult {
            selection: SelectionMetadata {
                language: language.to_string(),
                ratio: ratio.get(),
                sentences_considered: total,
                sentences_scored,
                sentences_selected: selected.len(),
            },
            sentences: selected,
        }
    }
}

/// Summarizes documents with a fixed ratio.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    ratio: SummaryRatio,
}

impl Summarizer {
    pub fn new(config: &SummarizerConfig) -> Result<Self, SummaryError> {
        Ok(Self {
            ratio: config.summary_ratio()?,
        })
    }

    pub fn with_ratio(ratio: SummaryRatio) -> Self {
        Self { ratio }
    }

    pub fn ratio(&self) -> SummaryRatio {
        self.ratio
    }

    pub fn summarize(&self, document: &Document) -> SummaryResult {
        let result = self.summarize_text(&document.text, document.language);
        tracing::debug!(
            document_version = document.version.short(),
            selected = result.selection.sentences_selected,
            "summarized document"
        );
        result
    }

    pub fn summarize_text(&self, text: &str, language: Language) -> SummaryResult {
        Pipeline::for_language(language).run(text, self.ratio)
    }
}

/// Result of summarizing under a raw language tag.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    Summary(SummaryResult),
    UnsupportedLanguage(String),
}

impl SummaryOutcome {
    pub fn render(&self) -> String {
        match self {
            SummaryOutcome::Summary(result) => result.render(),
            SummaryOutcome::UnsupportedLanguage(_) => UNSUPPORTED_LANGUAGE.to_string(),
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, SummaryOutcome::Summary(_))
    }

    pub fn into_result(self) -> Option<SummaryResult> {
        match self {
            SummaryOutcome::Summary(result) => Some(result),
            SummaryOutcome::UnsupportedLanguage(_) => None,
        }
    }
}

impl fmt::Display for SummaryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Summarize `text` in the language named by `tag` (`"en"` or `"ar"`).
///
/// Any other tag yields [`SummaryOutcome::UnsupportedLanguage`]; this never fails.
pub fn summarize(text: &str, tag: &str, ratio: SummaryRatio) -> SummaryOutcome {
    match Language::from_tag(tag) {
        Some(language) => SummaryOutcome::Summary(Pipeline::for_language(language).run(text, ratio)),
        None => SummaryOutcome::UnsupportedLanguage(tag.to_string()),
    }
}
