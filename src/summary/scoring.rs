use std::borrow::Cow;

use crate::summary::frequency::WordFrequencyTable;
use crate::text::Sentence;
use crate::types::summary_bundle::ScoredSentence;

/// How a sentence's words are folded before the frequency lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFolding {
    Lowercase,
    /// Words were already normalized upstream.
    Preserve,
}

impl CaseFolding {
    pub fn fold<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match self {
            CaseFolding::Lowercase => Cow::Owned(word.to_lowercase()),
            CaseFolding::Preserve => Cow::Borrowed(word),
        }
    }
}

/// Sum the weights of every word of a sentence found in `table`.
///
/// Returns `None` when no word of the sentence is in the table.
pub fn score_sentence(
    sentence: &Sentence,
    table: &WordFrequencyTable,
    folding: CaseFolding,
) -> Option<f64> {
    let mut total: Option<f64> = None;
    for token in &sentence.tokens {
        if let Some(weight) = table.weight(&folding.fold(&token.text)) {
            *total.get_or_insert(0.0) += weight;
        }
    }
    total
}

/// Score every sentence. Sentences without any scorable word get no entry.
pub fn score_sentences<'a>(
    sentences: &'a [Sentence],
    table: &WordFrequencyTable,
    folding: CaseFolding,
) -> Vec<ScoredSentence<'a>> {
    sentences
        .iter()
        .filter_map(|sentence| {
            score_sentence(sentence, table, folding).map(|score| ScoredSentence { sentence, score })
        })
        .collect()
}
