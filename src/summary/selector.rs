use std::cmp::Ordering;

use crate::summary::config::SummaryRatio;
use crate::types::summary_bundle::{ScoredSentence, SelectedSentence};

/// Number of sentences to keep: `max(1, floor(total * ratio))`.
pub fn sentence_quota(total_sentences: usize, ratio: SummaryRatio) -> usize {
    let quota = (total_sentences as f64 * ratio.get()).floor() as usize;
    quota.max(1)
}

/// Keep the `k` highest-scoring sentences and return them in document order.
///
/// Ranking is by score descending, then position ascending, so among equal
/// scores the sentence seen first wins. Fewer than `k` candidates are all kept.
pub fn select_top(mut scored: Vec<ScoredSentence<'_>>, k: usize) -> Vec<SelectedSentence> {
    scored.sort_by(|a, b| {
        // Descending score
        let score_cmp = b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal);
        if score_cmp != Ordering::Equal {
            score_cmp
        } else {
            // Ascending position
            a.position().cmp(&b.position())
        }
    });

    debug_assert!(scored.windows(2).all(|w| {
        let a = &w[0];
        let b = &w[1];
        a.score > b.score || (a.score == b.score && a.position() <= b.position())
    }));

    scored.truncate(k);
    scored.sort_by_key(|s| s.position());

    scored
        .into_iter()
        .map(|s| SelectedSentence {
            position: s.sentence.position,
            text: s.sentence.text.clone(),
            score: s.score,
        })
        .collect()
}
