use std::collections::BTreeMap;

/// Raw occurrence counts per normalized word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: BTreeMap<String, usize>,
}

impl WordCounts {
    pub fn count<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = BTreeMap::new();
        for word in words {
            *counts.entry(word.into()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Divide every count by the largest one.
    /// The most frequent words get a weight of exactly 1.0.
    pub fn normalize(self) -> WordFrequencyTable {
        let max = self.max_count();
        if max == 0 {
            return WordFrequencyTable::default();
        }
        let max = max as f64;

        let weights = self
            .counts
            .into_iter()
            .map(|(word, count)| (word, count as f64 / max))
            .collect();

        WordFrequencyTable { weights }
    }
}

/// Normalized word weights in `[0, 1]` for one document.
///
/// Built once per document and dropped after scoring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordFrequencyTable {
    weights: BTreeMap<String, f64>,
}

impl WordFrequencyTable {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordCounts::count(words).normalize()
    }

    pub fn weight(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    pub fn max_weight(&self) -> Option<f64> {
        self.weights.values().copied().reduce(f64::max)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.weights.iter()
    }
}
