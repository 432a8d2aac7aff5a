use serde::{Deserialize, Serialize};

use crate::types::summary_bundle::SummaryError;

pub const DEFAULT_RATIO: f64 = 0.3;

/// Fraction of a document's sentences kept in its summary.
/// Always finite and in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SummaryRatio(f64);

impl SummaryRatio {
    pub fn new(ratio: f64) -> Result<Self, SummaryError> {
        if ratio.is_finite() && ratio > 0.0 && ratio <= 1.0 {
            Ok(Self(ratio))
        } else {
            Err(SummaryError::InvalidRatio(ratio))
        }
    }

    /// Keep every sentence.
    pub fn full() -> Self {
        Self(1.0)
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for SummaryRatio {
    fn default() -> Self {
        Self(DEFAULT_RATIO)
    }
}

/// Summarizer settings with explicit defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    pub version: String,
    pub ratio: f64,
}

impl SummarizerConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            ratio: DEFAULT_RATIO,
        }
    }

    /// Parse a JSON config. Missing fields are an error; the ratio is validated.
    pub fn from_json(raw: &str) -> Result<Self, SummaryError> {
        let config: SummarizerConfig = serde_json::from_str(raw)?;
        config.summary_ratio()?;
        Ok(config)
    }

    pub fn summary_ratio(&self) -> Result<SummaryRatio, SummaryError> {
        SummaryRatio::new(self.ratio)
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self::v0()
    }
}
