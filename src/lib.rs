//! Deterministic extractive summarization for English and Arabic documents.
//!
//! `summary-core` scores every sentence of a document by the normalized
//! frequencies of its words, keeps the best `max(1, floor(n * ratio))`
//! sentences and returns them in document order. Identical inputs always
//! produce identical outputs, byte-for-byte.
//!
//! ```
//! use summary_core::summary::{summarize, SummaryRatio};
//!
//! let ratio = SummaryRatio::new(0.34).unwrap();
//! let outcome = summarize("The cat sat. The cat sat on the mat. Cats are great pets.", "en", ratio);
//! assert_eq!(outcome.render(), "The cat sat on the mat.");
//! ```

pub mod document;
mod logging;
pub mod service;
pub mod summary;
pub mod text;
pub mod types;

pub use logging::setup_logging;
