//! Request boundary around the summarizer.
//!
//! Takes an upload, checks its extension, extracts text, detects the
//! language, summarizes, cleans the output and wraps it in a response
//! envelope. Rejections become 400 responses; anything else that fails
//! becomes a generic 500 whose details only reach the logs.

pub mod detect;
pub mod extract;
pub mod upload;

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use crate::document::{Document, Language};
use crate::summary::{clean_response, Summarizer, UNSUPPORTED_LANGUAGE};
use crate::types::response::{ResponseStatus, SuccessBody, SummaryResponse};
pub use detect::{LanguageDetector, WhatlangDetector};
pub use extract::{
    join_pages, join_paragraphs, DocumentExtractor, ExtractionError, PlainTextExtractor, TextExtractor,
};
pub use upload::{FileKind, Upload};

/// Message returned for every internal failure.
pub const GENERIC_FAILURE: &str = "Something went wrong ,please try again.";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("No file uploaded or selected")]
    NoFile,
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),
    #[error("Text extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("Internal failure: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Rejections of the input, as opposed to failures while processing it.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ServiceError::NoFile
                | ServiceError::UnsupportedFileType(_)
                | ServiceError::UnsupportedLanguage(_)
        )
    }

    pub fn status_code(&self) -> u16 {
        if self.is_rejection() {
            400
        } else {
            500
        }
    }

    /// Message safe to return to the caller.
    pub fn public_message(&self) -> &'static str {
        match self {
            ServiceError::NoFile => "No file uploaded or selected",
            ServiceError::UnsupportedFileType(_) => "Unsupported file type",
            ServiceError::UnsupportedLanguage(_) => UNSUPPORTED_LANGUAGE,
            ServiceError::Extraction(_) | ServiceError::Internal(_) => GENERIC_FAILURE,
        }
    }
}

pub struct SummarizeService<E, D> {
    summarizer: Summarizer,
    extractor: E,
    detector: D,
}

impl Default for SummarizeService<DocumentExtractor, WhatlangDetector> {
    fn default() -> Self {
        Self {
            summarizer: Summarizer::default(),
            extractor: DocumentExtractor,
            detector: WhatlangDetector,
        }
    }
}

impl<E, D> SummarizeService<E, D>
where
    E: TextExtractor,
    D: LanguageDetector,
{
    pub fn new(summarizer: Summarizer, extractor: E, detector: D) -> Self {
        Self {
            summarizer,
            extractor,
            detector,
        }
    }

    /// Handle one request. Never panics; every outcome is a response.
    pub fn handle(&self, upload: Option<Upload>) -> SummaryResponse {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.process(upload)))
            .unwrap_or_else(|payload| Err(ServiceError::Internal(panic_message(payload.as_ref()))));

        match outcome {
            Ok(body) => {
                tracing::info!(
                    filename = %body.filename,
                    language = %body.language,
                    length_text = body.length_text,
                    length_summary = body.length_summary,
                    "summarized upload"
                );
                SummaryResponse::success(body)
            }
            Err(err) if err.is_rejection() => {
                tracing::warn!(error = %err, "rejected upload");
                SummaryResponse::failure(err.status_code(), err.public_message())
            }
            Err(err) => {
                tracing::error!(error = %err, "summarization failed");
                SummaryResponse::failure(err.status_code(), err.public_message())
            }
        }
    }

    fn process(&self, upload: Option<Upload>) -> Result<SuccessBody, ServiceError> {
        let upload = upload
            .filter(|u| !u.filename.is_empty())
            .ok_or(ServiceError::NoFile)?;

        let filename = upload.filename.to_lowercase();
        let kind = FileKind::from_filename(&filename)
            .ok_or_else(|| ServiceError::UnsupportedFileType(filename.clone()))?;

        let text = self.extractor.extract(kind, &upload.bytes)?;

        let tag = self.detector.detect(&text).unwrap_or_default();
        let language =
            Language::from_tag(&tag).ok_or_else(|| ServiceError::UnsupportedLanguage(tag.clone()))?;

        let document = Document::from_text(text, language);
        let result = self.summarizer.summarize(&document);
        let summary = clean_response(&result.render());

        Ok(SuccessBody {
            status: ResponseStatus::Success,
            length_summary: summary.chars().count(),
            length_text: document.text.chars().count(),
            summary,
            language: language.code().to_string(),
            filename,
        })
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "panic".to_string()
    }
}
