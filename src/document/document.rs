use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::DocumentVersion;
use super::language::Language;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// The text of one summarization request and its language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub version: DocumentVersion,
    pub language: Language,
    pub text: String,
}

impl Document {
    /// Ingest raw bytes into a Document.
    ///
    /// The bytes must be valid UTF-8; the version is computed on the decoded text.
    pub fn ingest(raw_content: Vec<u8>, language: Language) -> Result<Self, DocumentError> {
        let text = String::from_utf8(raw_content)?;
        Ok(Self::from_text(text, language))
    }

    pub fn from_text(text: impl Into<String>, language: Language) -> Self {
        let text = text.into();
        let version = DocumentVersion::from_content(text.as_bytes());

        Document {
            version,
            language,
            text,
        }
    }
}
