pub mod document;
pub mod language;

pub use crate::types::identifiers::DocumentVersion;
pub use document::{Document, DocumentError};
pub use language::Language;
