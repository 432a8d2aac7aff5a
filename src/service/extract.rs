use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use thiserror::Error;

use super::upload::FileKind;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("No extractor available for {0} files")]
    UnsupportedFormat(FileKind),
    #[error("Extraction failed: {0}")]
    Failed(String),
}

/// Turns the bytes of an upload into plain text.
///
/// Implementations for binary formats must follow the same layout:
/// PDF pages concatenated in page order, DOCX paragraphs each followed by `\n`.
pub trait TextExtractor {
    fn extract(&self, kind: FileKind, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Decodes `.txt` uploads as UTF-8. Binary formats are not handled.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, kind: FileKind, bytes: &[u8]) -> Result<String, ExtractionError> {
        match kind {
            FileKind::Txt => Ok(String::from_utf8(bytes.to_vec())?),
            FileKind::Pdf | FileKind::Docx => Err(ExtractionError::UnsupportedFormat(kind)),
        }
    }
}

/// Extracts all three upload formats.
///
/// PDFs go through `pdf-extract` page by page, DOCX bodies through
/// `docx-rs`, and `.txt` is decoded as UTF-8.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentExtractor;

impl TextExtractor for DocumentExtractor {
    fn extract(&self, kind: FileKind, bytes: &[u8]) -> Result<String, ExtractionError> {
        match kind {
            FileKind::Pdf => extract_pdf(bytes),
            FileKind::Docx => extract_docx(bytes),
            FileKind::Txt => PlainTextExtractor.extract(kind, bytes),
        }
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractionError::Failed(format!("PDF extraction error: {e}")))?;
    tracing::debug!(pages = pages.len(), "extracted pdf");
    Ok(join_pages(pages))
}

/// Top-level body paragraphs only; tables and text boxes are skipped.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| ExtractionError::Failed(format!("Word document parsing error: {e}")))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        })
        .map(|paragraph| {
            paragraph
                .children
                .iter()
                .filter_map(|child| match child {
                    ParagraphChild::Run(run) => Some(run),
                    _ => None,
                })
                .flat_map(|run| &run.children)
                .filter_map(|child| match child {
                    RunChild::Text(text) => Some(text.text.as_str()),
                    _ => None,
                })
                .collect()
        })
        .collect();

    tracing::debug!(paragraphs = paragraphs.len(), "extracted docx");
    Ok(join_paragraphs(paragraphs))
}

/// Join page texts in page order, as PDF extractors must.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pages.into_iter().fold(String::new(), |mut text, page| {
        text.push_str(page.as_ref());
        text
    })
}

/// Join paragraphs, each followed by a newline, as DOCX extractors must.
pub fn join_paragraphs<I, S>(paragraphs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paragraphs.into_iter().fold(String::new(), |mut text, para| {
        text.push_str(para.as_ref());
        text.push('\n');
        text
    })
}
