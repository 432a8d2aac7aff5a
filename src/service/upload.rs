use std::fmt;
use std::path::Path;

/// Document formats accepted at the boundary, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Txt,
}

impl FileKind {
    /// Classify a filename by its extension, case-insensitively.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(FileKind::Pdf)
        } else if lower.ends_with(".docx") {
            Some(FileKind::Docx)
        } else if lower.ends_with(".txt") {
            Some(FileKind::Txt)
        } else {
            None
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Pdf => ".pdf",
            FileKind::Docx => ".docx",
            FileKind::Txt => ".txt",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// An uploaded file: its declared name and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, naming the upload after the file name.
    pub fn from_path(path: &Path) -> Result<Self, std::io::Error> {
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "Path has no UTF-8 file name")
            })?
            .to_string();
        Ok(Self { filename, bytes })
    }
}
