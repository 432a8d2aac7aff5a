use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content hash of a document's text.
///
/// Used to identify a document in logs without logging its content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentVersion(String);

impl DocumentVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        DocumentVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex characters of the hash, enough to tell documents apart in logs.
    pub fn short(&self) -> &str {
        let hash = self.0.strip_prefix("sha256:").unwrap_or(&self.0);
        &hash[..hash.len().min(12)]
    }
}

impl std::fmt::Display for DocumentVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
