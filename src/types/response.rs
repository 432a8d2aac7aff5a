use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
}

/// Body of a successful summarization.
/// Field names and order are part of the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessBody {
    pub status: ResponseStatus,
    /// Cleaned summary text.
    pub summary: String,
    /// Length of the cleaned summary, in characters.
    #[serde(rename = "lengthSUMMARY")]
    pub length_summary: usize,
    /// Length of the extracted document text, in characters.
    #[serde(rename = "lengthTEXT")]
    pub length_text: usize,
    pub language: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureBody {
    pub status: ResponseStatus,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Success(SuccessBody),
    Failure(FailureBody),
}

/// A response ready to be handed to a transport: status code plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl SummaryResponse {
    pub fn success(body: SuccessBody) -> Self {
        Self {
            status_code: 200,
            body: ResponseBody::Success(body),
        }
    }

    pub fn failure(status_code: u16, error: impl Into<String>) -> Self {
        Self {
            status_code,
            body: ResponseBody::Failure(FailureBody {
                status: ResponseStatus::Fail,
                error: error.into(),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.body, ResponseBody::Success(_))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.body)
    }
}
