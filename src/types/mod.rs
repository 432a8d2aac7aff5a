pub mod identifiers;
pub mod response;
pub mod summary_bundle;

pub use identifiers::DocumentVersion;
pub use response::{FailureBody, ResponseBody, ResponseStatus, SuccessBody, SummaryResponse};
pub use summary_bundle::{
    ScoredSentence, SelectedSentence, SelectionMetadata, SummaryError, SummaryResult,
};
