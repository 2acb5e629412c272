use serde::Serialize;

use crate::error::SonixError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Succeeded,
    Failed,
}

/// Outcome of one transcription or translation workflow run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResult {
    pub job_id: String,
    pub text: String,
    pub status: WorkflowStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl WorkflowResult {
    #[must_use]
    pub fn succeeded(job_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            text: text.into(),
            status: WorkflowStatus::Succeeded,
            error_message: None,
        }
    }

    #[must_use]
    pub fn failed(job_id: impl Into<String>, error: &SonixError) -> Self {
        Self {
            job_id: job_id.into(),
            text: String::new(),
            status: WorkflowStatus::Failed,
            error_message: Some(error.to_string()),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == WorkflowStatus::Succeeded
    }
}
