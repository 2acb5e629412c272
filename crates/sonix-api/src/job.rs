use std::fmt;

use serde::{Deserialize, Serialize};

use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    Transcription,
    Translation,
}

impl JobKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transcription => "transcription",
            Self::Translation => "translation",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote job status, classified from the free-form string the API returns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum JobStatus {
    Pending,
    Completed,
    Failed,
    Duplicate,
    Unrecognized(String),
}

impl JobStatus {
    #[must_use]
    pub fn from_remote(raw: &str) -> Self {
        match raw {
            "pending" | "preparing" | "queued" | "transcribing" | "translating" | "processing"
            | "in_progress" => Self::Pending,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            "duplicate" => Self::Duplicate,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Duplicate => "duplicate",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for JobStatus {
    fn from(raw: String) -> Self {
        match Self::from_remote(&raw) {
            Self::Unrecognized(_) => Self::Unrecognized(raw),
            known => known,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of one remote unit of work.
///
/// Translations have no id of their own; a translation job carries the id of
/// the transcription it translates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: String,
    pub kind: JobKind,
    pub status: JobStatus,
    pub language: Language,
    pub duplicate_of: Option<String>,
}

impl Job {
    #[must_use]
    pub fn transcription(id: impl Into<String>, status: JobStatus, language: Language) -> Self {
        Self {
            id: id.into(),
            kind: JobKind::Transcription,
            status,
            language,
            duplicate_of: None,
        }
    }

    #[must_use]
    pub fn translation(
        transcription_id: impl Into<String>,
        status: JobStatus,
        language: Language,
    ) -> Self {
        Self {
            id: transcription_id.into(),
            kind: JobKind::Translation,
            status,
            language,
            duplicate_of: None,
        }
    }

    #[must_use]
    pub fn with_duplicate_of(mut self, duplicate_of: Option<String>) -> Self {
        self.duplicate_of = duplicate_of;
        self
    }
}
