//! Response payloads of the Sonix REST API.

use serde::{Deserialize, Serialize};

use crate::job::{Job, JobStatus};
use crate::language::Language;

/// Returned by `POST /transcriptions`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub status: JobStatus,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub public_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Folder {
    pub name: String,
    pub id: String,
}

/// Returned by `GET /transcriptions/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionStatusResponse {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub video: bool,
    pub status: JobStatus,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub duplicate_media_id: Option<String>,
    #[serde(default)]
    pub folder: Option<Folder>,
}

/// Returned by both translation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationStatusResponse {
    #[serde(default)]
    pub language: Option<String>,
    pub status: JobStatus,
}

impl UploadResponse {
    #[must_use]
    pub fn into_job(self, language: Language) -> Job {
        Job::transcription(self.id, self.status, language)
    }
}

impl TranscriptionStatusResponse {
    #[must_use]
    pub fn into_job(self, language: Language) -> Job {
        let duplicate_of = self.duplicate_media_id.filter(|id| !id.is_empty());
        Job::transcription(self.id, self.status, language).with_duplicate_of(duplicate_of)
    }
}

impl TranslationStatusResponse {
    #[must_use]
    pub fn into_job(self, transcription_id: &str, language: Language) -> Job {
        Job::translation(transcription_id, self.status, language)
    }
}
