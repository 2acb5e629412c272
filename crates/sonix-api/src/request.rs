use std::path::{Path, PathBuf};

use crate::error::SonixError;
use crate::language::Language;

/// Where the audio to transcribe comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    Remote(String),
    Local(PathBuf),
    Both { url: String, path: PathBuf },
}

impl AudioSource {
    /// Build a source from optional URL and path, requiring at least one.
    ///
    /// Empty strings count as absent.
    ///
    /// # Errors
    ///
    /// Returns `SonixError::MissingAudioSource` when neither is given.
    pub fn from_parts(url: Option<String>, path: Option<PathBuf>) -> Result<Self, SonixError> {
        let url = url.filter(|u| !u.trim().is_empty());
        let path = path.filter(|p| !p.as_os_str().is_empty());
        match (url, path) {
            (Some(url), Some(path)) => Ok(Self::Both { url, path }),
            (Some(url), None) => Ok(Self::Remote(url)),
            (None, Some(path)) => Ok(Self::Local(path)),
            (None, None) => Err(SonixError::MissingAudioSource),
        }
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Remote(url) | Self::Both { url, .. } => Some(url),
            Self::Local(_) => None,
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Local(path) | Self::Both { path, .. } => Some(path),
            Self::Remote(_) => None,
        }
    }
}

/// Caller input for a transcription workflow.
///
/// The URL and path are kept loose here and validated once when the
/// workflow starts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptionRequest {
    pub audio_url: Option<String>,
    pub audio_file_path: Option<PathBuf>,
    pub file_name: Option<String>,
    pub language: Language,
}

impl TranscriptionRequest {
    #[must_use]
    pub fn from_url(url: impl Into<String>, language: Language) -> Self {
        Self {
            audio_url: Some(url.into()),
            language,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_file(path: impl Into<PathBuf>, language: Language) -> Self {
        Self {
            audio_file_path: Some(path.into()),
            language,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// # Errors
    ///
    /// Returns `SonixError::MissingAudioSource` when neither URL nor path is set.
    pub fn source(&self) -> Result<AudioSource, SonixError> {
        AudioSource::from_parts(self.audio_url.clone(), self.audio_file_path.clone())
    }
}

#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub transcription_job_id: String,
    pub language: Language,
}

impl TranslationRequest {
    #[must_use]
    pub fn new(transcription_job_id: impl Into<String>, language: Language) -> Self {
        Self {
            transcription_job_id: transcription_job_id.into(),
            language,
        }
    }
}
