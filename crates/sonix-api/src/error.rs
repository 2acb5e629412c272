use std::path::PathBuf;
use std::time::Duration;

use crate::job::JobKind;

/// Dashboard where failed jobs can be inspected.
pub const OPERATOR_PORTAL_URL: &str = "https://my.sonix.ai";

#[derive(Debug, thiserror::Error)]
pub enum SonixError {
    #[error("either an audio URL or an audio file path must be provided")]
    MissingAudioSource,

    #[error("unsupported language code: {0}")]
    UnsupportedLanguage(String),

    #[error("{kind} timed out after {}s", .waited.as_secs())]
    Timeout { kind: JobKind, waited: Duration },

    #[error("{kind} job {job_id} failed; check {portal} for details", portal = OPERATOR_PORTAL_URL)]
    RemoteFailure { kind: JobKind, job_id: String },

    #[error("job {job_id} reported as duplicate without a duplicate_media_id")]
    DuplicateWithoutReference { job_id: String },

    #[error("{kind} job {job_id} kept reporting unrecognized status {status:?}")]
    UnrecognizedStatus {
        kind: JobKind,
        job_id: String,
        status: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to read audio file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SonixError {
    /// Whether the error came from talking to the remote service rather than
    /// from the job itself.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Json(_) | Self::Api { .. } | Self::InvalidUrl(_) | Self::Io { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SonixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_failure_mentions_portal() {
        let err = SonixError::RemoteFailure {
            kind: JobKind::Transcription,
            job_id: "abc".into(),
        };
        assert_eq!(
            err.to_string(),
            "transcription job abc failed; check https://my.sonix.ai for details"
        );
    }

    #[test]
    fn timeout_display_uses_whole_seconds() {
        let err = SonixError::Timeout {
            kind: JobKind::Translation,
            waited: Duration::from_millis(90_500),
        };
        assert_eq!(err.to_string(), "translation timed out after 90s");
    }

    #[test]
    fn io_error_names_path() {
        let err = SonixError::Io {
            path: PathBuf::from("/tmp/missing.mp3"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read audio file /tmp/missing.mp3: not found"
        );
        assert!(err.is_transport());
    }

    #[test]
    fn job_errors_are_not_transport() {
        assert!(!SonixError::MissingAudioSource.is_transport());
        assert!(
            !SonixError::DuplicateWithoutReference {
                job_id: "x".into()
            }
            .is_transport()
        );
        assert!(
            SonixError::Api {
                status: 500,
                body: String::new()
            }
            .is_transport()
        );
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: SonixError = json_err.into();
        assert!(matches!(err, SonixError::Json(_)));
    }
}
