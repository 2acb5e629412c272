use std::future::Future;

use crate::error::SonixError;
use crate::job::Job;
use crate::language::Language;
use crate::request::AudioSource;

/// The five remote operations the job poller drives.
///
/// Every call is an independent request; implementations hold no per-job state.
pub trait SpeechApi: Send + Sync {
    /// Upload audio for transcription and return the freshly created job.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the upload fails or the response is malformed.
    fn submit_transcription(
        &self,
        source: &AudioSource,
        language: Language,
        name: Option<&str>,
    ) -> impl Future<Output = Result<Job, SonixError>> + Send;

    /// # Errors
    ///
    /// Returns a transport error if the status cannot be fetched.
    fn transcription_status(
        &self,
        job_id: &str,
        language: Language,
    ) -> impl Future<Output = Result<Job, SonixError>> + Send;

    /// Fetch the plain-text transcript of a job in the given language.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the transcript cannot be fetched.
    fn transcript(
        &self,
        job_id: &str,
        language: Language,
    ) -> impl Future<Output = Result<String, SonixError>> + Send;

    /// # Errors
    ///
    /// Returns a transport error if the translation cannot be queued.
    fn submit_translation(
        &self,
        job_id: &str,
        language: Language,
    ) -> impl Future<Output = Result<Job, SonixError>> + Send;

    /// # Errors
    ///
    /// Returns a transport error if the status cannot be fetched.
    fn translation_status(
        &self,
        job_id: &str,
        language: Language,
    ) -> impl Future<Output = Result<Job, SonixError>> + Send;
}
