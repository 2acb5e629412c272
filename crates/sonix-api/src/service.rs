//! Transcription and translation workflows: submit, poll, fetch.

use tracing::Instrument as _;

use crate::api::SpeechApi;
use crate::error::SonixError;
use crate::poller::{JobPoller, PollPolicy};
use crate::request::{TranscriptionRequest, TranslationRequest};
use crate::result::WorkflowResult;

/// Runs one submit/poll/fetch cycle per call.
///
/// Holds no per-job state, so a single service can drive any number of
/// concurrent workflows.
#[derive(Debug, Clone)]
pub struct SpeechService<A> {
    api: A,
    poller: JobPoller,
}

impl<A: SpeechApi> SpeechService<A> {
    #[must_use]
    pub fn new(api: A, policy: PollPolicy) -> Self {
        Self {
            api,
            poller: JobPoller::new(policy),
        }
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn policy(&self) -> &PollPolicy {
        self.poller.policy()
    }

    /// Transcribe audio from a URL and/or local file.
    ///
    /// Never fails: every error is reported through the returned result,
    /// which carries the best-known job id (empty if submission never
    /// completed).
    pub async fn run_transcription(&self, request: TranscriptionRequest) -> WorkflowResult {
        let mut known_id = String::new();
        let span = tracing::info_span!("transcription", language = %request.language);
        match self.transcribe(&request, &mut known_id).instrument(span).await {
            Ok((job_id, text)) => WorkflowResult::succeeded(job_id, text),
            Err(e) => {
                tracing::warn!(job_id = %known_id, "transcription failed: {e}");
                WorkflowResult::failed(known_id, &e)
            }
        }
    }

    /// Translate an existing transcription into `request.language`.
    pub async fn run_translation(&self, request: TranslationRequest) -> WorkflowResult {
        let span = tracing::info_span!(
            "translation",
            job_id = %request.transcription_job_id,
            language = %request.language
        );
        match self.translate(&request).instrument(span).await {
            Ok(text) => WorkflowResult::succeeded(request.transcription_job_id, text),
            Err(e) => {
                tracing::warn!(job_id = %request.transcription_job_id, "translation failed: {e}");
                WorkflowResult::failed(request.transcription_job_id, &e)
            }
        }
    }

    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
        known_id: &mut String,
    ) -> Result<(String, String), SonixError> {
        let source = request.source()?;
        let job = self
            .api
            .submit_transcription(&source, request.language, request.file_name.as_deref())
            .await?;
        tracing::info!(job_id = %job.id, status = %job.status, "transcription submitted");
        known_id.clone_from(&job.id);

        let resolution = self.poller.wait(&self.api, job).await?;
        known_id.clone_from(&resolution.result_id);

        let text = self
            .api
            .transcript(&resolution.result_id, request.language)
            .await?;
        tracing::info!(
            job_id = %resolution.result_id,
            polls = resolution.polls,
            redirected = resolution.redirected,
            "transcription completed"
        );
        Ok((resolution.result_id, text))
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, SonixError> {
        let job = self
            .api
            .submit_translation(&request.transcription_job_id, request.language)
            .await?;
        tracing::info!(status = %job.status, "translation queued");

        let resolution = self.poller.wait(&self.api, job).await?;
        let text = self
            .api
            .transcript(&request.transcription_job_id, request.language)
            .await?;
        tracing::info!(polls = resolution.polls, "translation completed");
        Ok(text)
    }
}
