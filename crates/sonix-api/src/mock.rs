//! Scripted in-memory [`SpeechApi`] for tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::api::SpeechApi;
use crate::error::SonixError;
use crate::job::{Job, JobStatus};
use crate::language::Language;
use crate::request::AudioSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    SubmitTranscription {
        source: AudioSource,
        language: Language,
        name: Option<String>,
    },
    TranscriptionStatus(String),
    Transcript {
        job_id: String,
        language: Language,
    },
    SubmitTranslation {
        job_id: String,
        language: Language,
    },
    TranslationStatus {
        job_id: String,
        language: Language,
    },
}

#[derive(Debug, Default)]
struct MockState {
    transcription_statuses: VecDeque<JobStatus>,
    translation_statuses: VecDeque<JobStatus>,
    calls: Vec<MockCall>,
}

/// Returns scripted statuses in order and `Pending` once the script runs out.
#[derive(Debug, Clone)]
pub struct MockSpeechApi {
    state: Arc<Mutex<MockState>>,
    pub job_id: String,
    pub initial_status: JobStatus,
    pub duplicate_of: Option<String>,
    pub default_transcript: String,
    transcripts: HashMap<(String, Language), String>,
    pub fail_submit: bool,
    pub fail_status: bool,
    pub fail_transcript: bool,
}

impl Default for MockSpeechApi {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
            job_id: "mock-job".into(),
            initial_status: JobStatus::Pending,
            duplicate_of: None,
            default_transcript: "mock transcript".into(),
            transcripts: HashMap::new(),
            fail_submit: false,
            fail_status: false,
            fail_transcript: false,
        }
    }
}

impl MockSpeechApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_job_id(mut self, id: impl Into<String>) -> Self {
        self.job_id = id.into();
        self
    }

    #[must_use]
    pub fn with_initial_status(mut self, status: JobStatus) -> Self {
        self.initial_status = status;
        self
    }

    #[must_use]
    pub fn with_transcription_statuses(self, statuses: impl IntoIterator<Item = JobStatus>) -> Self {
        self.state
            .lock()
            .unwrap()
            .transcription_statuses
            .extend(statuses);
        self
    }

    #[must_use]
    pub fn with_translation_statuses(self, statuses: impl IntoIterator<Item = JobStatus>) -> Self {
        self.state
            .lock()
            .unwrap()
            .translation_statuses
            .extend(statuses);
        self
    }

    /// Reference reported alongside every transcription status.
    #[must_use]
    pub fn with_duplicate_of(mut self, id: impl Into<String>) -> Self {
        self.duplicate_of = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_transcript(
        mut self,
        job_id: impl Into<String>,
        language: Language,
        text: impl Into<String>,
    ) -> Self {
        self.transcripts.insert((job_id.into(), language), text.into());
        self
    }

    #[must_use]
    pub fn failing_submit(mut self) -> Self {
        self.fail_submit = true;
        self
    }

    #[must_use]
    pub fn failing_status(mut self) -> Self {
        self.fail_status = true;
        self
    }

    #[must_use]
    pub fn failing_transcript(mut self) -> Self {
        self.fail_transcript = true;
        self
    }

    #[must_use]
    pub fn calls(&self) -> Vec<MockCall> {
        self.state.lock().unwrap().calls.clone()
    }

    #[must_use]
    pub fn submit_calls(&self) -> usize {
        self.count(|c| {
            matches!(
                c,
                MockCall::SubmitTranscription { .. } | MockCall::SubmitTranslation { .. }
            )
        })
    }

    #[must_use]
    pub fn status_calls(&self) -> usize {
        self.count(|c| {
            matches!(
                c,
                MockCall::TranscriptionStatus(_) | MockCall::TranslationStatus { .. }
            )
        })
    }

    /// Job id and language of every transcript fetch, in order.
    #[must_use]
    pub fn transcript_fetches(&self) -> Vec<(String, Language)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                MockCall::Transcript { job_id, language } => Some((job_id, language)),
                _ => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&MockCall) -> bool) -> usize {
        self.state.lock().unwrap().calls.iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: MockCall) {
        self.state.lock().unwrap().calls.push(call);
    }

    fn transport_error() -> SonixError {
        SonixError::Api {
            status: 503,
            body: "mock transport error".into(),
        }
    }
}

impl SpeechApi for MockSpeechApi {
    async fn submit_transcription(
        &self,
        source: &AudioSource,
        language: Language,
        name: Option<&str>,
    ) -> Result<Job, SonixError> {
        self.record(MockCall::SubmitTranscription {
            source: source.clone(),
            language,
            name: name.map(str::to_owned),
        });
        if self.fail_submit {
            return Err(Self::transport_error());
        }
        Ok(Job::transcription(
            self.job_id.clone(),
            self.initial_status.clone(),
            language,
        ))
    }

    async fn transcription_status(&self, job_id: &str, language: Language) -> Result<Job, SonixError> {
        self.record(MockCall::TranscriptionStatus(job_id.to_owned()));
        if self.fail_status {
            return Err(Self::transport_error());
        }
        let status = self
            .state
            .lock()
            .unwrap()
            .transcription_statuses
            .pop_front()
            .unwrap_or(JobStatus::Pending);
        Ok(Job::transcription(job_id, status, language).with_duplicate_of(self.duplicate_of.clone()))
    }

    async fn transcript(&self, job_id: &str, language: Language) -> Result<String, SonixError> {
        self.record(MockCall::Transcript {
            job_id: job_id.to_owned(),
            language,
        });
        if self.fail_transcript {
            return Err(Self::transport_error());
        }
        Ok(self
            .transcripts
            .get(&(job_id.to_owned(), language))
            .cloned()
            .unwrap_or_else(|| self.default_transcript.clone()))
    }

    async fn submit_translation(&self, job_id: &str, language: Language) -> Result<Job, SonixError> {
        self.record(MockCall::SubmitTranslation {
            job_id: job_id.to_owned(),
            language,
        });
        if self.fail_submit {
            return Err(Self::transport_error());
        }
        Ok(Job::translation(job_id, self.initial_status.clone(), language))
    }

    async fn translation_status(&self, job_id: &str, language: Language) -> Result<Job, SonixError> {
        self.record(MockCall::TranslationStatus {
            job_id: job_id.to_owned(),
            language,
        });
        if self.fail_status {
            return Err(Self::transport_error());
        }
        let status = self
            .state
            .lock()
            .unwrap()
            .translation_statuses
            .pop_front()
            .unwrap_or(JobStatus::Pending);
        Ok(Job::translation(job_id, status, language))
    }
}
