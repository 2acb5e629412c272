//! Client for the Sonix speech-to-text API: upload audio, poll the remote
//! job until it settles, fetch the transcript, and request translations.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod job;
pub mod language;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod poller;
pub mod request;
pub mod result;
pub mod service;
pub mod types;

pub use api::SpeechApi;
pub use client::SonixClient;
pub use error::SonixError;
pub use job::{Job, JobKind, JobStatus};
pub use language::Language;
pub use poller::{JobPoller, PollPolicy};
pub use request::{AudioSource, TranscriptionRequest, TranslationRequest};
pub use result::{WorkflowResult, WorkflowStatus};
pub use service::SpeechService;
