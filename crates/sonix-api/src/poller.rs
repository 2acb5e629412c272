//! Fixed-interval polling of a remote job with a bounded wait.

use std::time::Duration;

use tokio::time::Instant;

use crate::api::SpeechApi;
use crate::error::SonixError;
use crate::job::{Job, JobKind, JobStatus};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(30 * 60);
pub const DEFAULT_UNRECOGNIZED_STATUS_LIMIT: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay between two status checks. Constant, no backoff.
    pub interval: Duration,
    /// Timeout fires once elapsed time is strictly greater than this.
    pub max_wait: Duration,
    /// Consecutive unrecognized statuses tolerated before giving up.
    pub unrecognized_status_limit: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_wait: DEFAULT_MAX_WAIT,
            unrecognized_status_limit: DEFAULT_UNRECOGNIZED_STATUS_LIMIT,
        }
    }
}

/// How a polled job finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Id to fetch the result for: the job's own id, or the id it duplicates.
    pub result_id: String,
    pub redirected: bool,
    pub polls: u32,
}

enum Step {
    Done(Resolution),
    Continue,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JobPoller {
    policy: PollPolicy,
}

impl JobPoller {
    #[must_use]
    pub fn new(policy: PollPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    /// Poll `job` until it completes, fails, or the wait budget runs out.
    ///
    /// A job submitted as already complete is resolved without any status
    /// request. Any other initial status only means "not done yet": failure,
    /// duplicate and unrecognized handling apply to polled statuses, since
    /// the submission response carries no duplicate reference. Timeout is
    /// only checked before a wait; an in-flight poll always finishes.
    ///
    /// # Errors
    ///
    /// Returns `Timeout`, `RemoteFailure`, `DuplicateWithoutReference`,
    /// `UnrecognizedStatus`, or the transport error of a failed status request.
    pub async fn wait<A: SpeechApi>(&self, api: &A, mut job: Job) -> Result<Resolution, SonixError> {
        if job.status == JobStatus::Completed {
            return Ok(Resolution {
                result_id: job.id,
                redirected: false,
                polls: 0,
            });
        }

        let start = Instant::now();
        let mut polls = 0u32;
        let mut unrecognized_streak = 0u32;

        loop {
            let elapsed = start.elapsed();
            if elapsed > self.policy.max_wait {
                tracing::warn!(
                    job_id = %job.id,
                    kind = %job.kind,
                    polls,
                    elapsed_secs = elapsed.as_secs(),
                    "wait budget exhausted"
                );
                return Err(SonixError::Timeout {
                    kind: job.kind,
                    waited: elapsed,
                });
            }

            tokio::time::sleep(self.policy.interval).await;
            job = refresh(api, &job).await?;
            polls += 1;
            tracing::debug!(job_id = %job.id, kind = %job.kind, status = %job.status, polls, "polled job status");

            if let Step::Done(resolution) = self.evaluate(&job, polls, &mut unrecognized_streak)? {
                return Ok(resolution);
            }
        }
    }

    fn evaluate(&self, job: &Job, polls: u32, unrecognized_streak: &mut u32) -> Result<Step, SonixError> {
        match (&job.status, job.kind) {
            (JobStatus::Completed, _) => Ok(Step::Done(Resolution {
                result_id: job.id.clone(),
                redirected: false,
                polls,
            })),
            (JobStatus::Failed, kind) => {
                tracing::warn!(job_id = %job.id, %kind, "remote job failed");
                Err(SonixError::RemoteFailure {
                    kind,
                    job_id: job.id.clone(),
                })
            }
            (JobStatus::Duplicate, JobKind::Transcription) => {
                let Some(original) = job.duplicate_of.as_deref().filter(|id| !id.is_empty()) else {
                    return Err(SonixError::DuplicateWithoutReference {
                        job_id: job.id.clone(),
                    });
                };
                tracing::info!(job_id = %job.id, duplicate_of = original, "audio already transcribed, using existing job");
                Ok(Step::Done(Resolution {
                    result_id: original.to_owned(),
                    redirected: true,
                    polls,
                }))
            }
            (JobStatus::Pending, _) => {
                *unrecognized_streak = 0;
                Ok(Step::Continue)
            }
            (status, kind) => {
                *unrecognized_streak += 1;
                tracing::warn!(job_id = %job.id, %kind, %status, streak = *unrecognized_streak, "unrecognized job status");
                if *unrecognized_streak > self.policy.unrecognized_status_limit {
                    return Err(SonixError::UnrecognizedStatus {
                        kind,
                        job_id: job.id.clone(),
                        status: status.as_str().to_owned(),
                    });
                }
                Ok(Step::Continue)
            }
        }
    }
}

async fn refresh<A: SpeechApi>(api: &A, job: &Job) -> Result<Job, SonixError> {
    match job.kind {
        JobKind::Transcription => api.transcription_status(&job.id, job.language).await,
        JobKind::Translation => api.translation_status(&job.id, job.language).await,
    }
}
