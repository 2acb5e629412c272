use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::SpeechApi;
use crate::error::SonixError;
use crate::job::Job;
use crate::language::Language;
use crate::request::AudioSource;
use crate::types::{TranscriptionStatusResponse, TranslationStatusResponse, UploadResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.sonix.ai/v1";
const MAX_ERROR_BODY: usize = 500;

/// HTTP implementation of [`SpeechApi`] against the Sonix REST API.
#[derive(Clone)]
pub struct SonixClient {
    client: reqwest::Client,
    api_key: String,
    base_url: Url,
}

impl SonixClient {
    /// # Errors
    ///
    /// Returns `SonixError::InvalidUrl` if `base_url` is not an absolute http(s) URL.
    pub fn new(
        client: reqwest::Client,
        api_key: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, SonixError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(SonixError::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `{base}/transcriptions/{segments...}` with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SonixError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| SonixError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push("transcriptions")
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, SonixError> {
        let resp = req.bearer_auth(&self.api_key).send().await?;
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        let mut body = resp.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }
        Err(SonixError::Api { status, body })
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, SonixError> {
        let bytes = self.send(req).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn upload_form(
        source: &AudioSource,
        language: Language,
        name: Option<&str>,
    ) -> Result<Form, SonixError> {
        let mut form = Form::new();
        if let Some(url) = source.url() {
            form = form.text("file_url", url.to_owned());
        }
        if let Some(path) = source.path() {
            let bytes = tokio::fs::read(path).await.map_err(|source| SonixError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let file_name = name
                .map(str::to_owned)
                .or_else(|| path.file_name().map(|n| n.to_string_lossy().into_owned()))
                .unwrap_or_else(|| "audio".to_owned());
            form = form.part("file", Part::bytes(bytes).file_name(file_name));
        }
        form = form.text("language", language.code());
        if let Some(name) = name {
            form = form.text("name", name.to_owned());
        }
        Ok(form)
    }
}

impl std::fmt::Debug for SonixClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SonixClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl SpeechApi for SonixClient {
    async fn submit_transcription(
        &self,
        source: &AudioSource,
        language: Language,
        name: Option<&str>,
    ) -> Result<Job, SonixError> {
        let form = Self::upload_form(source, language, name).await?;
        let url = self.endpoint(&[])?;
        let upload: UploadResponse = self
            .send_json(self.client.post(url).multipart(form))
            .await?;
        tracing::debug!(job_id = %upload.id, status = %upload.status, "audio uploaded");
        Ok(upload.into_job(language))
    }

    async fn transcription_status(&self, job_id: &str, language: Language) -> Result<Job, SonixError> {
        let url = self.endpoint(&[job_id])?;
        let status: TranscriptionStatusResponse = self.send_json(self.client.get(url)).await?;
        Ok(status.into_job(language))
    }

    async fn transcript(&self, job_id: &str, language: Language) -> Result<String, SonixError> {
        let mut url = self.endpoint(&[job_id, "transcript"])?;
        url.query_pairs_mut().append_pair("language", language.code());
        let text = self.send(self.client.get(url)).await?.text().await?;
        Ok(text)
    }

    async fn submit_translation(&self, job_id: &str, language: Language) -> Result<Job, SonixError> {
        let url = self.endpoint(&[job_id, "translations"])?;
        let form = Form::new().text("language", language.code());
        let status: TranslationStatusResponse = self
            .send_json(self.client.post(url).multipart(form))
            .await?;
        Ok(status.into_job(job_id, language))
    }

    async fn translation_status(&self, job_id: &str, language: Language) -> Result<Job, SonixError> {
        let url = self.endpoint(&[job_id, "translations", language.code()])?;
        let status: TranslationStatusResponse = self.send_json(self.client.get(url)).await?;
        Ok(status.into_job(job_id, language))
    }
}
