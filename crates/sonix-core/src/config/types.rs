use std::time::Duration;

use serde::{Deserialize, Serialize};
use sonix_api::{Language, PollPolicy};

use crate::vault::ApiKey;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub polling: PollingConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(skip)]
    pub secrets: ResolvedSecrets,
}

pub(crate) fn default_base_url() -> String {
    sonix_api::client::DEFAULT_BASE_URL.into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub default_language: Language,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_language: Language::default(),
        }
    }
}

fn default_interval_secs() -> u64 {
    10
}

fn default_max_wait_secs() -> u64 {
    1800
}

fn default_unrecognized_status_limit() -> u32 {
    5
}

/// Poll timing shared by every transcription and translation workflow.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PollingConfig {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: u64,
    #[serde(default = "default_unrecognized_status_limit")]
    pub unrecognized_status_limit: u32,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            max_wait_secs: default_max_wait_secs(),
            unrecognized_status_limit: default_unrecognized_status_limit(),
        }
    }
}

impl PollingConfig {
    #[must_use]
    pub fn policy(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_secs(self.interval_secs),
            max_wait: Duration::from_secs(self.max_wait_secs),
            unrecognized_status_limit: self.unrecognized_status_limit,
        }
    }
}

fn default_connect_timeout_secs() -> u64 {
    sonix_api::http::DEFAULT_CONNECT_TIMEOUT.as_secs()
}

fn default_request_timeout_secs() -> u64 {
    sonix_api::http::DEFAULT_REQUEST_TIMEOUT.as_secs()
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ResolvedSecrets {
    pub api_key: Option<ApiKey>,
}
