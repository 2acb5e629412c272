//! Wire a [`SpeechService`] from loaded configuration.

use std::time::Duration;

use anyhow::Context;
use sonix_api::{SonixClient, SpeechService};

use crate::config::Config;
use crate::vault::API_KEY_ENV;

/// Build the HTTP-backed service described by `config`.
///
/// Expects secrets to be resolved already.
///
/// # Errors
///
/// Returns an error if the API key is missing, the HTTP client cannot be
/// built, or the base URL is invalid.
pub fn build_service(config: &Config) -> anyhow::Result<SpeechService<SonixClient>> {
    let api_key = config
        .secrets
        .api_key
        .as_ref()
        .with_context(|| format!("{API_KEY_ENV} is not set"))?;
    let http = sonix_api::http::client_with_timeouts(
        Duration::from_secs(config.http.connect_timeout_secs),
        Duration::from_secs(config.http.request_timeout_secs),
    )
    .context("failed to build HTTP client")?;
    let client = SonixClient::new(http, api_key.expose(), &config.api.base_url)
        .context("invalid api.base_url")?;
    tracing::debug!(base_url = client.base_url(), "sonix client ready");
    Ok(SpeechService::new(client, config.polling.policy()))
}
