mod env;
mod types;

#[cfg(test)]
mod tests;

pub use types::*;

use std::path::Path;

use anyhow::{Context, bail};

use crate::vault::KeyProvider;

impl Config {
    /// Load configuration from a TOML file with env var overrides.
    ///
    /// Falls back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str::<Self>(&content).context("failed to parse config file")?
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Ask `keys` for the API key; a missing key leaves the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails.
    pub async fn resolve_secrets(&mut self, keys: &dyn KeyProvider) -> anyhow::Result<()> {
        if let Some(key) = keys.api_key().await? {
            self.secrets.api_key = Some(key);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> anyhow::Result<()> {
        let base = url::Url::parse(&self.api.base_url)
            .with_context(|| format!("invalid api.base_url: {}", self.api.base_url))?;
        if !matches!(base.scheme(), "http" | "https") {
            bail!("api.base_url must use http or https, got {}", base.scheme());
        }
        if self.polling.interval_secs == 0 {
            bail!("polling.interval_secs must be greater than 0");
        }
        if self.polling.max_wait_secs < self.polling.interval_secs {
            bail!(
                "polling.max_wait_secs ({}) must be at least polling.interval_secs ({})",
                self.polling.max_wait_secs,
                self.polling.interval_secs
            );
        }
        if self.http.request_timeout_secs == 0 {
            bail!("http.request_timeout_secs must be greater than 0");
        }
        Ok(())
    }
}
