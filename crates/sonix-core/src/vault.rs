//! Resolution of the Sonix API key.

use std::env::VarError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Environment variable holding the bearer token.
pub const API_KEY_ENV: &str = "SONIX_API_KEY";

pub type KeyLookup<'a> = Pin<Box<dyn Future<Output = anyhow::Result<Option<ApiKey>>> + Send + 'a>>;

/// Bearer token for the Sonix API.
///
/// Never printed; only the service bootstrap reads the raw value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for a blank key. Surrounding whitespace is dropped.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim();
        (!key.is_empty()).then(|| Self(key.to_owned()))
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Source of the API key, consulted once at startup.
pub trait KeyProvider: Send + Sync {
    fn api_key(&self) -> KeyLookup<'_>;
}

/// Reads the key from [`API_KEY_ENV`].
pub struct EnvKeyProvider;

impl KeyProvider for EnvKeyProvider {
    fn api_key(&self) -> KeyLookup<'_> {
        Box::pin(async {
            match std::env::var(API_KEY_ENV) {
                Ok(raw) => Ok(ApiKey::parse(&raw)),
                Err(VarError::NotPresent) => Ok(None),
                Err(VarError::NotUnicode(_)) => {
                    anyhow::bail!("{API_KEY_ENV} is not valid UTF-8")
                }
            }
        })
    }
}

/// Hands out a fixed key.
#[cfg(test)]
pub struct FixedKeyProvider(pub Option<ApiKey>);

#[cfg(test)]
impl KeyProvider for FixedKeyProvider {
    fn api_key(&self) -> KeyLookup<'_> {
        let key = self.0.clone();
        Box::pin(async move { Ok(key) })
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        let key = ApiKey::parse("  sk-live\n").unwrap();
        assert_eq!(key.expose(), "sk-live");
    }

    #[test]
    fn blank_key_is_no_key() {
        assert!(ApiKey::parse("").is_none());
        assert!(ApiKey::parse(" \t").is_none());
    }

    #[test]
    fn debug_is_redacted() {
        let key = ApiKey::parse("sk-live").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey([REDACTED])");
        assert!(!format!("{:?}", Some(key)).contains("sk-live"));
    }

    #[tokio::test]
    #[serial]
    async fn env_provider_reads_variable() {
        unsafe { std::env::set_var(API_KEY_ENV, "sk-from-env") };
        let key = EnvKeyProvider.api_key().await;
        unsafe { std::env::remove_var(API_KEY_ENV) };
        assert_eq!(key.unwrap(), ApiKey::parse("sk-from-env"));
    }

    #[tokio::test]
    #[serial]
    async fn env_provider_treats_empty_as_missing() {
        unsafe { std::env::set_var(API_KEY_ENV, "") };
        let key = EnvKeyProvider.api_key().await;
        unsafe { std::env::remove_var(API_KEY_ENV) };
        assert!(key.unwrap().is_none());
    }

    #[tokio::test]
    #[serial]
    async fn env_provider_without_variable() {
        unsafe { std::env::remove_var(API_KEY_ENV) };
        assert!(EnvKeyProvider.api_key().await.unwrap().is_none());
    }
}
