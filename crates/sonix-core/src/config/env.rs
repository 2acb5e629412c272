use super::Config;

impl Config {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SONIX_BASE_URL") {
            self.api.base_url = v;
        }
        if let Ok(v) = std::env::var("SONIX_DEFAULT_LANGUAGE") {
            match v.parse() {
                Ok(lang) => self.api.default_language = lang,
                Err(_) => tracing::warn!("ignoring invalid SONIX_DEFAULT_LANGUAGE value: {v}"),
            }
        }
        if let Ok(v) = std::env::var("SONIX_POLL_INTERVAL") {
            match v.parse::<u64>() {
                Ok(secs) => self.polling.interval_secs = secs,
                Err(_) => tracing::warn!("ignoring invalid SONIX_POLL_INTERVAL value: {v}"),
            }
        }
        if let Ok(v) = std::env::var("SONIX_MAX_WAIT") {
            match v.parse::<u64>() {
                Ok(secs) => self.polling.max_wait_secs = secs,
                Err(_) => tracing::warn!("ignoring invalid SONIX_MAX_WAIT value: {v}"),
            }
        }
        if let Ok(v) = std::env::var("SONIX_UNRECOGNIZED_LIMIT") {
            match v.parse::<u32>() {
                Ok(limit) => self.polling.unrecognized_status_limit = limit,
                Err(_) => tracing::warn!("ignoring invalid SONIX_UNRECOGNIZED_LIMIT value: {v}"),
            }
        }
        if let Ok(v) = std::env::var("SONIX_HTTP_TIMEOUT") {
            match v.parse::<u64>() {
                Ok(secs) => self.http.request_timeout_secs = secs,
                Err(_) => tracing::warn!("ignoring invalid SONIX_HTTP_TIMEOUT value: {v}"),
            }
        }
    }
}
