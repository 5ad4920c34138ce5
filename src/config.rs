use std::time::Duration;

use anyhow::Context;

const DEFAULT_API_KEY: &str = "p";
const DEFAULT_UPSTREAM_HOST: &str = "https://api.psrestful.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Sent as `x-api-key` on every upstream call.
    pub api_key: String,
    /// Base URL of the PSRESTful API, without a trailing slash.
    pub upstream_host: String,
    /// `None` leaves upstream calls unbounded.
    pub upstream_timeout: Option<Duration>,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let upstream_timeout = lookup("UPSTREAM_TIMEOUT_SECS")
            .map(|raw| {
                raw.parse::<u64>()
                    .map(Duration::from_secs)
                    .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")
            })
            .transpose()?;

        Ok(Self {
            api_key: lookup("PS_RESTFUL_KEY").unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
            upstream_host: lookup("PS_RESTFUL_HOST")
                .unwrap_or_else(|| DEFAULT_UPSTREAM_HOST.to_string())
                .trim_end_matches('/')
                .to_string(),
            upstream_timeout,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }
}
