use std::time::Duration;

use anyhow::{Context, bail};

use crate::view::locale::Locale;

const DEFAULT_API_BASE_URL: &str = "https://goldenprice.liara.run/api/MarketData";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_METRICS_PORT: u16 = 9000;
const DEFAULT_LOCALE: &str = "fa-IR";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the three category endpoints hang off of.
    pub api_base_url: String,
    pub poll_interval: Duration,
    pub http_timeout: Duration,
    /// Port for the Prometheus exporter; 0 disables it.
    pub metrics_port: u16,
    pub locale: &'static Locale,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // dotenvy loads .env, but doesn't override already-set env vars
        dotenvy::dotenv().ok();

        let api_base_url = std::env::var("GOLDEN_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let poll_interval = parse_secs("GOLDEN_POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS)?;
        let http_timeout = parse_secs("GOLDEN_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;

        let metrics_port = match std::env::var("GOLDEN_METRICS_PORT") {
            Ok(raw) => raw
                .parse()
                .context("GOLDEN_METRICS_PORT must be a port number")?,
            Err(_) => DEFAULT_METRICS_PORT,
        };

        let locale_tag =
            std::env::var("GOLDEN_LOCALE").unwrap_or_else(|_| DEFAULT_LOCALE.to_string());
        let locale = Locale::lookup(&locale_tag)
            .with_context(|| format!("unknown locale tag: {locale_tag}"))?;

        Ok(Self {
            api_base_url,
            poll_interval,
            http_timeout,
            metrics_port,
            locale,
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_base_url.is_empty() {
            bail!("api base URL must not be empty");
        }
        if self.api_base_url.ends_with('/') {
            bail!("api base URL must not end with a slash");
        }
        if self.poll_interval.is_zero() {
            bail!("poll interval must be non-zero");
        }
        Ok(())
    }
}

fn parse_secs(var: &str, default: u64) -> anyhow::Result<Duration> {
    let secs = match std::env::var(var) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{var} must be an integer number of seconds"))?,
        Err(_) => default,
    };
    Ok(Duration::from_secs(secs))
}
