use std::time::Duration;

use anyhow::Context;

use crate::client::DEFAULT_API_BASE;

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the customer backend, without the `/customers` suffix.
    pub api_base: String,
    pub listen_addr: String,
    /// Form instances untouched for longer than this are dropped.
    pub form_idle: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let form_idle_minutes: u64 = std::env::var("FORM_IDLE_MINUTES")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .context("FORM_IDLE_MINUTES must be a number")?;

        Ok(Self {
            api_base: api_base_or(std::env::var("API_BASE").ok(), DEFAULT_API_BASE),
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            form_idle: idle_from_minutes(form_idle_minutes)?,
        })
    }
}

fn idle_from_minutes(minutes: u64) -> anyhow::Result<Duration> {
    let secs = minutes.checked_mul(60).context("FORM_IDLE_MINUTES too large")?;
    Ok(Duration::from_secs(secs))
}

/// Configured base URL, or `fallback` when unset or blank.
pub fn api_base_or(value: Option<String>, fallback: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_falls_back_when_unset_or_blank() {
        assert_eq!(api_base_or(None, DEFAULT_API_BASE), "http://localhost:4000/api");
        assert_eq!(api_base_or(Some("  ".into()), DEFAULT_API_BASE), DEFAULT_API_BASE);
        assert_eq!(
            api_base_or(Some("https://erp.example.com/api".into()), DEFAULT_API_BASE),
            "https://erp.example.com/api"
        );
    }

    #[test]
    fn idle_minutes_convert_without_overflow() {
        assert_eq!(idle_from_minutes(60).unwrap(), Duration::from_secs(3600));
        let err = idle_from_minutes(u64::MAX).unwrap_err();
        assert_eq!(err.to_string(), "FORM_IDLE_MINUTES too large");
    }
}
