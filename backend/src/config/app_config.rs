use anyhow::{bail, Context};
use std::num::NonZeroU32;
use std::path::PathBuf;

use nonzero_ext::nonzero;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";
const DEFAULT_CONTACT_FROM: &str = "Kaycore Website <website@kaycore.com>";
const DEFAULT_CONTACT_TO: &str = "hello@kaycore.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub frontend_dist: PathBuf,
    pub resend_api_key: Option<String>,
    pub contact_from: String,
    pub contact_to: String,
    pub content_source_url: Option<String>,
    pub contact_rate_per_minute: NonZeroU32,
    pub sentry_dsn: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads every setting through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let contact_rate_per_minute = match get("CONTACT_RATE_PER_MINUTE") {
            Some(raw) => {
                let n: u32 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("CONTACT_RATE_PER_MINUTE is not a number: {raw}"))?;
                match NonZeroU32::new(n) {
                    Some(n) => n,
                    None => bail!("CONTACT_RATE_PER_MINUTE must be greater than zero"),
                }
            }
            None => nonzero!(5u32),
        };

        let content_source_url = get("CONTENT_SOURCE_URL");
        if let Some(url) = &content_source_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                bail!("CONTENT_SOURCE_URL must be an http(s) URL, got {url}");
            }
        }

        Ok(Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            frontend_dist: get("FRONTEND_DIST")
                .unwrap_or_else(|| DEFAULT_FRONTEND_DIST.to_string())
                .into(),
            resend_api_key: get("RESEND_API_KEY"),
            contact_from: get("CONTACT_FROM").unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_string()),
            contact_to: get("CONTACT_TO").unwrap_or_else(|| DEFAULT_CONTACT_TO.to_string()),
            content_source_url,
            contact_rate_per_minute,
            sentry_dsn: get("SENTRY_DSN"),
        })
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::from_lookup(|_| None).expect("defaults are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.contact_rate_per_minute.get(), 5);
        assert!(config.resend_api_key.is_none());
        assert!(config.content_source_url.is_none());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("CONTACT_RATE_PER_MINUTE", "12"),
            ("CONTENT_SOURCE_URL", "https://cms.example.com/posts.json"),
            ("RESEND_API_KEY", "re_123"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.contact_rate_per_minute.get(), 12);
        assert_eq!(
            config.content_source_url.as_deref(),
            Some("https://cms.example.com/posts.json")
        );
        assert_eq!(config.resend_api_key.as_deref(), Some("re_123"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[("RESEND_API_KEY", "  ")])).unwrap();
        assert!(config.resend_api_key.is_none());
    }

    #[test]
    fn bad_rate_is_rejected() {
        assert!(AppConfig::from_lookup(lookup_from(&[("CONTACT_RATE_PER_MINUTE", "0")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("CONTACT_RATE_PER_MINUTE", "lots")])).is_err());
    }

    #[test]
    fn content_source_must_be_http() {
        let err = AppConfig::from_lookup(lookup_from(&[("CONTENT_SOURCE_URL", "ftp://x")]));
        assert!(err.is_err());
    }
}
