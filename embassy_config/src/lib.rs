use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use embassy_models::{email_address::EmailAddress, pagination::PageSize, Sensitive};
use serde::Deserialize;
use url::Url;

pub use crate::duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of additional config files, applied in order on top
/// of the default config.
pub const CONFIG_PATH_ENV: &str = "EMBASSY_CONFIG_PATH";

/// Environment variables that override individual config keys.
pub const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("RESEND_API_KEY", "email.api_key"),
    ("CONTACT_TO_EMAIL", "contact.recipient"),
    ("CONTACT_FROM_NAME", "email.from_name"),
    ("CONTACT_FROM_EMAIL", "email.from_address"),
    ("CONTACT_WEBSITE_URL", "contact.website_url"),
];

/// Load the default config, the files listed in `EMBASSY_CONFIG_PATH` and the
/// environment overrides.
pub fn load() -> anyhow::Result<Config> {
    let extra_paths = std::env::var(CONFIG_PATH_ENV).unwrap_or_default();
    let paths = std::iter::once(DEFAULT_CONFIG_PATH)
        .chain(extra_paths.split(':').filter(|path| !path.is_empty()))
        .collect::<Vec<_>>();

    load_with_env(&paths, |key| std::env::var(key).ok())
}

pub fn load_with_env(
    paths: &[impl AsRef<Path>],
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    ENV_OVERRIDES
        .iter()
        .try_fold(builder, |builder, &(var, key)| {
            builder.set_override_option(key, env(var))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub news: NewsConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub endpoint_override: Option<Url>,
    pub api_key: Option<Sensitive<String>>,
    pub from_name: String,
    pub from_address: EmailAddress,
}

impl EmailConfig {
    /// The delivery credential, if one has been configured. An empty key
    /// counts as missing.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(String::as_str)
            .filter(|key| !key.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub recipient: EmailAddress,
    pub website_url: String,
    pub rate_limit: RateLimitConfig,
}

#[derive(Debug, Deserialize)]
pub struct RateLimitConfig {
    pub window: Duration,
    pub max_requests: u64,
}

#[derive(Debug, Deserialize)]
pub struct NewsConfig {
    pub latest_page_size: PageSize,
    pub archive_page_size: PageSize,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn load_default(env: &[(&str, &str)]) -> Config {
        let env = env
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect::<HashMap<_, _>>();
        load_with_env(&[Path::new(DEFAULT_CONFIG_PATH)], |key| env.get(key).cloned()).unwrap()
    }

    #[test]
    fn load_default_config() {
        let config = load_default(&[]);

        assert_eq!(config.http.host, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(config.http.port, 8000);
        assert_eq!(config.email.endpoint_override, None);
        assert_eq!(config.email.api_key(), None);
        assert_eq!(config.email.from_name, "Embassy of Lebanon Islamabad");
        assert_eq!(config.email.from_address.as_str(), "noreply@lebanonembassy.pk");
        assert_eq!(
            config.contact.recipient.as_str(),
            "lebanonembassypakistan@gmail.com"
        );
        assert_eq!(config.contact.website_url, "https://www.lebanonembassy.pk/");
        assert_eq!(
            *config.contact.rate_limit.window,
            std::time::Duration::from_secs(600)
        );
        assert_eq!(config.contact.rate_limit.max_requests, 5);
        assert_eq!(*config.news.latest_page_size, 3);
        assert_eq!(*config.news.archive_page_size, 6);
    }

    #[test]
    fn env_overrides() {
        let config = load_default(&[
            ("RESEND_API_KEY", "re_123"),
            ("CONTACT_TO_EMAIL", "consular@example.com"),
            ("CONTACT_FROM_NAME", "Consular Section"),
            ("CONTACT_FROM_EMAIL", "consular-noreply@example.com"),
            ("CONTACT_WEBSITE_URL", "https://example.com/"),
        ]);

        assert_eq!(config.email.api_key(), Some("re_123"));
        assert_eq!(config.contact.recipient.as_str(), "consular@example.com");
        assert_eq!(config.email.from_name, "Consular Section");
        assert_eq!(
            config.email.from_address.as_str(),
            "consular-noreply@example.com"
        );
        assert_eq!(config.contact.website_url, "https://example.com/");
    }

    #[test]
    fn empty_api_key_is_missing() {
        let config = load_default(&[("RESEND_API_KEY", "")]);
        assert_eq!(config.email.api_key(), None);
    }

    #[test]
    fn invalid_recipient() {
        let result = load_with_env(&[Path::new(DEFAULT_CONFIG_PATH)], |key| {
            (key == "CONTACT_TO_EMAIL").then(|| "not-an-email".to_owned())
        });
        assert!(result.is_err());
    }

    #[test]
    fn api_key_is_redacted() {
        let config = load_default(&[("RESEND_API_KEY", "re_123")]);
        assert!(!format!("{config:?}").contains("re_123"));
    }
}
