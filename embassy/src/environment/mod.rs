use embassy_config::{Config, EmailConfig};
use embassy_core_contact_impl::ContactFeatureConfig;
use embassy_core_news_impl::NewsFeatureConfig;
use embassy_email_impl::EmailServiceConfig;
use embassy_shared_impl::rate_limit::RateLimitServiceConfig;
use types::{ContactFeature, Email, NewsFeature, RateLimit, RestServer, Template, Time};

pub mod types;

/// Wire up the REST server and all of its dependencies.
pub fn rest_server(config: &Config) -> anyhow::Result<RestServer> {
    let email = email_service_config(&config.email)?
        .map(Email::new)
        .transpose()?;

    let rate_limit = RateLimit::new(
        Time::default(),
        RateLimitServiceConfig {
            window: *config.contact.rate_limit.window,
            max_requests: config.contact.rate_limit.max_requests,
        },
    );

    let contact = ContactFeature::new(
        Time::default(),
        rate_limit,
        Template::default(),
        email,
        ContactFeatureConfig {
            recipient: config.contact.recipient.clone().into(),
            embassy_name: config.email.from_name.as_str().into(),
            website_url: config.contact.website_url.as_str().into(),
        },
    );

    let news = NewsFeature::new(NewsFeatureConfig {
        latest_page_size: config.news.latest_page_size,
        archive_page_size: config.news.archive_page_size,
    });

    Ok(RestServer::new(contact, news))
}

/// The email service config, or `None` if no API key has been configured.
pub fn email_service_config(config: &EmailConfig) -> anyhow::Result<Option<EmailServiceConfig>> {
    config
        .api_key()
        .map(|api_key| {
            EmailServiceConfig::new(
                config.endpoint_override.clone(),
                api_key,
                config.from_address.clone().with_name(config.from_name.clone()),
            )
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use embassy_config::DEFAULT_CONFIG_PATH;

    use super::*;

    fn load(api_key: Option<&str>) -> Config {
        embassy_config::load_with_env(&[Path::new(DEFAULT_CONFIG_PATH)], |key| {
            (key == "RESEND_API_KEY").then(|| api_key.map(Into::into)).flatten()
        })
        .unwrap()
    }

    #[test]
    fn provide_rest_server() {
        rest_server(&load(None)).unwrap();
        rest_server(&load(Some("re_test_key"))).unwrap();
    }

    #[test]
    fn email_requires_api_key() {
        assert!(email_service_config(&load(None).email).unwrap().is_none());
        assert!(email_service_config(&load(Some("")).email).unwrap().is_none());
        assert!(email_service_config(&load(Some("re_test_key")).email)
            .unwrap()
            .is_some());
    }
}
