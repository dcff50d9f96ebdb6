use std::sync::Arc;

use embassy_email_contracts::{Email, EmailService};
use embassy_models::{email_address::EmailAddressWithName, Sensitive};
use embassy_utils::trace_instrument;
use serde::Serialize;
use tracing::error;
use url::Url;

use crate::http::HttpClient;

pub mod http;

pub const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Delivers emails through the Resend HTTP API.
#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    config: EmailServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct EmailServiceConfig {
    endpoint: Arc<Url>,
    api_key: Sensitive<Arc<str>>,
    from: Arc<EmailAddressWithName>,
}

impl EmailServiceConfig {
    pub fn new(
        endpoint_override: Option<Url>,
        api_key: impl Into<Arc<str>>,
        from: EmailAddressWithName,
    ) -> anyhow::Result<Self> {
        let endpoint = match endpoint_override {
            Some(endpoint) => endpoint,
            None => RESEND_ENDPOINT.parse()?,
        };

        Ok(Self {
            endpoint: endpoint.into(),
            api_key: Sensitive(api_key.into()),
            from: from.into(),
        })
    }
}

impl EmailServiceImpl {
    pub fn new(config: EmailServiceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            client: HttpClient::new()?,
        })
    }
}

impl EmailService for EmailServiceImpl {
    #[trace_instrument(skip(self, email), fields(recipient = %email.recipient))]
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let request = SendEmailRequest {
            from: self.config.from.to_string(),
            to: [email.recipient.as_str()],
            reply_to: email.reply_to.as_ref().map(|reply_to| reply_to.as_str()),
            subject: &email.subject,
            text: &email.text,
            html: &email.html,
        };

        let response = self
            .client
            .post((*self.config.endpoint).clone())
            .bearer_auth(&**self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "email provider rejected the email");
            return Ok(false);
        }

        Ok(true)
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: [&'a str; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}
