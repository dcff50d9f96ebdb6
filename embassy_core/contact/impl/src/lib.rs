use std::sync::Arc;

use embassy_core_contact_contracts::{ContactFeatureService, ContactSubmitError, ContactSubmitted};
use embassy_email_contracts::{Email, EmailService};
use embassy_models::{
    contact::{ContactMessage, ContactMessageAuthor, ContactPayload, ContactSubmission},
    email_address::EmailAddress,
};
use embassy_shared_contracts::{rate_limit::RateLimitService, time::TimeService};
use embassy_templates_contracts::{ContactEmailTemplate, TemplateService};
use embassy_utils::trace_instrument;
use tracing::{debug, error, info, warn};


#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Time, RateLimit, Template, EmailS> {
    time: Time,
    rate_limit: RateLimit,
    template: Template,
    /// `None` if no delivery credential has been configured.
    email: Option<EmailS>,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    pub recipient: Arc<EmailAddress>,
    pub embassy_name: Arc<str>,
    pub website_url: Arc<str>,
}

impl<Time, RateLimit, Template, EmailS> ContactFeatureServiceImpl<Time, RateLimit, Template, EmailS> {
    pub fn new(
        time: Time,
        rate_limit: RateLimit,
        template: Template,
        email: Option<EmailS>,
        config: ContactFeatureConfig,
    ) -> Self {
        Self {
            time,
            rate_limit,
            template,
            email,
            config,
        }
    }
}

impl<Time, RateLimit, Template, EmailS> ContactFeatureService
    for ContactFeatureServiceImpl<Time, RateLimit, Template, EmailS>
where
    Time: TimeService,
    RateLimit: RateLimitService,
    Template: TemplateService,
    EmailS: EmailService,
{
    fn is_configured(&self) -> bool {
        self.email.is_some()
    }

    #[trace_instrument(skip(self, payload))]
    async fn submit(
        &self,
        client_key: String,
        payload: ContactPayload,
    ) -> Result<ContactSubmitted, ContactSubmitError> {
        let Some(email_service) = &self.email else {
            return Err(ContactSubmitError::NotConfigured);
        };

        let submission = ContactSubmission::parse(&payload).map_err(|err| {
            debug!(%err, "rejecting malformed contact submission");
            ContactSubmitError::InvalidBody
        })?;
        let locale = submission.locale;

        if submission.is_bot() {
            warn!(%client_key, "honeypot field filled in, discarding contact submission");
            return Ok(ContactSubmitted { locale });
        }

        let message = submission
            .validate()
            .map_err(|error| ContactSubmitError::Validation { locale, error })?;

        match self.rate_limit.check(&client_key).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(%client_key, "contact submission rate limited");
                return Err(ContactSubmitError::RateLimited { locale });
            }
            Err(err) => {
                error!(%client_key, "Failed to check rate limit, admitting request: {err:#}");
            }
        }

        let email = self.build_email(message);
        match email_service.send(email).await {
            Ok(true) => {
                info!("contact message delivered");
                Ok(ContactSubmitted { locale })
            }
            Ok(false) => Err(ContactSubmitError::Send { locale }),
            Err(err) => {
                error!("Failed to send contact message: {err:#}");
                Err(ContactSubmitError::Send { locale })
            }
        }
    }
}

impl<Time, RateLimit, Template, EmailS> ContactFeatureServiceImpl<Time, RateLimit, Template, EmailS>
where
    Time: TimeService,
    Template: TemplateService,
{
    fn build_email(&self, message: ContactMessage) -> Email {
        let ContactMessage {
            author: ContactMessageAuthor { name, email },
            subject,
            content,
            locale,
        } = message;

        let rendered = self.template.render_contact_email(&ContactEmailTemplate {
            locale,
            embassy_name: self.config.embassy_name.to_string(),
            website_url: self.config.website_url.to_string(),
            sender_name: name.into_inner(),
            sender_email: email.to_string(),
            subject: subject.into_inner(),
            message: content.into_inner(),
            submitted_at: self.time.now(),
        });

        Email {
            recipient: (*self.config.recipient).clone(),
            subject: rendered.subject_line,
            text: rendered.text,
            html: rendered.html,
            reply_to: Some(email),
        }
    }
}
