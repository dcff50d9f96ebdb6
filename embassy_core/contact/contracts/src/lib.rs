use std::future::Future;

use embassy_models::{
    contact::{ContactPayload, ContactValidationError},
    locale::Locale,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Whether an email delivery credential has been configured.
    fn is_configured(&self) -> bool;

    /// Process a contact form submission and forward it to the embassy
    /// inbox.
    ///
    /// `client_key` identifies the submitting client for rate limiting.
    fn submit(
        &self,
        client_key: String,
        payload: ContactPayload,
    ) -> impl Future<Output = Result<ContactSubmitted, ContactSubmitError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactSubmitted {
    pub locale: Locale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactSubmitError {
    #[error("Contact service is not configured.")]
    NotConfigured,
    #[error("Invalid request body.")]
    InvalidBody,
    #[error("{error}")]
    Validation {
        locale: Locale,
        #[source]
        error: ContactValidationError,
    },
    #[error("Too many requests. Please wait a few minutes and try again.")]
    RateLimited { locale: Locale },
    #[error("Unable to send your message right now. Please try again later.")]
    Send { locale: Locale },
}

impl ContactSubmitError {
    /// The display locale of the submission, if the body got far enough to
    /// resolve it.
    pub fn locale(&self) -> Option<Locale> {
        match self {
            Self::NotConfigured | Self::InvalidBody => None,
            Self::Validation { locale, .. }
            | Self::RateLimited { locale }
            | Self::Send { locale } => Some(*locale),
        }
    }
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_is_configured(mut self, configured: bool) -> Self {
        self.expect_is_configured().return_const(configured);
        self
    }

    pub fn with_submit(
        mut self,
        client_key: String,
        payload: ContactPayload,
        result: Result<ContactSubmitted, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(
                mockall::predicate::eq(client_key),
                mockall::predicate::eq(payload),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            ContactSubmitError::Validation {
                locale: Locale::Ar,
                error: ContactValidationError::Subject
            }
            .to_string(),
            "Please enter a valid subject."
        );
        assert_eq!(
            ContactSubmitError::Send { locale: Locale::En }.to_string(),
            "Unable to send your message right now. Please try again later."
        );
    }

    #[test]
    fn locale() {
        assert_eq!(ContactSubmitError::InvalidBody.locale(), None);
        assert_eq!(
            ContactSubmitError::RateLimited { locale: Locale::Ar }.locale(),
            Some(Locale::Ar)
        );
    }
}
