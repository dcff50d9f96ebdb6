use chrono::{DateTime, Utc};
use embassy_models::locale::Locale;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the notification email that forwards a contact form
    /// submission to the embassy inbox.
    fn render_contact_email(&self, template: &ContactEmailTemplate) -> RenderedEmail;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render_contact_email(
        mut self,
        template: ContactEmailTemplate,
        result: RenderedEmail,
    ) -> Self {
        self.expect_render_contact_email()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| result);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmailTemplate {
    pub locale: Locale,
    pub embassy_name: String,
    pub website_url: String,
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject_line: String,
    pub html: String,
    pub text: String,
}
