use std::{borrow::Cow, collections::HashMap};

use nutype::nutype;
use serde_json::Value;
use thiserror::Error;

use crate::{email_address::EmailAddress, locale::Locale, utf16_len};

/// Raw body of a contact form submission, tagged with the encoding the
/// client declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactPayload {
    Json(Vec<u8>),
    Form(Vec<u8>),
    /// Fields of a `multipart/form-data` body in order of appearance. File
    /// parts carry an empty value.
    Multipart(Vec<(String, String)>),
    /// The body is neither JSON, url-encoded form data nor readable
    /// multipart form data.
    Unsupported,
}

/// Unvalidated contact form submission. All fields are trimmed; missing
/// fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Honeypot field. Hidden from humans, so it is expected to be empty.
    pub website: String,
    pub locale: Locale,
}

#[derive(Debug, Error)]
pub enum ContactPayloadError {
    #[error("Failed to parse json body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Json body is null")]
    Null,
    #[error("Unsupported content type or unreadable form data")]
    UnsupportedContentType,
}

impl ContactSubmission {
    pub fn parse(payload: &ContactPayload) -> Result<Self, ContactPayloadError> {
        match payload {
            ContactPayload::Json(body) => Self::from_json(body),
            ContactPayload::Form(body) => Ok(Self::from_pairs(url::form_urlencoded::parse(body))),
            ContactPayload::Multipart(fields) => Ok(Self::from_pairs(
                fields
                    .iter()
                    .map(|(key, value)| (Cow::from(key.as_str()), Cow::from(value.as_str()))),
            )),
            ContactPayload::Unsupported => Err(ContactPayloadError::UnsupportedContentType),
        }
    }

    /// Non-string values are treated like missing fields. A body that is
    /// valid json but not an object simply has no fields.
    fn from_json(body: &[u8]) -> Result<Self, ContactPayloadError> {
        let value = serde_json::from_slice::<Value>(body)?;
        if value.is_null() {
            return Err(ContactPayloadError::Null);
        }

        Ok(Self::from_fields(|key| value.get(key).and_then(Value::as_str)))
    }

    /// If a field is repeated, the first occurrence wins.
    fn from_pairs<'a>(pairs: impl IntoIterator<Item = (Cow<'a, str>, Cow<'a, str>)>) -> Self {
        let mut fields = HashMap::<Cow<str>, Cow<str>>::new();
        for (key, value) in pairs {
            fields.entry(key).or_insert(value);
        }

        Self::from_fields(|key| fields.get(key).map(|value| &**value))
    }

    fn from_fields<'a>(get: impl Fn(&'static str) -> Option<&'a str>) -> Self {
        let text = |key| get(key).map(str::trim).unwrap_or_default().to_owned();

        Self {
            name: text("name"),
            email: text("email"),
            subject: text("subject"),
            message: text("message"),
            website: text("website"),
            locale: Locale::normalize(&text("locale")),
        }
    }

    /// Whether the honeypot field has been filled in.
    pub fn is_bot(&self) -> bool {
        !self.website.is_empty()
    }

    /// Checks the field constraints in order (name, email, subject, message)
    /// and reports the first violation.
    pub fn validate(&self) -> Result<ContactMessage, ContactValidationError> {
        let name = ContactMessageAuthorName::try_new(self.name.clone())
            .map_err(|_| ContactValidationError::Name)?;
        let email =
            EmailAddress::try_new(self.email.clone()).map_err(|_| ContactValidationError::Email)?;
        let subject = ContactMessageSubject::try_new(self.subject.clone())
            .map_err(|_| ContactValidationError::Subject)?;
        let content = ContactMessageContent::try_new(self.message.clone())
            .map_err(|_| ContactValidationError::Message)?;

        Ok(ContactMessage {
            author: ContactMessageAuthor { name, email },
            subject,
            content,
            locale: self.locale,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Please enter a valid full name.")]
    Name,
    #[error("Please enter a valid email address.")]
    Email,
    #[error("Please enter a valid subject.")]
    Subject,
    #[error("Please enter a message between 10 and 5000 characters.")]
    Message,
}

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub subject: ContactMessageSubject,
    pub content: ContactMessageContent,
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
}

#[nutype(
    validate(predicate = |name| (2..=100).contains(&utf16_len(name))),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorName(String);

#[nutype(
    validate(predicate = |subject| (3..=160).contains(&utf16_len(subject))),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageSubject(String);

#[nutype(
    validate(predicate = |content| (10..=5000).contains(&utf16_len(content))),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);
