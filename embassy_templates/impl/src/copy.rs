use embassy_models::locale::Locale;

/// Fixed text of the contact notification email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEmailCopy {
    pub banner: &'static str,
    pub heading: &'static str,
    pub subheading: &'static str,
    pub sender_label: &'static str,
    pub email_label: &'static str,
    pub subject_label: &'static str,
    pub submitted_at_label: &'static str,
    pub message_label: &'static str,
    pub reply_button: &'static str,
    pub footer: &'static str,
    pub preview: &'static str,
    pub subject_prefix: &'static str,
}

const EN: ContactEmailCopy = ContactEmailCopy {
    banner: "Embassy Contact Form",
    heading: "New Inquiry Received",
    subheading: "A new inquiry was submitted from the website contact form.",
    sender_label: "Sender",
    email_label: "Email",
    subject_label: "Subject",
    submitted_at_label: "Submitted At (UTC)",
    message_label: "Message",
    reply_button: "Reply to Sender",
    footer: "This message was generated automatically from the embassy website contact form.",
    preview: "A new inquiry was submitted from the website contact form.",
    subject_prefix: "[Embassy Contact]",
};

// TODO: replace with Arabic labels once the embassy provides approved
// translations.
const AR: ContactEmailCopy = ContactEmailCopy {
    banner: "Embassy Contact Form",
    heading: "New Inquiry Received",
    subheading: "A new inquiry was submitted from the website contact form.",
    sender_label: "Sender",
    email_label: "Email",
    subject_label: "Subject",
    submitted_at_label: "Submitted At (UTC)",
    message_label: "Message",
    reply_button: "Reply to Sender",
    footer: "This message was generated automatically from the embassy website contact form.",
    preview: "A new inquiry was submitted from the website contact form.",
    subject_prefix: "[Embassy Contact]",
};

pub fn contact_email_copy(locale: Locale) -> &'static ContactEmailCopy {
    match locale {
        Locale::En => &EN,
        Locale::Ar => &AR,
    }
}
