use std::sync::LazyLock;

use embassy_models::{
    contact::{ContactMessage, ContactMessageAuthor, ContactPayload, ContactSubmission},
    email_address::EmailAddress,
    locale::Locale,
};

pub const RECIPIENT: &str = "lebanonembassypakistan@gmail.com";
pub const EMBASSY_NAME: &str = "Embassy of Lebanon Islamabad";
pub const SENDER_ADDRESS: &str = "noreply@lebanonembassy.pk";
pub const WEBSITE_URL: &str = "https://www.lebanonembassy.pk/";

pub const JANE_JSON: &str = r#"{"name":"Jane Doe","email":"jane@example.com","subject":"Visa question","message":"Please advise on transit visa.","locale":"en"}"#;

pub const JANE_FORM_AR: &str = "name=Jane+Doe&email=jane%40example.com&subject=Visa+question\
                                &message=Please+advise+on+transit+visa.&locale=ar";

pub const JANE_MULTIPART_CONTENT_TYPE: &str = "multipart/form-data; boundary=XBOUND";

pub const JANE_MULTIPART: &str = concat!(
    "--XBOUND\r\n",
    "Content-Disposition: form-data; name=\"name\"\r\n\r\n",
    "Jane Doe\r\n",
    "--XBOUND\r\n",
    "Content-Disposition: form-data; name=\"email\"\r\n\r\n",
    "jane@example.com\r\n",
    "--XBOUND\r\n",
    "Content-Disposition: form-data; name=\"subject\"\r\n\r\n",
    "Visa question\r\n",
    "--XBOUND\r\n",
    "Content-Disposition: form-data; name=\"message\"\r\n\r\n",
    "Please advise on transit visa.\r\n",
    "--XBOUND\r\n",
    "Content-Disposition: form-data; name=\"website\"\r\n\r\n",
    "\r\n",
    "--XBOUND\r\n",
    "Content-Disposition: form-data; name=\"locale\"\r\n\r\n",
    "ar\r\n",
    "--XBOUND--\r\n",
);

pub const BOT_JSON: &str = r#"{"name":"Jane Doe","email":"jane@example.com","subject":"Visa question","message":"Please advise on transit visa.","website":"http://spam.example","locale":"ar"}"#;

pub static JANE_PAYLOAD: LazyLock<ContactPayload> =
    LazyLock::new(|| ContactPayload::Json(JANE_JSON.into()));

pub static JANE_SUBMISSION: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    name: "Jane Doe".into(),
    email: "jane@example.com".into(),
    subject: "Visa question".into(),
    message: "Please advise on transit visa.".into(),
    website: String::new(),
    locale: Locale::En,
});

pub static JANE_MESSAGE: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    author: ContactMessageAuthor {
        name: "Jane Doe".to_owned().try_into().unwrap(),
        email: EmailAddress::try_new("jane@example.com".to_owned()).unwrap(),
    },
    subject: "Visa question".to_owned().try_into().unwrap(),
    content: "Please advise on transit visa.".to_owned().try_into().unwrap(),
    locale: Locale::En,
});
