use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing, Extension, Router,
};
use embassy_core_contact_contracts::{ContactFeatureService, ContactSubmitError, ContactSubmitted};
use embassy_models::{contact::ContactPayload, locale::Locale};

use super::message;
use tracing::debug;

use crate::middlewares::client_key::ClientKey;

const SUCCESS_MESSAGE: &str = "Your message has been sent successfully.";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    Extension(client_key): Extension<ClientKey>,
    request: Request,
) -> Response {
    let content_type = header_str(request.headers(), header::CONTENT_TYPE).to_owned();
    let is_json = content_type.contains("application/json");
    let expects_html =
        !is_json && header_str(request.headers(), header::ACCEPT).contains("text/html");

    let payload = read_payload(request, is_json, &content_type)
        .await
        .unwrap_or_else(|err| {
            debug!("failed to read contact form body: {err:#}");
            ContactPayload::Unsupported
        });

    let result = service.submit(client_key.0, payload).await;

    if expects_html {
        redirect(&result)
    } else {
        json(result)
    }
}

async fn read_payload(
    request: Request,
    is_json: bool,
    content_type: &str,
) -> anyhow::Result<ContactPayload> {
    if is_json {
        let body = Bytes::from_request(request, &()).await?;
        Ok(ContactPayload::Json(body.to_vec()))
    } else if is_form_urlencoded(content_type) {
        let body = Bytes::from_request(request, &()).await?;
        Ok(ContactPayload::Form(body.to_vec()))
    } else if is_multipart(content_type) {
        multipart_fields(request).await.map(ContactPayload::Multipart)
    } else {
        Ok(ContactPayload::Unsupported)
    }
}

/// Name and text value of every part. Uploaded files are not text, so their
/// value is empty.
async fn multipart_fields(request: Request) -> anyhow::Result<Vec<(String, String)>> {
    let mut multipart = Multipart::from_request(request, &()).await?;
    let mut fields = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = if field.file_name().is_some() {
            String::new()
        } else {
            field.text().await?
        };
        fields.push((name, value));
    }
    Ok(fields)
}

/// Post/redirect/get response for plain html form posts.
fn redirect(result: &Result<ContactSubmitted, ContactSubmitError>) -> Response {
    let (locale, status) = match result {
        Ok(ContactSubmitted { locale }) => (*locale, "success"),
        Err(err) => (err.locale().unwrap_or(Locale::En), "error"),
    };
    Redirect::to(&format!("/{locale}/contact?contactStatus={status}")).into_response()
}

fn json(result: Result<ContactSubmitted, ContactSubmitError>) -> Response {
    match result {
        Ok(_) => message(StatusCode::OK, SUCCESS_MESSAGE),
        Err(err) => {
            let status = match err {
                ContactSubmitError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
                ContactSubmitError::InvalidBody | ContactSubmitError::Validation { .. } => {
                    StatusCode::BAD_REQUEST
                }
                ContactSubmitError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
                ContactSubmitError::Send { .. } => StatusCode::BAD_GATEWAY,
            };
            message(status, err.to_string())
        }
    }
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> &str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

fn is_form_urlencoded(content_type: &str) -> bool {
    mime_is(content_type, "application/x-www-form-urlencoded")
}

fn is_multipart(content_type: &str) -> bool {
    mime_is(content_type, "multipart/form-data")
}

fn mime_is(content_type: &str, expected: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(expected))
}

#[cfg(test)]
mod tests {
    use embassy_models::contact::ContactValidationError;

    use super::*;

    #[test]
    fn form_content_type() {
        assert!(is_form_urlencoded("application/x-www-form-urlencoded"));
        assert!(is_form_urlencoded(
            "Application/X-WWW-Form-Urlencoded; charset=UTF-8"
        ));
        assert!(!is_form_urlencoded("multipart/form-data; boundary=x"));
        assert!(is_multipart("multipart/form-data; boundary=x"));
        assert!(is_multipart("Multipart/Form-Data;boundary=x"));
        assert!(!is_multipart("application/x-www-form-urlencoded"));
        assert!(!is_form_urlencoded("text/plain"));
        assert!(!is_form_urlencoded(""));
    }

    #[test]
    fn redirect_locations() {
        for (result, expected) in [
            (
                Ok(ContactSubmitted { locale: Locale::Ar }),
                "/ar/contact?contactStatus=success",
            ),
            (
                Err(ContactSubmitError::NotConfigured),
                "/en/contact?contactStatus=error",
            ),
            (
                Err(ContactSubmitError::Validation {
                    locale: Locale::Ar,
                    error: ContactValidationError::Name,
                }),
                "/ar/contact?contactStatus=error",
            ),
            (
                Err(ContactSubmitError::Send { locale: Locale::Ar }),
                "/ar/contact?contactStatus=error",
            ),
        ] {
            let response = redirect(&result);
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(response.headers()[header::LOCATION], expected);
        }
    }

    #[test]
    fn json_status_codes() {
        for (result, expected) in [
            (Ok(ContactSubmitted { locale: Locale::En }), StatusCode::OK),
            (
                Err(ContactSubmitError::NotConfigured),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (Err(ContactSubmitError::InvalidBody), StatusCode::BAD_REQUEST),
            (
                Err(ContactSubmitError::Validation {
                    locale: Locale::En,
                    error: ContactValidationError::Message,
                }),
                StatusCode::BAD_REQUEST,
            ),
            (
                Err(ContactSubmitError::RateLimited { locale: Locale::En }),
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                Err(ContactSubmitError::Send { locale: Locale::En }),
                StatusCode::BAD_GATEWAY,
            ),
        ] {
            assert_eq!(json(result).status(), expected);
        }
    }
}
