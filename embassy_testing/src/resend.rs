use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::Mutex};
use tracing::info;
use url::Url;
use uuid::Uuid;

const EMAILS_ROUTE: &str = "/emails";

/// Recipient address for which the server responds like Resend does for a
/// rejected email.
pub const REJECTED_RECIPIENT: &str = "rejected@example.com";

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting resend testing server on {host}:{port}");
    info!("Resend emails endpoint: http://{host}:{port}{EMAILS_ROUTE}");
    info!("API key: {api_key:?}");
    info!("Emails sent to {REJECTED_RECIPIENT:?} are rejected with status 422");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(api_key, Default::default()))
        .await
        .context("Failed to start HTTP server")
}

/// Resend testing server running in the background of the current tokio
/// runtime.
#[derive(Debug, Clone)]
pub struct ResendServer {
    endpoint: Url,
    api_key: Arc<str>,
    outbox: Arc<Mutex<Vec<SentEmail>>>,
}

impl ResendServer {
    /// Bind to an ephemeral port on localhost and start serving.
    pub async fn spawn(api_key: &str) -> anyhow::Result<Self> {
        let listener = TcpListener::bind((IpAddr::from([127, 0, 0, 1]), 0))
            .await
            .context("Failed to bind resend testing server")?;
        let addr = listener.local_addr()?;
        let endpoint = format!("http://{addr}{EMAILS_ROUTE}").parse()?;
        let outbox = Arc::<Mutex<Vec<SentEmail>>>::default();

        let router = router(api_key.to_owned(), Arc::clone(&outbox));
        tokio::spawn(async move { axum::serve(listener, router).await });

        Ok(Self {
            endpoint,
            api_key: api_key.into(),
            outbox,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Emails accepted so far, oldest first.
    pub async fn sent_emails(&self) -> Vec<SentEmail> {
        self.outbox.lock().await.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: Option<String>,
    pub html: Option<String>,
}

type Outbox = Arc<Mutex<Vec<SentEmail>>>;

#[derive(Clone)]
struct AppState {
    api_key: Arc<str>,
    outbox: Outbox,
}

fn router(api_key: String, outbox: Outbox) -> Router {
    Router::new()
        .route(EMAILS_ROUTE, routing::post(send_email).get(list_emails))
        .with_state(AppState {
            api_key: api_key.into(),
            outbox,
        })
}

#[derive(Serialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    #[serde(rename = "statusCode")]
    status_code: u16,
    name: &'static str,
    message: &'static str,
}

fn error(status: StatusCode, name: &'static str, message: &'static str) -> Response {
    (
        status,
        Json(ErrorResponse {
            status_code: status.as_u16(),
            name,
            message,
        }),
    )
        .into_response()
}

async fn send_email(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    Json(email): Json<SentEmail>,
) -> Response {
    if !auth.is_some_and(|TypedHeader(auth)| auth.token() == &*state.api_key) {
        return error(
            StatusCode::UNAUTHORIZED,
            "invalid_api_key",
            "API key is invalid",
        );
    }

    if email.to.iter().any(|to| to == REJECTED_RECIPIENT) {
        return error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "validation_error",
            "The recipient address is not allowed",
        );
    }

    info!(to = ?email.to, subject = email.subject, "received email");
    state.outbox.lock().await.push(email);

    Json(SendEmailResponse {
        id: Uuid::now_v7().to_string(),
    })
    .into_response()
}

async fn list_emails(State(state): State<AppState>) -> Json<Vec<SentEmail>> {
    Json(state.outbox.lock().await.clone())
}
