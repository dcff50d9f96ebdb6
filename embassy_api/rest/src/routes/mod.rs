use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiMessage;

pub mod contact;
pub mod health;
pub mod news;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    message(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn message(code: StatusCode, message: impl Into<String>) -> Response {
    (
        code,
        Json(ApiMessage {
            message: message.into(),
        }),
    )
        .into_response()
}
