use std::sync::Arc;

use axum::{extract::State, routing, Json, Router};
use embassy_core_contact_contracts::ContactFeatureService;
use serde::Serialize;

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    email: bool,
}

async fn health(service: State<Arc<impl ContactFeatureService>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        http: true,
        email: service.is_configured(),
    })
}
