use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::{handler::handle_click, oneclick::ClickEvent, ServerState};

pub fn get_router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root).post(click))
        .route("/click", post(click))
        .route("/health", get(health))
}

async fn root() -> &'static str {
    "Hello, LTE-M Button relay!"
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Always answers 200; failures are only logged.
async fn click(State(state): State<ServerState>, body: Bytes) -> StatusCode {
    match serde_json::from_slice::<ClickEvent>(&body) {
        Ok(event) => handle_click(&state, event).await,
        Err(err) => tracing::warn!(error = %err, "click event could not be decoded"),
    }

    StatusCode::OK
}
