//! HTTP server implementation for the API

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use super::models::{CompatTranscriptQuery, TranscriptQuery, ValidateRequest};
use super::{handlers, AppState};
use crate::error::TranscriptError;

/// Configure and start the HTTP server
pub async fn start_http_server(state: AppState, port: u16) -> Result<()> {
    info!("🚀 Starting HTTP server on port {}", port);

    // Allow browser access from the player page
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/health", get(health_handler))
        // Transcript acquisition (standard + Flask-compat shapes)
        .route("/api/transcript", get(transcript_handler))
        .route("/api/transcript/:video_id", get(transcript_compat_handler))
        // Scoring
        .route("/api/validate-transcription", post(validate_handler))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("🌐 API server listening on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Map a pipeline error onto its HTTP status and JSON payload
fn error_response(err: TranscriptError) -> axum::response::Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(err.to_payload())).into_response()
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(handlers::health_check().await))
}

/// Standard transcript handler
async fn transcript_handler(
    State(state): State<AppState>,
    Query(query): Query<TranscriptQuery>,
) -> impl IntoResponse {
    match handlers::get_transcript(&state, query.video_id.as_deref(), query.language.as_deref())
        .await
    {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Flask-compat transcript handler
async fn transcript_compat_handler(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    Query(query): Query<CompatTranscriptQuery>,
) -> impl IntoResponse {
    match handlers::get_transcript_compat(&state, &video_id, query.language.as_deref()).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Transcription validation handler
async fn validate_handler(
    State(state): State<AppState>,
    Json(payload): Json<ValidateRequest>,
) -> impl IntoResponse {
    match handlers::validate_transcription(&state, payload).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => error_response(e),
    }
}
