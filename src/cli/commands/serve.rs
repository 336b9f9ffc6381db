//! HTTP API server.
//!
//! Exposes the study pipeline to browser front-ends as a small JSON API.

use crate::cli::Output;
use crate::config::Settings;
use crate::error::LaerError;
use crate::orchestrator::Orchestrator;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// Shared application state.
struct AppState {
    orchestrator: Orchestrator,
    default_questions: i64,
}

/// Run the HTTP API server.
pub async fn run_serve(host: Option<&str>, port: Option<u16>, settings: Settings) -> anyhow::Result<()> {
    let orchestrator = Orchestrator::new(&settings)?;

    let state = Arc::new(AppState {
        orchestrator,
        default_questions: settings.study.default_questions,
    });

    let host = host.unwrap_or(&settings.server.host);
    let port = port.unwrap_or(settings.server.port);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Laer API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Process video", "POST /process_video");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, router(state)).await?;

    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/process_video", post(process_video))
        .layer(cors)
        .with_state(state)
}

// === Request/Response Types ===

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProcessVideoRequest {
    /// YouTube URL or bare video ID
    video_url: String,
    /// Number of quiz questions (server default when absent, not validated)
    #[serde(default)]
    num_questions: Option<i64>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn client_error(message: String) -> axum::response::Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn process_video(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProcessVideoRequest>,
) -> impl IntoResponse {
    let num_questions = req.num_questions.unwrap_or(state.default_questions);
    info!("Processing {} ({} questions)", req.video_url, num_questions);

    match state
        .orchestrator
        .process_video(&req.video_url, num_questions)
        .await
    {
        Ok(pack) => Json(pack).into_response(),
        Err(LaerError::InvalidVideoUrl(_)) => client_error("Invalid YouTube URL".to_string()),
        Err(e @ LaerError::TranscriptFetch(_)) => {
            client_error(format!("Error fetching transcript: {}", e))
        }
        Err(e) => {
            error!("Failed to process {}: {}", req.video_url, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
