use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, put},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use hindi_tutor::{BoardSettings, Speech, TranslationRequest};
use hindi_tutor_llm::Tutor;

/// Raw query parameters of `GET /api/ai`; defaults are applied afterwards
#[derive(Debug, Default, Deserialize)]
pub struct AiQuery {
    pub question: Option<String>,
    pub speech: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechUpdate {
    pub speech: Speech,
}

#[derive(Clone)]
pub struct AppState {
    pub tutor: Arc<Tutor>,
    pub settings: Arc<RwLock<BoardSettings>>,
}

impl AppState {
    pub fn new(tutor: Tutor) -> Self {
        Self {
            tutor: Arc::new(tutor),
            settings: Arc::new(RwLock::new(BoardSettings::default())),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/api/ai", get(translate))
        .route("/api/settings", get(get_settings))
        .route("/api/settings/speech", put(set_speech))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

async fn translate(
    State(state): State<AppState>,
    Query(query): Query<AiQuery>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    let request = TranslationRequest::from_params(query.question.as_deref(), query.speech.as_deref());

    // The model's object goes back to the client exactly as parsed
    let result = state.tutor.translate_request_value(&request).await.map_err(|e| {
        error!("Error in GET request: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "An error occurred while processing your request.".to_string(),
                details: e.to_string(),
            }),
        )
    })?;

    Ok(Json(result))
}

async fn get_settings(State(state): State<AppState>) -> Json<BoardSettings> {
    Json(state.settings.read().await.clone())
}

async fn set_speech(
    State(state): State<AppState>,
    Json(update): Json<SpeechUpdate>,
) -> Json<BoardSettings> {
    let mut settings = state.settings.write().await;
    settings.set_speech(update.speech);
    info!("Speech register set to {}", update.speech);
    Json(settings.clone())
}
