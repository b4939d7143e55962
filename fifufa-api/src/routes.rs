use axum::{
    extract::{rejection::JsonRejection, Query, State},
    routing::{get, post},
    Json, Router,
};
use fifufa_app::domain::{FactList, RandomWord};
use fifufa_app::AppContext;
use fifufa_errors::AppError;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Fields stay loosely typed so a non-string topic is reported as a missing
/// topic instead of a deserialization error.
#[derive(Deserialize)]
struct FactsRequest {
    #[serde(default)]
    topic: Option<Value>,
    #[serde(default)]
    language: Option<Value>,
    #[serde(default)]
    more: Option<Value>,
}

#[derive(Deserialize)]
struct RandomWordQuery {
    language: Option<String>,
}

pub fn router(app_context: AppContext) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/facts", post(generate_facts))
        .route("/api/facts", post(generate_facts))
        .route("/random-word", get(random_word))
        .route("/api/random-words", get(random_word))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_context)
}

async fn generate_facts(
    State(ctx): State<AppContext>,
    payload: Result<Json<FactsRequest>, JsonRejection>,
) -> Result<Json<FactList>, AppError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Facts request rejected: {}", e.body_text());
        AppError::BadRequest(e.body_text())
    })?;

    let facts = ctx
        .generate_facts
        .execute(
            request.topic.as_ref().and_then(Value::as_str),
            request.language.as_ref().and_then(Value::as_str),
            request.more.as_ref().and_then(Value::as_bool).unwrap_or(false),
        )
        .await?;

    Ok(Json(facts))
}

async fn random_word(
    State(ctx): State<AppContext>,
    Query(query): Query<RandomWordQuery>,
) -> Result<Json<RandomWord>, AppError> {
    let word = ctx
        .serve_random_word
        .execute(query.language.as_deref())
        .await?;
    Ok(Json(word))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "OK", "message": "FiFuFa Bilingual API is running!" }))
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to FiFuFa Backend API!",
        "endpoints": {
            "health": "GET /health",
            "facts": "POST /facts",
            "randomWord": "GET /random-word"
        }
    }))
}
