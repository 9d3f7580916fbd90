use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
struct ChatRequest {
    message: String,
}

#[derive(Debug, Deserialize, Serialize)]
struct ChatResponse {
    response: String,
}

// Body validation is left to the Json extractor, which rejects a missing or mistyped `message` with 422
async fn handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    tracing::debug!(invoker = state.agent.invoker_name(), "chat request");
    let response = state.agent.reply(request.message).await?;
    Ok(Json(ChatResponse { response }))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(handler))
        .with_state(state)
}
