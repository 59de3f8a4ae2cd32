use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;

use crate::api::{app_state::AppState, dto::chat_dto::*};

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    let reply = state.front_desk.chat(&request.message).await;
    if !matches!(reply, crate::services::Reply::Prompt) {
        state.metrics.record_chat(reply.is_fallback());
    }
    debug!("Chat reply: {:?}", reply);

    Json(ChatResponse {
        response: reply.text().to_string(),
    })
}

pub async fn get_intents(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.front_desk.intents().await)
}
