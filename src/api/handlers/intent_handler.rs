use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;

use crate::{
    api::{
        app_state::AppState,
        dto::{MessageResponse, intent_dto::*},
    },
    error::AppError,
    services::intent_editor::ADD_INTENT_MESSAGE,
};

pub async fn add_intent(
    State(state): State<AppState>,
    Json(request): Json<AddIntentRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Adding intent: {}", request.tag);

    state.front_desk.add_intent(request.into()).await?;
    state.metrics.record_intent_added();

    Ok(Json(MessageResponse::new(ADD_INTENT_MESSAGE)))
}

pub async fn reload_intents(State(state): State<AppState>) -> impl IntoResponse {
    let load = state.front_desk.reload_intents().await;
    let warning = load.issue().map(|issue| issue.to_string());

    Json(ReloadIntentsResponse {
        intents: load.into_store().len(),
        warning,
    })
}
