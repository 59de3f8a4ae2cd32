use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::api::{app_state::AppState, dto::account_dto::*};

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> impl IntoResponse {
    debug!("Registering user: {}", request.username);
    Json(
        state
            .accounts
            .register(&request.username, &request.password)
            .await,
    )
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> impl IntoResponse {
    debug!("Login attempt: {}", request.username);
    Json(state.accounts.login(&request.username, &request.password).await)
}

pub async fn add_user_appointment(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(details): Json<Map<String, Value>>,
) -> impl IntoResponse {
    debug!("Saving appointment for user: {}", user_id);
    Json(state.accounts.add_appointment(&user_id, &details).await)
}
