use axum::{Form, extract::State, response::Html};
use std::collections::BTreeMap;

use crate::api::app_state::AppState;
use crate::error::Result;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    Ok(Html(state.views.index_page()?))
}

pub async fn appointment_form(State(state): State<AppState>) -> Result<Html<String>> {
    Ok(Html(state.views.appointment_page(false)?))
}

pub async fn submit_appointment(
    State(state): State<AppState>,
    Form(fields): Form<BTreeMap<String, String>>,
) -> Result<Html<String>> {
    state.front_desk.submit_appointment(fields).await;
    state.metrics.record_appointment();
    Ok(Html(state.views.appointment_page(true)?))
}

pub async fn backup_view(State(state): State<AppState>) -> Result<Html<String>> {
    let snapshot = state.front_desk.snapshot().await;
    Ok(Html(state.views.backup_page(&snapshot)?))
}
