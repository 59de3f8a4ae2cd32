use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::path::Path;
use tracing::{error, info};

use crate::{
    api::{
        app_state::AppState,
        dto::{MessageResponse, backup_dto::*},
    },
    error::AppError,
    services::backup::{BackupError, RESTORE_MESSAGE},
};

pub async fn export_backup(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let receipt = state.front_desk.export_backup().await.map_err(|e| {
        error!("Backup export failed: {}", e);
        AppError::from(e)
    })?;
    state.metrics.record_backup_exported();

    Ok(Json(ExportBackupResponse {
        message: receipt.message,
        file_path: receipt.file_path.display().to_string(),
    }))
}

pub async fn restore_backup(
    State(state): State<AppState>,
    Json(request): Json<RestoreBackupRequest>,
) -> impl IntoResponse {
    let path = request.file_path.as_deref().map(Path::new);

    match state.front_desk.restore_backup(path).await {
        Ok(summary) => {
            info!(
                "Restored {} appointments and {} chat logs",
                summary.appointments, summary.chat_logs
            );
            state.metrics.record_backup_restored();
            (StatusCode::OK, Json(MessageResponse::new(RESTORE_MESSAGE))).into_response()
        }
        Err(e) => {
            let (status, error) = match e {
                BackupError::NoPath => (StatusCode::BAD_REQUEST, e.to_string()),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to restore backup: {}", e),
                ),
            };
            error!("{}", error);
            (status, Json(BackupErrorResponse { error })).into_response()
        }
    }
}
