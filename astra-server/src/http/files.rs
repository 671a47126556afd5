//! File index handlers

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use astra_core::FileRecord;

use crate::AppState;

/// How many records GET /api/files returns at most
const FILE_LIST_LIMIT: usize = 50;

/// Response for GET /api/files
#[derive(Debug, Serialize, Deserialize)]
pub struct FileListResponse {
    /// Known uploads, newest first
    pub files: Vec<FileRecord>,
}

/// GET /api/files - The most recently recorded uploads
pub async fn list_files(State(state): State<Arc<AppState>>) -> Json<FileListResponse> {
    Json(FileListResponse {
        files: state.files.recent(FILE_LIST_LIMIT).await,
    })
}

/// Request body for POST /api/files
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterFileRequest {
    pub original_name: String,
    pub mime_type: String,
}

/// POST /api/files - Record a completed upload in the index
pub async fn register_file(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterFileRequest>,
) -> impl IntoResponse {
    if request.original_name.is_empty() || request.mime_type.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "original_name & mime_type required"})),
        )
            .into_response();
    }

    let record = FileRecord::new(request.original_name, request.mime_type);
    state.files.add(record.clone()).await;

    (StatusCode::CREATED, Json(record)).into_response()
}
