//! Upload URL signing handler

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::AppState;

/// Request body for POST /api/uploads/sign
#[derive(Debug, Serialize, Deserialize)]
pub struct SignUploadRequest {
    pub filename: String,
    pub filetype: String,
}

/// Response for POST /api/uploads/sign
#[derive(Debug, Serialize, Deserialize)]
pub struct SignUploadResponse {
    /// Time-limited URL to PUT the file to
    pub url: String,
    /// Object key the file will land under
    pub key: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadErrorResponse {
    pub error: String,
}

/// POST /api/uploads/sign - Produce a time-limited, write-only upload URL
pub async fn sign_upload(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignUploadRequest>,
) -> impl IntoResponse {
    if request.filename.is_empty() || request.filetype.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(UploadErrorResponse {
                error: "filename & filetype required".to_string(),
            }),
        )
            .into_response();
    }

    match state.upload_signer.sign(&request.filename, &request.filetype) {
        Ok(signed) => (
            StatusCode::OK,
            Json(SignUploadResponse {
                url: signed.url,
                key: signed.key,
            }),
        )
            .into_response(),
        Err(e) => {
            error!("failed to sign upload url: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UploadErrorResponse {
                    error: "failed to sign url".to_string(),
                }),
            )
                .into_response()
        }
    }
}
