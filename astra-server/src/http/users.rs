//! Account and approval API handlers
//!
//! Registration puts new accounts into pending status; an admin approves or
//! denies them from the pending queue. Passwords are required on the wire
//! for compatibility with the clients but are checked upstream; login gates
//! only on account status.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use astra_core::{NewUser, Team, User, UserRole, UserStatus, UserStoreError};

use crate::AppState;

/// Request body for POST /api/auth/signup
#[derive(Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub team: Team,
}

/// Response for POST /api/auth/signup
#[derive(Debug, Serialize, Deserialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
    /// Id of the newly created account, on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// POST /api/auth/signup - Register a new account in pending status
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignupRequest>,
) -> impl IntoResponse {
    if request.email.is_empty() || request.password.is_empty() || request.name.is_empty() {
        return failure(
            StatusCode::BAD_REQUEST,
            "All fields are required",
        );
    }

    let new_user = NewUser {
        email: request.email,
        name: request.name,
        team: request.team,
        role: UserRole::Member,
    };

    match state.users.create_user(new_user).await {
        Ok(user) => (
            StatusCode::OK,
            Json(SignupResponse {
                success: true,
                message: "Registration successful. Your account is pending admin approval."
                    .to_string(),
                user_id: Some(user.id),
            }),
        )
            .into_response(),
        Err(UserStoreError::EmailTaken(_)) => failure(
            StatusCode::CONFLICT,
            "User with this email already exists",
        ),
        Err(e) => {
            error!("signup failed: {}", e);
            failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// Request body for POST /api/auth/login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for POST /api/auth/login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    /// The account record, on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// POST /api/auth/login - Gate an account on its approval status
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    if request.email.is_empty() || request.password.is_empty() {
        return failure(StatusCode::BAD_REQUEST, "Email and password are required");
    }

    let Some(user) = state.users.user_by_email(&request.email).await else {
        return failure(StatusCode::UNAUTHORIZED, "Invalid email or password");
    };

    match user.status {
        UserStatus::Pending => failure(
            StatusCode::UNAUTHORIZED,
            "Your account is pending approval. Please wait for admin approval.",
        ),
        UserStatus::Denied => failure(
            StatusCode::UNAUTHORIZED,
            "Your account access has been denied. Please contact an administrator.",
        ),
        UserStatus::Approved => (
            StatusCode::OK,
            Json(LoginResponse {
                success: true,
                message: "Login successful".to_string(),
                user: Some(user),
            }),
        )
            .into_response(),
    }
}

/// Response for GET /api/users/pending
#[derive(Debug, Serialize, Deserialize)]
pub struct PendingUsersResponse {
    /// Accounts awaiting review, oldest first
    pub users: Vec<User>,
}

/// GET /api/users/pending - List accounts awaiting review
pub async fn pending_users(State(state): State<Arc<AppState>>) -> Json<PendingUsersResponse> {
    Json(PendingUsersResponse {
        users: state.users.pending_users().await,
    })
}

/// Review decision for a pending account
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    Approve,
    Deny,
}

/// Request body for POST /api/users/pending
#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub user_id: String,
    pub action: ReviewAction,
}

/// POST /api/users/pending - Approve or deny a pending account
pub async fn review_pending_user(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReviewRequest>,
) -> impl IntoResponse {
    let result = match request.action {
        ReviewAction::Approve => state.users.approve_user(&request.user_id).await,
        ReviewAction::Deny => state.users.deny_user(&request.user_id).await,
    };

    match result {
        Ok(true) => {
            let message = match request.action {
                ReviewAction::Approve => "User approved successfully",
                ReviewAction::Deny => "User denied successfully",
            };
            success(message)
        }
        Ok(false) => failure(StatusCode::NOT_FOUND, "User not found"),
        Err(e) => {
            error!("review of user {} failed: {}", request.user_id, e);
            failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// Response for GET /api/users/count
#[derive(Debug, Serialize, Deserialize)]
pub struct UserCountResponse {
    pub count: usize,
}

/// GET /api/users/count - Total registered accounts
pub async fn user_count(State(state): State<Arc<AppState>>) -> Json<UserCountResponse> {
    Json(UserCountResponse {
        count: state.users.count().await,
    })
}

/// Plain success/failure message body
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusMessage {
    pub success: bool,
    pub message: String,
}

fn success(message: &str) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(StatusMessage {
            success: true,
            message: message.to_string(),
        }),
    )
        .into_response()
}

fn failure(status: StatusCode, message: &str) -> axum::response::Response {
    (
        status,
        Json(StatusMessage {
            success: false,
            message: message.to_string(),
        }),
    )
        .into_response()
}
