//! HTTP server module

mod api;
mod files;
mod teams;
mod uploads;
mod users;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{AppState, ws};

pub use api::HealthResponse;
pub use files::{FileListResponse, RegisterFileRequest};
pub use teams::{TeamInfo, TeamListResponse, TeamMembersResponse};
pub use uploads::{SignUploadRequest, SignUploadResponse, UploadErrorResponse};
pub use users::{
    LoginRequest, LoginResponse, PendingUsersResponse, ReviewAction, ReviewRequest, SignupRequest,
    SignupResponse, StatusMessage, UserCountResponse,
};

/// Create the HTTP router with all routes configured.
///
/// Browser clients are served from another origin, so CORS is wide open,
/// matching the deployment the original clients expect.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/ws", get(ws::ws_handler))
        .route("/api/auth/signup", post(users::signup))
        .route("/api/auth/login", post(users::login))
        .route(
            "/api/users/pending",
            get(users::pending_users).post(users::review_pending_user),
        )
        .route("/api/users/count", get(users::user_count))
        .route("/api/teams", get(teams::list_teams))
        .route("/api/teams/:team/members", get(teams::team_members))
        .route("/api/files", get(files::list_files).post(files::register_file))
        .route("/api/uploads/sign", post(uploads::sign_upload))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;

    use super::*;

    #[tokio::test]
    async fn test_router_has_health_endpoint() {
        let state = Arc::new(AppState::new());
        let router = create_router(state);
        let server = TestServer::new(router).unwrap();

        let response = server.get("/health").await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_router_has_user_count_endpoint() {
        let state = Arc::new(AppState::new());
        let router = create_router(state);
        let server = TestServer::new(router).unwrap();

        let response = server.get("/api/users/count").await;
        response.assert_status_ok();

        let body: UserCountResponse = response.json();
        assert_eq!(body.count, 0);
    }
}
