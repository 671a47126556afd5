//! Team catalog and roster handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use astra_core::{Team, User};

use crate::AppState;

/// One catalog entry
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamInfo {
    pub id: Team,
    pub label: String,
    pub description: String,
}

/// Response for GET /api/teams
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamListResponse {
    pub teams: Vec<TeamInfo>,
}

/// GET /api/teams - The static team catalog
pub async fn list_teams() -> Json<TeamListResponse> {
    let teams = Team::all()
        .into_iter()
        .map(|team| TeamInfo {
            id: team,
            label: team.label().to_string(),
            description: team.description().to_string(),
        })
        .collect();

    Json(TeamListResponse { teams })
}

/// Response for GET /api/teams/:team/members
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamMembersResponse {
    pub team: Team,
    /// Approved members only; pending and denied accounts are not roster
    /// entries
    pub members: Vec<User>,
}

/// GET /api/teams/:team/members - Roster of one team
pub async fn team_members(
    State(state): State<Arc<AppState>>,
    Path(team): Path<Team>,
) -> Json<TeamMembersResponse> {
    Json(TeamMembersResponse {
        team,
        members: state.users.team_members(team).await,
    })
}
