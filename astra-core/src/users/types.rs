//! User registry types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::teams::Team;

/// Membership role within the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Member,
    TeamHead,
    Admin,
}

/// Account lifecycle status for the admin-approval workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Pending,
    Approved,
    Denied,
}

/// A registered member of the project.
///
/// No credential material lives here: passwords are checked upstream and the
/// registry only gates on account status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Registry-assigned id
    pub id: String,
    /// Email, unique across the registry
    pub email: String,
    /// Display name
    pub name: String,
    /// Team the member signed up for
    pub team: Team,
    pub role: UserRole,
    pub status: UserStatus,
    /// When the account was created
    pub joined_at: DateTime<Utc>,
}

/// Fields supplied at signup; the store assigns id, status, and timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub team: Team,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_with_snake_case_enums() {
        let user = User {
            id: "u1".to_string(),
            email: "pat@astra.example".to_string(),
            name: "Pat".to_string(),
            team: Team::WheelAssembly,
            role: UserRole::TeamHead,
            status: UserStatus::Pending,
            joined_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains(r#""team":"wheel_assembly""#));
        assert!(json.contains(r#""role":"team_head""#));
        assert!(json.contains(r#""status":"pending""#));

        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, parsed);
    }

    #[test]
    fn new_user_deserializes_from_signup_payload() {
        let new_user: NewUser = serde_json::from_str(
            r#"{"email":"sam@astra.example","name":"Sam","team":"solar","role":"member"}"#,
        )
        .unwrap();
        assert_eq!(new_user.team, Team::Solar);
        assert_eq!(new_user.role, UserRole::Member);
    }
}
