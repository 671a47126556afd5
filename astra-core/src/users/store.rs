//! User registry storage

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::types::{NewUser, User, UserRole, UserStatus};
use crate::error::UserStoreError;
use crate::teams::Team;

/// Storage seam for the user registry.
///
/// The bundled implementation is in-memory; a database-backed adapter slots
/// in here without the handlers noticing.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create an account in pending status. Fails when the email is taken.
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserStoreError>;

    /// Look an account up by exact email
    async fn user_by_email(&self, email: &str) -> Option<User>;

    /// Look an account up by id
    async fn user_by_id(&self, id: &str) -> Option<User>;

    /// Mark an account approved. Returns false when the id is unknown.
    async fn approve_user(&self, id: &str) -> Result<bool, UserStoreError>;

    /// Mark an account denied. Returns false when the id is unknown.
    async fn deny_user(&self, id: &str) -> Result<bool, UserStoreError>;

    /// Change an account's role. Returns false when the id is unknown.
    async fn update_user_role(&self, id: &str, role: UserRole) -> Result<bool, UserStoreError>;

    /// Accounts awaiting approval, oldest first
    async fn pending_users(&self) -> Vec<User>;

    /// Approved accounts, oldest first
    async fn approved_users(&self) -> Vec<User>;

    /// Approved members of one team, oldest first
    async fn team_members(&self, team: Team) -> Vec<User>;

    /// Total registered accounts, any status
    async fn count(&self) -> usize;
}

/// In-memory implementation of [`UserStore`], keyed by account id
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn set_status(&self, id: &str, status: UserStatus) -> bool {
        let mut users = self.users.write().await;
        match users.get_mut(id) {
            Some(user) => {
                user.status = status;
                true
            }
            None => false,
        }
    }

    async fn collect_sorted(&self, filter: impl Fn(&User) -> bool) -> Vec<User> {
        let users = self.users.read().await;
        let mut matched: Vec<User> = users.values().filter(|u| filter(u)).cloned().collect();
        matched.sort_by(|a, b| a.joined_at.cmp(&b.joined_at));
        matched
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == new_user.email) {
            return Err(UserStoreError::EmailTaken(new_user.email));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: new_user.email,
            name: new_user.name,
            team: new_user.team,
            role: new_user.role,
            status: UserStatus::Pending,
            joined_at: Utc::now(),
        };
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn user_by_email(&self, email: &str) -> Option<User> {
        let users = self.users.read().await;
        users.values().find(|u| u.email == email).cloned()
    }

    async fn user_by_id(&self, id: &str) -> Option<User> {
        let users = self.users.read().await;
        users.get(id).cloned()
    }

    async fn approve_user(&self, id: &str) -> Result<bool, UserStoreError> {
        Ok(self.set_status(id, UserStatus::Approved).await)
    }

    async fn deny_user(&self, id: &str) -> Result<bool, UserStoreError> {
        Ok(self.set_status(id, UserStatus::Denied).await)
    }

    async fn update_user_role(&self, id: &str, role: UserRole) -> Result<bool, UserStoreError> {
        let mut users = self.users.write().await;
        match users.get_mut(id) {
            Some(user) => {
                user.role = role;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn pending_users(&self) -> Vec<User> {
        self.collect_sorted(|u| u.status == UserStatus::Pending).await
    }

    async fn approved_users(&self) -> Vec<User> {
        self.collect_sorted(|u| u.status == UserStatus::Approved).await
    }

    async fn team_members(&self, team: Team) -> Vec<User> {
        self.collect_sorted(|u| u.team == team && u.status == UserStatus::Approved)
            .await
    }

    async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}
