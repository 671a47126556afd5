//! User registry: accounts, roles, and the admin-approval workflow

mod store;
mod types;

pub use store::{MemoryUserStore, UserStore};
pub use types::{NewUser, User, UserRole, UserStatus};
