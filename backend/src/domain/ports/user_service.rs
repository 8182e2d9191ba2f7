//! Driving ports for registration and the signed-in user.

use async_trait::async_trait;

use crate::domain::{Error, Role, User, UserId, UserRegistration};

/// Domain use-case port for user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a user with `role`. Duplicate emails fail with a conflict.
    async fn add_user(&self, registration: &UserRegistration, role: Role) -> Result<User, Error>;
}

/// Domain use-case port resolving the session's user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CurrentUserService: Send + Sync {
    /// Load the user behind a session id; `unauthorized` when it no longer
    /// exists.
    async fn authenticated_user(&self, user_id: UserId) -> Result<User, Error>;
}
