//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{BannerId, Email, PasswordDigest, PersonName, Role, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A user with the same email already exists.
        Duplicate { message: String } => "user already exists: {message}",
    }
}

/// User record awaiting an id from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Banner id.
    pub banner_id: BannerId,
    /// First name.
    pub first_name: PersonName,
    /// Last name.
    pub last_name: PersonName,
    /// Login email; unique across users.
    pub email: Email,
    /// Granted role.
    pub role: Role,
    /// Salted password digest.
    pub password: PasswordDigest,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user record, rejecting duplicate emails.
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by normalised email.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError>;
}
