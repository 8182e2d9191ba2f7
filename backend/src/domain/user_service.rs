//! User account service: registration, login and session user lookup.
//!
//! One struct implements [`UserService`], [`LoginService`] and
//! [`CurrentUserService`] because all three read the same user table.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    CurrentUserService, LoginService, NewUser, UserPersistenceError, UserRepository, UserService,
};
use crate::domain::{
    Email, Error, LoginCredentials, PasswordDigest, Role, User, UserId, UserRegistration,
};

const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Account service over a [`UserRepository`].
#[derive(Clone)]
pub struct UserAccountService<R> {
    users: Arc<R>,
}

impl<R> UserAccountService<R> {
    /// Create a service backed by `users`.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

pub(crate) fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::Duplicate { message } => {
            Error::conflict(format!("user already exists: {message}"))
        }
    }
}

#[async_trait]
impl<R> UserService for UserAccountService<R>
where
    R: UserRepository,
{
    async fn add_user(&self, registration: &UserRegistration, role: Role) -> Result<User, Error> {
        let record = NewUser {
            banner_id: registration.banner_id().clone(),
            first_name: registration.first_name().clone(),
            last_name: registration.last_name().clone(),
            email: registration.email().clone(),
            role,
            password: PasswordDigest::derive(registration.password())
                .map_err(|err| Error::internal(err.to_string()))?,
        };
        let user = self.users.insert(&record).await.map_err(map_user_error)?;
        tracing::info!(user_id = user.user_id().get(), role = %role, "user registered");
        Ok(user)
    }
}

#[async_trait]
impl<R> LoginService for UserAccountService<R>
where
    R: UserRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        // A malformed email can never match a stored one.
        let Ok(email) = Email::new(credentials.email()) else {
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };
        let user = self
            .users
            .find_by_email(&email)
            .await
            .map_err(map_user_error)?;
        match user {
            Some(user) if user.password().verify(credentials.password()) => Ok(user.user_id()),
            _ => Err(Error::unauthorized(INVALID_CREDENTIALS)),
        }
    }
}

#[async_trait]
impl<R> CurrentUserService for UserAccountService<R>
where
    R: UserRepository,
{
    async fn authenticated_user(&self, user_id: UserId) -> Result<User, Error> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::unauthorized("login required"))
    }
}
