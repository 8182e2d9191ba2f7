//! In-memory implementation of the [`UserRepository`] port.

use async_trait::async_trait;

use crate::domain::ports::{NewUser, UserPersistenceError, UserRepository};
use crate::domain::{Email, User, UserId, UserParts};

use super::store::MemoryStore;

/// User repository over the shared [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: MemoryStore,
}

impl InMemoryUserRepository {
    /// Create a repository over `store`.
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let table = self.store.users();
        let mut rows = table.write()?;
        if rows.values().any(|existing| existing.email() == &user.email) {
            return Err(UserPersistenceError::duplicate(user.email.to_string()));
        }
        let user_id = table.next_id(UserId::new)?;
        let created = User::new(UserParts {
            user_id,
            banner_id: user.banner_id.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            role: user.role,
            password: user.password.clone(),
        });
        rows.insert(user_id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.store.users().read()?.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .store
            .users()
            .read()?
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }
}
