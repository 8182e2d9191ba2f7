//! Shared in-memory tables backing the persistence adapters.
//!
//! [`MemoryStore`] plays the role a connection pool plays for a database:
//! it is cheap to clone, shared by every repository, and the only place
//! that touches the locks. Guards are never held across an `.await`.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{Course, CourseId, Question, QuestionId, Survey, SurveyId, User, UserId};

/// Errors raised while accessing the in-memory tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A writer panicked while holding the table lock.
    #[error("{table} table lock poisoned")]
    Poisoned {
        /// Table whose lock is poisoned.
        table: &'static str,
    },
    /// The id sequence produced a value that is not a valid identifier.
    #[error("{table} id sequence exhausted")]
    SequenceExhausted {
        /// Table whose sequence failed.
        table: &'static str,
    },
}

/// One table: rows keyed by id plus the id sequence.
#[derive(Debug)]
pub(crate) struct Table<K, V> {
    name: &'static str,
    rows: RwLock<BTreeMap<K, V>>,
    sequence: AtomicI64,
}

impl<K, V> Table<K, V> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(0),
        }
    }

    /// Table name used in error messages.
    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<K, V>>, StoreError> {
        self.rows
            .read()
            .map_err(|_| StoreError::Poisoned { table: self.name })
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<K, V>>, StoreError> {
        self.rows
            .write()
            .map_err(|_| StoreError::Poisoned { table: self.name })
    }

    /// Next positive id from the sequence.
    pub(crate) fn next_id<I, E>(&self, build: impl FnOnce(i64) -> Result<I, E>) -> Result<I, StoreError> {
        let raw = self.sequence.fetch_add(1, Ordering::SeqCst).saturating_add(1);
        build(raw).map_err(|_| StoreError::SequenceExhausted { table: self.name })
    }
}

#[derive(Debug)]
struct Tables {
    courses: Table<CourseId, Course>,
    surveys: Table<SurveyId, Survey>,
    questions: Table<QuestionId, Question>,
    users: Table<UserId, User>,
}

/// Handle to the shared in-memory tables.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use assessme::outbound::persistence::{InMemoryCourseRepository, MemoryStore};
///
/// let store = MemoryStore::new();
/// let courses = Arc::new(InMemoryCourseRepository::new(store.clone()));
/// # let _ = courses;
/// ```
#[derive(Debug, Clone)]
pub struct MemoryStore {
    tables: Arc<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            tables: Arc::new(Tables {
                courses: Table::new("courses"),
                surveys: Table::new("surveys"),
                questions: Table::new("questions"),
                users: Table::new("users"),
            }),
        }
    }

    pub(crate) fn courses(&self) -> &Table<CourseId, Course> {
        &self.tables.courses
    }

    pub(crate) fn surveys(&self) -> &Table<SurveyId, Survey> {
        &self.tables.surveys
    }

    pub(crate) fn questions(&self) -> &Table<QuestionId, Question> {
        &self.tables.questions
    }

    pub(crate) fn users(&self) -> &Table<UserId, User> {
        &self.tables.users
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sequences_start_at_one_and_increase() {
        let store = MemoryStore::new();
        let first = store.courses().next_id(CourseId::new).expect("first id");
        let second = store.courses().next_id(CourseId::new).expect("second id");
        assert_eq!((first.get(), second.get()), (1, 2));
    }

    #[rstest]
    fn sequences_are_per_table() {
        let store = MemoryStore::new();
        store.courses().next_id(CourseId::new).expect("course id");
        let survey = store.surveys().next_id(SurveyId::new).expect("survey id");
        assert_eq!(survey.get(), 1);
    }

    #[rstest]
    fn clones_share_tables() {
        let store = MemoryStore::new();
        let clone = store.clone();
        store.users().next_id(UserId::new).expect("user id");
        let next = clone.users().next_id(UserId::new).expect("user id");
        assert_eq!(next.get(), 2);
    }

    #[rstest]
    fn poisoned_locks_surface_as_errors() {
        let store = MemoryStore::new();
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.courses().write().expect("first writer");
            panic!("poison the courses table");
        })
        .join();
        let err = store.courses().read().expect_err("poisoned lock");
        assert_eq!(err, StoreError::Poisoned { table: "courses" });
    }
}
