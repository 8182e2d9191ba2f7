//! Shared mapping from store failures to repository port errors.
//!
//! A poisoned lock means the table can no longer be trusted, the in-memory
//! equivalent of losing the database connection.

use crate::domain::ports::{
    CourseRepositoryError, QuestionRepositoryError, SurveyRepositoryError, UserPersistenceError,
};

use super::store::StoreError;

macro_rules! map_store_error {
    ($($port_error:ty),* $(,)?) => {
        $(
            impl From<StoreError> for $port_error {
                fn from(error: StoreError) -> Self {
                    match error {
                        StoreError::Poisoned { .. } => Self::connection(error.to_string()),
                        StoreError::SequenceExhausted { .. } => Self::query(error.to_string()),
                    }
                }
            }
        )*
    };
}

map_store_error!(
    CourseRepositoryError,
    SurveyRepositoryError,
    QuestionRepositoryError,
    UserPersistenceError,
);
