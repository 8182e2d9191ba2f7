//! Port abstraction for course persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Course, CourseCode, CourseId, NewCourse};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by course repository adapters.
    pub enum CourseRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "course repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "course repository query failed: {message}",
        /// A course with the same code already exists.
        Duplicate { message: String } => "course already exists: {message}",
    }
}

/// Port for course storage and lookup.
///
/// Course codes are unique; adapters reject a second insert with the same
/// code using [`CourseRepositoryError::Duplicate`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Store a new course and return it with its assigned id.
    async fn insert(&self, course: &NewCourse) -> Result<Course, CourseRepositoryError>;

    /// Fetch a course by its internal identifier.
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, CourseRepositoryError>;

    /// Fetch a course by its external code.
    async fn find_by_code(
        &self,
        code: &CourseCode,
    ) -> Result<Option<Course>, CourseRepositoryError>;

    /// List every course ordered by id.
    async fn list(&self) -> Result<Vec<Course>, CourseRepositoryError>;
}
