//! Driving port for course lookup and administration.

use async_trait::async_trait;

use crate::domain::{Course, CourseCode, Error, NewCourse};

/// Domain use-case port for courses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseService: Send + Sync {
    /// Resolve a course by its external code; `None` when no course matches.
    async fn get_course_with_code(&self, code: &CourseCode) -> Result<Option<Course>, Error>;

    /// Create a course. Duplicate codes fail with a conflict.
    async fn add_course(&self, course: NewCourse) -> Result<Course, Error>;

    /// Every course, ordered by id.
    async fn list_courses(&self) -> Result<Vec<Course>, Error>;
}
