//! Course catalogue service implementing the [`CourseService`] driving port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{CourseRepository, CourseRepositoryError, CourseService};
use crate::domain::{Course, CourseCode, Error, NewCourse};

/// Course lookup and administration over a [`CourseRepository`].
#[derive(Clone)]
pub struct CourseCatalogueService<R> {
    courses: Arc<R>,
}

impl<R> CourseCatalogueService<R> {
    /// Create a service backed by `courses`.
    pub fn new(courses: Arc<R>) -> Self {
        Self { courses }
    }
}

pub(crate) fn map_course_error(error: CourseRepositoryError) -> Error {
    match error {
        CourseRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("course repository unavailable: {message}"))
        }
        CourseRepositoryError::Query { message } => {
            Error::internal(format!("course repository error: {message}"))
        }
        CourseRepositoryError::Duplicate { message } => {
            Error::conflict(format!("course already exists: {message}"))
        }
    }
}

#[async_trait]
impl<R> CourseService for CourseCatalogueService<R>
where
    R: CourseRepository,
{
    async fn get_course_with_code(&self, code: &CourseCode) -> Result<Option<Course>, Error> {
        self.courses
            .find_by_code(code)
            .await
            .map_err(map_course_error)
    }

    async fn add_course(&self, course: NewCourse) -> Result<Course, Error> {
        let created = self
            .courses
            .insert(&course)
            .await
            .map_err(map_course_error)?;
        tracing::info!(
            course_id = created.course_id().get(),
            course_code = %created.course_code(),
            "course created"
        );
        Ok(created)
    }

    async fn list_courses(&self) -> Result<Vec<Course>, Error> {
        self.courses.list().await.map_err(map_course_error)
    }
}
