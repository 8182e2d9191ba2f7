//! In-memory implementation of the [`CourseRepository`] port.

use async_trait::async_trait;

use crate::domain::ports::{CourseRepository, CourseRepositoryError};
use crate::domain::{Course, CourseCode, CourseId, NewCourse};

use super::store::MemoryStore;

/// Course repository over the shared [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryCourseRepository {
    store: MemoryStore,
}

impl InMemoryCourseRepository {
    /// Create a repository over `store`.
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn insert(&self, course: &NewCourse) -> Result<Course, CourseRepositoryError> {
        let table = self.store.courses();
        let mut rows = table.write()?;
        if rows
            .values()
            .any(|existing| existing.course_code() == &course.course_code)
        {
            return Err(CourseRepositoryError::duplicate(
                course.course_code.to_string(),
            ));
        }
        let id = table.next_id(CourseId::new)?;
        let created = Course::new(id, course.course_code.clone(), course.course_name.clone());
        rows.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, CourseRepositoryError> {
        Ok(self.store.courses().read()?.get(&id).cloned())
    }

    async fn find_by_code(
        &self,
        code: &CourseCode,
    ) -> Result<Option<Course>, CourseRepositoryError> {
        Ok(self
            .store
            .courses()
            .read()?
            .values()
            .find(|course| course.course_code() == code)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Course>, CourseRepositoryError> {
        Ok(self.store.courses().read()?.values().cloned().collect())
    }
}
