//! In-memory implementation of the [`SurveyRepository`] port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{SurveyRepository, SurveyRepositoryError};
use crate::domain::{CourseId, Survey, SurveyDraft, SurveyId};

use super::store::MemoryStore;

/// Survey repository over the shared [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemorySurveyRepository {
    store: MemoryStore,
}

impl InMemorySurveyRepository {
    /// Create a repository over `store`.
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SurveyRepository for InMemorySurveyRepository {
    async fn insert(
        &self,
        draft: &SurveyDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Survey, SurveyRepositoryError> {
        let table = self.store.surveys();
        let id = table.next_id(SurveyId::new)?;
        let survey = Survey::from_draft(id, draft.clone(), created_at);
        table.write()?.insert(id, survey.clone());
        Ok(survey)
    }

    async fn find_by_id(&self, id: SurveyId) -> Result<Option<Survey>, SurveyRepositoryError> {
        Ok(self.store.surveys().read()?.get(&id).cloned())
    }

    async fn save(&self, survey: &Survey) -> Result<(), SurveyRepositoryError> {
        let table = self.store.surveys();
        let mut rows = table.write()?;
        match rows.get_mut(&survey.survey_id()) {
            Some(row) => {
                *row = survey.clone();
                Ok(())
            }
            None => Err(SurveyRepositoryError::query(format!(
                "survey {} missing from {} table",
                survey.survey_id(),
                table.name()
            ))),
        }
    }

    async fn list_for_course(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<Survey>, SurveyRepositoryError> {
        // BTreeMap iteration keeps survey id order.
        Ok(self
            .store
            .surveys()
            .read()?
            .values()
            .filter(|survey| survey.course_id() == course_id)
            .cloned()
            .collect())
    }
}
