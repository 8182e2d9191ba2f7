//! In-memory implementation of the [`QuestionRepository`] port.

use async_trait::async_trait;

use crate::domain::ports::{QuestionRepository, QuestionRepositoryError};
use crate::domain::{Question, QuestionDraft, QuestionId, SurveyId, UserId};

use super::store::MemoryStore;

/// Question repository over the shared [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryQuestionRepository {
    store: MemoryStore,
}

impl InMemoryQuestionRepository {
    /// Create a repository over `store`.
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    fn select(
        &self,
        predicate: impl Fn(&Question) -> bool,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        Ok(self
            .store
            .questions()
            .read()?
            .values()
            .filter(|question| predicate(question))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn insert(&self, draft: &QuestionDraft) -> Result<Question, QuestionRepositoryError> {
        let table = self.store.questions();
        let id = table.next_id(QuestionId::new)?;
        let question = Question::from_draft(id, draft.clone());
        table.write()?.insert(id, question.clone());
        Ok(question)
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.select(|question| question.user_id() == user_id)
    }

    async fn list_for_survey(
        &self,
        survey_id: SurveyId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        self.select(|question| question.survey_id() == survey_id)
    }
}
