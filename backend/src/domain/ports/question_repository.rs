//! Port abstraction for question persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Question, QuestionDraft, SurveyId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by question repository adapters.
    pub enum QuestionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "question repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "question repository query failed: {message}",
        /// The question conflicts with an existing record.
        Duplicate { message: String } => "question already exists: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Store a new question and return it with its assigned id.
    async fn insert(&self, draft: &QuestionDraft) -> Result<Question, QuestionRepositoryError>;

    /// Questions scoped to `user_id`, ordered by question id.
    async fn list_for_user(&self, user_id: UserId)
    -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Questions belonging to `survey_id`, ordered by question id.
    async fn list_for_survey(
        &self,
        survey_id: SurveyId,
    ) -> Result<Vec<Question>, QuestionRepositoryError>;
}
