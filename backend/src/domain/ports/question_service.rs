//! Driving port for per-user question sets.

use async_trait::async_trait;

use crate::domain::{Error, Question, QuestionDraft, SurveyId, UserId};

/// Domain use-case port for questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionService: Send + Sync {
    /// Questions assigned to `user_id`; `None` when the user has none.
    async fn get_questions_by_user(&self, user_id: UserId)
    -> Result<Option<Vec<Question>>, Error>;

    /// Every question of a survey.
    async fn get_questions_for_survey(&self, survey_id: SurveyId) -> Result<Vec<Question>, Error>;

    /// Add a question to an existing survey for an existing user.
    async fn add_question(&self, draft: QuestionDraft) -> Result<Question, Error>;
}
