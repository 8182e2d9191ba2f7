//! Question service implementing the [`QuestionService`] driving port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    QuestionRepository, QuestionRepositoryError, QuestionService, SurveyRepository,
    UserRepository,
};
use crate::domain::survey_service::map_survey_error;
use crate::domain::user_service::map_user_error;
use crate::domain::{Error, Question, QuestionDraft, SurveyId, UserId};

/// Per-user question sets backed by a [`QuestionRepository`].
#[derive(Clone)]
pub struct QuestionBankService<Q, S, U> {
    questions: Arc<Q>,
    surveys: Arc<S>,
    users: Arc<U>,
}

impl<Q, S, U> QuestionBankService<Q, S, U> {
    /// Create a new service with the given repositories.
    pub fn new(questions: Arc<Q>, surveys: Arc<S>, users: Arc<U>) -> Self {
        Self {
            questions,
            surveys,
            users,
        }
    }
}

fn map_question_error(error: QuestionRepositoryError) -> Error {
    match error {
        QuestionRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("question repository unavailable: {message}"))
        }
        QuestionRepositoryError::Query { message } => {
            Error::internal(format!("question repository error: {message}"))
        }
        QuestionRepositoryError::Duplicate { message } => {
            Error::conflict(format!("question already exists: {message}"))
        }
    }
}

impl<Q, S, U> QuestionBankService<Q, S, U>
where
    S: SurveyRepository,
{
    async fn require_survey(&self, survey_id: SurveyId) -> Result<(), Error> {
        match self
            .surveys
            .find_by_id(survey_id)
            .await
            .map_err(map_survey_error)?
        {
            Some(_) => Ok(()),
            None => Err(Error::not_found(format!("survey {survey_id} not found"))),
        }
    }
}

#[async_trait]
impl<Q, S, U> QuestionService for QuestionBankService<Q, S, U>
where
    Q: QuestionRepository,
    S: SurveyRepository,
    U: UserRepository,
{
    async fn get_questions_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<Vec<Question>>, Error> {
        let questions = self
            .questions
            .list_for_user(user_id)
            .await
            .map_err(map_question_error)?;
        Ok((!questions.is_empty()).then_some(questions))
    }

    async fn get_questions_for_survey(&self, survey_id: SurveyId) -> Result<Vec<Question>, Error> {
        self.require_survey(survey_id).await?;
        self.questions
            .list_for_survey(survey_id)
            .await
            .map_err(map_question_error)
    }

    async fn add_question(&self, draft: QuestionDraft) -> Result<Question, Error> {
        self.require_survey(draft.survey_id).await?;
        if self
            .users
            .find_by_id(draft.user_id)
            .await
            .map_err(map_user_error)?
            .is_none()
        {
            return Err(Error::not_found(format!("user {} not found", draft.user_id)));
        }

        let question = self
            .questions
            .insert(&draft)
            .await
            .map_err(map_question_error)?;
        tracing::debug!(
            question_id = question.question_id().get(),
            survey_id = question.survey_id().get(),
            "question added"
        );
        Ok(question)
    }
}
