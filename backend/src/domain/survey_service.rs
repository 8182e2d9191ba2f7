//! Survey lifecycle service.
//!
//! Implements [`SurveyService`] over the survey, course and user repositories.
//! Referential checks (course and author exist) happen here because the
//! repositories only know their own tables.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::course_service::map_course_error;
use crate::domain::ports::{
    CourseRepository, SurveyRepository, SurveyRepositoryError, SurveyService, UserRepository,
};
use crate::domain::user_service::map_user_error;
use crate::domain::{CourseId, Error, Survey, SurveyDraft, SurveyId, SurveyStatus};

/// Survey service wired to its repositories by constructor injection.
#[derive(Clone)]
pub struct SurveyLifecycleService<S, C, U> {
    surveys: Arc<S>,
    courses: Arc<C>,
    users: Arc<U>,
}

impl<S, C, U> SurveyLifecycleService<S, C, U> {
    /// Create a new service with the given repositories.
    pub fn new(surveys: Arc<S>, courses: Arc<C>, users: Arc<U>) -> Self {
        Self {
            surveys,
            courses,
            users,
        }
    }
}

pub(crate) fn map_survey_error(error: SurveyRepositoryError) -> Error {
    match error {
        SurveyRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("survey repository unavailable: {message}"))
        }
        SurveyRepositoryError::Query { message } => {
            Error::internal(format!("survey repository error: {message}"))
        }
        SurveyRepositoryError::Duplicate { message } => {
            Error::conflict(format!("survey already exists: {message}"))
        }
    }
}

impl<S, C, U> SurveyLifecycleService<S, C, U>
where
    S: SurveyRepository,
    C: CourseRepository,
    U: UserRepository,
{
    async fn require_course(&self, course_id: CourseId) -> Result<(), Error> {
        match self
            .courses
            .find_by_id(course_id)
            .await
            .map_err(map_course_error)?
        {
            Some(_) => Ok(()),
            None => Err(Error::not_found(format!("course {course_id} not found"))),
        }
    }

    async fn require_survey(&self, survey_id: SurveyId) -> Result<Survey, Error> {
        self.surveys
            .find_by_id(survey_id)
            .await
            .map_err(map_survey_error)?
            .ok_or_else(|| Error::not_found(format!("survey {survey_id} not found")))
    }
}

#[async_trait]
impl<S, C, U> SurveyService for SurveyLifecycleService<S, C, U>
where
    S: SurveyRepository,
    C: CourseRepository,
    U: UserRepository,
{
    async fn add_survey(&self, draft: SurveyDraft) -> Result<Survey, Error> {
        self.require_course(draft.course_id).await?;
        if self
            .users
            .find_by_id(draft.user_id)
            .await
            .map_err(map_user_error)?
            .is_none()
        {
            return Err(Error::not_found(format!("user {} not found", draft.user_id)));
        }

        let survey = self
            .surveys
            .insert(&draft, Utc::now())
            .await
            .map_err(map_survey_error)?;
        tracing::info!(
            survey_id = survey.survey_id().get(),
            course_id = survey.course_id().get(),
            user_id = survey.user_id().get(),
            "survey created"
        );
        Ok(survey)
    }

    async fn update_status(
        &self,
        survey_id: SurveyId,
        status: SurveyStatus,
    ) -> Result<Survey, Error> {
        let current = self.require_survey(survey_id).await?;
        let updated = current.with_status(status);
        if updated == current {
            return Ok(current);
        }

        self.surveys
            .save(&updated)
            .await
            .map_err(map_survey_error)?;
        tracing::info!(
            survey_id = survey_id.get(),
            from = %current.status(),
            to = %status,
            "survey status changed"
        );
        Ok(updated)
    }

    async fn get_surveys_for_course(&self, course_id: CourseId) -> Result<Vec<Survey>, Error> {
        self.require_course(course_id).await?;
        let mut surveys = self
            .surveys
            .list_for_course(course_id)
            .await
            .map_err(map_survey_error)?;
        surveys.sort_by_key(Survey::survey_id);
        Ok(surveys)
    }

    async fn get_survey(&self, survey_id: SurveyId) -> Result<Survey, Error> {
        self.require_survey(survey_id).await
    }
}

#[cfg(test)]
#[path = "survey_service_tests.rs"]
mod tests;
