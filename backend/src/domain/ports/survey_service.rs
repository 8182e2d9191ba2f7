//! Driving port for the survey lifecycle.
//!
//! Surveys are created `unpublished` and move between `unpublished` and
//! `published` through [`SurveyService::update_status`].

use async_trait::async_trait;

use crate::domain::{CourseId, Error, Survey, SurveyDraft, SurveyId, SurveyStatus};

/// Domain use-case port for surveys.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SurveyService: Send + Sync {
    /// Create a survey for an existing course and user.
    ///
    /// Fails with `not_found` when the course or user does not exist.
    async fn add_survey(&self, draft: SurveyDraft) -> Result<Survey, Error>;

    /// Move a survey to `status` and return the stored result.
    async fn update_status(&self, survey_id: SurveyId, status: SurveyStatus)
    -> Result<Survey, Error>;

    /// Surveys of a course ordered by id; empty when the course has none.
    async fn get_surveys_for_course(&self, course_id: CourseId) -> Result<Vec<Survey>, Error>;

    /// Fetch a single survey.
    async fn get_survey(&self, survey_id: SurveyId) -> Result<Survey, Error>;
}
