//! Port abstraction for survey persistence adapters and their errors.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{CourseId, Survey, SurveyDraft, SurveyId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by survey repository adapters.
    pub enum SurveyRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "survey repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "survey repository query failed: {message}",
        /// The survey conflicts with an existing record.
        Duplicate { message: String } => "survey already exists: {message}",
    }
}

/// Port for survey storage.
///
/// The repository assigns survey ids; callers supply the creation timestamp
/// so the clock stays in the domain.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SurveyRepository: Send + Sync {
    /// Store a new survey. The stored survey is always `unpublished`.
    async fn insert(
        &self,
        draft: &SurveyDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Survey, SurveyRepositoryError>;

    /// Fetch a survey by identifier.
    async fn find_by_id(&self, id: SurveyId) -> Result<Option<Survey>, SurveyRepositoryError>;

    /// Overwrite an existing survey.
    ///
    /// Saving a survey that was never inserted is a
    /// [`SurveyRepositoryError::Query`] failure.
    async fn save(&self, survey: &Survey) -> Result<(), SurveyRepositoryError>;

    /// Surveys belonging to `course_id`, ordered by survey id ascending.
    async fn list_for_course(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<Survey>, SurveyRepositoryError>;
}
