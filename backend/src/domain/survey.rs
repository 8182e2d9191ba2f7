//! Survey aggregate and its publish lifecycle.
//!
//! A survey starts `unpublished` and moves between `unpublished` and
//! `published` through explicit status changes. The status set is closed;
//! unknown status strings are rejected when parsed.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::numeric_id::define_numeric_id;
use super::{CourseId, UserId};

/// Validation errors raised while building survey values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurveyValidationError {
    /// The identifier was zero or negative.
    #[error("survey id must be a positive integer")]
    InvalidId,
    /// The survey name was blank.
    #[error("survey name must not be empty")]
    EmptyName,
    /// The survey name exceeded the maximum length.
    #[error("survey name must be at most {max} characters")]
    NameTooLong {
        /// Maximum permitted length.
        max: usize,
    },
    /// The status is not one of the known lifecycle states.
    #[error("unknown survey status '{0}'; expected 'unpublished' or 'published'")]
    UnknownStatus(String),
}

define_numeric_id! {
    /// Numeric survey identifier assigned by the survey store.
    SurveyId, SurveyValidationError, SurveyValidationError::InvalidId
}

/// Maximum length of a survey name.
pub const SURVEY_NAME_MAX: usize = 128;

/// Display name of a survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SurveyName(String);

impl SurveyName {
    /// Validate a survey name.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, SurveyValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SurveyValidationError::EmptyName);
        }
        if trimmed.chars().count() > SURVEY_NAME_MAX {
            return Err(SurveyValidationError::NameTooLong {
                max: SURVEY_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for SurveyName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SurveyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<SurveyName> for String {
    fn from(value: SurveyName) -> Self {
        value.0
    }
}

impl TryFrom<String> for SurveyName {
    type Error = SurveyValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Publish state of a survey.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SurveyStatus {
    /// Draft, invisible to students. Every survey starts here.
    #[default]
    Unpublished,
    /// Open for answers.
    Published,
}

impl SurveyStatus {
    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unpublished => "unpublished",
            Self::Published => "published",
        }
    }
}

impl FromStr for SurveyStatus {
    type Err = SurveyValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unpublished" => Ok(Self::Unpublished),
            "published" => Ok(Self::Published),
            _ => Err(SurveyValidationError::UnknownStatus(s.to_owned())),
        }
    }
}

impl fmt::Display for SurveyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question set scoped to a course, authored by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    #[schema(value_type = i64, example = 7)]
    survey_id: SurveyId,
    #[schema(value_type = String, example = "Midterm Feedback")]
    survey_name: SurveyName,
    #[schema(value_type = i64, example = 1)]
    course_id: CourseId,
    #[schema(value_type = i64, example = 5)]
    user_id: UserId,
    status: SurveyStatus,
    created_at: DateTime<Utc>,
}

impl Survey {
    /// Materialise a stored survey from a draft and its assigned id.
    pub fn from_draft(survey_id: SurveyId, draft: SurveyDraft, created_at: DateTime<Utc>) -> Self {
        let SurveyDraft {
            survey_name,
            course_id,
            user_id,
        } = draft;
        Self {
            survey_id,
            survey_name,
            course_id,
            user_id,
            status: SurveyStatus::Unpublished,
            created_at,
        }
    }

    /// Identifier.
    pub fn survey_id(&self) -> SurveyId {
        self.survey_id
    }

    /// Display name.
    pub fn survey_name(&self) -> &SurveyName {
        &self.survey_name
    }

    /// Owning course.
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    /// Authoring user.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Current publish state.
    pub fn status(&self) -> SurveyStatus {
        self.status
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Return a copy moved to `status`.
    ///
    /// Either state may follow the other; moving to the current state yields
    /// an equal survey.
    #[must_use]
    pub fn with_status(&self, status: SurveyStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Validated input for creating a survey; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyDraft {
    /// Display name.
    pub survey_name: SurveyName,
    /// Owning course.
    pub course_id: CourseId,
    /// Authoring user.
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn draft() -> SurveyDraft {
        SurveyDraft {
            survey_name: SurveyName::new("Midterm Feedback").expect("valid name"),
            course_id: CourseId::new(1).expect("valid course id"),
            user_id: UserId::new(5).expect("valid user id"),
        }
    }

    #[rstest]
    #[case("published", SurveyStatus::Published)]
    #[case(" Unpublished ", SurveyStatus::Unpublished)]
    fn status_parses_known_values(#[case] raw: &str, #[case] expected: SurveyStatus) {
        assert_eq!(raw.parse::<SurveyStatus>(), Ok(expected));
    }

    #[rstest]
    #[case("archived")]
    #[case("")]
    fn status_rejects_unknown_values(#[case] raw: &str) {
        assert!(matches!(
            raw.parse::<SurveyStatus>(),
            Err(SurveyValidationError::UnknownStatus(_))
        ));
    }

    #[rstest]
    #[case(SurveyStatus::Unpublished, SurveyStatus::Published)]
    #[case(SurveyStatus::Published, SurveyStatus::Unpublished)]
    #[case(SurveyStatus::Published, SurveyStatus::Published)]
    #[case(SurveyStatus::Unpublished, SurveyStatus::Unpublished)]
    fn with_status_changes_only_the_status(
        #[case] from: SurveyStatus,
        #[case] to: SurveyStatus,
    ) {
        let survey = Survey::from_draft(SurveyId::new(3).expect("valid id"), draft(), Utc::now())
            .with_status(from);
        let moved = survey.with_status(to);
        assert_eq!(moved.status(), to);
        assert_eq!(moved.survey_id(), survey.survey_id());
        assert_eq!(moved.created_at(), survey.created_at());
        assert_eq!(moved.survey_name(), survey.survey_name());
    }

    #[rstest]
    fn drafts_start_unpublished() {
        let survey = Survey::from_draft(SurveyId::new(3).expect("valid id"), draft(), Utc::now());
        assert_eq!(survey.status(), SurveyStatus::Unpublished);
        assert_eq!(survey.survey_name().as_ref(), "Midterm Feedback");
    }

    #[rstest]
    fn with_status_is_idempotent() {
        let survey = Survey::from_draft(SurveyId::new(3).expect("valid id"), draft(), Utc::now());
        let once = survey.with_status(SurveyStatus::Published);
        let twice = once.with_status(SurveyStatus::Published);
        assert_eq!(once, twice);
    }

    #[rstest]
    fn survey_serialises_status_in_lower_case() {
        let survey = Survey::from_draft(SurveyId::new(3).expect("valid id"), draft(), Utc::now());
        let value = serde_json::to_value(&survey).expect("serialise survey");
        assert_eq!(value["status"], "unpublished");
        assert_eq!(value["surveyId"], 3);
        assert_eq!(value["courseId"], 1);
        assert_eq!(value["userId"], 5);
    }
}
