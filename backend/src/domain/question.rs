//! Survey question model.
//!
//! Questions belong to a survey and are scoped to the user who answers them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::numeric_id::define_numeric_id;
use super::{SurveyId, UserId};

/// Validation errors raised while building question values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionValidationError {
    /// The identifier was zero or negative.
    #[error("question id must be a positive integer")]
    InvalidId,
    /// A text field was blank.
    #[error("{field} must not be empty")]
    EmptyText {
        /// Offending field name.
        field: &'static str,
    },
    /// A text field exceeded its maximum length.
    #[error("{field} must be at most {max} characters")]
    TextTooLong {
        /// Offending field name.
        field: &'static str,
        /// Maximum permitted length.
        max: usize,
    },
    /// The question type name is not recognised.
    #[error("unknown question type '{0}'")]
    UnknownType(String),
}

define_numeric_id! {
    /// Numeric question identifier assigned by the question store.
    QuestionId, QuestionValidationError, QuestionValidationError::InvalidId
}

/// Maximum length of a question title.
pub const QUESTION_TITLE_MAX: usize = 128;
/// Maximum length of a question body.
pub const QUESTION_TEXT_MAX: usize = 2048;

/// Trimmed, length-checked question text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct QuestionText(String);

impl QuestionText {
    /// Validate text for `field`, bounded by `max` characters.
    pub fn new(
        raw: impl AsRef<str>,
        field: &'static str,
        max: usize,
    ) -> Result<Self, QuestionValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(QuestionValidationError::EmptyText { field });
        }
        if trimmed.chars().count() > max {
            return Err(QuestionValidationError::TextTooLong { field, max });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for QuestionText {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for QuestionText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<QuestionText> for String {
    fn from(value: QuestionText) -> Self {
        value.0
    }
}

/// Kind of answer a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// A single number.
    Numeric,
    /// Exactly one of several options.
    MultipleChoiceOne,
    /// Any subset of several options.
    MultipleChoiceMany,
    /// Free-form text.
    FreeText,
}

impl QuestionType {
    /// Wire name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::MultipleChoiceOne => "multiple_choice_one",
            Self::MultipleChoiceMany => "multiple_choice_many",
            Self::FreeText => "free_text",
        }
    }
}

impl FromStr for QuestionType {
    type Err = QuestionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "numeric" => Ok(Self::Numeric),
            "multiple_choice_one" => Ok(Self::MultipleChoiceOne),
            "multiple_choice_many" => Ok(Self::MultipleChoiceMany),
            "free_text" => Ok(Self::FreeText),
            _ => Err(QuestionValidationError::UnknownType(s.to_owned())),
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question shown on a user's answer form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[schema(value_type = i64, example = 11)]
    question_id: QuestionId,
    #[schema(value_type = i64, example = 7)]
    survey_id: SurveyId,
    #[schema(value_type = i64, example = 5)]
    user_id: UserId,
    #[schema(value_type = String, example = "Pace")]
    question_title: QuestionText,
    #[schema(value_type = String, example = "How would you rate the pace of the course?")]
    question_text: QuestionText,
    question_type: QuestionType,
}

impl Question {
    /// Materialise a stored question from a draft and its assigned id.
    pub fn from_draft(question_id: QuestionId, draft: QuestionDraft) -> Self {
        let QuestionDraft {
            survey_id,
            user_id,
            question_title,
            question_text,
            question_type,
        } = draft;
        Self {
            question_id,
            survey_id,
            user_id,
            question_title,
            question_text,
            question_type,
        }
    }

    /// Identifier.
    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    /// Owning survey.
    pub fn survey_id(&self) -> SurveyId {
        self.survey_id
    }

    /// User the question is scoped to.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Short title.
    pub fn question_title(&self) -> &QuestionText {
        &self.question_title
    }

    /// Full prompt.
    pub fn question_text(&self) -> &QuestionText {
        &self.question_text
    }

    /// Expected answer kind.
    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }
}

/// Validated input for creating a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    /// Owning survey.
    pub survey_id: SurveyId,
    /// User the question is scoped to.
    pub user_id: UserId,
    /// Short title.
    pub question_title: QuestionText,
    /// Full prompt.
    pub question_text: QuestionText,
    /// Expected answer kind.
    pub question_type: QuestionType,
}
