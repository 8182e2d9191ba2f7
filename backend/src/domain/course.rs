//! Course data model.
//!
//! A course is addressed externally by its human-readable code (`CSCI5308`)
//! and internally by a numeric id that surveys reference.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::numeric_id::define_numeric_id;

/// Validation errors raised while building course values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseValidationError {
    /// The identifier was zero or negative.
    #[error("course id must be a positive integer")]
    InvalidId,
    /// The course code was blank.
    #[error("course code must not be empty")]
    EmptyCode,
    /// The course code exceeded the maximum length.
    #[error("course code must be at most {max} characters")]
    CodeTooLong {
        /// Maximum permitted length.
        max: usize,
    },
    /// The course code contained characters outside `[A-Z0-9_-]`.
    #[error("course code may only contain letters, digits, '-' or '_'")]
    CodeInvalidCharacters,
    /// The course name was blank.
    #[error("course name must not be empty")]
    EmptyName,
    /// The course name exceeded the maximum length.
    #[error("course name must be at most {max} characters")]
    NameTooLong {
        /// Maximum permitted length.
        max: usize,
    },
}

define_numeric_id! {
    /// Internal numeric course identifier.
    CourseId, CourseValidationError, CourseValidationError::InvalidId
}

/// Maximum length of a course code.
pub const COURSE_CODE_MAX: usize = 16;
/// Maximum length of a course name.
pub const COURSE_NAME_MAX: usize = 128;

/// Human-readable course code, stored upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseCode(String);

impl CourseCode {
    /// Validate and normalise a course code.
    ///
    /// # Examples
    /// ```
    /// use assessme::domain::CourseCode;
    ///
    /// let code = CourseCode::new(" csci5308 ").unwrap();
    /// assert_eq!(code.as_ref(), "CSCI5308");
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CourseValidationError> {
        let normalised = raw.as_ref().trim().to_uppercase();
        if normalised.is_empty() {
            return Err(CourseValidationError::EmptyCode);
        }
        if normalised.chars().count() > COURSE_CODE_MAX {
            return Err(CourseValidationError::CodeTooLong {
                max: COURSE_CODE_MAX,
            });
        }
        if !normalised
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(CourseValidationError::CodeInvalidCharacters);
        }
        Ok(Self(normalised))
    }
}

impl AsRef<str> for CourseCode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<CourseCode> for String {
    fn from(value: CourseCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for CourseCode {
    type Error = CourseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Display name of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseName(String);

impl CourseName {
    /// Validate a course name.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CourseValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CourseValidationError::EmptyName);
        }
        if trimmed.chars().count() > COURSE_NAME_MAX {
            return Err(CourseValidationError::NameTooLong {
                max: COURSE_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for CourseName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<CourseName> for String {
    fn from(value: CourseName) -> Self {
        value.0
    }
}

impl TryFrom<String> for CourseName {
    type Error = CourseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Course offering that owns zero or more surveys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[schema(value_type = i64, example = 1)]
    course_id: CourseId,
    #[schema(value_type = String, example = "CSCI5308")]
    course_code: CourseCode,
    #[schema(value_type = String, example = "Advanced Topics in Software Development")]
    course_name: CourseName,
}

impl Course {
    /// Assemble a course from validated parts.
    pub fn new(course_id: CourseId, course_code: CourseCode, course_name: CourseName) -> Self {
        Self {
            course_id,
            course_code,
            course_name,
        }
    }

    /// Internal identifier.
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    /// External course code.
    pub fn course_code(&self) -> &CourseCode {
        &self.course_code
    }

    /// Display name.
    pub fn course_name(&self) -> &CourseName {
        &self.course_name
    }
}

/// Validated input for creating a course; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    /// External course code.
    pub course_code: CourseCode,
    /// Display name.
    pub course_name: CourseName,
}

impl NewCourse {
    /// Validate raw form values.
    pub fn try_from_parts(code: &str, name: &str) -> Result<Self, CourseValidationError> {
        Ok(Self {
            course_code: CourseCode::new(code)?,
            course_name: CourseName::new(name)?,
        })
    }
}
