//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed entities used by the HTTP and persistence
//! layers, plus the services that implement the driving ports. Types are
//! immutable once built; constructors validate and normalise raw input.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and its stable identifier.
//! - Course, Survey, Question, User: aggregates with validated fields.
//! - SurveyStatus: closed publish lifecycle.
//! - *Service structs: driving-port implementations over repository ports.

pub mod auth;
pub mod course;
mod course_service;
pub mod error;
mod numeric_id;
pub mod ports;
pub mod question;
mod question_service;
pub mod survey;
mod survey_service;
pub mod trace_id;
pub mod user;
mod user_service;

pub use self::auth::{
    LoginCredentials, LoginValidationError, PasswordDigest, PasswordHashError, RegistrationParts,
    UserRegistration,
};
pub use self::course::{
    COURSE_CODE_MAX, COURSE_NAME_MAX, Course, CourseCode, CourseId, CourseName,
    CourseValidationError, NewCourse,
};
pub use self::course_service::CourseCatalogueService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::question::{
    QUESTION_TEXT_MAX, QUESTION_TITLE_MAX, Question, QuestionDraft, QuestionId, QuestionText,
    QuestionType, QuestionValidationError,
};
pub use self::question_service::QuestionBankService;
pub use self::survey::{
    SURVEY_NAME_MAX, Survey, SurveyDraft, SurveyId, SurveyName, SurveyStatus,
    SurveyValidationError,
};
pub use self::survey_service::SurveyLifecycleService;
pub use self::trace_id::TraceId;
pub use self::user::{
    BannerId, DEFAULT_USER_ROLE, Email, PersonName, Role, User, UserId, UserParts,
    UserValidationError,
};
pub use self::user_service::UserAccountService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use assessme::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
