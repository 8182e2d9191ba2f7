//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports (`*Repository`) describe how the domain reaches storage and
//! expose typed errors built with [`define_port_error!`]. Driving ports
//! (`*Service`) are what inbound adapters call; they speak
//! [`crate::domain::Error`].

mod macros;
pub(crate) use macros::define_port_error;

mod course_repository;
mod course_service;
mod login_service;
mod question_repository;
mod question_service;
mod survey_repository;
mod survey_service;
mod user_repository;
mod user_service;

#[cfg(test)]
pub use course_repository::MockCourseRepository;
pub use course_repository::{CourseRepository, CourseRepositoryError};
#[cfg(test)]
pub use course_service::MockCourseService;
pub use course_service::CourseService;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
pub use question_repository::{QuestionRepository, QuestionRepositoryError};
#[cfg(test)]
pub use question_service::MockQuestionService;
pub use question_service::QuestionService;
#[cfg(test)]
pub use survey_repository::MockSurveyRepository;
pub use survey_repository::{SurveyRepository, SurveyRepositoryError};
#[cfg(test)]
pub use survey_service::MockSurveyService;
pub use survey_service::SurveyService;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{NewUser, UserPersistenceError, UserRepository};
#[cfg(test)]
pub use user_service::{MockCurrentUserService, MockUserService};
pub use user_service::{CurrentUserService, UserService};
