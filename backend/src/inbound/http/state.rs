//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CourseService, CurrentUserService, LoginService, QuestionService, SurveyService, UserService,
};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use assessme::domain::{
///     CourseCatalogueService, QuestionBankService, SurveyLifecycleService, UserAccountService,
/// };
/// use assessme::inbound::http::state::HttpState;
/// use assessme::outbound::persistence::{
///     InMemoryCourseRepository, InMemoryQuestionRepository, InMemorySurveyRepository,
///     InMemoryUserRepository, MemoryStore,
/// };
///
/// let store = MemoryStore::new();
/// let courses = Arc::new(InMemoryCourseRepository::new(store.clone()));
/// let surveys = Arc::new(InMemorySurveyRepository::new(store.clone()));
/// let users = Arc::new(InMemoryUserRepository::new(store.clone()));
/// let questions = Arc::new(InMemoryQuestionRepository::new(store));
/// let accounts = Arc::new(UserAccountService::new(users.clone()));
///
/// let state = HttpState {
///     login: accounts.clone(),
///     users: accounts.clone(),
///     current_user: accounts,
///     courses: Arc::new(CourseCatalogueService::new(courses.clone())),
///     surveys: Arc::new(SurveyLifecycleService::new(
///         surveys.clone(),
///         courses,
///         users.clone(),
///     )),
///     questions: Arc::new(QuestionBankService::new(questions, surveys, users)),
/// };
/// let _login = state.login.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub users: Arc<dyn UserService>,
    pub current_user: Arc<dyn CurrentUserService>,
    pub courses: Arc<dyn CourseService>,
    pub surveys: Arc<dyn SurveyService>,
    pub questions: Arc<dyn QuestionService>,
}
