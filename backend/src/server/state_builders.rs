//! Wires repositories and services into the HTTP state.

use std::sync::Arc;

use actix_web::web;

use assessme::domain::{
    CourseCatalogueService, QuestionBankService, SurveyLifecycleService, UserAccountService,
};
use assessme::inbound::http::state::HttpState;
use assessme::outbound::persistence::{
    InMemoryCourseRepository, InMemoryQuestionRepository, InMemorySurveyRepository,
    InMemoryUserRepository, MemoryStore,
};

/// Build the handler state over a single in-memory store.
///
/// Every service shares the same repositories, so a course created through
/// the course service is immediately visible to the survey service.
pub(crate) fn build_http_state(store: &MemoryStore) -> web::Data<HttpState> {
    let courses = Arc::new(InMemoryCourseRepository::new(store.clone()));
    let surveys = Arc::new(InMemorySurveyRepository::new(store.clone()));
    let questions = Arc::new(InMemoryQuestionRepository::new(store.clone()));
    let users = Arc::new(InMemoryUserRepository::new(store.clone()));

    let accounts = Arc::new(UserAccountService::new(Arc::clone(&users)));
    let course_service = Arc::new(CourseCatalogueService::new(Arc::clone(&courses)));
    let survey_service = Arc::new(SurveyLifecycleService::new(
        Arc::clone(&surveys),
        courses,
        Arc::clone(&users),
    ));
    let question_service = Arc::new(QuestionBankService::new(questions, surveys, users));

    web::Data::new(HttpState {
        login: accounts.clone(),
        users: accounts.clone(),
        current_user: accounts,
        courses: course_service,
        surveys: survey_service,
        questions: question_service,
    })
}
