//! Shared helpers for backend integration tests.
//!
//! Builds the full application over a fresh in-memory store and drives it
//! in-process with `actix_web::test`.

#![allow(dead_code, reason = "each test crate uses a different subset")]

use std::sync::Arc;

use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use assessme::Trace;
use assessme::domain::{
    CourseCatalogueService, QuestionBankService, SurveyLifecycleService, UserAccountService,
};
use assessme::inbound::http::envelope::{form_config, json_config};
use assessme::inbound::http::pages::{
    add_course, course_admin_page, course_info_page, home_page, login, login_page, logout,
    register, registration_page,
};
use assessme::inbound::http::state::HttpState;
use assessme::inbound::http::surveys::{
    add_question, change_status, course_surveys, create_survey, survey_page, user_questions,
};
use assessme::outbound::persistence::{
    InMemoryCourseRepository, InMemoryQuestionRepository, InMemorySurveyRepository,
    InMemoryUserRepository, MemoryStore,
};

pub const PASSWORD: &str = "password1";

fn http_state() -> HttpState {
    let store = MemoryStore::new();
    let courses = Arc::new(InMemoryCourseRepository::new(store.clone()));
    let surveys = Arc::new(InMemorySurveyRepository::new(store.clone()));
    let questions = Arc::new(InMemoryQuestionRepository::new(store.clone()));
    let users = Arc::new(InMemoryUserRepository::new(store));
    let accounts = Arc::new(UserAccountService::new(users.clone()));

    HttpState {
        login: accounts.clone(),
        users: accounts.clone(),
        current_user: accounts,
        courses: Arc::new(CourseCatalogueService::new(courses.clone())),
        surveys: Arc::new(SurveyLifecycleService::new(
            surveys.clone(),
            courses,
            users.clone(),
        )),
        questions: Arc::new(QuestionBankService::new(questions, surveys, users)),
    }
}

/// Application with every route mounted, as the server wires it.
pub fn app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();

    App::new()
        .app_data(web::Data::new(http_state()))
        .wrap(session)
        .wrap(Trace)
        .service(login_page)
        .service(login)
        .service(logout)
        .service(home_page)
        .service(course_info_page)
        .service(registration_page)
        .service(register)
        .service(course_admin_page)
        .service(add_course)
        .service(
            web::scope("/survey")
                .app_data(json_config())
                .app_data(form_config())
                .service(create_survey)
                .service(course_surveys)
                .service(change_status)
                .service(survey_page)
                .service(user_questions)
                .service(add_question),
        )
}

/// Response status plus JSON body.
pub struct Reply {
    pub status: u16,
    pub body: Value,
    pub cookie: Option<Cookie<'static>>,
}

pub async fn send<S>(app: &S, request: Request) -> Reply
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = test::call_service(app, request).await;
    let status = response.status().as_u16();
    let cookie = response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned);
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    Reply {
        status,
        body,
        cookie,
    }
}

/// Register `email` and return the session cookie issued on success.
pub async fn register_user<S>(app: &S, email: &str) -> Reply
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    send(
        app,
        test::TestRequest::post()
            .uri("/registration")
            .set_form(json!({
                "bannerId": "B00123456",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": email,
                "password": PASSWORD,
            }))
            .to_request(),
    )
    .await
}

/// Id of the user signed in with `cookie`, read from the home page.
pub async fn signed_in_user_id<S>(app: &S, cookie: Cookie<'static>) -> i64
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let reply = send(
        app,
        test::TestRequest::get()
            .uri("/home")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    reply.body["user"]["userId"]
        .as_i64()
        .expect("signed-in user id")
}

pub async fn add_course_with_code<S>(app: &S, code: &str) -> Reply
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    send(
        app,
        test::TestRequest::post()
            .uri("/course_admin")
            .set_form(json!({"courseCode": code, "courseName": "Software Development"}))
            .to_request(),
    )
    .await
}

pub async fn create_survey_for<S>(app: &S, course_id: i64, user_id: i64, name: &str) -> Reply
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    send(
        app,
        test::TestRequest::post()
            .uri("/survey/create_survey")
            .set_form(json!({
                "courseId": course_id.to_string(),
                "userId": user_id.to_string(),
                "surveyName": name,
            }))
            .to_request(),
    )
    .await
}
