//! OpenAPI documentation for the HTTP surface.
//!
//! Served by Swagger UI at `/docs` in debug builds and exported by the
//! `openapi-dump` binary.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Course, Error, ErrorCode, Question, QuestionType, Survey, SurveyStatus, User};
use crate::inbound::http::pages::{CourseForm, LoginForm, RegistrationForm};
use crate::inbound::http::surveys::{QuestionRequest, StatusChangeRequest, SurveyForm};

/// Adds the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login or POST /registration.",
            ))),
        );
    }
}

/// OpenAPI document for the AssessMe backend.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "AssessMe backend API",
        description = "Course, survey and question management with session-cookie login."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::pages::login_page,
        crate::inbound::http::pages::login,
        crate::inbound::http::pages::logout,
        crate::inbound::http::pages::home_page,
        crate::inbound::http::pages::course_info_page,
        crate::inbound::http::pages::registration_page,
        crate::inbound::http::pages::register,
        crate::inbound::http::pages::course_admin_page,
        crate::inbound::http::pages::add_course,
        crate::inbound::http::surveys::create_survey,
        crate::inbound::http::surveys::course_surveys,
        crate::inbound::http::surveys::change_status,
        crate::inbound::http::surveys::survey_page,
        crate::inbound::http::surveys::user_questions,
        crate::inbound::http::surveys::add_question,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Course,
        Survey,
        SurveyStatus,
        Question,
        QuestionType,
        User,
        LoginForm,
        RegistrationForm,
        CourseForm,
        SurveyForm,
        StatusChangeRequest,
        QuestionRequest,
    )),
    tags(
        (name = "pages", description = "Page endpoints returning view models"),
        (name = "surveys", description = "Survey and question management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
