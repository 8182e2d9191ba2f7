//! Page handlers: login, home, registration and course administration.
//!
//! ```text
//! GET  /login           POST /login          POST /logout
//! GET  /home            GET  /course_info
//! GET  /registration    POST /registration
//! GET  /course_admin    POST /course_admin
//! ```
//!
//! GET handlers answer with a [`ViewModel`]. Login and registration redirect
//! with `303 See Other`; their failures, like course creation failures, use
//! the standard error JSON.

use actix_web::http::header;
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{
    CourseValidationError, DEFAULT_USER_ROLE, Error, LoginCredentials, LoginValidationError,
    NewCourse, RegistrationParts, UserRegistration, UserValidationError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, invalid_value_error};
use crate::inbound::http::view::{ViewModel, render};

const HOME_PATH: &str = "/home";
const LOGIN_PATH: &str = "/login";

fn see_other(location: &'static str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Login form body for `POST /login`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form body for `POST /registration`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationForm {
    pub banner_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Course form body for `POST /course_admin`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseForm {
    pub course_code: String,
    pub course_name: String,
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyEmail => Error::invalid_request("email must not be empty")
            .with_details(json!({ "field": "email", "code": "empty_email" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

fn map_registration_error(err: UserValidationError) -> Error {
    let field = match &err {
        UserValidationError::InvalidBannerId => "bannerId",
        UserValidationError::EmptyName { field } | UserValidationError::NameTooLong { field, .. } => {
            *field
        }
        UserValidationError::InvalidEmail => "email",
        UserValidationError::PasswordTooShort { .. } => "password",
        UserValidationError::InvalidId | UserValidationError::UnknownRole(_) => "user",
    };
    invalid_value_error(FieldName::new(field), err)
}

fn map_course_validation_error(err: CourseValidationError) -> Error {
    let field = match err {
        CourseValidationError::EmptyName | CourseValidationError::NameTooLong { .. } => {
            "courseName"
        }
        CourseValidationError::InvalidId => "courseId",
        CourseValidationError::EmptyCode
        | CourseValidationError::CodeTooLong { .. }
        | CourseValidationError::CodeInvalidCharacters => "courseCode",
    };
    invalid_value_error(FieldName::new(field), err)
}

/// Login page.
#[utoipa::path(
    get,
    path = "/login",
    responses((status = 200, description = "Login view model")),
    tags = ["pages"],
    operation_id = "loginPage",
    security([])
)]
#[get("/login")]
pub async fn login_page() -> HttpResponse {
    ViewModel::new("login").into_response()
}

/// Authenticate and establish a session, then redirect home.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Login success", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["pages"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let credentials = LoginCredentials::try_from_parts(&form.email, &form.password)
        .map_err(map_login_validation_error)?;
    let user_id = state.login.authenticate(&credentials).await?;
    session.persist_user(user_id)?;
    info!(user_id = user_id.get(), "user logged in");
    Ok(see_other(HOME_PATH))
}

/// Drop the session and return to the login page.
#[utoipa::path(
    post,
    path = "/logout",
    responses((status = 303, description = "Session cleared")),
    tags = ["pages"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    see_other(LOGIN_PATH)
}

/// Home page; carries the signed-in user when there is one.
#[utoipa::path(
    get,
    path = "/home",
    responses((status = 200, description = "Home view model")),
    tags = ["pages"],
    operation_id = "homePage"
)]
#[get("/home")]
pub async fn home_page(state: web::Data<HttpState>, session: SessionContext) -> HttpResponse {
    render("home", home_model(&state, &session).await)
}

async fn home_model(state: &HttpState, session: &SessionContext) -> Result<ViewModel, Error> {
    let model = ViewModel::new("home");
    match session.user_id()? {
        Some(user_id) => {
            let user = state.current_user.authenticated_user(user_id).await?;
            model.with("user", &user)
        }
        None => Ok(model),
    }
}

/// Course information page.
#[utoipa::path(
    get,
    path = "/course_info",
    responses((status = 200, description = "Course info view model")),
    tags = ["pages"],
    operation_id = "courseInfoPage"
)]
#[get("/course_info")]
pub async fn course_info_page() -> HttpResponse {
    ViewModel::new("course_info").into_response()
}

/// Registration page with a blank user form.
#[utoipa::path(
    get,
    path = "/registration",
    responses((status = 200, description = "Registration view model")),
    tags = ["pages"],
    operation_id = "registrationPage",
    security([])
)]
#[get("/registration")]
pub async fn registration_page() -> HttpResponse {
    render(
        "registration",
        ViewModel::new("registration").with("user", RegistrationForm::default()),
    )
}

/// Register a user with the default role, sign them in and redirect home.
#[utoipa::path(
    post,
    path = "/registration",
    request_body(content = RegistrationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Registered"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["pages"],
    operation_id = "register",
    security([])
)]
#[post("/registration")]
pub async fn register(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<RegistrationForm>,
) -> ApiResult<HttpResponse> {
    let registration = UserRegistration::try_from_parts(RegistrationParts {
        banner_id: &form.banner_id,
        first_name: &form.first_name,
        last_name: &form.last_name,
        email: &form.email,
        password: &form.password,
    })
    .map_err(map_registration_error)?;
    let user = state
        .users
        .add_user(&registration, DEFAULT_USER_ROLE)
        .await?;
    session.persist_user(user.user_id())?;
    Ok(see_other(HOME_PATH))
}

async fn course_admin_model(state: &HttpState) -> Result<ViewModel, Error> {
    let courses = state.courses.list_courses().await?;
    ViewModel::new("course_admin").with("courses", courses)
}

/// Course administration page with a blank course form and the course list.
#[utoipa::path(
    get,
    path = "/course_admin",
    responses((status = 200, description = "Course admin view model")),
    tags = ["pages"],
    operation_id = "courseAdminPage"
)]
#[get("/course_admin")]
pub async fn course_admin_page(state: web::Data<HttpState>) -> HttpResponse {
    let model = course_admin_model(&state)
        .await
        .and_then(|model| model.with("course", CourseForm::default()));
    render("course_admin", model)
}

/// Create a course and re-render the admin page.
#[utoipa::path(
    post,
    path = "/course_admin",
    request_body(content = CourseForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Course created; admin view model"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Course code already exists", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["pages"],
    operation_id = "addCourse"
)]
#[post("/course_admin")]
pub async fn add_course(
    state: web::Data<HttpState>,
    form: web::Form<CourseForm>,
) -> ApiResult<HttpResponse> {
    let course = NewCourse::try_from_parts(&form.course_code, &form.course_name)
        .map_err(map_course_validation_error)?;
    let created = state.courses.add_course(course).await?;
    let model = course_admin_model(&state)
        .await?
        .with("course", &created)?
        .with_message(format!("Course {} created", created.course_code()));
    Ok(model.into_response())
}
