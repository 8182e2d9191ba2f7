//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;

use crate::domain::{
    BannerId, Email, PasswordDigest, PersonName, Role, User, UserId, UserParts,
};
use crate::domain::ports::{
    MockCourseService, MockCurrentUserService, MockLoginService, MockQuestionService,
    MockSurveyService, MockUserService,
};
use crate::inbound::http::state::HttpState;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Mock bundle; set expectations on the fields, then call [`MockPorts::into_state`].
#[derive(Default)]
pub struct MockPorts {
    pub login: MockLoginService,
    pub users: MockUserService,
    pub current_user: MockCurrentUserService,
    pub courses: MockCourseService,
    pub surveys: MockSurveyService,
    pub questions: MockQuestionService,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState {
            login: Arc::new(self.login),
            users: Arc::new(self.users),
            current_user: Arc::new(self.current_user),
            courses: Arc::new(self.courses),
            surveys: Arc::new(self.surveys),
            questions: Arc::new(self.questions),
        }
    }
}

/// Session cookie set by a response.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned()
}

/// Registered user with id `id` and password `password1`.
pub fn sample_user(id: i64) -> User {
    User::new(UserParts {
        user_id: UserId::new(id).expect("user id"),
        banner_id: BannerId::new("B00123456").expect("banner id"),
        first_name: PersonName::new("Ada", "firstName").expect("first name"),
        last_name: PersonName::new("Lovelace", "lastName").expect("last name"),
        email: Email::new("ada@dal.ca").expect("email"),
        role: Role::Instructor,
        password: PasswordDigest::derive("password1").expect("password digest"),
    })
}
