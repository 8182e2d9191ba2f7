//! Tests for survey endpoints.

use super::*;
use crate::domain::{Course, CourseName, QuestionId};
use crate::inbound::http::envelope::{form_config, json_config};
use crate::inbound::http::test_utils::{MockPorts, sample_user, session_cookie};
use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::Utc;
use rstest::rstest;
use serde_json::{Value, json};

const SIGN_IN_PATH: &str = "/test/sign_in";

fn test_app(
    ports: MockPorts,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .wrap(crate::inbound::http::test_utils::test_session_middleware())
        .route(
            SIGN_IN_PATH,
            web::get().to(|session: SessionContext| async move {
                session.persist_user(UserId::new(5).expect("user id"))?;
                Ok::<_, Error>(HttpResponse::Ok().finish())
            }),
        )
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

async fn sign_in<S>(app: &S) -> Cookie<'static>
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let response = actix_test::call_service(
        app,
        actix_test::TestRequest::get().uri(SIGN_IN_PATH).to_request(),
    )
    .await;
    session_cookie(&response)
}

async fn json_body(response: actix_web::dev::ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("json body")
}

fn survey(id: i64, course_id: i64) -> Survey {
    Survey::from_draft(
        SurveyId::new(id).expect("survey id"),
        SurveyDraft {
            survey_name: SurveyName::new("Midterm Feedback").expect("survey name"),
            course_id: CourseId::new(course_id).expect("course id"),
            user_id: UserId::new(5).expect("user id"),
        },
        Utc::now(),
    )
}

fn question(id: i64, survey_id: i64) -> Question {
    Question::from_draft(
        QuestionId::new(id).expect("question id"),
        QuestionDraft {
            survey_id: SurveyId::new(survey_id).expect("survey id"),
            user_id: UserId::new(5).expect("user id"),
            question_title: QuestionText::new("Pace", "questionTitle", QUESTION_TITLE_MAX)
                .expect("title"),
            question_text: QuestionText::new("How is the pace?", "questionText", QUESTION_TEXT_MAX)
                .expect("text"),
            question_type: QuestionType::Numeric,
        },
    )
}

fn course(id: i64) -> Course {
    Course::new(
        CourseId::new(id).expect("course id"),
        CourseCode::new("CSCI5308").expect("course code"),
        CourseName::new("Software Development").expect("course name"),
    )
}

#[actix_web::test]
async fn create_survey_wraps_created_survey() {
    let mut ports = MockPorts::default();
    ports
        .surveys
        .expect_add_survey()
        .withf(|draft| {
            draft.course_id.get() == 1
                && draft.user_id.get() == 5
                && draft.survey_name.as_ref() == "Midterm Feedback"
        })
        .times(1)
        .return_once(|_| Ok(survey(7, 1)));
    let app = actix_test::init_service(test_app(ports)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/survey/create_survey")
            .set_form(&SurveyForm {
                course_id: Some("1".into()),
                user_id: Some("5".into()),
                survey_name: Some(" Midterm Feedback ".into()),
            })
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Survey created");
    assert_eq!(body["payload"]["surveyId"], 7);
    assert_eq!(body["payload"]["status"], "unpublished");
}

#[rstest]
#[case(None, Some("5"), Some("Midterm"), "missing required field: courseId")]
#[case(Some("x"), Some("5"), Some("Midterm"), "courseId must be a positive integer")]
#[case(Some("1"), Some("0"), Some("Midterm"), "userId must be a positive integer")]
#[case(Some("1"), Some("5"), Some("  "), "missing required field: surveyName")]
#[actix_web::test]
async fn create_survey_rejects_bad_forms(
    #[case] course_id: Option<&str>,
    #[case] user_id: Option<&str>,
    #[case] survey_name: Option<&str>,
    #[case] detail: &str,
) {
    let app = actix_test::init_service(test_app(MockPorts::default())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/survey/create_survey")
            .set_form(&SurveyForm {
                course_id: course_id.map(str::to_owned),
                user_id: user_id.map(str::to_owned),
                survey_name: survey_name.map(str::to_owned),
            })
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Error in creating survey");
    assert_eq!(body["errorDetail"], detail);
    assert!(body["payload"].is_null());
}

#[actix_web::test]
async fn create_survey_for_unknown_course_is_not_found() {
    let mut ports = MockPorts::default();
    ports
        .surveys
        .expect_add_survey()
        .times(1)
        .return_once(|_| Err(Error::not_found("course 9 not found")));
    let app = actix_test::init_service(test_app(ports)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/survey/create_survey")
            .set_form(&SurveyForm {
                course_id: Some("9".into()),
                user_id: Some("5".into()),
                survey_name: Some("Midterm".into()),
            })
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["errorDetail"], "course 9 not found");
}

#[rstest]
#[case(json!({"surveyId": 7, "status": "published"}))]
#[case(json!({"id": 7, "status": "PUBLISHED"}))]
#[actix_web::test]
async fn change_status_publishes(#[case] payload: Value) {
    let mut ports = MockPorts::default();
    ports
        .surveys
        .expect_update_status()
        .withf(|id, status| id.get() == 7 && *status == SurveyStatus::Published)
        .times(1)
        .return_once(|_, status| Ok(survey(7, 1).with_status(status)));
    let app = actix_test::init_service(test_app(ports)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/survey/change_status")
            .set_json(payload)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["payload"]["status"], "published");
}

#[rstest]
#[case(json!({"surveyId": 7, "status": "archived"}), "unknown survey status 'archived'; expected 'unpublished' or 'published'")]
#[case(json!({"status": "published"}), "missing required field: surveyId")]
#[case(json!({"surveyId": -3, "status": "published"}), "surveyId must be a positive integer")]
#[case(json!({"surveyId": 7}), "missing required field: status")]
#[actix_web::test]
async fn change_status_rejects_bad_requests(#[case] payload: Value, #[case] detail: &str) {
    let app = actix_test::init_service(test_app(MockPorts::default())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/survey/change_status")
            .set_json(payload)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["errorDetail"], detail);
}

#[actix_web::test]
async fn course_surveys_for_unknown_course_carries_message() {
    let mut ports = MockPorts::default();
    ports
        .courses
        .expect_get_course_with_code()
        .times(1)
        .return_once(|_| Ok(None));
    let app = actix_test::init_service(test_app(ports)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/survey/course_surveys?courseCode=NOPE")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({"view": "survey_manager", "message": "course NOPE not found"})
    );
}

#[actix_web::test]
async fn course_surveys_requires_login() {
    let mut ports = MockPorts::default();
    ports
        .courses
        .expect_get_course_with_code()
        .times(1)
        .return_once(|_| Ok(Some(course(1))));
    let app = actix_test::init_service(test_app(ports)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/survey/course_surveys?courseCode=CSCI5308")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert!(body.get("surveyList").is_none());
}

#[actix_web::test]
async fn course_surveys_lists_surveys_and_prefills_draft() {
    let mut ports = MockPorts::default();
    ports
        .courses
        .expect_get_course_with_code()
        .withf(|code| code.as_ref() == "CSCI5308")
        .times(1)
        .return_once(|_| Ok(Some(course(1))));
    ports
        .current_user
        .expect_authenticated_user()
        .times(1)
        .return_once(|id| Ok(sample_user(id.get())));
    ports
        .surveys
        .expect_get_surveys_for_course()
        .times(1)
        .return_once(|_| Ok(vec![survey(1, 1), survey(2, 1)]));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = sign_in(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/survey/course_surveys?courseCode=csci5308")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["view"], "survey_manager");
    assert_eq!(body["courseId"], 1);
    assert_eq!(body["surveyList"].as_array().map(Vec::len), Some(2));
    assert_eq!(
        body["survey"],
        json!({"surveyName": "", "courseId": 1, "userId": 5, "status": "unpublished"})
    );
}

#[actix_web::test]
async fn survey_page_carries_survey_id() {
    let mut ports = MockPorts::default();
    ports
        .surveys
        .expect_get_survey()
        .times(1)
        .return_once(|_| Ok(survey(7, 1)));
    ports
        .questions
        .expect_get_questions_for_survey()
        .times(1)
        .return_once(|_| Ok(Vec::new()));
    let app = actix_test::init_service(test_app(ports)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/survey/survey_page/7")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["view"], "survey_questions");
    assert_eq!(body["surveyId"], 7);
    assert_eq!(body["survey"]["surveyName"], "Midterm Feedback");
    assert_eq!(body["questions"], json!([]));
}

#[rstest]
#[case("abc", StatusCode::BAD_REQUEST)]
#[case("0", StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn survey_page_rejects_bad_ids(#[case] raw: &str, #[case] status: StatusCode) {
    let app = actix_test::init_service(test_app(MockPorts::default())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/survey/survey_page/{raw}"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), status);
    let body = json_body(response).await;
    assert_eq!(body["message"], "surveyId must be a positive integer");
}

#[actix_web::test]
async fn user_questions_without_session_has_message_only() {
    let app = actix_test::init_service(test_app(MockPorts::default())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/survey/user_questions?surveyId=7")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["message"], "login required");
    assert_eq!(body["surveyId"], 7);
    assert!(body.get("questions").is_none());
}

#[actix_web::test]
async fn user_questions_keeps_only_the_requested_survey() {
    let mut ports = MockPorts::default();
    ports
        .questions
        .expect_get_questions_by_user()
        .withf(|id| id.get() == 5)
        .times(1)
        .return_once(|_| Ok(Some(vec![question(1, 7), question(2, 8), question(3, 7)])));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = sign_in(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/survey/user_questions?surveyId=7")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let ids: Vec<i64> = body["questions"]
        .as_array()
        .expect("questions array")
        .iter()
        .filter_map(|q| q["questionId"].as_i64())
        .collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(body.get("message").is_none());
}

#[actix_web::test]
async fn user_questions_without_assignments_says_so() {
    let mut ports = MockPorts::default();
    ports
        .questions
        .expect_get_questions_by_user()
        .times(1)
        .return_once(|_| Ok(None));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = sign_in(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/survey/user_questions?surveyId=7")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["questions"], json!([]));
    assert_eq!(body["message"], "No questions assigned for this survey");
}

#[actix_web::test]
async fn add_question_defaults_to_session_user() {
    let mut ports = MockPorts::default();
    ports
        .questions
        .expect_add_question()
        .withf(|draft| {
            draft.user_id.get() == 5
                && draft.survey_id.get() == 7
                && draft.question_type == QuestionType::FreeText
        })
        .times(1)
        .return_once(|draft| Ok(Question::from_draft(QuestionId::new(11).expect("id"), draft)));
    let app = actix_test::init_service(test_app(ports)).await;
    let cookie = sign_in(&app).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/survey/add_question")
            .cookie(cookie)
            .set_json(json!({
                "surveyId": 7,
                "questionTitle": "Feedback",
                "questionText": "Anything else?",
                "questionType": "free_text",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["payload"]["questionId"], 11);
    assert_eq!(body["payload"]["userId"], 5);
}

#[rstest]
#[case(
    json!({"surveyId": 7, "userId": 5, "questionTitle": "T", "questionText": "Q", "questionType": "essay"}),
    StatusCode::BAD_REQUEST,
    "unknown question type 'essay'"
)]
#[case(
    json!({"surveyId": 7, "questionTitle": "T", "questionText": "Q", "questionType": "numeric"}),
    StatusCode::UNAUTHORIZED,
    "login required"
)]
#[case(
    json!({"userId": 5, "questionTitle": "T", "questionText": "Q", "questionType": "numeric"}),
    StatusCode::BAD_REQUEST,
    "missing required field: surveyId"
)]
#[actix_web::test]
async fn add_question_rejects_incomplete_requests(
    #[case] payload: Value,
    #[case] status: StatusCode,
    #[case] detail: &str,
) {
    let app = actix_test::init_service(test_app(MockPorts::default())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/survey/add_question")
            .set_json(payload)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), status);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Error in adding question");
    assert_eq!(body["errorDetail"], detail);
}

#[rstest]
#[case::json_survey_id_as_string(
    actix_test::TestRequest::put()
        .uri("/survey/change_status")
        .set_json(json!({"surveyId": "7", "status": "published"}))
)]
#[case::malformed_json(
    actix_test::TestRequest::put()
        .uri("/survey/change_status")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"surveyId\": 7,")
)]
#[case::form_sent_as_json(
    actix_test::TestRequest::post()
        .uri("/survey/create_survey")
        .set_json(json!({"courseId": "1", "userId": "5", "surveyName": "Midterm"}))
)]
#[case::question_without_json_content_type(
    actix_test::TestRequest::post()
        .uri("/survey/add_question")
        .set_payload("surveyId=7")
)]
#[actix_web::test]
async fn undecodable_bodies_still_get_an_envelope(#[case] request: actix_test::TestRequest) {
    let app = actix_test::init_service(test_app(MockPorts::default())).await;

    let response = actix_test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid request body");
    assert!(body["errorDetail"].as_str().is_some_and(|detail| !detail.is_empty()));
    assert!(body["payload"].is_null());
}
