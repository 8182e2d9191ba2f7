//! Survey endpoints mounted under `/survey`.
//!
//! ```text
//! POST /survey/create_survey            form   -> ResponseDto<Survey>
//! PUT  /survey/change_status            json   -> ResponseDto<Survey>
//! POST /survey/add_question             json   -> ResponseDto<Question>
//! GET  /survey/course_surveys?courseCode=      -> survey_manager view
//! GET  /survey/survey_page/{surveyId}          -> survey_questions view
//! GET  /survey/user_questions?surveyId=        -> user_questions view
//! ```

use std::str::FromStr;

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    CourseCode, CourseId, Error, QUESTION_TEXT_MAX, QUESTION_TITLE_MAX, Question, QuestionDraft,
    QuestionText, QuestionType, Survey, SurveyDraft, SurveyId, SurveyName, SurveyStatus, UserId,
};
use crate::inbound::http::envelope::{ResponseDto, respond};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, invalid_id_error, invalid_value_error, missing_field_error, parse_id,
    require_field, require_id,
};
use crate::inbound::http::view::{ViewModel, render};

const COURSE_ID: FieldName = FieldName::new("courseId");
const COURSE_CODE: FieldName = FieldName::new("courseCode");
const USER_ID: FieldName = FieldName::new("userId");
const SURVEY_ID: FieldName = FieldName::new("surveyId");
const SURVEY_NAME: FieldName = FieldName::new("surveyName");
const STATUS: FieldName = FieldName::new("status");
const QUESTION_TITLE: FieldName = FieldName::new("questionTitle");
const QUESTION_TEXT: FieldName = FieldName::new("questionText");
const QUESTION_TYPE: FieldName = FieldName::new("questionType");

const SURVEY_MANAGER_VIEW: &str = "survey_manager";
const SURVEY_QUESTIONS_VIEW: &str = "survey_questions";
const USER_QUESTIONS_VIEW: &str = "user_questions";

/// Survey creation form for `POST /survey/create_survey`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyForm {
    #[schema(example = "1")]
    pub course_id: Option<String>,
    #[schema(example = "5")]
    pub user_id: Option<String>,
    #[schema(example = "Midterm Feedback")]
    pub survey_name: Option<String>,
}

impl SurveyForm {
    fn into_draft(self) -> Result<SurveyDraft, Error> {
        let course_id = require_id(self.course_id, COURSE_ID, CourseId::new)?;
        let user_id = require_id(self.user_id, USER_ID, UserId::new)?;
        let name = require_field(self.survey_name, SURVEY_NAME)?;
        let survey_name =
            SurveyName::new(name).map_err(|err| invalid_value_error(SURVEY_NAME, err))?;
        Ok(SurveyDraft {
            survey_name,
            course_id,
            user_id,
        })
    }
}

/// Status change body for `PUT /survey/change_status`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusChangeRequest {
    #[serde(alias = "id")]
    #[schema(example = 7)]
    pub survey_id: Option<i64>,
    #[schema(example = "published")]
    pub status: Option<String>,
}

impl StatusChangeRequest {
    fn parse(self) -> Result<(SurveyId, SurveyStatus), Error> {
        let raw_id = self.survey_id.ok_or_else(|| missing_field_error(SURVEY_ID))?;
        let survey_id =
            SurveyId::new(raw_id).map_err(|_| invalid_id_error(SURVEY_ID, &raw_id.to_string()))?;
        let raw_status = require_field(self.status, STATUS)?;
        let status = SurveyStatus::from_str(&raw_status)
            .map_err(|err| invalid_value_error(STATUS, err))?;
        Ok((survey_id, status))
    }
}

/// Question body for `POST /survey/add_question`.
///
/// `userId` defaults to the signed-in user.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionRequest {
    #[schema(example = 7)]
    pub survey_id: Option<i64>,
    #[schema(example = 5)]
    pub user_id: Option<i64>,
    #[schema(example = "Pace")]
    pub question_title: Option<String>,
    #[schema(example = "How would you rate the pace of the course?")]
    pub question_text: Option<String>,
    #[schema(example = "numeric")]
    pub question_type: Option<String>,
}

impl QuestionRequest {
    fn into_draft(self, session_user: Option<UserId>) -> Result<QuestionDraft, Error> {
        let raw_survey = self
            .survey_id
            .ok_or_else(|| missing_field_error(SURVEY_ID))?;
        let survey_id = SurveyId::new(raw_survey)
            .map_err(|_| invalid_id_error(SURVEY_ID, &raw_survey.to_string()))?;
        let user_id = match (self.user_id, session_user) {
            (Some(raw), _) => {
                UserId::new(raw).map_err(|_| invalid_id_error(USER_ID, &raw.to_string()))?
            }
            (None, Some(user_id)) => user_id,
            (None, None) => return Err(Error::unauthorized("login required")),
        };
        let title = require_field(self.question_title, QUESTION_TITLE)?;
        let text = require_field(self.question_text, QUESTION_TEXT)?;
        let kind = require_field(self.question_type, QUESTION_TYPE)?;
        Ok(QuestionDraft {
            survey_id,
            user_id,
            question_title: QuestionText::new(title, "questionTitle", QUESTION_TITLE_MAX)
                .map_err(|err| invalid_value_error(QUESTION_TITLE, err))?,
            question_text: QuestionText::new(text, "questionText", QUESTION_TEXT_MAX)
                .map_err(|err| invalid_value_error(QUESTION_TEXT, err))?,
            question_type: QuestionType::from_str(&kind)
                .map_err(|err| invalid_value_error(QUESTION_TYPE, err))?,
        })
    }
}

/// Query for `GET /survey/course_surveys`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct CourseSurveysQuery {
    /// Course code, e.g. `CSCI5308`.
    pub course_code: Option<String>,
}

/// Query for `GET /survey/user_questions`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct UserQuestionsQuery {
    /// Survey whose questions to show.
    pub survey_id: Option<String>,
}

/// Blank survey pre-filled for the creation form on the manager page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SurveyTemplate {
    survey_name: &'static str,
    course_id: CourseId,
    user_id: UserId,
    status: SurveyStatus,
}

/// Create an unpublished survey for a course.
#[utoipa::path(
    post,
    path = "/survey/create_survey",
    request_body(content = SurveyForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Survey created", body = ResponseDto<Survey>),
        (status = 400, description = "Invalid form", body = ResponseDto<Survey>),
        (status = 404, description = "Unknown course or user", body = ResponseDto<Survey>)
    ),
    tags = ["surveys"],
    operation_id = "createSurvey"
)]
#[post("/create_survey")]
pub async fn create_survey(
    state: web::Data<HttpState>,
    form: web::Form<SurveyForm>,
) -> HttpResponse {
    respond(
        create_from_form(&state, form.into_inner()).await,
        "Survey created",
        "Error in creating survey",
    )
}

async fn create_from_form(state: &HttpState, form: SurveyForm) -> Result<Survey, Error> {
    let draft = form.into_draft()?;
    state.surveys.add_survey(draft).await
}

/// Survey manager page for a course.
#[utoipa::path(
    get,
    path = "/survey/course_surveys",
    params(CourseSurveysQuery),
    responses(
        (status = 200, description = "survey_manager view model"),
        (status = 401, description = "Login required"),
        (status = 404, description = "Unknown course")
    ),
    tags = ["surveys"],
    operation_id = "courseSurveys"
)]
#[get("/course_surveys")]
pub async fn course_surveys(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<CourseSurveysQuery>,
) -> HttpResponse {
    render(
        SURVEY_MANAGER_VIEW,
        survey_manager_model(&state, &session, query.into_inner()).await,
    )
}

async fn survey_manager_model(
    state: &HttpState,
    session: &SessionContext,
    query: CourseSurveysQuery,
) -> Result<ViewModel, Error> {
    let raw = require_field(query.course_code, COURSE_CODE)?;
    let code = CourseCode::new(&raw).map_err(|err| invalid_value_error(COURSE_CODE, err))?;
    let course = match state.courses.get_course_with_code(&code).await? {
        Some(course) => course,
        None => return Err(Error::not_found(format!("course {code} not found"))),
    };
    let user_id = session.require_user_id()?;
    let user = state.current_user.authenticated_user(user_id).await?;
    let surveys = state
        .surveys
        .get_surveys_for_course(course.course_id())
        .await?;

    ViewModel::new(SURVEY_MANAGER_VIEW)
        .with("surveyList", surveys)?
        .with("courseId", course.course_id())?
        .with(
            "survey",
            SurveyTemplate {
                survey_name: "",
                course_id: course.course_id(),
                user_id: user.user_id(),
                status: SurveyStatus::Unpublished,
            },
        )
}

/// Publish or unpublish a survey.
#[utoipa::path(
    put,
    path = "/survey/change_status",
    request_body = StatusChangeRequest,
    responses(
        (status = 200, description = "Status updated", body = ResponseDto<Survey>),
        (status = 400, description = "Unknown status or bad id", body = ResponseDto<Survey>),
        (status = 404, description = "Unknown survey", body = ResponseDto<Survey>)
    ),
    tags = ["surveys"],
    operation_id = "changeSurveyStatus"
)]
#[put("/change_status")]
pub async fn change_status(
    state: web::Data<HttpState>,
    payload: web::Json<StatusChangeRequest>,
) -> HttpResponse {
    respond(
        apply_status_change(&state, payload.into_inner()).await,
        "Survey status updated",
        "Error in updating survey status",
    )
}

async fn apply_status_change(
    state: &HttpState,
    request: StatusChangeRequest,
) -> Result<Survey, Error> {
    let (survey_id, status) = request.parse()?;
    state.surveys.update_status(survey_id, status).await
}

/// Survey page carrying the survey, its id and its questions.
#[utoipa::path(
    get,
    path = "/survey/survey_page/{surveyId}",
    params(("surveyId" = String, Path, description = "Survey identifier")),
    responses(
        (status = 200, description = "survey_questions view model"),
        (status = 404, description = "Unknown survey")
    ),
    tags = ["surveys"],
    operation_id = "surveyPage"
)]
#[get("/survey_page/{survey_id}")]
pub async fn survey_page(state: web::Data<HttpState>, path: web::Path<String>) -> HttpResponse {
    render(
        SURVEY_QUESTIONS_VIEW,
        survey_page_model(&state, &path.into_inner()).await,
    )
}

async fn survey_page_model(state: &HttpState, raw_id: &str) -> Result<ViewModel, Error> {
    let survey_id = parse_id(raw_id, SURVEY_ID, SurveyId::new)?;
    let survey = state.surveys.get_survey(survey_id).await?;
    let questions = state.questions.get_questions_for_survey(survey_id).await?;
    ViewModel::new(SURVEY_QUESTIONS_VIEW)
        .with("surveyId", survey_id)?
        .with("survey", survey)?
        .with("questions", questions)
}

/// Questions the signed-in user should answer for a survey.
#[utoipa::path(
    get,
    path = "/survey/user_questions",
    params(UserQuestionsQuery),
    responses(
        (status = 200, description = "user_questions view model"),
        (status = 401, description = "Login required")
    ),
    tags = ["surveys"],
    operation_id = "userQuestions"
)]
#[get("/user_questions")]
pub async fn user_questions(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<UserQuestionsQuery>,
) -> HttpResponse {
    render(
        USER_QUESTIONS_VIEW,
        user_questions_model(&state, &session, query.into_inner()).await,
    )
}

async fn user_questions_model(
    state: &HttpState,
    session: &SessionContext,
    query: UserQuestionsQuery,
) -> Result<ViewModel, Error> {
    let survey_id = require_id(query.survey_id, SURVEY_ID, SurveyId::new)?;
    let model = ViewModel::new(USER_QUESTIONS_VIEW).with("surveyId", survey_id)?;
    let user_id = match session.require_user_id() {
        Ok(user_id) => user_id,
        Err(err) => return Ok(model.with_error(&err)),
    };

    let questions: Vec<Question> = match state.questions.get_questions_by_user(user_id).await? {
        Some(questions) => questions
            .into_iter()
            .filter(|question| question.survey_id() == survey_id)
            .collect(),
        None => Vec::new(),
    };
    if questions.is_empty() {
        return Ok(model
            .with("questions", questions)?
            .with_message("No questions assigned for this survey"));
    }
    model.with("questions", questions)
}

/// Add a question to a survey.
#[utoipa::path(
    post,
    path = "/survey/add_question",
    request_body = QuestionRequest,
    responses(
        (status = 200, description = "Question added", body = ResponseDto<Question>),
        (status = 400, description = "Invalid question", body = ResponseDto<Question>),
        (status = 404, description = "Unknown survey or user", body = ResponseDto<Question>)
    ),
    tags = ["surveys"],
    operation_id = "addQuestion"
)]
#[post("/add_question")]
pub async fn add_question(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<QuestionRequest>,
) -> HttpResponse {
    respond(
        add_from_request(&state, &session, payload.into_inner()).await,
        "Question added",
        "Error in adding question",
    )
}

async fn add_from_request(
    state: &HttpState,
    session: &SessionContext,
    request: QuestionRequest,
) -> Result<Question, Error> {
    let draft = request.into_draft(session.user_id()?)?;
    state.questions.add_question(draft).await
}

#[cfg(test)]
mod tests;
