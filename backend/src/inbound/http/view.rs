//! View models returned by page endpoints.
//!
//! Pages are not rendered server-side; each page endpoint answers with a
//! JSON object naming the view and its attributes:
//!
//! ```text
//! {"view":"survey_manager","courseId":1,"surveyList":[...],"survey":{...}}
//! {"view":"survey_manager","message":"course NOPE not found"}
//! ```

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::Error;
use crate::inbound::http::error::{redact_if_internal, status_for};

/// Named page plus its attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    view: &'static str,
    #[serde(flatten)]
    attributes: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip)]
    status: StatusCode,
}

impl ViewModel {
    /// Empty model for `view`.
    pub fn new(view: &'static str) -> Self {
        Self {
            view,
            attributes: Map::new(),
            message: None,
            status: StatusCode::OK,
        }
    }

    /// Model for `view` describing a failure.
    pub fn failed(view: &'static str, error: &Error) -> Self {
        Self::new(view).with_error(error)
    }

    /// Turn the model into a failure, keeping attributes already set.
    ///
    /// The status follows the error code; internal detail is redacted.
    #[must_use]
    pub fn with_error(self, error: &Error) -> Self {
        warn!(view = self.view, code = ?error.code(), error = %error, "page request failed");
        Self {
            status: status_for(error.code()),
            ..self.with_message(redact_if_internal(error).message())
        }
    }

    /// Add an attribute.
    pub fn with(mut self, name: &str, value: impl Serialize) -> Result<Self, Error> {
        let value = serde_json::to_value(value)
            .map_err(|err| Error::internal(format!("failed to render {name}: {err}")))?;
        self.attributes.insert(name.to_owned(), value);
        Ok(self)
    }

    /// Attach a user-facing message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// View name.
    pub fn view(&self) -> &'static str {
        self.view
    }

    /// Attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// HTTP response carrying the model.
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::build(self.status).json(self)
    }
}

/// Collapse a fallible page build into a response.
pub(crate) fn render(view: &'static str, result: Result<ViewModel, Error>) -> HttpResponse {
    result
        .unwrap_or_else(|error| ViewModel::failed(view, &error))
        .into_response()
}
