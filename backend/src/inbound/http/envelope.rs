//! Uniform JSON envelope for survey endpoints.
//!
//! ```text
//! {"success":true,"message":"Survey created","errorDetail":null,"payload":{...}}
//! {"success":false,"message":"Could not create survey","errorDetail":"course 9 not found","payload":null}
//! ```
//!
//! Clients branch on `success`; the HTTP status still follows the error code
//! table in [`super::error`].

use std::fmt;

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::{Error, TRACE_ID_HEADER};
use crate::inbound::http::error::{redact_if_internal, status_for};

/// Response wrapper carrying either a payload or an error description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDto<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// Error text on failure; internal failures are redacted.
    pub error_detail: Option<String>,
    /// Result on success.
    pub payload: Option<T>,
}

impl<T> ResponseDto<T> {
    /// Successful envelope around `payload`.
    pub fn success(message: impl Into<String>, payload: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            error_detail: None,
            payload: Some(payload),
        }
    }

    /// Failed envelope describing `error`.
    pub fn failure(message: impl Into<String>, error: &Error) -> Self {
        Self {
            success: false,
            message: message.into(),
            error_detail: Some(redact_if_internal(error).message().to_owned()),
            payload: None,
        }
    }
}

/// Render a service result as an enveloped HTTP response.
///
/// Success maps to 200; failures use the status of their error code and
/// are logged here, at the handler boundary.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use assessme::domain::Error;
/// use assessme::inbound::http::envelope::respond;
///
/// let response = respond::<u32>(Err(Error::not_found("survey 9 not found")), "Saved", "Not saved");
/// assert_eq!(response.status(), StatusCode::NOT_FOUND);
/// ```
pub fn respond<T: Serialize>(
    result: Result<T, Error>,
    success_message: &str,
    failure_message: &str,
) -> HttpResponse {
    match result {
        Ok(payload) => HttpResponse::Ok().json(ResponseDto::success(success_message, payload)),
        Err(error) => {
            warn!(code = ?error.code(), error = %error, "{failure_message}");
            let mut builder = HttpResponse::build(status_for(error.code()));
            if let Some(id) = error.trace_id() {
                builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
            }
            builder.json(ResponseDto::<T>::failure(failure_message, &error))
        }
    }
}

const REJECTED_BODY: &str = "Invalid request body";

/// Failure envelope for a body the extractor could not decode.
fn rejected_body<E>(cause: E) -> actix_web::Error
where
    E: fmt::Debug + fmt::Display + 'static,
{
    let error = Error::invalid_request(cause.to_string());
    warn!(error = %error, "{REJECTED_BODY}");
    let response = HttpResponse::build(status_for(error.code()))
        .json(ResponseDto::<()>::failure(REJECTED_BODY, &error));
    InternalError::from_response(cause, response).into()
}

/// JSON extractor settings that answer decode failures with an envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| rejected_body(err))
}

/// Form extractor settings that answer decode failures with an envelope.
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| rejected_body(err))
}
