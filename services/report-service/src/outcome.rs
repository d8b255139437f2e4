use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ReportError;
use crate::insert::InsertResponse;
use crate::models::{FailureResponse, InsertedResponse, RejectedResponse};
use crate::validation::ValidationErrors;

const FAILURE_NOTE: &str = "Bad data is answered with a 400; this response means the report \
could not be parsed or the insert API could not be reached.";

/// Result of handling one report; each variant maps to exactly one response.
#[derive(Debug)]
pub enum ReportOutcome {
    Inserted(InsertResponse),
    Rejected(InsertResponse),
    Invalid(ValidationErrors),
    Failed(ReportError),
}

impl ReportOutcome {
    pub fn log(&self) {
        match self {
            ReportOutcome::Inserted(response) => tracing::info!(
                status = response.status,
                status_text = %response.status_text,
                body = %response.body,
                "report inserted"
            ),
            ReportOutcome::Rejected(response) => tracing::warn!(
                status = response.status,
                status_text = %response.status_text,
                body = %response.body,
                "insert rejected downstream"
            ),
            ReportOutcome::Invalid(errors) => {
                let violations: Vec<String> = errors.iter().map(ToString::to_string).collect();
                tracing::info!(
                    count = errors.len(),
                    reported = %errors.first(),
                    ?violations,
                    "report failed validation"
                );
            }
            ReportOutcome::Failed(err) => tracing::error!(
                error_name = err.kind(),
                error = %err,
                stack = ?err.stack(),
                "report handling failed"
            ),
        }
    }
}

impl IntoResponse for ReportOutcome {
    fn into_response(self) -> Response {
        match self {
            ReportOutcome::Inserted(response) => (
                StatusCode::OK,
                Json(InsertedResponse {
                    status: response.status,
                    status_text: response.status_text,
                    inserted: response.body,
                }),
            )
                .into_response(),
            ReportOutcome::Rejected(response) => {
                let status =
                    StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    status,
                    Json(RejectedResponse {
                        status: response.status,
                        status_text: format!(
                            "The API was happy but the database rejected the insert with status text: {}",
                            response.status_text
                        ),
                        details: response.body,
                    }),
                )
                    .into_response()
            }
            ReportOutcome::Invalid(errors) => {
                (StatusCode::BAD_REQUEST, errors.to_string()).into_response()
            }
            ReportOutcome::Failed(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureResponse {
                    note: FAILURE_NOTE,
                    error_name: err.kind(),
                    error_message: err.to_string(),
                    stack: err.stack(),
                }),
            )
                .into_response(),
        }
    }
}
