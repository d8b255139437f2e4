use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::error::{json_kind, ReportError};
use crate::insert::InsertClient;
use crate::outcome::ReportOutcome;
use crate::state::AppState;
use crate::validation::validate;

pub async fn greeting() -> &'static str {
    "Hello"
}

pub async fn status() -> &'static str {
    "I am here."
}

/// Takes raw bytes so malformed JSON becomes a diagnostic instead of an extractor rejection.
pub async fn report_font_use(State(state): State<AppState>, body: Bytes) -> Response {
    tracing::info!(body = %String::from_utf8_lossy(&body), "report received");

    let outcome = handle_report(&state.inserts, &body).await;
    outcome.log();
    outcome.into_response()
}

async fn handle_report(inserts: &InsertClient, body: &[u8]) -> ReportOutcome {
    let report = match parse_report(body) {
        Ok(report) => report,
        Err(err) => return ReportOutcome::Failed(err),
    };
    if let Err(errors) = validate(&report) {
        return ReportOutcome::Invalid(errors);
    }

    match inserts.insert_report(&report).await {
        Ok(response) if response.is_created() => ReportOutcome::Inserted(response),
        Ok(response) => ReportOutcome::Rejected(response),
        Err(err) => ReportOutcome::Failed(err),
    }
}

fn parse_report(body: &[u8]) -> Result<Map<String, Value>, ReportError> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(report) => Ok(report),
        other => Err(ReportError::NotAnObject(json_kind(&other))),
    }
}
