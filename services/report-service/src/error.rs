use std::error::Error as _;
use thiserror::Error;

/// Failures that end a report request with a 500 diagnostic.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("request body is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("request body must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("insert request failed: {0}")]
    Downstream(#[source] reqwest::Error),
    #[error("reading insert response failed: {0}")]
    DownstreamBody(#[source] reqwest::Error),
}

impl ReportError {
    pub fn kind(&self) -> &'static str {
        match self {
            ReportError::MalformedJson(_) => "MalformedJson",
            ReportError::NotAnObject(_) => "NotAnObject",
            ReportError::Downstream(_) => "DownstreamUnreachable",
            ReportError::DownstreamBody(_) => "DownstreamBodyUnreadable",
        }
    }

    /// Source chain below this error, outermost first.
    pub fn stack(&self) -> Vec<String> {
        let mut stack = Vec::new();
        let mut source = self.source();
        while let Some(err) = source {
            stack.push(err.to_string());
            source = err.source();
        }
        stack
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{var} is not a valid http(s) URL: {value}")]
    InvalidUrl { var: &'static str, value: String },
}

pub fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
