use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct InsertedResponse {
    pub status: u16,
    #[serde(rename = "statusText")]
    pub status_text: String,
    pub inserted: Value,
}

#[derive(Serialize)]
pub struct RejectedResponse {
    pub status: u16,
    #[serde(rename = "statusText")]
    pub status_text: String,
    pub details: Value,
}

#[derive(Serialize)]
pub struct FailureResponse {
    pub note: &'static str,
    pub error_name: &'static str,
    pub error_message: String,
    pub stack: Vec<String>,
}
