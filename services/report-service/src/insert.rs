use reqwest::{header, Client};
use serde_json::{Map, Value};

use crate::error::ReportError;

const REPORT_RESOURCE: &str = "Report";

/// What the insert API answered, success or not.
#[derive(Debug, Clone)]
pub struct InsertResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Value,
}

impl InsertResponse {
    pub fn is_created(&self) -> bool {
        self.status == 201
    }
}

/// Client for the auto-generated REST insert endpoint of the `Report` table.
#[derive(Clone)]
pub struct InsertClient {
    client: Client,
    endpoint: String,
    service_key: String,
}

impl InsertClient {
    pub fn new(base_url: &str, service_key: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("font-report-service/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: format!(
                "{}/rest/v1/{REPORT_RESOURCE}",
                base_url.trim_end_matches('/')
            ),
            service_key: service_key.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn insert_report(
        &self,
        report: &Map<String, Value>,
    ) -> Result<InsertResponse, ReportError> {
        // Service-role credential goes in both headers; ask for the inserted row back.
        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header(header::CONTENT_TYPE, "application/json")
            .header("Prefer", "return=representation")
            .json(report)
            .send()
            .await
            .map_err(ReportError::Downstream)?;

        let status = response.status();
        let text = response.text().await.map_err(ReportError::DownstreamBody)?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text))
        };

        Ok(InsertResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_targets_report_resource() {
        let client = InsertClient::new("https://example.supabase.co/", "key").unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.supabase.co/rest/v1/Report"
        );
    }

    #[test]
    fn only_201_counts_as_created() {
        let mut response = InsertResponse {
            status: 201,
            status_text: "Created".to_string(),
            body: Value::Null,
        };
        assert!(response.is_created());
        response.status = 200;
        assert!(!response.is_created());
    }
}
