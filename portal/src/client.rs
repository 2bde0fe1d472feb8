use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::models::CustomerRecord;

pub const DEFAULT_API_BASE: &str = "http://localhost:4000/api";
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);

/// Placeholder identity sent with every request; the backend records it as the creator.
pub const USER_HEADER: &str = "x-user";
pub const PORTAL_USER: &str = "portal_user";

#[derive(thiserror::Error, Debug)]
pub enum SubmissionError {
    /// The backend answered with a non-2xx status.
    #[error("{}", rejection_text(.status, .message))]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("timeout of {}ms exceeded", .0.as_millis())]
    Timeout(Duration),

    #[error("{0}")]
    Transport(#[source] reqwest::Error),
}

fn rejection_text(status: &StatusCode, message: &Option<String>) -> String {
    match message {
        Some(m) => m.clone(),
        None => format!("Request failed with status code {}", status.as_u16()),
    }
}

/// The backend's view of customer creation.
#[async_trait]
pub trait CustomerApi: Send + Sync {
    /// Creates the customer and returns the backend's response body.
    async fn create_customer(&self, record: &CustomerRecord) -> Result<Value, SubmissionError>;
}

/// `CustomerApi` over HTTP: `POST {base}/customers` with a JSON body.
#[derive(Debug, Clone)]
pub struct HttpCustomerApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpCustomerApi {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        Self::with_timeout(base_url, SUBMIT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to construct reqwest client for customer API")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn customers_url(&self) -> String {
        format!("{}/customers", self.base_url)
    }

    fn classify(&self, err: reqwest::Error) -> SubmissionError {
        if err.is_timeout() {
            SubmissionError::Timeout(self.timeout)
        } else {
            SubmissionError::Transport(err)
        }
    }
}

/// Pulls the `error` field out of a JSON error body, if there is one.
fn error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get("error")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

fn response_body(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

#[async_trait]
impl CustomerApi for HttpCustomerApi {
    async fn create_customer(&self, record: &CustomerRecord) -> Result<Value, SubmissionError> {
        let url = self.customers_url();
        tracing::debug!(%url, name = %record.name, "Posting customer");

        let res = self
            .client
            .post(&url)
            .header(USER_HEADER, PORTAL_USER)
            .json(record)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = res.status();
        let body = res.bytes().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            let message = error_message(&body);
            tracing::warn!(%status, error = ?message, "Customer API rejected submission");
            return Err(SubmissionError::Rejected { status, message });
        }

        Ok(response_body(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = HttpCustomerApi::new("http://erp.local/api/").unwrap();
        assert_eq!(api.customers_url(), "http://erp.local/api/customers");
    }

    #[test]
    fn rejection_prefers_backend_message() {
        let err = SubmissionError::Rejected {
            status: StatusCode::CONFLICT,
            message: Some("GST already exists".into()),
        };
        assert_eq!(err.to_string(), "GST already exists");

        let err = SubmissionError::Rejected {
            status: StatusCode::BAD_GATEWAY,
            message: None,
        };
        assert_eq!(err.to_string(), "Request failed with status code 502");
    }

    #[test]
    fn timeout_reads_like_a_transport_message() {
        let err = SubmissionError::Timeout(SUBMIT_TIMEOUT);
        assert_eq!(err.to_string(), "timeout of 15000ms exceeded");
    }

    #[test]
    fn error_field_is_extracted_from_json_bodies_only() {
        assert_eq!(
            error_message(br#"{"error":"GST already exists"}"#).as_deref(),
            Some("GST already exists")
        );
        assert_eq!(error_message(br#"{"error":""}"#), None);
        assert_eq!(error_message(br#"{"message":"nope"}"#), None);
        assert_eq!(error_message(b"<html>502</html>"), None);
    }

    #[test]
    fn success_bodies_are_returned_as_is() {
        assert_eq!(response_body(b""), Value::Null);
        assert_eq!(response_body(br#"{"id":7}"#), serde_json::json!({ "id": 7 }));
        assert_eq!(response_body(b"created"), Value::String("created".into()));
    }
}
