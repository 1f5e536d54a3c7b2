//! Remedy text service client
//!
//! The service takes a disease name and returns free-form remedy and
//! prevention guidance. Request and response bodies are schema-checked
//! here; anything that does not decode aborts the calling workflow.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("Remedy API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Request body: the detected condition to generate guidance for
#[derive(Debug, Serialize)]
pub struct RemedyRequest<'a> {
    pub disease: &'a str,
}

/// Response body. An empty `remedy_tips` string is tolerated; a body
/// that does not match this shape is not.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemedyResponse {
    pub remedy_tips: String,
}

/// Remedy service client
pub struct RemedyClient {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl RemedyClient {
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        let client = reqwest::Client::new();
        Self {
            client,
            url: url.into(),
            api_key,
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("plant-md/0.1"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(ref key) = self.api_key {
            if let Ok(val) = HeaderValue::from_str(&format!("Bearer {}", key)) {
                headers.insert(AUTHORIZATION, val);
            }
        }
        headers
    }

    /// Generate remedy tips for a disease label.
    ///
    /// One shot, no retries; the caller decides what a failure means.
    pub async fn generate_remedy_tips(
        &self,
        disease: &str,
    ) -> Result<RemedyResponse, ClientError> {
        if disease.is_empty() {
            return Err(ClientError::InvalidRequest(
                "disease name must not be empty".to_string(),
            ));
        }

        debug!("POST {} disease={}", self.url, disease);
        let resp = self
            .client
            .post(&self.url)
            .headers(self.headers())
            .json(&RemedyRequest { disease })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_decodes_wire_field_name() {
        let resp: RemedyResponse =
            serde_json::from_str(r#"{"remedyTips": "Prune affected leaves."}"#).unwrap();
        assert_eq!(resp.remedy_tips, "Prune affected leaves.");
    }

    #[test]
    fn test_response_tolerates_empty_tips() {
        let resp: RemedyResponse = serde_json::from_str(r#"{"remedyTips": ""}"#).unwrap();
        assert_eq!(resp.remedy_tips, "");
    }

    #[test]
    fn test_response_rejects_missing_tips() {
        assert!(serde_json::from_str::<RemedyResponse>("{}").is_err());
    }

    #[test]
    fn test_request_serializes_disease() {
        let body = serde_json::to_string(&RemedyRequest { disease: "Rust" }).unwrap();
        assert_eq!(body, r#"{"disease":"Rust"}"#);
    }

    #[tokio::test]
    async fn test_empty_disease_is_rejected_before_sending() {
        let client = RemedyClient::new("http://localhost:0", None);
        let err = client.generate_remedy_tips("").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }
}
