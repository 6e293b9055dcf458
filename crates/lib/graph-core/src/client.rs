//! HTTP client for the people-graph service.
//!
//! Every call issues exactly one request and decodes the response body as JSON.
//! Non-2xx responses surface as [`ClientError::Status`] carrying the service's
//! `error` message when the body has one.

use std::{error::Error, fmt};

use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::endpoint::Endpoint;

pub const DEFAULT_GRAPH_API_URL: &str = "http://localhost:3000";

#[derive(Debug)]
pub enum ClientError {
    Request(reqwest::Error),
    Status { status: StatusCode, message: String },
    Decode(serde_json::Error),
    InvalidUrl(String),
    InvalidSegment(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(err) => write!(f, "graph api request failed: {err}"),
            Self::Status { status, message } => {
                write!(f, "graph api returned {status}: {message}")
            }
            Self::Decode(err) => write!(f, "graph api returned invalid JSON: {err}"),
            Self::InvalidUrl(url) => write!(f, "invalid graph api url: {url}"),
            Self::InvalidSegment(segment) => {
                write!(f, "{segment:?} cannot be sent as a single path segment")
            }
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Request(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::Status { .. } | Self::InvalidUrl(_) | Self::InvalidSegment(_) => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}

/// JSON client bound to a single graph service origin.
#[derive(Debug, Clone)]
pub struct GraphClient {
    http: Client,
    base_url: Url,
}

impl GraphClient {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self::with_http_client(Client::new(), base_url)
    }

    /// Builds a client around an existing `reqwest` client.
    #[must_use]
    pub const fn with_http_client(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// Sends one request to `endpoint`, with `body` as the JSON payload when given.
    ///
    /// # Errors
    /// Returns `ClientError` on transport failure, non-2xx status, or a body
    /// that is not JSON.
    pub async fn send(
        &self,
        endpoint: &Endpoint,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let url = endpoint.resolve(&self.base_url)?;
        debug!(method = %endpoint.method(), %url, "graph api request");

        let mut request = self.http.request(endpoint.method().clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(&bytes);
            warn!(
                method = %endpoint.method(),
                path = %endpoint.path(),
                %status,
                "graph api error: {message}"
            );
            return Err(ClientError::Status { status, message });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn error_message(bytes: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(bytes)
        && let Some(message) = value.get("error").and_then(Value::as_str)
    {
        return message.to_string();
    }
    let text = String::from_utf8_lossy(bytes);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "no response body".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_error_field() {
        let body = br#"{"error":"Person not found"}"#;
        assert_eq!(error_message(body), "Person not found");
    }

    #[test]
    fn error_message_falls_back_to_text() {
        assert_eq!(error_message(b"  Bad Gateway \n"), "Bad Gateway");
        assert_eq!(error_message(br#"{"message":"nope"}"#), r#"{"message":"nope"}"#);
        assert_eq!(error_message(b""), "no response body");
    }

    #[test]
    fn default_url_parses() {
        let url = Url::parse(DEFAULT_GRAPH_API_URL).expect("default url");
        assert_eq!(url.as_str(), "http://localhost:3000/");
    }

    #[tokio::test]
    async fn dot_segments_fail_before_any_request() {
        let url = Url::parse("http://127.0.0.1:9").expect("static url");
        let client = GraphClient::new(url);
        let err = client
            .send(&Endpoint::delete(["people", ".."]), None)
            .await
            .expect_err("dot segment");
        assert!(matches!(err, ClientError::InvalidSegment(_)));
    }
}
