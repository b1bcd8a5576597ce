//! HTTP client shared by the upstream sources.

use datapoint_types::DatapointError;
use reqwest::Client;
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Longest slice of a response body carried in an error message.
const BODY_EXCERPT_CHARS: usize = 200;

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from request timeout).
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("datapoint/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while talking to an upstream service.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server rejected the credential.
    #[error("Unauthorized: server returned {status}")]
    Unauthorized {
        /// HTTP status code.
        status: u16,
    },

    /// Server returned an error status.
    #[error("Server error {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Leading part of the response body.
        body: String,
    },

    /// Response body was not the expected JSON.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Classifies a non-success status.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => Self::Unauthorized { status },
            _ => Self::Status {
                status,
                body: excerpt(body),
            },
        }
    }
}

impl From<ApiError> for DatapointError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Http(e) => Self::Http(e.to_string()),
            ApiError::Unauthorized { status } => {
                Self::Authentication(format!("server returned {status}"))
            }
            ApiError::Status { status, body } => Self::Status {
                status,
                message: body,
            },
            ApiError::Decode(e) => Self::Parse(e.to_string()),
        }
    }
}

/// Raw response: status code and body text.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl ApiResponse {
    /// Returns true for a 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Decodes the body as JSON after checking the status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] or [`ApiError::Status`] for a
    /// non-success status, or [`ApiError::Decode`] if the body is not `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(ApiError::from_status(self.status, &self.body));
        }
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// HTTP client with the configured timeouts.
///
/// Requests are sent once; a failed request is reported to the caller.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a GET request and returns the status and body, whatever the status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the body cannot be read.
    pub async fn get_text<Q>(
        &self,
        url: &str,
        query: &Q,
        headers: HeaderMap,
    ) -> Result<ApiResponse, ApiError>
    where
        Q: Serialize + ?Sized,
    {
        let response = self
            .client
            .get(url)
            .query(query)
            .headers(headers)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(url, status, bytes = body.len(), "received response");

        Ok(ApiResponse { status, body })
    }

    /// Sends a GET request and decodes a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a body
    /// that does not decode into `T`.
    pub async fn get_json<T, Q>(&self, url: &str, query: &Q, headers: HeaderMap) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.get_text(url, query, headers).await?.json()
    }
}

/// Returns the leading part of a body for error messages.
pub(crate) fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= BODY_EXCERPT_CHARS {
        return trimmed.to_string();
    }
    let mut out: String = trimmed.chars().take(BODY_EXCERPT_CHARS).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("datapoint/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = ApiClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_from_status_unauthorized() {
        assert!(matches!(
            ApiError::from_status(401, ""),
            ApiError::Unauthorized { status: 401 }
        ));
        assert!(matches!(
            ApiError::from_status(403, "forbidden"),
            ApiError::Unauthorized { status: 403 }
        ));
    }

    #[test]
    fn test_from_status_other() {
        let err = ApiError::from_status(503, "  maintenance  ");
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_json_success() {
        let value: serde_json::Value = response(200, r#"{"prices": []}"#).json().unwrap();
        assert!(value["prices"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_unauthorized_is_authentication() {
        let body = r#"{"status": {"error_code": 401, "error_message": "invalid key"}}"#;
        let err = response(401, body).json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { status: 401 }));

        let err: DatapointError = err.into();
        assert!(matches!(err, DatapointError::Authentication(_)));
    }

    #[test]
    fn test_json_error_status() {
        let err = response(429, "Throttled").json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 429, ref body } if body == "Throttled"));
    }

    #[test]
    fn test_json_invalid_body() {
        let err = response(200, "<html>maintenance</html>")
            .json::<serde_json::Value>()
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let err: DatapointError = err.into();
        assert!(matches!(err, DatapointError::Parse(_)));
    }

    #[test]
    fn test_unauthorized_maps_to_authentication() {
        let err: DatapointError = ApiError::Unauthorized { status: 401 }.into();
        assert!(matches!(err, DatapointError::Authentication(_)));
    }

    #[test]
    fn test_excerpt_truncates() {
        let body = "x".repeat(500);
        let short = excerpt(&body);
        assert_eq!(short.chars().count(), BODY_EXCERPT_CHARS + 3);
        assert!(short.ends_with("..."));
    }

    #[test]
    fn test_response_success_range() {
        let ok = ApiResponse { status: 204, body: String::new() };
        let bad = ApiResponse { status: 400, body: String::new() };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }
}
