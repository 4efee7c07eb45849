//! HTTP helpers for JSON APIs with consistent timeouts and error handling. The
//! auth service uses these helpers to avoid duplicating request setup and to
//! enforce a predictable timeout policy. Every request can be cancelled through
//! a `CancellationToken` owned by the calling view. The helpers never log
//! request bodies.

use crate::{config::AppConfig, errors::AppError, APP_USER_AGENT};
use reqwest::{header::CONTENT_TYPE, Client};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::to_string;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use ulid::Ulid;

/// Maximum number of error characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Error body returned by the auth API: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    /// Returns `AppError::Parse` if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        serde_json::from_str(&self.body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    }

    /// Server-supplied `error` message, or `fallback` when the body has none.
    #[must_use]
    pub fn error_message(&self, fallback: &str) -> String {
        serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|body| sanitize_message(&body.error))
            .unwrap_or_else(|| fallback.to_string())
    }

    #[must_use]
    pub fn into_error(self, fallback: &str) -> AppError {
        let message = self.error_message(fallback);
        AppError::Http {
            status: self.status,
            message,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client with the configured timeout and the crate user agent.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the underlying HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Posts JSON and returns the status and body, whatever the status code.
    /// Resolves to `AppError::Cancelled` as soon as `cancel` fires.
    ///
    /// # Errors
    /// Returns an error if the payload cannot be encoded, the request fails,
    /// times out, or is cancelled.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<ApiResponse, AppError> {
        let url = build_url_with_base(&self.base_url, path);
        let payload = to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        let request_id = Ulid::new().to_string();

        let request = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(REQUEST_ID_HEADER, request_id.as_str())
            .body(payload);

        let send = async {
            let response = request.send().await.map_err(map_request_error)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(map_request_error)?;
            Ok(ApiResponse { status, body })
        };

        debug!(request_id = %request_id, path, "sending request");

        let result = tokio::select! {
            biased;
            () = cancel.cancelled() => Err(AppError::Cancelled),
            result = send => result,
        };

        match &result {
            Ok(response) => debug!(request_id = %request_id, status = response.status, "received response"),
            Err(err) => debug!(request_id = %request_id, error = %err, "request did not complete"),
        }

        result
    }

    /// Posts JSON and decodes a JSON success body; non-success statuses map to
    /// `AppError::Http` with the server message or `fallback`.
    ///
    /// # Errors
    /// Returns an error on transport failure, non-success status, or a body
    /// that does not decode into `T`.
    pub async fn post_json_response<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
        cancel: &CancellationToken,
    ) -> Result<T, AppError> {
        let response = self.post_json(path, body, cancel).await?;
        if response.is_success() {
            response.json()
        } else {
            Err(response.into_error(fallback))
        }
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Trims and truncates a server message; blank messages yield `None`.
fn sanitize_message(message: &str) -> Option<String> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_CHARS).collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::{net::TcpListener, time::Duration};
    use wiremock::matchers::{body_json, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client_for(uri: &str, timeout: Duration) -> ApiClient {
        let config = AppConfig::new(uri).unwrap().with_timeout(timeout);
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("https://app.example.com/", "/api/auth/signup"),
            "https://app.example.com/api/auth/signup"
        );
        assert_eq!(
            build_url_with_base("  ", "/api/auth/signup"),
            "/api/auth/signup"
        );
    }

    #[test]
    fn error_message_prefers_server_text() {
        let response = ApiResponse {
            status: 409,
            body: r#"{"error":"  already exists  "}"#.to_string(),
        };
        assert_eq!(response.error_message("fallback"), "already exists");
    }

    #[test]
    fn error_message_falls_back_on_blank_or_foreign_bodies() {
        for body in ["", "<html>Bad Gateway</html>", r#"{"error":"   "}"#, r#"{"message":"x"}"#] {
            let response = ApiResponse {
                status: 502,
                body: body.to_string(),
            };
            assert_eq!(response.error_message("fallback"), "fallback");
        }
    }

    #[test]
    fn sanitize_message_truncates() {
        let long = "x".repeat(MAX_ERROR_CHARS + 50);
        assert_eq!(
            sanitize_message(&long).map(|m| m.chars().count()),
            Some(MAX_ERROR_CHARS)
        );
    }

    #[test]
    fn success_range() {
        let ok = ApiResponse {
            status: 204,
            body: String::new(),
        };
        let conflict = ApiResponse {
            status: 409,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!conflict.is_success());
    }

    #[tokio::test]
    async fn post_json_sends_headers_and_body() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/echo"))
            .and(header("content-type", "application/json"))
            .and(header("user-agent", APP_USER_AGENT))
            .and(header_exists("x-request-id"))
            .and(body_json(json!({ "value": "a" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server.uri(), Duration::from_secs(5));
        let response = client
            .post_json("/api/echo", &json!({ "value": "a" }), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn cancelled_token_skips_the_request() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server.uri(), Duration::from_secs(5));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = client.post_json("/api/echo", &json!({}), &cancel).await;
        assert_eq!(result.unwrap_err(), AppError::Cancelled);
    }

    #[tokio::test]
    async fn slow_server_maps_to_timeout() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let client = client_for(&server.uri(), Duration::from_millis(100));
        let result = client
            .post_json("/api/echo", &json!({}), &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(AppError::Timeout(_))));
    }

    #[tokio::test]
    async fn post_json_response_maps_http_errors() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/fail"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = client_for(&server.uri(), Duration::from_secs(5));
        let result: Result<serde_json::Value, AppError> = client
            .post_json_response("/api/fail", &json!({}), "Request failed.", &CancellationToken::new())
            .await;

        assert_eq!(
            result.unwrap_err(),
            AppError::Http {
                status: 500,
                message: "Request failed.".to_string()
            }
        );
    }
}
