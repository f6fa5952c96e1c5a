//! HTTP gateway shared by every resource module.

use std::rc::Rc;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use warden_auth::Session;
use warden_core::{ApiError, ApiResult, ConsoleConfig, HealthStatus};

/// Message shown when the backend gives nothing better.
pub(crate) const GENERIC_ERROR_MESSAGE: &str =
    "The request could not be completed. Please try again.";

/// Severity of a transient UI notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient UI notification (toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }
}

/// Side-effect seam of the gateway.
///
/// The console wires this to the toast host and the router; tests record the
/// calls. `session_expired` fires exactly once per 401 response.
pub trait GatewayEvents {
    fn notify(&self, notice: Notice);
    fn session_expired(&self);
}

/// No-op events, for tools that only want the typed errors.
pub struct NullEvents;

impl GatewayEvents for NullEvents {
    fn notify(&self, _notice: Notice) {}
    fn session_expired(&self) {}
}

/// How a request participates in session handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthMode {
    /// Normal resource call: a 401 invalidates the session.
    Required,
    /// The login call itself: a 401 is a credentials error owned by the
    /// form, with no session side effects and no toast.
    Login,
}

/// The API gateway.
///
/// Cheap to clone; clones share the HTTP connection pool and the session
/// handle. Passed explicitly wherever it is needed — there is no global.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
    events: Rc<dyn GatewayEvents>,
}

impl ApiClient {
    pub fn new(
        config: &ConsoleConfig,
        session: Session,
        events: Rc<dyn GatewayEvents>,
    ) -> ApiResult<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::network(e.to_string()))?;
        #[cfg(target_arch = "wasm32")]
        let http = reqwest::Client::new();

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            session,
            events,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Backend health probe, `GET /health`.
    pub async fn health(&self) -> ApiResult<HealthStatus> {
        self.get_json("/health", &[]).await
    }

    // ── request machinery ────────────────────────────────────────────────

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ApiResult<T> {
        let response = self
            .send::<()>(Method::GET, path, query, None, AuthMode::Required)
            .await?;
        self.decode(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .send(Method::POST, path, &[], Some(body), AuthMode::Required)
            .await?;
        self.decode(response).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .send(Method::PUT, path, &[], Some(body), AuthMode::Required)
            .await?;
        self.decode(response).await
    }

    /// GET where only the status matters (`/auth/validate`).
    pub(crate) async fn get_ok(&self, path: &str) -> ApiResult<()> {
        self.send::<()>(Method::GET, path, &[], None, AuthMode::Required)
            .await?;
        Ok(())
    }

    /// POST with no payload and no interesting response body.
    pub(crate) async fn post_empty(&self, path: &str) -> ApiResult<()> {
        self.send::<()>(Method::POST, path, &[], None, AuthMode::Required)
            .await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send::<()>(Method::DELETE, path, &[], None, AuthMode::Required)
            .await?;
        Ok(())
    }

    /// GET returning a raw binary payload (the CSV export).
    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ApiResult<Vec<u8>> {
        let response = self
            .send::<()>(Method::GET, path, query, None, AuthMode::Required)
            .await?;
        let bytes = response.bytes().await.map_err(|e| {
            let err = ApiError::decode(e.to_string());
            self.emit_failure(&err, AuthMode::Required);
            err
        })?;
        Ok(bytes.to_vec())
    }

    /// The login call, exempt from 401 session invalidation.
    pub(crate) async fn post_login<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .send(Method::POST, path, &[], Some(body), AuthMode::Login)
            .await?;
        self.decode(response).await
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&B>,
        mode: AuthMode,
    ) -> ApiResult<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "request failed to complete");
            let err = ApiError::network(e.to_string());
            self.emit_failure(&err, mode);
            err
        })?;

        self.check_status(response, mode).await
    }

    async fn check_status(
        &self,
        response: reqwest::Response,
        mode: AuthMode,
    ) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED && mode == AuthMode::Required {
            // Unconditional, even for background polls: clear the session
            // and route the user back to the login screen.
            tracing::warn!("401 response; invalidating session");
            self.session.clear();
            self.events.session_expired();
            return Err(ApiError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(status.as_u16(), &body);
        let err = ApiError::api(status.as_u16(), message);
        self.emit_failure(&err, mode);
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(&self, response: reqwest::Response) -> ApiResult<T> {
        response.json::<T>().await.map_err(|e| {
            let err = ApiError::decode(e.to_string());
            self.emit_failure(&err, AuthMode::Required);
            err
        })
    }

    /// Single notification point: business errors keep their message, the
    /// rest collapse to a generic one. The caller still gets the raw error.
    fn emit_failure(&self, err: &ApiError, mode: AuthMode) {
        if mode == AuthMode::Login {
            return;
        }
        let message = match err {
            ApiError::Api { status, message } if *status < 500 => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        };
        self.events.notify(Notice::error(message));
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Accepts the common JSON shapes (`detail` as string or validation array,
/// `message`, `error`) before falling back to a generic status line.
pub(crate) fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail") {
            if let Some(s) = detail.as_str() {
                return s.to_string();
            }
            // FastAPI-style validation errors: [{"msg": ...}, ...]
            if let Some(first) = detail.as_array().and_then(|a| a.first()) {
                if let Some(msg) = first.get("msg").and_then(|m| m.as_str()) {
                    return msg.to_string();
                }
            }
        }
        for key in ["message", "error"] {
            if let Some(s) = value.get(key).and_then(|v| v.as_str()) {
                return s.to_string();
            }
        }
    }
    format!("request failed with status {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_detail_string() {
        let msg = extract_error_message(401, r#"{"detail":"Invalid credentials"}"#);
        assert_eq!(msg, "Invalid credentials");
    }

    #[test]
    fn extracts_first_validation_message() {
        let body = r#"{"detail":[{"loc":["body","command"],"msg":"field required"}]}"#;
        assert_eq!(extract_error_message(422, body), "field required");
    }

    #[test]
    fn extracts_message_and_error_keys() {
        assert_eq!(
            extract_error_message(409, r#"{"message":"hostname already enrolled"}"#),
            "hostname already enrolled"
        );
        assert_eq!(
            extract_error_message(400, r#"{"error":"bad request"}"#),
            "bad request"
        );
    }

    #[test]
    fn falls_back_to_status_line() {
        assert_eq!(
            extract_error_message(500, "<html>oops</html>"),
            "request failed with status 500"
        );
        assert_eq!(extract_error_message(502, ""), "request failed with status 502");
    }
}
