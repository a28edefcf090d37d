//! HTTP gateway: token injection and outcome normalization.
//!
//! ARCHITECTURE
//! ============
//! Every outgoing request reads the persisted token and carries it as a
//! bearer header (omitted entirely when absent). Responses are classified
//! into a [`RequestOutcome`] before any side effect runs; the unauthorized
//! interceptor is registered once at shell startup and applies to every
//! call site, so no caller re-implements the 401 cleanup.
//!
//! The gateway never retries, never queues, and enforces no timeout; that
//! is left to the transport.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::routes::Navigator;
use crate::storage::{KeyValueStore, TOKEN_KEY};
use crate::transport::{HttpRequest, HttpTransport, RequestBody};

/// Classification of a single HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// Status 200; payload is the parsed JSON body.
    Success(Value),
    /// Status 401; handled globally by the registered interceptor.
    Unauthorized,
    /// Transport failure (`status: None`) or any non-200/401 status.
    Failure { status: Option<u16>, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Global 401 policy, invoked once per unauthorized response regardless of
/// which caller issued the request.
pub trait UnauthorizedInterceptor: Send + Sync {
    fn on_unauthorized(&self);
}

/// Standard 401 policy: drop the persisted token and force the shell back
/// to its login route.
pub struct ForceLogin {
    storage: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
}

impl ForceLogin {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { storage, navigator }
    }
}

impl UnauthorizedInterceptor for ForceLogin {
    fn on_unauthorized(&self) {
        self.storage.remove(TOKEN_KEY);
        self.navigator.replace(self.navigator.login_path());
    }
}

/// Uniform entry point for all API traffic from either shell.
pub struct Gateway {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    storage: Arc<dyn KeyValueStore>,
    on_unauthorized: Option<Arc<dyn UnauthorizedInterceptor>>,
}

impl Gateway {
    #[must_use]
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        storage: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self { config, transport, storage, on_unauthorized: None }
    }

    /// Register the global 401 policy. Called once when the shell wires its
    /// services together.
    #[must_use]
    pub fn with_unauthorized_interceptor(
        mut self,
        interceptor: Arc<dyn UnauthorizedInterceptor>,
    ) -> Self {
        self.on_unauthorized = Some(interceptor);
        self
    }

    /// Issue a request and classify the response without running the
    /// unauthorized interceptor. Exposed so the mapping can be asserted in
    /// isolation from navigation.
    pub async fn dispatch(&self, method: Method, path: &str, body: RequestBody) -> RequestOutcome {
        let request = HttpRequest {
            method,
            url: self.config.endpoint(path),
            bearer: self.storage.get(TOKEN_KEY),
            body,
        };
        match self.transport.execute(request).await {
            Ok(response) => classify(response.status, &response.body),
            Err(err) => RequestOutcome::Failure { status: None, message: err.to_string() },
        }
    }

    /// Issue a request, applying the global 401 policy and converting the
    /// outcome into a caller-facing result.
    ///
    /// # Errors
    /// [`GatewayError::Network`] when no response was received,
    /// [`GatewayError::Unauthorized`] after the 401 cleanup has run, and
    /// [`GatewayError::Server`] for any other non-200 status.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<Value, GatewayError> {
        match self.dispatch(method, path, body).await {
            RequestOutcome::Success(payload) => Ok(payload),
            RequestOutcome::Unauthorized => {
                tracing::warn!(path, "unauthorized response; clearing session");
                if let Some(interceptor) = &self.on_unauthorized {
                    interceptor.on_unauthorized();
                }
                Err(GatewayError::Unauthorized)
            }
            RequestOutcome::Failure { status: Some(status), message } => {
                Err(GatewayError::Server { status, message })
            }
            RequestOutcome::Failure { status: None, message } => {
                Err(GatewayError::Network(message))
            }
        }
    }

    /// # Errors
    /// See [`Gateway::request`].
    pub async fn get(&self, path: &str) -> Result<Value, GatewayError> {
        self.request(Method::GET, path, RequestBody::Empty).await
    }

    /// # Errors
    /// See [`Gateway::request`].
    pub async fn post(&self, path: &str, body: Value) -> Result<Value, GatewayError> {
        self.request(Method::POST, path, RequestBody::Json(body)).await
    }

    /// Form-encoded POST; the authentication endpoint requires this shape.
    ///
    /// # Errors
    /// See [`Gateway::request`].
    pub async fn post_form(
        &self,
        path: &str,
        fields: Vec<(String, String)>,
    ) -> Result<Value, GatewayError> {
        self.request(Method::POST, path, RequestBody::Form(fields)).await
    }

    /// # Errors
    /// See [`Gateway::request`].
    pub async fn put(&self, path: &str, body: Value) -> Result<Value, GatewayError> {
        self.request(Method::PUT, path, RequestBody::Json(body)).await
    }

    /// # Errors
    /// See [`Gateway::request`].
    pub async fn delete(&self, path: &str) -> Result<Value, GatewayError> {
        self.request(Method::DELETE, path, RequestBody::Empty).await
    }
}

/// Map status + raw body into an outcome. 200 is the only success status;
/// the backend returns 200 on its create paths, so nothing else qualifies.
fn classify(status: u16, body: &[u8]) -> RequestOutcome {
    match status {
        200 => RequestOutcome::Success(serde_json::from_slice(body).unwrap_or(Value::Null)),
        401 => RequestOutcome::Unauthorized,
        other => RequestOutcome::Failure {
            status: Some(other),
            message: error_message(other, body),
        },
    }
}

/// Best-effort error message: the structured `detail` string when the body
/// carries one, else a generic template naming the status.
fn error_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("request failed: {status}"))
}

#[cfg(test)]
#[path = "gateway_test.rs"]
mod tests;
