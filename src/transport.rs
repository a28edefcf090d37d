//! HTTP transport seam.
//!
//! The gateway talks to an [`HttpTransport`] trait object so outcome mapping
//! can be exercised against an in-memory fake; [`ReqwestTransport`] is the
//! production implementation. A transport error means no HTTP response was
//! received at all; status handling happens a layer up.

use async_trait::async_trait;

/// Transport-level failure: the request never produced an HTTP response.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Request body forms the clients use.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
}

/// A single outgoing request, fully resolved: absolute URL, bearer decided.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: reqwest::Method,
    pub url: String,
    /// Raw token; the transport renders the `Authorization: Bearer` header.
    /// `None` means the header is not sent at all.
    pub bearer: Option<String>,
    pub body: RequestBody,
}

/// Transport-level response: status plus raw body bytes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute the request.
    ///
    /// # Errors
    /// Returns [`TransportError`] when no response was received (connection
    /// refused, DNS failure, broken stream).
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport over a shared reqwest client.
#[derive(Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.request(request.method, &request.url);
        if let Some(token) = &request.bearer {
            builder = builder.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(json) => builder.json(&json),
            RequestBody::Form(fields) => builder.form(&fields),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(e.to_string()))?
            .to_vec();
        Ok(HttpResponse { status, body })
    }
}
