// =============================================================================
// Connect-U Web - API Client Module
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// 3. Transport
// 4. API Client
// 5. Error Types
// =============================================================================

pub mod auth;
pub mod profiles;
pub mod reactions;

pub use auth::*;
pub use profiles::*;
pub use reactions::*;

use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::session::Session;

// -----------------------------------------------------------------------------
// 5. Error Types
// -----------------------------------------------------------------------------

/// API error types. The `Display` text is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Unauthorized")]
    SessionExpired,

    #[error("{message}")]
    Fetch { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Deserialize(String),

    /// The request could not be built; nothing was sent.
    #[error("Could not send request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    fn fetch(status: u16, message: &str) -> Self {
        ApiError::Fetch {
            status,
            message: message.to_string(),
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Transport
// -----------------------------------------------------------------------------

/// HTTP verbs the client issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully built request, independent of the HTTP backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and waits for its response.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser `fetch` via gloo-net.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}

// -----------------------------------------------------------------------------
// 4. API Client
// -----------------------------------------------------------------------------

/// HTTP client for the Connect-U REST API.
///
/// Each call is a single attempt. There is no retry or timeout.
#[derive(Clone, Debug)]
pub struct ApiClient<T = GlooTransport> {
    base_url: String,
    transport: T,
    session: Session,
}

impl ApiClient<GlooTransport> {
    /// Browser client bound to `localStorage` and `window.location`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, GlooTransport, Session::browser())
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T, session: Session) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            session,
        }
    }

    /// The session whose token authorizes requests.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Build a request with common headers.
    ///
    /// `Authorization` is attached only when `authorized` is set and a token
    /// is stored.
    fn build_request(&self, method: Method, endpoint: &str, authorized: bool) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];

        if authorized {
            if let Some(token) = self.session.access_token() {
                headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
            }
        }

        HttpRequest {
            method,
            url: format!("{}{}", self.base_url, endpoint),
            headers,
            body: None,
        }
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        log::debug!("{:?} {}", request.method, request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("Request failed: {}", e);
            e
        })?;

        if !response.is_success() {
            log::warn!("Request returned status {}", response.status);
        }

        Ok(response)
    }

    /// GET request.
    async fn get(&self, endpoint: &str, authorized: bool) -> Result<HttpResponse, ApiError> {
        let request = self.build_request(Method::Get, endpoint, authorized);
        self.execute(request).await
    }

    /// POST request with JSON body.
    async fn post<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
        authorized: bool,
    ) -> Result<HttpResponse, ApiError> {
        let mut request = self.build_request(Method::Post, endpoint, authorized);
        request.body = Some(
            serde_json::to_string(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))?,
        );
        self.execute(request).await
    }
}

/// Decode a successful response body.
fn decode<D: DeserializeOwned>(response: &HttpResponse) -> Result<D, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialize(e.to_string()))
}
