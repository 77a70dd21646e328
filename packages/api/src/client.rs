//! # HTTP plumbing shared by every endpoint
//!
//! [`ApiClient`] owns one `reqwest::Client` and the [`ApiConfig`]. Endpoint
//! methods live next to their request types (`auth`, `projects`) and funnel
//! through [`ApiClient::send`], which is where transport errors, status codes
//! and JSON decoding are turned into [`ApiError`].
//!
//! ## Session cookie
//!
//! The API authenticates with an HTTP-only cookie. In the browser every request
//! is sent with `credentials: include`; on native targets the client keeps its
//! own cookie jar for the lifetime of the process.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::endpoint::Endpoint;
use crate::error::ApiError;

/// A decoded payload plus the human-readable `message` the API attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub data: T,
    pub message: Option<String>,
}

impl<T> Reply<T> {
    /// The server's message, or `fallback` when it sent none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Handle to the remote API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: build_http(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) fn request(&self, endpoint: Endpoint<'_>) -> RequestBuilder {
        let method = endpoint.method();
        let url = self.config.endpoint(&endpoint.path());
        tracing::debug!("{method} {url}");
        with_credentials(self.http.request(method, url))
    }

    /// Send a request and decode a JSON body of type `T`.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = dispatch(request).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode(status, &body)
    }

    /// Send a request where only the status matters.
    pub(crate) async fn send_unit(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = dispatch(request).await?;
        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Server {
                status,
                message: error_message(&body),
            })
        }
    }
}

async fn dispatch(request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
    request.send().await.map_err(|e| {
        tracing::error!("Request failed: {e}");
        ApiError::from(e)
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_else(|e| {
            tracing::error!("Failed to build HTTP client with cookie store: {e}");
            reqwest::Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_http() -> reqwest::Client {
    reqwest::Client::new()
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
}

/// Turn a status and raw body into `T` or the matching [`ApiError`].
pub(crate) fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Server {
            status,
            message: error_message(body),
        });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Reject a 2xx body that carries `"success": false`.
pub(crate) fn ensure_success(success: Option<bool>, message: &Option<String>) -> Result<(), ApiError> {
    if success == Some(false) {
        return Err(ApiError::Rejected {
            message: message.clone(),
        });
    }
    Ok(())
}
