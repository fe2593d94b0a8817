//! HTTP client for the hosted platform REST API

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::auth::ProviderError;
use crate::core::config::PlatformConfig;

pub const PROJECT_HEADER: &str = "X-Appwrite-Project";
pub const KEY_HEADER: &str = "X-Appwrite-Key";
pub const SESSION_HEADER: &str = "X-Appwrite-Session";

/// Error type reported for bad logins
const INVALID_CREDENTIALS_TYPE: &str = "user_invalid_credentials";

/// Platform call failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("{message} ({status})")]
    Http {
        status: u16,
        kind: String,
        message: String,
    },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for PlatformError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PlatformError::Decode(err.to_string())
        } else {
            PlatformError::Transport(err.to_string())
        }
    }
}

impl From<PlatformError> for ProviderError {
    fn from(err: PlatformError) -> Self {
        match err {
            PlatformError::Http { status: 409, .. } => ProviderError::Conflict,
            PlatformError::Http {
                status: 401,
                kind,
                message,
            } if kind == INVALID_CREDENTIALS_TYPE => ProviderError::Rejected {
                status: 401,
                message,
            },
            PlatformError::Http { status: 401, .. } => ProviderError::Unauthorized,
            PlatformError::Http {
                status, message, ..
            } => ProviderError::Rejected { status, message },
            PlatformError::Transport(message) => ProviderError::Transport(message),
            PlatformError::Decode(message) => ProviderError::Decode(message),
        }
    }
}

/// Error body returned by the platform
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(rename = "type", default)]
    kind: String,
}

/// Shared platform client
#[derive(Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
    config: Arc<PlatformConfig>,
}

impl PlatformClient {
    pub fn new(config: PlatformConfig) -> Self {
        Self::with_http(reqwest::Client::new(), Arc::new(config))
    }

    pub fn with_http(http: reqwest::Client, config: Arc<PlatformConfig>) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.endpoint, path)
    }

    /// Start a request with the project header plus either the session or
    /// the API key. A key would override the session's account scope.
    pub fn request(&self, method: Method, path: &str, session: Option<&str>) -> RequestBuilder {
        let builder = self
            .http
            .request(method, self.url(path))
            .header(PROJECT_HEADER, &self.config.project_id);

        match (session, &self.config.api_key) {
            (Some(secret), _) => builder.header(SESSION_HEADER, secret),
            (None, Some(key)) => builder.header(KEY_HEADER, key),
            (None, None) => builder,
        }
    }

    /// Send a request and decode a JSON body
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, PlatformError> {
        let response = Self::check(builder.send().await?).await?;
        Ok(response.json::<T>().await?)
    }

    /// Send a request, ignoring the body
    pub async fn send_empty(&self, builder: RequestBuilder) -> Result<(), PlatformError> {
        Self::check(builder.send().await?).await?;
        Ok(())
    }

    async fn check(response: Response) -> Result<Response, PlatformError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let (kind, message) = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => (body.kind, body.message),
            Err(_) => (String::new(), text),
        };

        tracing::debug!("Platform request failed: {} {}", status, message);

        Err(PlatformError::Http {
            status: status.as_u16(),
            kind,
            message,
        })
    }
}
