use arango_api_types::ErrorResponse;
use arango_error::{ArangoError, ErrorCodes};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that originate from a [`Connection`] while executing a request or decoding its answer.
#[derive(Error, Debug)]
pub enum ArangoHttpClientError {
    /// Network-level HTTP request failed.
    #[error("Request error: {0:?}")]
    RequestError(#[from] reqwest::Error),
    /// Transport failure reported by a [`Connection`] that is not backed by reqwest.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The request URL could not be assembled from the endpoint and path.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
    /// The server answered with a status code of 400 or above.
    ///
    /// `body` holds the decoded JSON body when there was one, for diagnostics.
    #[error("API error: {message} ({status})")]
    ApiError {
        status: StatusCode,
        message: String,
        body: Option<serde_json::Value>,
    },
    /// The response body was not the JSON the operation expected.
    #[error("Serialization/Deserialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl ArangoError for ArangoHttpClientError {
    fn code(&self) -> ErrorCodes {
        match self {
            ArangoHttpClientError::RequestError(err) => match err.status() {
                Some(status) => status.into(),
                None if err.is_timeout() => ErrorCodes::DeadlineExceeded,
                None => ErrorCodes::Unknown,
            },
            ArangoHttpClientError::Transport(_) => ErrorCodes::Unknown,
            ArangoHttpClientError::InvalidUrl(_) => ErrorCodes::InvalidArgument,
            ArangoHttpClientError::ApiError { status, .. } => (*status).into(),
            ArangoHttpClientError::SerdeError(_) => ErrorCodes::Internal,
        }
    }
}

/// Payload of an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// Sent as `application/json`.
    Json(serde_json::Value),
    /// Sent verbatim as `application/octet-stream`.
    Raw(Vec<u8>),
}

/// A fully received HTTP response: status code and body, nothing interpreted yet.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: StatusCode,
    body: Bytes,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        HttpResponse {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// True for any status of 400 or above.
    pub fn is_failure(&self) -> bool {
        self.status.is_client_error() || self.status.is_server_error()
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decodes the body as `T`, regardless of the status code.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ArangoHttpClientError> {
        let json = serde_json::from_slice::<serde_json::Value>(&self.body)?;

        if tracing::enabled!(tracing::Level::TRACE) {
            tracing::trace!(
                status = %self.status,
                "Received response: {}",
                serde_json::to_string_pretty(&json).unwrap_or_else(|_| "<failed to serialize>".to_string())
            );
        }

        Ok(serde_json::from_value::<T>(json)?)
    }

    /// The body as JSON, or `None` when it is empty or not JSON.
    pub fn json_value(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.body).ok()
    }

    /// Turns a failing status into [`ArangoHttpClientError::ApiError`] and decodes anything else as `T`.
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T, ArangoHttpClientError> {
        if self.is_failure() {
            return Err(self.into_api_error());
        }
        self.json()
    }

    pub(crate) fn into_api_error(self) -> ArangoHttpClientError {
        let body = self.json_value();
        let message = match &body {
            Some(json) => serde_json::from_value::<ErrorResponse>(json.clone())
                .ok()
                .filter(|response| !response.error_message.is_empty())
                .map(|response| format!("{} [{}]", response.error_message, response.error_num))
                .unwrap_or_else(|| json.to_string()),
            None => format!(
                "Non-JSON error response: {}",
                String::from_utf8_lossy(&self.body)
            ),
        };

        ArangoHttpClientError::ApiError {
            status: self.status,
            message,
            body,
        }
    }
}

/// The request capability every administrative operation is written against.
///
/// Implementations report transport failures as errors and hand back every received response,
/// whatever its status code, so callers can decide what a failing status means for them.
/// `path` is the server route (e.g. `/_api/database/user`), already percent-encoded.
#[async_trait]
pub trait Connection: Send + Sync {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<HttpResponse, ArangoHttpClientError>;

    async fn get(&self, path: &str) -> Result<HttpResponse, ArangoHttpClientError> {
        self.send(Method::GET, path, RequestBody::Empty).await
    }

    async fn post(
        &self,
        path: &str,
        body: RequestBody,
    ) -> Result<HttpResponse, ArangoHttpClientError> {
        self.send(Method::POST, path, body).await
    }

    async fn put(
        &self,
        path: &str,
        body: RequestBody,
    ) -> Result<HttpResponse, ArangoHttpClientError> {
        self.send(Method::PUT, path, body).await
    }

    async fn delete(&self, path: &str) -> Result<HttpResponse, ArangoHttpClientError> {
        self.send(Method::DELETE, path, RequestBody::Empty).await
    }
}
