use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue, AUTHORIZATION};

#[derive(Debug, Clone)]
pub enum ArangoAuthMethod {
    None,
    /// HTTP basic auth, attached to every request.
    Basic {
        username: String,
        password: String,
    },
    HeaderAuth {
        header: HeaderName,
        value: HeaderValue,
    },
}

impl ArangoAuthMethod {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        ArangoAuthMethod::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Bearer authentication with a JWT issued by the server's `/_open/auth` route.
    pub fn jwt(token: &str) -> Result<Self, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&format!("bearer {}", token))?;
        value.set_sensitive(true);

        Ok(ArangoAuthMethod::HeaderAuth {
            header: AUTHORIZATION,
            value,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArangoHttpConnectionOptionsError {
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
    #[error("Missing required configuration: {0}")]
    MissingConfiguration(String),
}

const DEFAULT_ENDPOINT: &str = "http://localhost:8529";
const DEFAULT_DATABASE: &str = "_system";

#[derive(Debug, Clone)]
pub struct ArangoHttpConnectionOptions {
    pub endpoint: reqwest::Url,
    pub auth_method: ArangoAuthMethod,
    /// Every request is routed to this database via the `/_db/<name>` prefix.
    pub database_name: String,
    /// Upper bound for a whole request, connect through body. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ArangoHttpConnectionOptions {
    fn default() -> Self {
        ArangoHttpConnectionOptions {
            endpoint: DEFAULT_ENDPOINT.parse().expect("valid URL"),
            auth_method: ArangoAuthMethod::None,
            database_name: DEFAULT_DATABASE.to_string(),
            timeout: None,
        }
    }
}

impl ArangoHttpConnectionOptions {
    /// Reads `ARANGO_ENDPOINT`, `ARANGO_DATABASE` and credentials from the environment.
    ///
    /// `ARANGO_JWT` takes precedence over `ARANGO_USERNAME`/`ARANGO_PASSWORD`. A password without
    /// a username is a configuration error; a username without a password logs in with an empty one.
    pub fn from_env() -> Result<Self, ArangoHttpConnectionOptionsError> {
        let endpoint = std::env::var("ARANGO_ENDPOINT")
            .map(|s| s.parse::<reqwest::Url>())
            .unwrap_or(Ok(ArangoHttpConnectionOptions::default().endpoint))
            .map_err(|err| ArangoHttpConnectionOptionsError::InvalidEndpoint(err.to_string()))?;

        let database_name =
            std::env::var("ARANGO_DATABASE").unwrap_or(DEFAULT_DATABASE.to_string());

        let auth_method = match (
            std::env::var("ARANGO_JWT").ok(),
            std::env::var("ARANGO_USERNAME").ok(),
            std::env::var("ARANGO_PASSWORD").ok(),
        ) {
            (Some(token), _, _) => ArangoAuthMethod::jwt(&token)?,
            (None, Some(username), password) => {
                ArangoAuthMethod::basic(username, password.unwrap_or_default())
            }
            (None, None, Some(_)) => {
                return Err(ArangoHttpConnectionOptionsError::MissingConfiguration(
                    "ARANGO_USERNAME".to_string(),
                ))
            }
            (None, None, None) => ArangoAuthMethod::None,
        };

        Ok(ArangoHttpConnectionOptions {
            endpoint,
            auth_method,
            database_name,
            ..Default::default()
        })
    }

    pub(crate) fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match &self.auth_method {
            ArangoAuthMethod::HeaderAuth { header, value } => {
                headers.insert(header.clone(), value.clone());
            }
            ArangoAuthMethod::Basic { .. } | ArangoAuthMethod::None => {}
        }
        headers
    }
}
