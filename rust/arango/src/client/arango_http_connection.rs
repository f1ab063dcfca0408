use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Method;

use crate::client::{
    ArangoAuthMethod, ArangoHttpClientError, ArangoHttpConnectionOptions,
    ArangoHttpConnectionOptionsError, Connection, HttpResponse, RequestBody,
};
use crate::urls::encode_segment;

const USER_AGENT: &str = concat!("ArangoDB Rust Admin Client v", env!("CARGO_PKG_VERSION"));

/// [`Connection`] over HTTP(S), bound to a single database.
///
/// Requests go to `{endpoint}/_db/{database_name}{path}`. Authentication headers and the user
/// agent are attached to every request.
///
/// # Cloning
///
/// Clones share reqwest's connection pool. The connection holds no mutable state, so a single
/// instance can be used from many tasks at once.
///
/// # Examples
///
/// ```no_run
/// use arango::client::{ArangoAuthMethod, ArangoHttpConnection, ArangoHttpConnectionOptions};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let connection = ArangoHttpConnection::new(ArangoHttpConnectionOptions {
///     endpoint: "http://localhost:8529".parse()?,
///     auth_method: ArangoAuthMethod::basic("root", ""),
///     ..Default::default()
/// });
///
/// let databases = arango::database::list_databases(&connection).await?;
/// println!("{:?}", databases.result);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ArangoHttpConnection {
    base_url: String,
    database_name: String,
    client: reqwest::Client,
    auth_method: ArangoAuthMethod,
}

impl Default for ArangoHttpConnection {
    fn default() -> Self {
        Self::new(ArangoHttpConnectionOptions::default())
    }
}

impl ArangoHttpConnection {
    pub fn new(options: ArangoHttpConnectionOptions) -> Self {
        let mut headers = options.headers();
        headers.append("user-agent", HeaderValue::from_static(USER_AGENT));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to initialize TLS backend");

        ArangoHttpConnection {
            base_url: format!(
                "{}/_db/{}",
                options.endpoint.as_str().trim_end_matches('/'),
                encode_segment(&options.database_name)
            ),
            database_name: options.database_name,
            client,
            auth_method: options.auth_method,
        }
    }

    /// Constructs a connection from `ARANGO_*` environment variables.
    ///
    /// See [`ArangoHttpConnectionOptions::from_env`].
    pub fn from_env() -> Result<Self, ArangoHttpConnectionOptionsError> {
        Ok(Self::new(ArangoHttpConnectionOptions::from_env()?))
    }

    /// The database every request of this connection is routed to.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    fn url(&self, path: &str) -> Result<reqwest::Url, ArangoHttpClientError> {
        let separator = if path.starts_with('/') { "" } else { "/" };
        let url = format!("{}{}{}", self.base_url, separator, path);
        url.parse()
            .map_err(|err| ArangoHttpClientError::InvalidUrl(format!("{}: {}", url, err)))
    }
}

#[async_trait]
impl Connection for ArangoHttpConnection {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<HttpResponse, ArangoHttpClientError> {
        let url = self.url(path)?;

        let mut request = self.client.request(method.clone(), url.clone());
        if let ArangoAuthMethod::Basic { username, password } = &self.auth_method {
            request = request.basic_auth(username, Some(password));
        }
        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(json) => request.json(&json),
            RequestBody::Raw(bytes) => request
                .header(CONTENT_TYPE, "application/octet-stream")
                .body(bytes),
        };

        tracing::trace!(url = %url, method =? method, "Sending request");

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::trace!(
            url = %url,
            method =? method,
            status = %status,
            bytes = body.len(),
            "Received response"
        );

        Ok(HttpResponse::new(status, body))
    }
}
