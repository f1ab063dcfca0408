//! Foxx application deployment: upload a zipped app, then install it at a mount point.
//!
//! Installation is two requests in sequence. The archive bytes go to the upload route first;
//! the server answers with the name it stored them under, and that name is what the install
//! request refers to. A failure at any step ends the call and nothing is retried.

use std::path::{Path, PathBuf};

use arango_error::{ArangoError, ErrorCodes};
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::client::{ArangoHttpClientError, Connection, RequestBody};
use crate::types::{JsonObject, UploadResponse};
use crate::urls::{URL_FOXX_INSTALL, URL_UPLOAD};

/// Ways [`FoxxHandler::install_app`] can fail.
#[derive(Error, Debug)]
pub enum InstallError {
    /// The local archive is missing, not a regular file, or unreadable. Nothing was sent.
    #[error("Foxx archive {} does not exist or is unreadable: {source}", .path.display())]
    ArchiveNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The mount point does not start with `/`. Nothing was sent.
    #[error("Mount point must begin with '/': {0:?}")]
    InvalidMountPoint(String),
    /// The server rejected the upload; no install was attempted.
    #[error("Foxx archive upload failed ({status})")]
    UploadFailed {
        status: StatusCode,
        body: Option<Value>,
    },
    /// The upload succeeded but the server rejected the install.
    #[error("Foxx archive install failed ({status})")]
    InstallFailed {
        status: StatusCode,
        body: Option<Value>,
    },
    /// Transport failure or an undecodable response.
    #[error(transparent)]
    Client(#[from] ArangoHttpClientError),
}

impl ArangoError for InstallError {
    fn code(&self) -> ErrorCodes {
        match self {
            InstallError::ArchiveNotFound { source, .. } => match source.code() {
                ErrorCodes::Unknown => ErrorCodes::FailedPrecondition,
                code => code,
            },
            InstallError::InvalidMountPoint(_) => ErrorCodes::FailedPrecondition,
            InstallError::UploadFailed { status, .. }
            | InstallError::InstallFailed { status, .. } => (*status).into(),
            InstallError::Client(err) => err.code(),
        }
    }
}

/// Deploys Foxx apps through a borrowed [`Connection`].
///
/// # Examples
///
/// ```no_run
/// use arango::client::ArangoHttpConnection;
/// use arango::foxx::FoxxHandler;
/// use arango::types::JsonObject;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let connection = ArangoHttpConnection::from_env()?;
/// let foxx = FoxxHandler::new(&connection);
///
/// let installed = foxx.install_app("build/todo-app.zip", "/todo", JsonObject::new()).await?;
/// println!("{:?}", installed);
/// # Ok(())
/// # }
/// ```
pub struct FoxxHandler<'a, C: ?Sized> {
    connection: &'a C,
}

impl<C: ?Sized> std::fmt::Debug for FoxxHandler<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FoxxHandler").finish_non_exhaustive()
    }
}

impl<'a, C> FoxxHandler<'a, C>
where
    C: Connection + ?Sized,
{
    pub fn new(connection: &'a C) -> Self {
        FoxxHandler { connection }
    }

    /// Uploads the zip at `local_archive` and installs it at `mount_point`.
    ///
    /// `options` is forwarded to the install request under `options` when non-empty. Returns the
    /// install response body.
    ///
    /// The archive is read into memory whole before the upload starts.
    pub async fn install_app(
        &self,
        local_archive: impl AsRef<Path>,
        mount_point: &str,
        options: JsonObject,
    ) -> Result<JsonObject, InstallError> {
        let path = local_archive.as_ref();
        let not_found = |source: std::io::Error| InstallError::ArchiveNotFound {
            path: path.to_path_buf(),
            source,
        };

        let metadata = tokio::fs::metadata(path).await.map_err(not_found)?;
        if !metadata.is_file() {
            return Err(not_found(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        if !mount_point.starts_with('/') {
            return Err(InstallError::InvalidMountPoint(mount_point.to_string()));
        }
        let archive = tokio::fs::read(path).await.map_err(not_found)?;

        tracing::debug!(
            archive = %path.display(),
            bytes = archive.len(),
            mount = mount_point,
            "Uploading Foxx archive"
        );

        let upload = self
            .connection
            .post(URL_UPLOAD, RequestBody::Raw(archive))
            .await?;
        if upload.is_failure() {
            tracing::warn!(status = %upload.status(), "Foxx archive upload rejected");
            return Err(InstallError::UploadFailed {
                status: upload.status(),
                body: upload.json_value(),
            });
        }
        let UploadResponse { filename, .. } = upload.json()?;

        tracing::debug!(app_info = %filename, mount = mount_point, "Installing uploaded Foxx archive");

        let mut payload = JsonObject::new();
        payload.insert("appInfo".to_string(), Value::String(filename));
        payload.insert("mount".to_string(), Value::String(mount_point.to_string()));
        if !options.is_empty() {
            payload.insert("options".to_string(), Value::Object(options));
        }

        let install = self
            .connection
            .put(URL_FOXX_INSTALL, RequestBody::Json(Value::Object(payload)))
            .await?;
        if install.is_failure() {
            tracing::warn!(status = %install.status(), mount = mount_point, "Foxx install rejected");
            return Err(InstallError::InstallFailed {
                status: install.status(),
                body: install.json_value(),
            });
        }

        Ok(install.json()?)
    }
}
