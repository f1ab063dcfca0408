// Coarse categories for every error the client surfaces. Callers that only
// care about "did it exist", "was I allowed", "is the server down" can match
// on these instead of on each crate's concrete error enum.
use std::error::Error;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ErrorCodes {
    // UNKNOWN covers anything without a better category, including transport failures.
    Unknown,
    // INVALID_ARGUMENT means the request was rejected as malformed, locally or by the server.
    InvalidArgument,
    // NOT_FOUND means a database, route or local file does not exist.
    NotFound,
    // ALREADY_EXISTS is the server's answer to creating a duplicate database.
    AlreadyExists,
    // PERMISSION_DENIED means the credentials are valid but lack the right.
    PermissionDenied,
    // UNAUTHENTICATED means the credentials were missing or wrong.
    Unauthenticated,
    // FAILED_PRECONDITION is a local check that failed before any request was sent.
    FailedPrecondition,
    // UNIMPLEMENTED means the server does not know the route or method.
    Unimplemented,
    // INTERNAL errors are server-side failures or undecodable responses.
    Internal,
    // UNAVAILABLE means the server is overloaded or shutting down.
    Unavailable,
    // DEADLINE_EXCEEDED means a gateway or the request timeout gave up.
    DeadlineExceeded,
}

impl From<http::StatusCode> for ErrorCodes {
    fn from(value: http::StatusCode) -> Self {
        match value {
            http::StatusCode::BAD_REQUEST => ErrorCodes::InvalidArgument,
            http::StatusCode::UNAUTHORIZED => ErrorCodes::Unauthenticated,
            http::StatusCode::FORBIDDEN => ErrorCodes::PermissionDenied,
            http::StatusCode::NOT_FOUND => ErrorCodes::NotFound,
            http::StatusCode::METHOD_NOT_ALLOWED => ErrorCodes::Unimplemented,
            http::StatusCode::CONFLICT => ErrorCodes::AlreadyExists,
            http::StatusCode::PRECONDITION_FAILED => ErrorCodes::FailedPrecondition,
            http::StatusCode::INTERNAL_SERVER_ERROR => ErrorCodes::Internal,
            http::StatusCode::NOT_IMPLEMENTED => ErrorCodes::Unimplemented,
            http::StatusCode::SERVICE_UNAVAILABLE => ErrorCodes::Unavailable,
            http::StatusCode::GATEWAY_TIMEOUT => ErrorCodes::DeadlineExceeded,
            _ => ErrorCodes::Unknown,
        }
    }
}

pub trait ArangoError: Error + Send {
    fn code(&self) -> ErrorCodes;
    fn boxed(self) -> Box<dyn ArangoError>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl Error for Box<dyn ArangoError> {}

impl ArangoError for Box<dyn ArangoError> {
    fn code(&self) -> ErrorCodes {
        self.as_ref().code()
    }
}

impl ArangoError for std::io::Error {
    fn code(&self) -> ErrorCodes {
        match self.kind() {
            std::io::ErrorKind::NotFound => ErrorCodes::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCodes::PermissionDenied,
            _ => ErrorCodes::Unknown,
        }
    }
}
