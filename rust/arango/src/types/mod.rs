//! Request payloads built by this crate and the response shapes it decodes.

mod requests;

pub use requests::*;

pub use arango_api_types::{DatabaseInfo, ErrorResponse, JsonObject, ServerResponse, UploadResponse};
