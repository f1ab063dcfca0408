use serde::{Deserialize, Serialize};

use crate::JsonObject;

/// Answer to a raw upload: the server-side name the payload was stored under.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UploadResponse {
    pub filename: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}
