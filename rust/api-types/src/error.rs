use serde::{Deserialize, Serialize};

/// Body the server sends alongside a failing status code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub code: u16,
    #[serde(rename = "errorNum", default)]
    pub error_num: i64,
    #[serde(rename = "errorMessage", default)]
    pub error_message: String,
}
