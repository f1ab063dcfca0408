use serde::{Deserialize, Serialize};

/// An untyped JSON object, as returned by routes without a fixed schema.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// The `{error, code, result}` envelope most administrative routes answer with.
///
/// Fields the envelope does not name are kept in `extra` rather than dropped.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServerResponse<T> {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub code: u16,
    pub result: T,
    #[serde(flatten)]
    pub extra: JsonObject,
}
