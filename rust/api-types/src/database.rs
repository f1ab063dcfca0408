use serde::{Deserialize, Serialize};

use crate::JsonObject;

/// Properties of the database a connection is currently bound to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DatabaseInfo {
    pub name: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "isSystem", default)]
    pub is_system: bool,
    #[serde(flatten)]
    pub extra: JsonObject,
}
