use arango_api_types::JsonObject;
use bon::Builder;
use serde::Serialize;
use serde_json::Value;

/// An additional user to create together with a new database.
#[derive(Serialize, Debug, Clone, PartialEq, Builder)]
pub struct UserSpec {
    #[builder(into)]
    pub username: String,
    #[builder(into)]
    #[serde(rename = "passwd")]
    pub password: String,
    #[builder(default = true)]
    pub active: bool,
    /// Stored with the user but not interpreted by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

/// Optional settings for a new database. Unset fields are left out of the payload.
///
/// `additional` is merged into the payload verbatim, so keys this type does not know about still
/// reach the server. On a clash with a named field the `additional` entry is sent.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Builder)]
pub struct CreateDatabaseOptions {
    /// Owner of the new database.
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passwd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<UserSpec>,
    #[builder(default)]
    #[serde(flatten)]
    pub additional: JsonObject,
}

/// Everything sent to create one database.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseDescriptor {
    pub name: String,
    pub options: CreateDatabaseOptions,
}

impl DatabaseDescriptor {
    pub fn new(name: impl Into<String>, options: CreateDatabaseOptions) -> Self {
        DatabaseDescriptor {
            name: name.into(),
            options,
        }
    }

    /// The creation body: the options with `name` set last, so the descriptor's name always wins.
    pub fn payload(&self) -> Result<Value, serde_json::Error> {
        let mut payload = match serde_json::to_value(&self.options)? {
            Value::Object(map) => map,
            _ => JsonObject::new(),
        };
        payload.insert("name".to_string(), Value::String(self.name.clone()));
        Ok(Value::Object(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_without_options_is_just_the_name() {
        let descriptor = DatabaseDescriptor::new("mydb", CreateDatabaseOptions::default());
        assert_eq!(descriptor.payload().unwrap(), json!({"name": "mydb"}));
    }

    #[test]
    fn test_payload_carries_owner_and_users() {
        let options = CreateDatabaseOptions::builder()
            .username("admin")
            .passwd("hunter2")
            .active(false)
            .extra(json!({"team": "billing"}))
            .users(vec![
                UserSpec::builder().username("reader").password("r").build(),
                UserSpec::builder()
                    .username("writer")
                    .password("w")
                    .active(false)
                    .build(),
            ])
            .build();

        let payload = DatabaseDescriptor::new("billing", options).payload().unwrap();

        assert_eq!(
            payload,
            json!({
                "name": "billing",
                "username": "admin",
                "passwd": "hunter2",
                "active": false,
                "extra": {"team": "billing"},
                "users": [
                    {"username": "reader", "passwd": "r", "active": true},
                    {"username": "writer", "passwd": "w", "active": false}
                ]
            })
        );
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let mut additional = JsonObject::new();
        additional.insert("replicationFactor".to_string(), json!(3));
        additional.insert("sharding".to_string(), json!("single"));
        let options = CreateDatabaseOptions::builder()
            .additional(additional)
            .build();

        let payload = DatabaseDescriptor::new("sharded", options).payload().unwrap();

        assert_eq!(
            payload,
            json!({"name": "sharded", "replicationFactor": 3, "sharding": "single"})
        );
    }

    #[test]
    fn test_name_argument_wins_over_additional_name() {
        let mut additional = JsonObject::new();
        additional.insert("name".to_string(), json!("other"));
        let options = CreateDatabaseOptions::builder()
            .additional(additional)
            .build();

        let payload = DatabaseDescriptor::new("mine", options).payload().unwrap();

        assert_eq!(payload, json!({"name": "mine"}));
    }
}
