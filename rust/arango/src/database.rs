//! Database lifecycle: create, delete, list, and inspect the current database.
//!
//! Every function takes the [`Connection`] to use as its first argument and keeps no state of its
//! own. Each call issues exactly one request; nothing is cached or retried.
//!
//! # Examples
//!
//! ```no_run
//! use arango::client::ArangoHttpConnection;
//! use arango::database;
//! use arango::types::CreateDatabaseOptions;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let connection = ArangoHttpConnection::from_env()?;
//!
//! let options = CreateDatabaseOptions::builder().username("root").passwd("secret").build();
//! database::create(&connection, "analytics", options).await?;
//!
//! for name in database::list_databases(&connection).await?.result {
//!     println!("Database: {}", name);
//! }
//!
//! database::delete(&connection, "analytics").await?;
//! # Ok(())
//! # }
//! ```

use crate::client::{ArangoHttpClientError, Connection, RequestBody};
use crate::types::{CreateDatabaseOptions, DatabaseDescriptor, DatabaseInfo, ServerResponse};
use crate::urls::{build_url, URL_DATABASE};

/// Creates a database named `name`.
///
/// The payload is `options` with `name` added; see [`DatabaseDescriptor::payload`]. The name is
/// not validated locally, an illegal one comes back as an [`ArangoHttpClientError::ApiError`].
///
/// # Errors
///
/// Returns an error if:
/// - A database with the same name already exists (status 409)
/// - The connection is not bound to the `_system` database (status 403)
/// - Network communication fails
pub async fn create<C>(
    connection: &C,
    name: &str,
    options: CreateDatabaseOptions,
) -> Result<ServerResponse<bool>, ArangoHttpClientError>
where
    C: Connection + ?Sized,
{
    let payload = DatabaseDescriptor::new(name, options).payload()?;

    connection
        .post(URL_DATABASE, RequestBody::Json(payload))
        .await?
        .into_result()
}

/// Drops the database named `name`.
///
/// `.` and `..` fail locally with [`ArangoHttpClientError::InvalidUrl`]; no request is sent.
pub async fn delete<C>(
    connection: &C,
    name: &str,
) -> Result<ServerResponse<bool>, ArangoHttpClientError>
where
    C: Connection + ?Sized,
{
    connection
        .delete(&build_url(URL_DATABASE, [name])?)
        .await?
        .into_result()
}

/// Lists every database on the server. Only allowed from `_system`.
pub async fn list_databases<C>(
    connection: &C,
) -> Result<ServerResponse<Vec<String>>, ArangoHttpClientError>
where
    C: Connection + ?Sized,
{
    connection.get(URL_DATABASE).await?.into_result()
}

/// Lists the databases the authenticated user can access.
pub async fn list_user_databases<C>(
    connection: &C,
) -> Result<ServerResponse<Vec<String>>, ArangoHttpClientError>
where
    C: Connection + ?Sized,
{
    connection
        .get(&build_url(URL_DATABASE, ["user"])?)
        .await?
        .into_result()
}

/// Describes the database the connection is bound to.
pub async fn get_info<C>(
    connection: &C,
) -> Result<ServerResponse<DatabaseInfo>, ArangoHttpClientError>
where
    C: Connection + ?Sized,
{
    connection
        .get(&build_url(URL_DATABASE, ["current"])?)
        .await?
        .into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{ok, RecordingConnection};
    use crate::types::JsonObject;
    use arango_error::{ArangoError, ErrorCodes};
    use reqwest::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    #[test_log::test]
    async fn test_create_sends_name_merged_with_options() {
        let connection = RecordingConnection::new();
        connection.respond(StatusCode::CREATED, json!({"error": false, "code": 201, "result": true}));

        let mut additional = JsonObject::new();
        additional.insert("username".to_string(), json!("root"));
        additional.insert("passwd".to_string(), json!("secret"));
        let options = CreateDatabaseOptions::builder()
            .additional(additional)
            .build();

        let response = create(&connection, "mydb", options).await.unwrap();

        assert!(response.result);
        let requests = connection.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].path, "/_api/database");
        assert_eq!(
            requests[0].body,
            RequestBody::Json(json!({"name": "mydb", "username": "root", "passwd": "secret"}))
        );
    }

    #[tokio::test]
    #[test_log::test]
    async fn test_create_surfaces_duplicate_name() {
        let connection = RecordingConnection::new();
        connection.respond(
            StatusCode::CONFLICT,
            json!({"error": true, "code": 409, "errorNum": 1207, "errorMessage": "duplicate name"}),
        );

        let err = create(&connection, "mydb", CreateDatabaseOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCodes::AlreadyExists);
        match err {
            ArangoHttpClientError::ApiError { status, body, .. } => {
                assert_eq!(status, StatusCode::CONFLICT);
                assert_eq!(body.unwrap()["errorNum"], 1207);
            }
            _ => panic!("Expected ApiError"),
        }
    }

    #[tokio::test]
    #[test_log::test]
    async fn test_delete_targets_escaped_name() {
        let connection = RecordingConnection::new();
        connection.respond(StatusCode::OK, json!({"error": false, "code": 200, "result": true}));
        connection.respond(StatusCode::OK, json!({"error": false, "code": 200, "result": true}));

        delete(&connection, "plain").await.unwrap();
        delete(&connection, "odd name/with?chars").await.unwrap();

        let requests = connection.requests();
        assert_eq!(requests[0].method, Method::DELETE);
        assert_eq!(requests[0].path, "/_api/database/plain");
        assert_eq!(requests[0].body, RequestBody::Empty);
        assert_eq!(requests[1].path, "/_api/database/odd%20name%2Fwith%3Fchars");
    }

    #[tokio::test]
    #[test_log::test]
    async fn test_delete_refuses_dot_names_without_a_request() {
        let connection = RecordingConnection::new();

        for name in [".", ".."] {
            let err = delete(&connection, name).await.unwrap_err();
            assert!(matches!(err, ArangoHttpClientError::InvalidUrl(_)));
            assert_eq!(err.code(), ErrorCodes::InvalidArgument);
        }
        assert!(connection.requests().is_empty());
    }

    #[tokio::test]
    #[test_log::test]
    async fn test_list_and_list_user_hit_distinct_urls_every_time() {
        let connection = RecordingConnection::new();
        for _ in 0..4 {
            connection.respond(
                StatusCode::OK,
                json!({"error": false, "code": 200, "result": ["_system", "mydb"]}),
            );
        }

        let all = list_databases(&connection).await.unwrap();
        let again = list_databases(&connection).await.unwrap();
        let user = list_user_databases(&connection).await.unwrap();
        list_user_databases(&connection).await.unwrap();

        assert_eq!(all.result, vec!["_system".to_string(), "mydb".to_string()]);
        assert_eq!(all, again);
        assert_eq!(user.result.len(), 2);

        let paths: Vec<_> = connection
            .requests()
            .into_iter()
            .map(|request| (request.method, request.path))
            .collect();
        assert_eq!(
            paths,
            vec![
                (Method::GET, "/_api/database".to_string()),
                (Method::GET, "/_api/database".to_string()),
                (Method::GET, "/_api/database/user".to_string()),
                (Method::GET, "/_api/database/user".to_string()),
            ]
        );
    }

    #[tokio::test]
    #[test_log::test]
    async fn test_get_info_decodes_current_database() {
        let connection = RecordingConnection::new();
        connection.respond(
            StatusCode::OK,
            json!({
                "error": false,
                "code": 200,
                "result": {"name": "mydb", "id": "8131", "path": "/tmp/db", "isSystem": false}
            }),
        );

        let info = get_info(&connection).await.unwrap();

        assert_eq!(connection.requests()[0].path, "/_api/database/current");
        assert_eq!(info.result.name, "mydb");
        assert_eq!(info.result.id, "8131");
        assert!(!info.result.is_system);
    }

    #[tokio::test]
    #[test_log::test]
    async fn test_unexpected_body_is_malformed_response() {
        let connection = RecordingConnection::new();
        connection.respond_raw(StatusCode::OK, "not json");
        connection.respond(StatusCode::OK, json!({"error": false, "code": 200, "result": "yes"}));

        let not_json = list_databases(&connection).await.unwrap_err();
        let wrong_shape = create(&connection, "mydb", CreateDatabaseOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(not_json, ArangoHttpClientError::SerdeError(_)));
        assert!(matches!(wrong_shape, ArangoHttpClientError::SerdeError(_)));
    }

    #[tokio::test]
    #[test_log::test]
    async fn test_transport_errors_propagate_and_connection_stays_usable() {
        let connection = RecordingConnection::new();
        connection.fail("connection refused");
        connection.push(ok(json!({"error": false, "code": 200, "result": []})));

        let err = list_user_databases(&connection).await.unwrap_err();
        assert!(matches!(err, ArangoHttpClientError::Transport(_)));

        let response = list_user_databases(&connection).await.unwrap();
        assert!(response.result.is_empty());
        assert_eq!(connection.requests().len(), 2);
    }
}
