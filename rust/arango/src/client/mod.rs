//! Connection abstraction and its HTTP implementation.
//!
//! This module contains:
//! - [`Connection`] - The request capability every administrative operation is written against
//! - [`ArangoHttpConnection`] - The reqwest-backed implementation
//! - [`ArangoHttpConnectionOptions`] - Endpoint, database, auth and timeout configuration
//! - [`ArangoAuthMethod`] - Authentication strategy enumeration
//! - [`ArangoHttpClientError`] - Error type for request execution and response decoding

mod arango_http_connection;
mod connection;
mod options;

pub use arango_http_connection::*;
pub use connection::*;
pub use options::*;
