//! Administration client for [ArangoDB](https://arangodb.com).
//!
//! This crate covers the administrative side of the server's HTTP API: the database lifecycle
//! and deployment of Foxx applications. It does not run queries.
//!
//! # Core Types
//!
//! - [`client::Connection`] - The request capability all operations are written against
//! - [`ArangoHttpConnection`] - reqwest-backed connection bound to one database
//! - [`database`] - Create, delete, list and inspect databases
//! - [`FoxxHandler`] - Upload and install a zipped Foxx app
//!
//! # Quick Start
//!
//! ```no_run
//! use arango::{database, ArangoHttpConnection, ArangoHttpConnectionOptions};
//! use arango::client::ArangoAuthMethod;
//! use arango::types::CreateDatabaseOptions;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let connection = ArangoHttpConnection::new(ArangoHttpConnectionOptions {
//!     endpoint: "http://localhost:8529".parse()?,
//!     auth_method: ArangoAuthMethod::basic("root", ""),
//!     ..Default::default()
//! });
//!
//! database::create(&connection, "inventory", CreateDatabaseOptions::default()).await?;
//! let current = database::get_info(&connection).await?;
//! println!("Connected to {}", current.result.name);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Database operations return [`ArangoHttpClientError`](client::ArangoHttpClientError): transport
//! failures, `ApiError` for any status of 400 or above, and `SerdeError` for bodies that do not
//! decode. Foxx installation returns [`InstallError`](foxx::InstallError), which additionally
//! distinguishes local precondition failures from a rejected upload and a rejected install.
//! Both implement [`arango_error::ArangoError`] for coarse classification.
//!
//! ```no_run
//! # use arango::{database, ArangoHttpConnection};
//! # use arango::client::ArangoHttpClientError;
//! # async fn example(connection: ArangoHttpConnection) {
//! match database::delete(&connection, "inventory").await {
//!     Ok(_) => println!("Dropped"),
//!     Err(ArangoHttpClientError::ApiError { status, message, .. }) => {
//!         eprintln!("Server refused ({}): {}", status, message)
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - `default` - Enables `rustls`
//! - `rustls` - Use pure-Rust TLS implementation
//! - `native-tls` - Use native system TLS (OpenSSL on Linux, Secure Transport on macOS)

pub mod client;
pub mod database;
pub mod foxx;
pub mod types;
pub mod urls;

pub use client::ArangoHttpConnection;
pub use client::ArangoHttpConnectionOptions;
pub use foxx::FoxxHandler;
