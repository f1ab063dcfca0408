mod database;
mod error;
mod foxx;
mod response;

pub use database::*;
pub use error::*;
pub use foxx::*;
pub use response::*;
