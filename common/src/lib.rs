//! Shared building blocks for resolving the MongoDB connection.
//!
//! - [`config`]: environment sources and the connection string builder
//! - [`models`]: the resolved connection value object
//! - [`errors`]: the shared error type
//! - [`utils`]: helpers such as credential redaction

pub mod config;
pub mod errors;
pub mod models;
pub mod utils;

pub use config::mongo::ConnectionStringBuilder;
pub use errors::{AppError, AppResult};
pub use models::ConnectionConfig;
