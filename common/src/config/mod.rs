//! Configuration sources and resolvers.

pub mod env;
pub mod mongo;

// Re-export commonly used types
pub use env::{load_dotenv, DotenvFile, EnvSource, Layered, ProcessEnv};
pub use mongo::{ConnectionField, ConnectionStringBuilder, Resolution};
