//! MongoDB connection string resolution.
//!
//! Each of the five connection fields is read from its own environment
//! variable and falls back to a fixed default when the variable is absent
//! or empty. Resolution never fails.

use std::fmt;

use crate::config::env::{EnvSource, ProcessEnv};
use crate::models::ConnectionConfig;

pub const MONGO_USERNAME: &str = "MONGO_USERNAME";
pub const MONGO_PASSWORD: &str = "MONGO_PASSWORD";
pub const MONGO_HOST: &str = "MONGO_HOST";
pub const MONGO_PORT: &str = "MONGO_PORT";
pub const MONGO_DATABASE: &str = "MONGO_DATABASE";

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "password";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: &str = "27017";
pub const DEFAULT_DATABASE: &str = "dd_db";

/// Database holding the credentials, appended to every URI.
pub const AUTH_SOURCE: &str = "admin";

/// One of the five resolvable connection fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionField {
    Username,
    Password,
    Host,
    Port,
    Database,
}

impl ConnectionField {
    /// All fields, in URI order.
    pub const ALL: [ConnectionField; 5] = [
        ConnectionField::Username,
        ConnectionField::Password,
        ConnectionField::Host,
        ConnectionField::Port,
        ConnectionField::Database,
    ];

    /// Environment variable the field is read from.
    pub fn env_var(&self) -> &'static str {
        match self {
            ConnectionField::Username => MONGO_USERNAME,
            ConnectionField::Password => MONGO_PASSWORD,
            ConnectionField::Host => MONGO_HOST,
            ConnectionField::Port => MONGO_PORT,
            ConnectionField::Database => MONGO_DATABASE,
        }
    }

    /// Value used when the variable is absent or empty.
    pub fn default_value(&self) -> &'static str {
        match self {
            ConnectionField::Username => DEFAULT_USERNAME,
            ConnectionField::Password => DEFAULT_PASSWORD,
            ConnectionField::Host => DEFAULT_HOST,
            ConnectionField::Port => DEFAULT_PORT,
            ConnectionField::Database => DEFAULT_DATABASE,
        }
    }

    /// Resolves the field against `env`.
    ///
    /// Returns the value and whether the default was used.
    pub fn resolve(&self, env: &impl EnvSource) -> (String, bool) {
        match env.get_non_empty(self.env_var()) {
            Some(value) => (value, false),
            None => (self.default_value().to_string(), true),
        }
    }
}

impl fmt::Display for ConnectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionField::Username => write!(f, "username"),
            ConnectionField::Password => write!(f, "password"),
            ConnectionField::Host => write!(f, "host"),
            ConnectionField::Port => write!(f, "port"),
            ConnectionField::Database => write!(f, "database"),
        }
    }
}

/// A resolved config together with the fields that fell back to defaults.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub config: ConnectionConfig,
    pub defaulted: Vec<ConnectionField>,
}

impl Resolution {
    /// Whether every field came from the defaults.
    pub fn all_defaults(&self) -> bool {
        self.defaulted.len() == ConnectionField::ALL.len()
    }
}

/// Builds the MongoDB connection URI from environment variables.
pub struct ConnectionStringBuilder;

impl ConnectionStringBuilder {
    /// Builds the URI from the process environment.
    ///
    /// Always returns a string of the form
    /// `mongodb://{username}:{password}@{host}:{port}/{database}?authSource=admin`.
    pub fn build() -> String {
        Self::build_from(&ProcessEnv)
    }

    /// Builds the URI from an explicit environment source.
    pub fn build_from(env: &impl EnvSource) -> String {
        Self::resolve(env).to_uri()
    }

    /// Resolves every field against `env`.
    pub fn resolve(env: &impl EnvSource) -> ConnectionConfig {
        Self::resolve_with_report(env).config
    }

    /// Resolves every field and reports which ones used their default.
    pub fn resolve_with_report(env: &impl EnvSource) -> Resolution {
        let mut defaulted = Vec::new();
        let mut field = |f: ConnectionField| {
            let (value, is_default) = f.resolve(env);
            if is_default {
                defaulted.push(f);
            }
            value
        };

        let config = ConnectionConfig {
            username: field(ConnectionField::Username),
            password: field(ConnectionField::Password),
            host: field(ConnectionField::Host),
            port: field(ConnectionField::Port),
            database: field(ConnectionField::Database),
        };

        tracing::debug!(
            host = %config.host,
            port = %config.port,
            database = %config.database,
            defaulted = defaulted.len(),
            "Resolved MongoDB connection config"
        );

        Resolution { config, defaulted }
    }
}
