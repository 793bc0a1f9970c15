//! Connection configuration models.
//!
//! Contains the resolved MongoDB connection settings.

use std::fmt;

use serde::Serialize;

use crate::config::mongo::AUTH_SOURCE;

/// Characters that change the meaning of a URI when left unescaped in userinfo.
const RESERVED_CREDENTIAL_CHARS: [char; 8] = [':', '/', '?', '#', '[', ']', '@', '%'];

/// Placeholder written in place of the password in logs.
pub const REDACTED: &str = "***";

/// Resolved MongoDB connection settings.
///
/// Every field is non-empty once resolved. `port` is kept as text exactly as
/// it was read.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionConfig {
    /// Database username.
    pub username: String,
    /// Database password (not serialized).
    #[serde(skip_serializing)]
    pub password: String,
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: String,
    /// Target database name.
    pub database: String,
}

impl ConnectionConfig {
    /// Renders the connection URI.
    ///
    /// Credentials are inserted verbatim; see
    /// [`has_reserved_credential_chars`](Self::has_reserved_credential_chars).
    pub fn to_uri(&self) -> String {
        self.format_uri(&self.password)
    }

    /// Renders the connection URI with the password replaced by `***`.
    pub fn redacted_uri(&self) -> String {
        self.format_uri(REDACTED)
    }

    /// Whether the username or password contains characters that would need
    /// percent-encoding to form an unambiguous URI.
    pub fn has_reserved_credential_chars(&self) -> bool {
        [&self.username, &self.password]
            .iter()
            .any(|s| s.contains(RESERVED_CREDENTIAL_CHARS))
    }

    fn format_uri(&self, password: &str) -> String {
        format!(
            "mongodb://{}:{}@{}:{}/{}?authSource={}",
            self.username, password, self.host, self.port, self.database, AUTH_SOURCE
        )
    }
}

impl fmt::Display for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("username", &self.username)
            .field("password", &REDACTED)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}
