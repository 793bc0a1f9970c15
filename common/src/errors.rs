//! Error types shared by all crates in the workspace.
//!
//! Resolving a connection string never fails; these errors cover the
//! surrounding concerns (`.env` loading, handing the URI to the driver).

use thiserror::Error;

/// Application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration source could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The database driver rejected the connection URI.
    #[error("Driver rejected connection options: {0}")]
    DriverOptions(String),

    /// File system error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for log fields.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::DriverOptions(_) => "DRIVER_OPTIONS_ERROR",
            AppError::Io(_) => "IO_ERROR",
        }
    }
}

impl From<dotenvy::Error> for AppError {
    fn from(e: dotenvy::Error) -> Self {
        match e {
            dotenvy::Error::Io(io) => AppError::Io(io),
            other => AppError::Config(other.to_string()),
        }
    }
}

/// Result alias using [`AppError`].
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::Config("x".into()).code(), "CONFIG_ERROR");
        assert_eq!(
            AppError::DriverOptions("x".into()).code(),
            "DRIVER_OPTIONS_ERROR"
        );
    }

    #[test]
    fn test_dotenv_io_error_maps_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AppError = dotenvy::Error::Io(io).into();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_dotenv_parse_error_maps_to_config() {
        let err: AppError = dotenvy::Error::LineParse("BAD LINE".into(), 3).into();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
