//! Custom error types for show-browser.
//!
//! Fetch failures are split into the request not completing at all
//! ([`AppError::Network`]) and the server answering with a non-success
//! status ([`AppError::Http`]).

use std::error::Error;
use std::fmt;
use std::io;

/// Application error types.
#[derive(Debug)]
pub enum AppError {
    /// The request did not complete (DNS, connect, reset, timeout)
    Network(String),
    /// The server answered with a non-success status code
    Http(u16),
    /// API response parsing errors
    Parse(String),
    /// Configuration errors
    Config(String),
    /// File I/O errors
    Io(io::Error),
    /// A selection did not resolve in the current collection
    NotFound(String),
}

impl AppError {
    /// Whether an automatic retry may succeed (network trouble or a 5xx).
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::Network(_) => true,
            AppError::Http(status) => *status >= 500,
            _ => false,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Http(status) => write!(f, "HTTP error! status: {}", status),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::Io(err) => write!(f, "I/O error: {}", err),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            AppError::Http(status.as_u16())
        } else if err.is_decode() {
            AppError::Parse(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_http_error_display() {
        assert_eq!(AppError::Http(500).to_string(), "HTTP error! status: 500");
        assert_eq!(AppError::Http(404).to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.source().is_some());
    }

    #[test]
    fn test_error_from_json() {
        let err = serde_json::from_str::<Vec<u64>>("{").unwrap_err();
        let app_err: AppError = err.into();
        assert!(matches!(app_err, AppError::Parse(_)));
    }

    #[test]
    fn test_transient_errors() {
        assert!(AppError::Network("reset".to_string()).is_transient());
        assert!(AppError::Http(503).is_transient());
        assert!(!AppError::Http(404).is_transient());
        assert!(!AppError::Parse("bad".to_string()).is_transient());
        assert!(!AppError::NotFound("ep".to_string()).is_transient());
    }
}
