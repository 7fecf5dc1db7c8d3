use std::fmt;
use std::io;

/// Errors surfaced while driving a cursor or loading scan configuration.
///
/// Range selection itself never fails; every variant here originates either in
/// the underlying store (reported through `Cursor::next`) or in the config layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DBError {
    Io(String),
    Corruption(String),
    InvalidArgument(String),
    NotFound(String),
    Config(String),
    Other(String),
}

impl fmt::Display for DBError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DBError::Io(msg) => write!(f, "io error: {msg}"),
            DBError::Corruption(msg) => write!(f, "data corrupt: {msg}"),
            DBError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            DBError::NotFound(msg) => write!(f, "not found: {msg}"),
            DBError::Config(msg) => write!(f, "config error: {msg}"),
            DBError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for DBError {}

impl From<io::Error> for DBError {
    fn from(e: io::Error) -> Self {
        DBError::Io(e.to_string())
    }
}

impl From<config::ConfigError> for DBError {
    fn from(e: config::ConfigError) -> Self {
        DBError::Config(e.to_string())
    }
}
