use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    Config(String),
    Io(#[from] std::io::Error),
    Serialization(String),
    Validation(String),
    Internal(String),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CoreError::Config(s) => write!(f, "Configuration error: {}", s),
            CoreError::Io(e) => write!(f, "I/O error: {}", e),
            CoreError::Serialization(s) => write!(f, "Serialization error: {}", s),
            CoreError::Validation(s) => write!(f, "Validation error: {}", s),
            CoreError::Internal(s) => write!(f, "Internal error: {}", s),
        }
    }
}

impl From<serde_yaml_ng::Error> for CoreError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        CoreError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
