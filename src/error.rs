//! Error types for the catalog

use thiserror::Error;

/// Stable error codes an interaction layer can map to user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    Duplicate = 8,
    BadValue = 18,
    StorageFailure = 22,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NoSuchItem,
            AppError::Duplicate(_) => ErrorCode::Duplicate,
            AppError::InvalidArgument(_) => ErrorCode::BadValue,
            AppError::BusinessRule(_) => ErrorCode::ItemNotAvailable,
            AppError::Io(_) | AppError::Serialization(_) => ErrorCode::StorageFailure,
            AppError::Config(_) => ErrorCode::Failure,
        }
    }

    /// True for failures of the backing store rather than of the request
    pub fn is_storage(&self) -> bool {
        self.code() == ErrorCode::StorageFailure
    }
}

/// Result type alias for catalog operations
pub type AppResult<T> = Result<T, AppError>;
