use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Duplicate navigation link: {0}")]
    DuplicateLink(String),

    #[error("Navigation link must be absolute: {0}")]
    RelativeLink(String),

    #[error("Navigation group has no children: {0}")]
    EmptyGroup(String),

    #[error("Invalid UI configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
