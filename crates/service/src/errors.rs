use std::{fmt::Display, path::Path};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn storage(path: &Path, cause: impl Display) -> Self {
        Self::Storage(format!("{}: {}", path.display(), cause))
    }

    /// Client-facing text, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::Conflict(m) | Self::NotFound(m) | Self::Storage(m) => m,
        }
    }
}
