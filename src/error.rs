//! Error types for annuaire

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("user directory request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("user directory answered with status {0}")]
    UpstreamStatus(u16),

    #[error("user not found in directory")]
    UserNotFound,

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }

    /// True when the upstream directory explicitly reported a missing resource.
    ///
    /// This is checked before any generic failure handling so an upstream 404
    /// is never folded into the 500 path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::UserNotFound)
    }
}
