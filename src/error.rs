use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HarvestError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("fixed-point encoding failed: {0}")]
    Encoding(String),
}

impl HarvestError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        HarvestError::InvalidArgument(msg.into())
    }

    pub fn encoding(msg: impl Into<String>) -> Self {
        HarvestError::Encoding(msg.into())
    }

    /// Re-label a failure as an encoding failure.
    /// Used on the commit path, where a malformed decimal means the amount
    /// cannot be put into fixed-point form.
    pub fn into_encoding(self) -> Self {
        match self {
            HarvestError::InvalidArgument(msg) => HarvestError::Encoding(msg),
            other => other,
        }
    }
}

pub type HarvestResult<T> = std::result::Result<T, HarvestError>;
