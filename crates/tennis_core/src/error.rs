use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid parameter `{field}` = {value}: {reason}")]
    InvalidParameter { field: &'static str, value: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    pub(crate) fn invalid(
        field: &'static str,
        value: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        CoreError::InvalidParameter { field, value: value.to_string(), reason: reason.into() }
    }

    /// Name of the offending field for parameter errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CoreError::InvalidParameter { field, .. } => Some(*field),
            _ => None,
        }
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, CoreError::InvalidParameter { .. })
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
