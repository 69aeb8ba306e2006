//! API Errors
//!
//! Failures of a single request, carrying the message shown to the user.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("{message}")]
    Transport { message: String, detail: String },

    /// The backend answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The body could not be decoded into the expected shape
    #[error("{message}")]
    Decode { message: String, detail: String },
}

impl ApiError {
    /// Human-readable text for notifications.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport { message, .. }
            | ApiError::Status { message, .. }
            | ApiError::Decode { message, .. } => message,
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_user_message() {
        let err = ApiError::Transport { message: "Failed to fetch portfolios".into(), detail: "dns".into() };
        assert_eq!(err.to_string(), "Failed to fetch portfolios");
        assert_eq!(err.status(), None);

        let err = ApiError::Status { status: 404, message: "Not found".into() };
        assert_eq!(err.message(), "Not found");
        assert_eq!(err.status(), Some(404));
    }
}
