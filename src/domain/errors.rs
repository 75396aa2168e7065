//! Domain errors for the analysis client.

use thiserror::Error;

/// Message shown when the service gives no usable explanation.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";

/// Message shown when a success response is not a valid analysis result.
pub const INVALID_RESPONSE_MESSAGE: &str = "Failed to parse analysis response";

/// Errors from one round trip to the analysis service.
///
/// Every variant collapses into a single user-facing string via
/// [`AnalysisError::user_message`]; none of them end the session.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The request never got a response.
    #[error("Request to analysis service failed: {0}")]
    Transport(String),

    /// Non-success status; `message` is already the user-facing text.
    #[error("Analysis service returned {status}: {message}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Extracted or fallback message.
        message: String,
    },

    /// Success status but the body is not an analysis result.
    #[error("Failed to parse analysis response: {0}")]
    InvalidResponse(String),

    /// A document could not be attached to the request.
    #[error("Invalid document '{name}': {reason}")]
    InvalidDocument {
        /// File name of the document.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl AnalysisError {
    /// The one message surfaced to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => DEFAULT_FAILURE_MESSAGE.to_string(),
            Self::Service { message, .. } => message.clone(),
            Self::InvalidResponse(_) => INVALID_RESPONSE_MESSAGE.to_string(),
            Self::InvalidDocument { .. } => self.to_string(),
        }
    }

    /// HTTP status, when the service answered at all.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result alias for analysis service calls.
pub type ServiceResult<T> = Result<T, AnalysisError>;

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        AnalysisError::Transport(err.to_string())
    }
}
