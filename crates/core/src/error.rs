//! Authentication error taxonomy

use crate::session::SessionError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for auth service operations
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Failures surfaced by the auth service client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum AuthError {
    /// No live session. Expected while browsing anonymously.
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The auth service sent a role outside the closed set
    #[error("Auth service returned unknown role '{0}'")]
    InvalidRole(String),

    /// Registration details failed local validation
    #[error("Invalid registration details: {0}")]
    InvalidProfile(String),

    /// The auth service refused the request (duplicate account, bad input)
    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Network unavailable: {0}")]
    NetworkUnavailable(String),

    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// A logout happened while this request was in flight
    #[error("Superseded by a later sign-out")]
    Superseded,
}

impl AuthError {
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
        }
    }

    /// Transient failures the user may retry
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::NetworkUnavailable(_) | Self::ServerError { .. })
    }

    /// Text suitable for an inline error message or toast
    pub fn user_message(&self) -> String {
        match self {
            Self::NotAuthenticated => "Please sign in to continue.".to_string(),
            Self::InvalidCredentials => {
                "Invalid email or password. Please check your details and try again.".to_string()
            }
            Self::InvalidRole(_) => {
                "Something went wrong while signing you in. Please contact support.".to_string()
            }
            Self::InvalidProfile(reason) | Self::Rejected(reason) => reason.clone(),
            Self::NetworkUnavailable(_) => {
                "Unable to reach the server. Check your connection and try again.".to_string()
            }
            Self::ServerError { .. } => {
                "The server had a problem handling your request. Please try again shortly."
                    .to_string()
            }
            Self::Superseded => "You were signed out before sign-in completed.".to_string(),
        }
    }
}

impl From<SessionError> for AuthError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidRole(role) => Self::InvalidRole(role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_errors_suggest_retry() {
        for err in [
            AuthError::NetworkUnavailable("connection refused".into()),
            AuthError::server(503, "unavailable"),
        ] {
            assert!(err.is_transient());
            assert!(err.user_message().contains("try again"));
        }
        assert!(!AuthError::InvalidCredentials.is_transient());
    }

    #[test]
    fn invalid_role_message_is_generic() {
        let message = AuthError::InvalidRole("root".into()).user_message();
        assert!(!message.contains("root"));
    }

    #[test]
    fn rejection_reason_is_shown_verbatim() {
        let err = AuthError::Rejected("Email already registered".into());
        assert_eq!(err.user_message(), "Email already registered");
    }

    #[test]
    fn session_error_converts() {
        let err: AuthError = SessionError::InvalidRole("x".into()).into();
        assert_eq!(err, AuthError::InvalidRole("x".into()));
    }
}
