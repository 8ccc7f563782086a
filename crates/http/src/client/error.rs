//! Client error types

use agrichain_core::AuthError;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Conflict or unprocessable input
    #[error("Rejected {status}: {message}")]
    Rejected { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Malformed response ({status}): {message}")]
    Malformed { status: u16, message: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Which auth operation produced an error; 401/403 mean different things
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthCall {
    Login,
    Register,
    Logout,
    Probe,
    /// Any request made on behalf of the signed-in user
    Authorized,
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            code @ (409 | 422) => Self::Rejected {
                status: code,
                message,
            },
            code => Self::ServerError {
                status: code,
                message,
            },
        }
    }

    /// Normalize into the auth error taxonomy
    pub fn into_auth_error(self, call: AuthCall) -> AuthError {
        match self {
            Self::Request(err) => AuthError::NetworkUnavailable(err.to_string()),
            Self::Configuration(message) => AuthError::NetworkUnavailable(message),
            Self::AuthenticationFailed(_) | Self::Forbidden(_) if call == AuthCall::Login => {
                AuthError::InvalidCredentials
            }
            Self::AuthenticationFailed(_) | Self::Forbidden(_) => AuthError::NotAuthenticated,
            Self::BadRequest(message) | Self::Rejected { message, .. } => {
                AuthError::Rejected(message)
            }
            Self::NotFound(message) => AuthError::server(404, message),
            Self::ServerError { status, message } | Self::Malformed { status, message } => {
                AuthError::server(status, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn status_mapping() {
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, String::new()),
            ClientError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::CONFLICT, "taken".into()),
            ClientError::Rejected { status: 409, .. }
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_GATEWAY, String::new()),
            ClientError::ServerError { status: 502, .. }
        ));
    }

    #[test]
    fn unauthorized_depends_on_call() {
        let err = || ClientError::AuthenticationFailed("nope".into());
        assert_eq!(
            err().into_auth_error(AuthCall::Login),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            err().into_auth_error(AuthCall::Probe),
            AuthError::NotAuthenticated
        );
        assert_eq!(
            ClientError::Forbidden(String::new()).into_auth_error(AuthCall::Authorized),
            AuthError::NotAuthenticated
        );
    }

    #[test]
    fn rejections_keep_server_message() {
        let err = ClientError::Rejected {
            status: 409,
            message: "Email already registered".into(),
        };
        assert_eq!(
            err.into_auth_error(AuthCall::Register),
            AuthError::Rejected("Email already registered".into())
        );
    }

    #[test]
    fn server_failures_are_transient() {
        let err = ClientError::ServerError {
            status: 503,
            message: "maintenance".into(),
        }
        .into_auth_error(AuthCall::Logout);
        assert!(err.is_transient());
    }
}
