//! Wire types of the auth API

use agrichain_core::{Credentials, RegistrationProfile, RemoteUser, Role};
use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            email: credentials.email.trim().to_string(),
            password: credentials.password.clone(),
        }
    }
}

/// Response carrying the signed-in user, used by login and the session probe
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: RemoteUser,
}

/// Registration request
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl From<&RegistrationProfile> for RegisterRequest {
    fn from(profile: &RegistrationProfile) -> Self {
        let optional = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        Self {
            username: profile.username.trim().to_string(),
            email: profile.email.trim().to_string(),
            password: profile.password.clone(),
            role: profile.role,
            business_name: optional(&profile.business_name),
            phone_number: optional(&profile.phone_number),
        }
    }
}

/// Registration response
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Error body returned by the auth API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Best human-readable message from an error body, falling back to the raw text
    pub fn message_from(body: &str) -> Option<String> {
        let parsed: Self = serde_json::from_str(body).ok()?;
        parsed.message.or(parsed.error).filter(|m| !m.is_empty())
    }
}
