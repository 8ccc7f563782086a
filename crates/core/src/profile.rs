//! Login credentials and sign-up details

use crate::error::AuthError;
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Email and password pair for `login`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Everything the sign-up form collects
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationProfile {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub business_name: Option<String>,
    pub phone_number: Option<String>,
}

impl fmt::Debug for RegistrationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationProfile")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("business_name", &self.business_name)
            .field("phone_number", &self.phone_number)
            .finish_non_exhaustive()
    }
}

impl RegistrationProfile {
    /// Check the form locally before anything is sent
    pub fn validate(&self) -> Result<(), AuthError> {
        let invalid = |reason: &str| Err(AuthError::InvalidProfile(reason.to_string()));

        if self.username.trim().is_empty() {
            return invalid("Name is required");
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return invalid("A valid email address is required");
        }
        if let Some(phone) = &self.phone_number
            && phone.trim().is_empty()
        {
            return invalid("Phone number cannot be blank");
        }
        if self.password.is_empty() {
            return invalid("Password is required");
        }
        if self.password != self.confirm_password {
            return invalid("Passwords don't match");
        }
        if !self.role.is_self_registrable() {
            return invalid("This role cannot be chosen at sign-up");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> RegistrationProfile {
        RegistrationProfile {
            username: "Sunshine Farms".to_string(),
            email: "hello@sunshine.example".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            role: Role::Producer,
            business_name: Some("Sunshine Farms Co-op".to_string()),
            phone_number: Some("+1 555 123 4567".to_string()),
        }
    }

    fn reason(profile: &RegistrationProfile) -> String {
        match profile.validate() {
            Err(AuthError::InvalidProfile(reason)) => reason,
            other => panic!("expected InvalidProfile, got {other:?}"),
        }
    }

    #[test]
    fn accepts_complete_profile() {
        assert!(profile().validate().is_ok());
        let minimal = RegistrationProfile {
            business_name: None,
            phone_number: None,
            ..profile()
        };
        assert!(minimal.validate().is_ok());
    }

    #[test]
    fn password_mismatch() {
        let mut p = profile();
        p.confirm_password = "hunter23".to_string();
        assert_eq!(reason(&p), "Passwords don't match");
    }

    #[test]
    fn missing_fields() {
        let mut p = profile();
        p.username = "  ".to_string();
        assert_eq!(reason(&p), "Name is required");

        let mut p = profile();
        p.email = "not-an-email".to_string();
        assert!(reason(&p).contains("email"));

        let mut p = profile();
        p.phone_number = Some(String::new());
        assert!(reason(&p).contains("Phone"));
    }

    #[test]
    fn administrator_cannot_self_register() {
        let mut p = profile();
        p.role = Role::Administrator;
        assert!(p.validate().is_err());
    }

    #[test]
    fn debug_output_hides_passwords() {
        let rendered = format!("{:?} {:?}", profile(), Credentials::new("a@b.com", "x-secret"));
        assert!(!rendered.contains("hunter22"));
        assert!(!rendered.contains("x-secret"));
    }
}
