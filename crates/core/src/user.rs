//! Authenticated principals

use crate::role::{Role, UnknownRole};
use serde::{Deserialize, Serialize};

/// User record as returned by the auth service, before its role is checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUser {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: String,
}

/// The authenticated principal held by the session store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: String,
    username: String,
    email: Option<String>,
    role: Role,
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            email: None,
            role,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub const fn role(&self) -> Role {
        self.role
    }
}

impl TryFrom<RemoteUser> for User {
    type Error = UnknownRole;

    fn try_from(remote: RemoteUser) -> Result<Self, Self::Error> {
        let role = remote.role.parse()?;
        Ok(Self {
            id: remote.id,
            username: remote.username,
            email: remote.email,
            role,
        })
    }
}

impl From<&User> for RemoteUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
        }
    }
}
