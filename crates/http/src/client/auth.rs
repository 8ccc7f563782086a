//! Auth API endpoints

use super::{AuthCall, AuthClient};
use crate::types::{LoginRequest, RegisterRequest, RegisterResponse, UserResponse};
use agrichain_core::{AuthApi, AuthError, AuthResult, Credentials, RegistrationProfile, RemoteUser};
use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, warn};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const LOGOUT_PATH: &str = "/logout";
pub const SESSION_PATH: &str = "/session";

impl AuthClient {
    /// GET a JSON resource on behalf of the signed-in user
    pub async fn get_authorized<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> AuthResult<T> {
        let request = self.request(Method::GET, path);
        self.execute(request)
            .await
            .map_err(|err| err.into_auth_error(AuthCall::Authorized))
    }
}

#[async_trait(?Send)]
impl AuthApi for AuthClient {
    async fn login(&self, credentials: &Credentials) -> AuthResult<RemoteUser> {
        let request = self
            .request(Method::POST, LOGIN_PATH)
            .json(&LoginRequest::from(credentials));
        let response: UserResponse = self
            .execute(request)
            .await
            .map_err(|err| err.into_auth_error(AuthCall::Login))?;
        Ok(response.user)
    }

    async fn register(&self, profile: &RegistrationProfile) -> AuthResult<()> {
        let request = self
            .request(Method::POST, REGISTER_PATH)
            .json(&RegisterRequest::from(profile));
        let response: RegisterResponse = self
            .execute(request)
            .await
            .map_err(|err| err.into_auth_error(AuthCall::Register))?;

        if response.success {
            debug!(message = %response.message, "Registration succeeded");
            Ok(())
        } else {
            warn!(message = %response.message, "Registration refused");
            let message = if response.message.is_empty() {
                "Registration was not accepted".to_string()
            } else {
                response.message
            };
            Err(AuthError::Rejected(message))
        }
    }

    async fn logout(&self) -> AuthResult<()> {
        let request = self.request(Method::POST, LOGOUT_PATH);
        self.execute_unit(request)
            .await
            .map_err(|err| err.into_auth_error(AuthCall::Logout))
    }

    async fn probe_session(&self) -> AuthResult<RemoteUser> {
        let request = self.request(Method::GET, SESSION_PATH);
        let response: UserResponse = self
            .execute(request)
            .await
            .map_err(|err| err.into_auth_error(AuthCall::Probe))?;
        Ok(response.user)
    }
}
