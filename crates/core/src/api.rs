//! Seam to the external auth service
//!
//! Implementations speak to the remote API and report raw results. They never
//! touch the session store; [`SessionManager`](crate::SessionManager) decides
//! what each result means for the session.

use crate::error::AuthResult;
use crate::profile::{Credentials, RegistrationProfile};
use crate::user::RemoteUser;
use async_trait::async_trait;

/// Remote authentication operations. Futures are not `Send`; everything runs
/// on the UI thread.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, credentials: &Credentials) -> AuthResult<RemoteUser>;

    async fn register(&self, profile: &RegistrationProfile) -> AuthResult<()>;

    async fn logout(&self) -> AuthResult<()>;

    /// Ask the service who the credential store currently identifies
    async fn probe_session(&self) -> AuthResult<RemoteUser>;
}
