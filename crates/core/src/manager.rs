//! Auth service client: turns remote results into session transitions

use crate::api::AuthApi;
use crate::error::{AuthError, AuthResult};
use crate::profile::{Credentials, RegistrationProfile};
use crate::session::{SessionStatus, SessionStore};
use crate::user::User;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use tracing::{debug, error, info, warn};

/// Drives login, registration, logout and session probing against an
/// [`AuthApi`], applying the outcome to a [`SessionStore`].
///
/// Every sign-out bumps a generation counter. A login response is applied
/// only if no sign-out happened while it was in flight.
#[derive(Clone)]
pub struct SessionManager {
    store: SessionStore,
    api: Rc<dyn AuthApi>,
    generation: Rc<Cell<u64>>,
}

impl SessionManager {
    pub fn new(store: SessionStore, api: Rc<dyn AuthApi>) -> Self {
        Self {
            store,
            api,
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Number of sign-outs seen so far
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Sign in. On failure the session is left as it was.
    pub async fn login(&self, credentials: &Credentials) -> AuthResult<User> {
        let issued = self.generation.get();
        debug!(email = %credentials.email, generation = issued, "Login requested");

        let remote = self.api.login(credentials).await?;

        if self.generation.get() != issued {
            debug!(
                issued,
                current = self.generation.get(),
                "Discarding login response issued before sign-out"
            );
            return Err(AuthError::Superseded);
        }

        let user = self.store.set_authenticated(remote)?;
        info!(user_id = %user.id(), role = %user.role(), "Signed in");
        Ok(user)
    }

    /// Create an account. Does not sign in.
    pub async fn register(&self, profile: &RegistrationProfile) -> AuthResult<()> {
        profile.validate()?;
        self.api.register(profile).await?;
        info!(role = %profile.role, "Registration accepted");
        Ok(())
    }

    /// Sign out locally, then tell the auth service. The local session is
    /// anonymous afterwards whatever the remote outcome.
    pub async fn logout(&self) -> AuthResult<()> {
        self.sign_out_locally();

        if let Err(err) = self.api.logout().await {
            warn!(error = %err, "Remote logout failed");
            return Err(err);
        }
        info!("Signed out");
        Ok(())
    }

    /// Ask the auth service for the current user without touching the store
    pub async fn probe_session(&self) -> AuthResult<User> {
        let remote = self.api.probe_session().await?;
        User::try_from(remote).map_err(|err| {
            error!(role = %err.0, "Session probe returned unknown role");
            AuthError::InvalidRole(err.0)
        })
    }

    /// Run an authenticated request. If the service says the session is gone,
    /// the local session is reset to anonymous before the error propagates.
    pub async fn authorized<T, F>(&self, request: F) -> AuthResult<T>
    where
        F: Future<Output = AuthResult<T>>,
    {
        let issued = self.generation.get();
        let result = request.await;

        if matches!(result, Err(AuthError::NotAuthenticated))
            && self.generation.get() == issued
            && self.store.status() == SessionStatus::Authenticated
        {
            warn!("Authorization failure, clearing session");
            self.sign_out_locally();
        }
        result
    }

    fn sign_out_locally(&self) {
        self.generation.set(self.generation.get() + 1);
        self.store.set_anonymous();
    }
}

/// Two managers are equal when they share a store and a generation counter
impl PartialEq for SessionManager {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store && Rc::ptr_eq(&self.generation, &other.generation)
    }
}
