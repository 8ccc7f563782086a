//! Login, registration and logout wired to component state

use crate::session::use_session_manager;
use agrichain_core::{AuthError, Credentials, RegistrationProfile, SessionManager};
use yew::prelude::*;

/// Auth operation state
#[derive(Clone, Debug, PartialEq)]
pub enum ActionState {
    Idle,
    Processing,
    Error(String),
    Done(String),
}

impl ActionState {
    pub fn is_processing(&self) -> bool {
        matches!(self, Self::Processing)
    }
}

/// Auth actions hook handle
#[derive(Clone)]
pub struct UseAuthActionsHandle {
    manager: SessionManager,
    state: UseStateHandle<ActionState>,
}

impl UseAuthActionsHandle {
    /// Sign in. Route guards take over once the session flips.
    pub fn login(&self, credentials: Credentials) {
        let manager = self.manager.clone();
        let state = self.state.clone();

        wasm_bindgen_futures::spawn_local(async move {
            state.set(ActionState::Processing);

            match manager.login(&credentials).await {
                Ok(user) => {
                    tracing::debug!(user_id = %user.id(), "Login complete");
                    state.set(ActionState::Idle);
                }
                // The user signed out while this was in flight
                Err(AuthError::Superseded) => state.set(ActionState::Idle),
                Err(err) => {
                    tracing::warn!(error = %err, "Login failed");
                    state.set(ActionState::Error(err.user_message()));
                }
            }
        });
    }

    /// Create an account. The user still has to sign in afterwards.
    pub fn register(&self, profile: RegistrationProfile) {
        let manager = self.manager.clone();
        let state = self.state.clone();

        wasm_bindgen_futures::spawn_local(async move {
            state.set(ActionState::Processing);

            match manager.register(&profile).await {
                Ok(()) => state.set(ActionState::Done(
                    "Account created. Please sign in.".to_string(),
                )),
                Err(err) => {
                    tracing::warn!(error = %err, "Registration failed");
                    state.set(ActionState::Error(err.user_message()));
                }
            }
        });
    }

    /// Sign out. Local state is cleared even when the service call fails;
    /// the failure is still reported.
    pub fn logout(&self) {
        let manager = self.manager.clone();
        let state = self.state.clone();

        wasm_bindgen_futures::spawn_local(async move {
            state.set(ActionState::Processing);

            match manager.logout().await {
                Ok(()) => state.set(ActionState::Idle),
                Err(err) => state.set(ActionState::Error(format!(
                    "Signed out on this device, but the server could not be reached: {}",
                    err.user_message()
                ))),
            }
        });
    }

    /// Get the current state
    pub fn state(&self) -> &ActionState {
        &self.state
    }

    /// Clear any error state
    pub fn clear_error(&self) {
        if matches!(*self.state, ActionState::Error(_)) {
            self.state.set(ActionState::Idle);
        }
    }
}

/// Hook to run auth operations from a component
#[hook]
pub fn use_auth_actions() -> UseAuthActionsHandle {
    let manager = use_session_manager();
    let state = use_state(|| ActionState::Idle);

    UseAuthActionsHandle { manager, state }
}
