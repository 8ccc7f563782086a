//! One-shot session restore at startup

use crate::error::AuthError;
use crate::manager::SessionManager;
use crate::session::Session;
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Bootstrap progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    Pending,
    Resolved,
}

/// Restores a prior session by probing the auth service once per process.
///
/// Failure is never surfaced: any error resolves the session to anonymous.
/// The probe result is applied only while the store is still bootstrapping.
#[derive(Clone)]
pub struct SessionBootstrap {
    manager: SessionManager,
    state: Rc<Cell<BootstrapState>>,
    started: Rc<Cell<bool>>,
}

impl SessionBootstrap {
    pub fn new(manager: SessionManager) -> Self {
        Self {
            manager,
            state: Rc::new(Cell::new(BootstrapState::Pending)),
            started: Rc::new(Cell::new(false)),
        }
    }

    pub fn state(&self) -> BootstrapState {
        self.state.get()
    }

    /// Probe once and settle the session. Later calls do not probe again and
    /// return the current session.
    pub async fn run(&self) -> Session {
        let store = self.manager.store();
        if self.started.replace(true) {
            debug!("Session bootstrap already started");
            return store.state();
        }

        let outcome = self.manager.probe_session().await;

        if store.state().is_bootstrapping() {
            match outcome {
                Ok(user) => {
                    info!(user_id = %user.id(), role = %user.role(), "Restored session");
                    store.authenticate(user);
                }
                Err(AuthError::NotAuthenticated) => {
                    debug!("No prior session");
                    store.set_anonymous();
                }
                Err(err) => {
                    warn!(error = %err, "Session probe failed, continuing anonymously");
                    store.set_anonymous();
                }
            }
        } else {
            debug!(status = ?store.status(), "Session settled before probe returned");
        }

        self.state.set(BootstrapState::Resolved);
        store.state()
    }
}
