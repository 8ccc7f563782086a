//! Process-wide session store with subscriber notification
//!
//! The store is single-threaded: handles are `Rc` clones of one shared state,
//! mutations happen between await points and never perform I/O. Listeners are
//! called after the new state is committed, so a listener may read the store
//! or even mutate it again.

use crate::role::{Role, UnknownRole};
use crate::user::{RemoteUser, User};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use thiserror::Error;
use tracing::{debug, error};

/// Coarse authentication status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Bootstrapping,
    Anonymous,
    Authenticated,
}

/// Current authentication state. A user exists only in the authenticated variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Bootstrapping,
    Anonymous,
    Authenticated(User),
}

impl Session {
    pub const fn status(&self) -> SessionStatus {
        match self {
            Self::Bootstrapping => SessionStatus::Bootstrapping,
            Self::Anonymous => SessionStatus::Anonymous,
            Self::Authenticated(_) => SessionStatus::Authenticated,
        }
    }

    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Bootstrapping | Self::Anonymous => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(User::role)
    }

    pub const fn is_bootstrapping(&self) -> bool {
        matches!(self, Self::Bootstrapping)
    }

    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Rejected store mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("auth service returned unknown role '{0}'")]
    InvalidRole(String),
}

impl From<UnknownRole> for SessionError {
    fn from(err: UnknownRole) -> Self {
        Self::InvalidRole(err.0)
    }
}

type Listener = Rc<dyn Fn(&Session)>;

struct StoreInner {
    state: RefCell<Session>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener: Cell<u64>,
}

/// Shared handle to the session store
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<StoreInner>,
}

impl SessionStore {
    /// Create a store in the `Bootstrapping` state
    pub fn new() -> Self {
        Self::with_state(Session::Bootstrapping)
    }

    pub(crate) fn with_state(state: Session) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                state: RefCell::new(state),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
            }),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> Session {
        self.inner.state.borrow().clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.inner.state.borrow().status()
    }

    pub fn current_user(&self) -> Option<User> {
        self.inner.state.borrow().user().cloned()
    }

    /// Register a listener for every transition. Dropping the returned
    /// subscription unregisters it.
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) -> Subscription {
        let id = self.inner.next_listener.get();
        self.inner.next_listener.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        Subscription {
            store: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Transition to `Authenticated`. A role outside the closed set leaves the
    /// store untouched.
    pub fn set_authenticated(&self, user: RemoteUser) -> Result<User, SessionError> {
        let user = User::try_from(user).map_err(|err| {
            error!(role = %err.0, "Rejecting session with unknown role");
            SessionError::from(err)
        })?;

        self.authenticate(user.clone());
        Ok(user)
    }

    /// Transition to `Authenticated` with an already validated user
    pub fn authenticate(&self, user: User) {
        debug!(user_id = %user.id(), role = %user.role(), "Session authenticated");
        self.replace(Session::Authenticated(user));
    }

    /// Transition to `Anonymous`, dropping any user
    pub fn set_anonymous(&self) {
        debug!("Session anonymous");
        self.replace(Session::Anonymous);
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.inner
            .listeners
            .borrow()
            .iter()
            .any(|(listener_id, _)| *listener_id == id)
    }

    fn replace(&self, next: Session) {
        *self.inner.state.borrow_mut() = next;

        let listeners: Vec<(u64, Listener)> = self.inner.listeners.borrow().clone();

        for (id, listener) in listeners {
            // Skip listeners unsubscribed by an earlier one in this round
            if !self.is_subscribed(id) {
                continue;
            }
            let snapshot = self.state();
            listener(&snapshot);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &*self.inner.state.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Handle returned by [`SessionStore::subscribe`]
pub struct Subscription {
    store: Weak<StoreInner>,
    id: Option<u64>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.remove();
    }

    /// Keep the listener registered for the lifetime of the store
    pub fn forget(mut self) {
        self.id = None;
    }

    fn remove(&mut self) {
        if let (Some(id), Some(store)) = (self.id.take(), self.store.upgrade()) {
            store
                .listeners
                .borrow_mut()
                .retain(|(listener_id, _)| *listener_id != id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.remove();
    }
}
