//! Session storage copy of the signed-in user
//!
//! Display cache only. The store never reads it back to decide whether
//! someone is signed in.

use crate::config::AuthConfig;
use agrichain_core::{User, UserMirror};
use gloo::storage::{SessionStorage, Storage};

pub struct SessionStorageMirror;

impl SessionStorageMirror {
    /// Last mirrored user, used for the "welcome back" text while restoring
    pub fn cached_user() -> Option<User> {
        SessionStorage::get(AuthConfig::USER_MIRROR_KEY).ok()
    }
}

impl UserMirror for SessionStorageMirror {
    fn store(&self, user: &User) {
        if let Err(err) = SessionStorage::set(AuthConfig::USER_MIRROR_KEY, user) {
            tracing::warn!(error = %err, "Failed to mirror user to session storage");
        }
    }

    fn clear(&self) {
        SessionStorage::delete(AuthConfig::USER_MIRROR_KEY);
    }
}
