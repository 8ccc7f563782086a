//! Local display cache of the signed-in user
//!
//! A mirror is never read to decide who is signed in. It is rewritten or
//! cleared on every store transition.

use crate::session::{Session, SessionStore, Subscription};
use crate::user::User;

/// Somewhere to keep a copy of the current user for display
pub trait UserMirror {
    fn store(&self, user: &User);
    fn clear(&self);
}

/// Keep `mirror` in step with `store`
#[must_use = "dropping the subscription detaches the mirror"]
pub fn attach_mirror(store: &SessionStore, mirror: impl UserMirror + 'static) -> Subscription {
    store.subscribe(move |session| match session {
        Session::Authenticated(user) => mirror.store(user),
        Session::Bootstrapping | Session::Anonymous => mirror.clear(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::RemoteUser;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryMirror(Rc<RefCell<Option<User>>>);

    impl UserMirror for MemoryMirror {
        fn store(&self, user: &User) {
            *self.0.borrow_mut() = Some(user.clone());
        }

        fn clear(&self) {
            *self.0.borrow_mut() = None;
        }
    }

    #[test]
    fn mirror_follows_transitions() {
        let store = SessionStore::new();
        let mirror = MemoryMirror::default();
        let _sub = attach_mirror(&store, mirror.clone());

        let user = store
            .set_authenticated(RemoteUser {
                id: "1".into(),
                username: "fern".into(),
                email: None,
                role: "producer".into(),
            })
            .unwrap();
        assert_eq!(*mirror.0.borrow(), Some(user));

        store.set_anonymous();
        assert_eq!(*mirror.0.borrow(), None);
    }
}
