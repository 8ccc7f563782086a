//! Bridges the session store into the component tree

use agrichain_core::{CapabilitySet, Session, SessionManager, session_capabilities};
use yew::prelude::*;

/// What components see of the session
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub manager: SessionManager,
    pub session: Session,
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub manager: SessionManager,
    pub children: Children,
}

/// Re-renders its children whenever the store changes
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_state_eq(|| props.manager.store().state());

    {
        let session = session.clone();
        use_effect_with(props.manager.store().clone(), move |store| {
            let on_change = session.clone();
            let subscription = store.subscribe(move |next| on_change.set(next.clone()));

            // Catch transitions that landed between first render and now
            session.set(store.state());

            move || subscription.unsubscribe()
        });
    }

    let context = SessionContext {
        manager: props.manager.clone(),
        session: (*session).clone(),
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            { props.children.clone() }
        </ContextProvider<SessionContext>>
    }
}

/// Hook to access the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found. Make sure to wrap your app with SessionProvider")
}

#[hook]
pub fn use_session_manager() -> SessionManager {
    use_session().manager
}

/// Capabilities of the current viewer
#[hook]
pub fn use_capabilities() -> CapabilitySet {
    session_capabilities(&use_session().session)
}
