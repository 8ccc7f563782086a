//! Session state for components

mod context;
mod mirror;

pub use context::{
    SessionContext, SessionProvider, use_capabilities, use_session, use_session_manager,
};
pub use mirror::SessionStorageMirror;
