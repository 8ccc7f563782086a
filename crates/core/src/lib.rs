//! AgriChain client session and access control
//!
//! Holds the process-wide session, restores it at startup, applies login and
//! logout results, and derives route decisions and UI capabilities from it.
//! Nothing here depends on a rendering framework or an HTTP stack.

pub mod api;
pub mod bootstrap;
pub mod capability;
pub mod error;
pub mod manager;
pub mod mirror;
pub mod profile;
pub mod role;
pub mod route;
pub mod session;
pub mod user;
pub mod view;

pub use api::AuthApi;
pub use bootstrap::{BootstrapState, SessionBootstrap};
pub use capability::{Capability, CapabilitySet, capabilities_for};
pub use error::{AuthError, AuthResult};
pub use manager::SessionManager;
pub use mirror::{UserMirror, attach_mirror};
pub use profile::{Credentials, RegistrationProfile};
pub use role::{DashboardKind, Role, RoleSet, UnknownRole};
pub use route::{Page, RedirectTarget, RouteDecision, RouteRequirement, guard};
pub use session::{Session, SessionError, SessionStatus, SessionStore, Subscription};
pub use user::{RemoteUser, User};
pub use view::{NavItem, nav_items, session_capabilities};
