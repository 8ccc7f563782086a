//! Navigation gating
//!
//! [`guard`] is a pure function of the session and a route's requirement, so
//! components can re-evaluate it on every render.

use crate::capability::{Capability, roles_with};
use crate::role::{Role, RoleSet};
use crate::session::Session;

/// Where a rejected navigation is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Home,
    Dashboard,
}

impl RedirectTarget {
    pub const fn page(self) -> Page {
        match self {
            Self::Login => Page::Login,
            Self::Home => Page::Home,
            Self::Dashboard => Page::Dashboard,
        }
    }
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(RedirectTarget),
    /// Session not known yet; show a placeholder
    Defer,
}

/// Access rule attached to a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRequirement {
    Public,
    /// Only for signed-out visitors (login, sign-up)
    GuestOnly,
    /// Signed-in users, optionally restricted to a role set
    Authenticated(Option<RoleSet>),
}

impl RouteRequirement {
    pub const fn signed_in() -> Self {
        Self::Authenticated(None)
    }

    pub const fn roles(roles: &[Role]) -> Self {
        Self::Authenticated(Some(RoleSet::of(roles)))
    }
}

/// Decide whether the session may enter a route.
///
/// Authenticated users without a required role go to the home page rather
/// than an error page, so restricted routes are not revealed.
pub fn guard(session: &Session, requirement: RouteRequirement) -> RouteDecision {
    match (session, requirement) {
        (Session::Bootstrapping, _) => RouteDecision::Defer,
        (_, RouteRequirement::Public) | (Session::Anonymous, RouteRequirement::GuestOnly) => {
            RouteDecision::Allow
        }
        (Session::Authenticated(_), RouteRequirement::GuestOnly) => {
            RouteDecision::Redirect(RedirectTarget::Dashboard)
        }
        (Session::Anonymous, RouteRequirement::Authenticated(_)) => {
            RouteDecision::Redirect(RedirectTarget::Login)
        }
        (Session::Authenticated(user), RouteRequirement::Authenticated(Some(roles)))
            if !roles.contains(user.role()) =>
        {
            RouteDecision::Redirect(RedirectTarget::Home)
        }
        (Session::Authenticated(_), RouteRequirement::Authenticated(_)) => RouteDecision::Allow,
    }
}

/// Sell page audience, taken from the capability table
pub const SELLER_ROLES: RoleSet = roles_with(Capability::CanSell);

/// Admin page audience, taken from the capability table
pub const ADMIN_ROLES: RoleSet = roles_with(Capability::CanAccessAdmin);

/// Pages of the marketplace front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Register,
    Dashboard,
    Sell,
    Profile,
    Admin,
    NotFound,
}

impl Page {
    pub const ALL: [Self; 8] = [
        Self::Home,
        Self::Login,
        Self::Register,
        Self::Dashboard,
        Self::Sell,
        Self::Profile,
        Self::Admin,
        Self::NotFound,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/signup",
            Self::Dashboard => "/dashboard",
            Self::Sell => "/sell",
            Self::Profile => "/user-profile",
            Self::Admin => "/admin",
            Self::NotFound => "/404",
        }
    }

    pub fn from_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::ALL
            .into_iter()
            .find(|page| page.path() == path)
            .unwrap_or(Self::NotFound)
    }

    pub const fn requirement(self) -> RouteRequirement {
        match self {
            Self::Home | Self::NotFound => RouteRequirement::Public,
            Self::Login | Self::Register => RouteRequirement::GuestOnly,
            Self::Dashboard | Self::Profile => RouteRequirement::signed_in(),
            Self::Sell => RouteRequirement::Authenticated(Some(SELLER_ROLES)),
            Self::Admin => RouteRequirement::Authenticated(Some(ADMIN_ROLES)),
        }
    }

    pub fn decide(self, session: &Session) -> RouteDecision {
        guard(session, self.requirement())
    }
}
