//! Role-gated navigation

use crate::capability::{Capability, CapabilitySet, capabilities_for};
use crate::route::Page;
use crate::session::Session;

/// Entries of the header menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Link(Page),
    Logout,
}

impl NavItem {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Link(Page::Home) => "Home",
            Self::Link(Page::Login) => "Login",
            Self::Link(Page::Register) => "Sign Up",
            Self::Link(Page::Dashboard) => "Dashboard",
            Self::Link(Page::Sell) => "Sell Crops",
            Self::Link(Page::Profile) => "Profile",
            Self::Link(Page::Admin) => "Admin",
            Self::Link(Page::NotFound) => "Not Found",
            Self::Logout => "Logout",
        }
    }
}

/// Capabilities of whoever is looking at the page
pub fn session_capabilities(session: &Session) -> CapabilitySet {
    capabilities_for(session.role())
}

/// Header menu for the session. Nothing session-dependent is offered until
/// bootstrap settles.
pub fn nav_items(session: &Session) -> Vec<NavItem> {
    let mut items = vec![NavItem::Link(Page::Home)];

    match session {
        Session::Bootstrapping => {}
        Session::Anonymous => {
            items.push(NavItem::Link(Page::Login));
            items.push(NavItem::Link(Page::Register));
        }
        Session::Authenticated(_) => {
            let capabilities = session_capabilities(session);
            items.push(NavItem::Link(Page::Dashboard));
            if capabilities.contains(Capability::CanSell) {
                items.push(NavItem::Link(Page::Sell));
            }
            if capabilities.contains(Capability::CanAccessAdmin) {
                items.push(NavItem::Link(Page::Admin));
            }
            items.push(NavItem::Link(Page::Profile));
            items.push(NavItem::Logout);
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use crate::route::RouteDecision;
    use crate::user::User;

    fn signed_in(role: Role) -> Session {
        Session::Authenticated(User::new("id", "name", role))
    }

    #[test]
    fn bootstrapping_shows_only_home() {
        assert_eq!(
            nav_items(&Session::Bootstrapping),
            vec![NavItem::Link(Page::Home)]
        );
    }

    #[test]
    fn anonymous_sees_login_and_sign_up() {
        let items = nav_items(&Session::Anonymous);
        assert!(items.contains(&NavItem::Link(Page::Login)));
        assert!(items.contains(&NavItem::Link(Page::Register)));
        assert!(!items.contains(&NavItem::Logout));
        assert!(session_capabilities(&Session::Anonymous).is_empty());
    }

    #[test]
    fn retailer_never_sees_sell() {
        let items = nav_items(&signed_in(Role::Retailer));
        assert!(!items.contains(&NavItem::Link(Page::Sell)));
        assert!(!items.contains(&NavItem::Link(Page::Admin)));
        assert!(items.contains(&NavItem::Logout));
    }

    #[test]
    fn administrator_sees_everything() {
        let items = nav_items(&signed_in(Role::Administrator));
        assert!(items.contains(&NavItem::Link(Page::Sell)));
        assert!(items.contains(&NavItem::Link(Page::Admin)));
    }

    #[test]
    fn offered_links_are_never_redirected() {
        for role in Role::ALL {
            let session = signed_in(role);
            for item in nav_items(&session) {
                if let NavItem::Link(page) = item {
                    assert_eq!(page.decide(&session), RouteDecision::Allow, "{role} {page:?}");
                }
            }
        }
        for item in nav_items(&Session::Anonymous) {
            if let NavItem::Link(page) = item {
                assert_eq!(page.decide(&Session::Anonymous), RouteDecision::Allow);
            }
        }
    }
}
