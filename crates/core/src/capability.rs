//! Role to capability mapping
//!
//! Every role-conditional affordance in the UI is decided here. Views ask
//! for a [`CapabilitySet`] and test membership; they never compare roles.

use crate::role::{DashboardKind, Role, RoleSet};
use std::collections::BTreeSet;

/// A named UI affordance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    CanSell,
    CanPurchase,
    CanAccessAdmin,
}

impl Capability {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CanSell => "List crops for sale",
            Self::CanPurchase => "Buy from the marketplace",
            Self::CanAccessAdmin => "Manage the platform",
        }
    }
}

const CAPABILITY_TABLE: [(Role, &[Capability]); 4] = [
    (Role::Producer, &[Capability::CanSell]),
    (
        Role::Distributor,
        &[Capability::CanSell, Capability::CanPurchase],
    ),
    (Role::Retailer, &[Capability::CanPurchase]),
    (
        Role::Administrator,
        &[
            Capability::CanSell,
            Capability::CanPurchase,
            Capability::CanAccessAdmin,
        ],
    ),
];

/// Set of capabilities granted to the current viewer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl CapabilitySet {
    pub const fn empty() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_superset(&self, other: &Self) -> bool {
        self.0.is_superset(&other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Capabilities for a viewer with the given role, or none when signed out
pub fn capabilities_for(role: Option<Role>) -> CapabilitySet {
    let Some(role) = role else {
        return CapabilitySet::empty();
    };
    CAPABILITY_TABLE
        .iter()
        .find(|(entry, _)| *entry == role)
        .map(|(_, caps)| caps.iter().copied().collect())
        .unwrap_or_default()
}

/// Every role the table grants `capability` to
pub const fn roles_with(capability: Capability) -> RoleSet {
    let mut roles = RoleSet::of(&[]);
    let mut i = 0;
    while i < CAPABILITY_TABLE.len() {
        let (role, granted) = CAPABILITY_TABLE[i];
        let mut j = 0;
        while j < granted.len() {
            if granted[j] as u8 == capability as u8 {
                roles = roles.with(role);
            }
            j += 1;
        }
        i += 1;
    }
    roles
}

impl Role {
    pub fn capabilities(self) -> CapabilitySet {
        capabilities_for(Some(self))
    }

    pub fn has(self, capability: Capability) -> bool {
        self.capabilities().contains(capability)
    }

    /// Sellers who do not buy get the producer layout
    pub fn dashboard_kind(self) -> DashboardKind {
        let capabilities = self.capabilities();
        if capabilities.contains(Capability::CanSell)
            && !capabilities.contains(Capability::CanPurchase)
        {
            DashboardKind::Producer
        } else {
            DashboardKind::Buyer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(caps: &[Capability]) -> CapabilitySet {
        caps.iter().copied().collect()
    }

    #[test]
    fn table_covers_every_role() {
        for role in Role::ALL {
            assert!(
                CAPABILITY_TABLE.iter().any(|(entry, _)| *entry == role),
                "{role} missing from capability table"
            );
        }
    }

    #[test]
    fn role_capabilities_match_table() {
        assert_eq!(Role::Producer.capabilities(), set(&[Capability::CanSell]));
        assert_eq!(
            Role::Distributor.capabilities(),
            set(&[Capability::CanSell, Capability::CanPurchase])
        );
        assert_eq!(
            Role::Retailer.capabilities(),
            set(&[Capability::CanPurchase])
        );
        assert_eq!(
            Role::Administrator.capabilities(),
            set(&[
                Capability::CanSell,
                Capability::CanPurchase,
                Capability::CanAccessAdmin
            ])
        );
    }

    #[test]
    fn absent_role_has_no_capabilities() {
        assert!(capabilities_for(None).is_empty());
    }

    #[test]
    fn administrator_is_a_superset_of_every_role() {
        let admin = Role::Administrator.capabilities();
        for role in Role::ALL {
            assert!(admin.is_superset(&role.capabilities()), "{role}");
        }
    }

    #[test]
    fn retailer_cannot_sell() {
        assert!(!Role::Retailer.has(Capability::CanSell));
        assert!(Role::Distributor.has(Capability::CanSell));
        assert!(!Role::Distributor.has(Capability::CanAccessAdmin));
    }

    #[test]
    fn roles_with_follows_the_table() {
        for capability in [
            Capability::CanSell,
            Capability::CanPurchase,
            Capability::CanAccessAdmin,
        ] {
            let roles = roles_with(capability);
            for role in Role::ALL {
                assert_eq!(roles.contains(role), role.has(capability), "{role} {capability:?}");
            }
        }
        assert_eq!(
            roles_with(Capability::CanSell).iter().collect::<Vec<_>>(),
            vec![Role::Producer, Role::Distributor, Role::Administrator]
        );
    }

    #[test]
    fn only_producers_get_the_producer_dashboard() {
        assert_eq!(Role::Producer.dashboard_kind(), DashboardKind::Producer);
        assert_eq!(Role::Distributor.dashboard_kind(), DashboardKind::Buyer);
        assert_eq!(Role::Retailer.dashboard_kind(), DashboardKind::Buyer);
        assert_eq!(Role::Administrator.dashboard_kind(), DashboardKind::Buyer);
    }
}
