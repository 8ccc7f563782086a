//! Marketplace roles
//!
//! The role set is closed. The auth service may still send the legacy
//! spellings (`farmer`, `farm`, `admin`), which parse to the same variants;
//! any other value is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category of principal determining marketplace permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "farmer", alias = "farm")]
    Producer,
    Distributor,
    Retailer,
    #[serde(alias = "admin")]
    Administrator,
}

/// A role string outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

/// Which dashboard layout a role lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardKind {
    /// Listed crops and pending shipments
    Producer,
    /// Orders and purchase history
    Buyer,
}

impl Role {
    pub const ALL: [Self; 4] = [
        Self::Producer,
        Self::Distributor,
        Self::Retailer,
        Self::Administrator,
    ];

    /// Canonical wire name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Producer => "producer",
            Self::Distributor => "distributor",
            Self::Retailer => "retailer",
            Self::Administrator => "administrator",
        }
    }

    /// Human-readable label for forms and menus
    pub const fn label(self) -> &'static str {
        match self {
            Self::Producer => "Producer",
            Self::Distributor => "Distributor",
            Self::Retailer => "Retailer",
            Self::Administrator => "Administrator",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Producer => "Individual grower, farm or cooperative",
            Self::Distributor => "Supply chain logistics partner",
            Self::Retailer => "Store or market selling products",
            Self::Administrator => "Marketplace operator",
        }
    }

    /// Whether the role can be chosen on the sign-up form
    pub const fn is_self_registrable(self) -> bool {
        !matches!(self, Self::Administrator)
    }
}

/// Fixed-size set of roles, usable in `const` route tables
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const fn of(roles: &[Role]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < roles.len() {
            bits |= roles[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub const fn with(self, role: Role) -> Self {
        Self(self.0 | role.bit())
    }

    pub const fn contains(self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |role| self.contains(*role))
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self(iter.into_iter().fold(0, |bits, role| bits | role.bit()))
    }
}

impl Role {
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "producer" | "farmer" | "farm" => Ok(Self::Producer),
            "distributor" => Ok(Self::Distributor),
            "retailer" => Ok(Self::Retailer),
            "administrator" | "admin" => Ok(Self::Administrator),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}
