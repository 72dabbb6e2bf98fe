//! Caller identity passed explicitly into every backend call and aggregation.

use serde::{Deserialize, Serialize};

use crate::models::RawListing;

/// Role of the authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Seller,
    Client,
}

impl Role {
    /// Managers see the whole catalogue, including sold and withheld units.
    pub fn is_privileged(self) -> bool {
        matches!(self, Role::Manager)
    }
}

/// Auth token and role for one caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub token: String,
    pub role: Role,
}

impl RequestContext {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self {
            token: token.into(),
            role,
        }
    }

    /// Visibility rule for catalogue listings under this context's role.
    pub fn visibility(&self) -> Visibility {
        Visibility::for_role(self.role)
    }
}

/// Which raw listings a viewer is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Every unit, sold or not.
    All,
    /// Only units that are for sale and not yet sold.
    OnSale,
}

impl Visibility {
    pub fn for_role(role: Role) -> Self {
        if role.is_privileged() {
            Visibility::All
        } else {
            Visibility::OnSale
        }
    }

    pub fn admits(self, listing: &RawListing) -> bool {
        match self {
            Visibility::All => true,
            Visibility::OnSale => listing.for_sale && !listing.sold,
        }
    }
}
