use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal::{decimal_or_zero, decimal_text, null_as_default};
use super::game::Game;

// ---------------------------------------------------------------------------
// RawListing — One deposited unit of a game, as fetched from the backend
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RawListing {
    pub tag: String,
    pub game_id: i64,
    pub seller_id: String,
    #[serde(default, deserialize_with = "decimal_text")]
    pub price: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub for_sale: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sold: bool,
    pub session_id: i64,
}

impl RawListing {
    /// Price as a decimal; malformed text counts as 0.
    pub fn price_value(&self) -> Decimal {
        decimal_or_zero("price", &self.price)
    }

    /// Grouping key of this unit. Prices are normalized so `"10.0"` and
    /// `"10"` land in the same group.
    pub fn key(&self) -> ListingKey {
        ListingKey {
            game_id: self.game_id,
            seller_id: self.seller_id.clone(),
            price: self.price_value().normalize(),
        }
    }
}

/// Composite identity of a listing group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListingKey {
    pub game_id: i64,
    pub seller_id: String,
    pub price: Decimal,
}

// ---------------------------------------------------------------------------
// ListingGroup — Identical units from one seller at one price
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListingGroup {
    pub game_id: i64,
    pub seller_id: String,
    pub price: Decimal,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_details: Option<Game>,
}

impl ListingGroup {
    pub fn key(&self) -> ListingKey {
        ListingKey {
            game_id: self.game_id,
            seller_id: self.seller_id.clone(),
            price: self.price.normalize(),
        }
    }

    /// Display name of the game, when details have been joined in.
    pub fn name(&self) -> Option<&str> {
        self.game_details.as_ref().map(|g| g.name.as_str())
    }
}

// ---------------------------------------------------------------------------
// ListingUpdate — Partial update toggling a unit's sale flags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_sale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold: Option<bool>,
}
