use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal::{decimal_or_zero, decimal_text, null_as_default};

// ---------------------------------------------------------------------------
// Session — A time-bounded sales event with its own rates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Session {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Flat fee charged per deposit.
    #[serde(default, deserialize_with = "decimal_text")]
    pub deposit_fee: String,
    /// Flat discount granted per deposit.
    #[serde(default, deserialize_with = "decimal_text")]
    pub discount: String,
    #[serde(default, deserialize_with = "decimal_text")]
    pub commission: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

impl Session {
    pub fn deposit_fee_rate(&self) -> Decimal {
        decimal_or_zero("deposit_fee", &self.deposit_fee)
    }

    pub fn discount_rate(&self) -> Decimal {
        decimal_or_zero("discount", &self.discount)
    }

    pub fn commission_rate(&self) -> Decimal {
        decimal_or_zero("commission", &self.commission)
    }
}

// ---------------------------------------------------------------------------
// SessionUpdate — Partial update of a session's editable fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_fee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
