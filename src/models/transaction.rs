use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal::{decimal_or_zero, decimal_text, null_as_default};

// ---------------------------------------------------------------------------
// SaleRecord — A client purchase of one or more listings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SaleRecord {
    pub id: Option<i64>,
    pub session_id: Option<i64>,
    pub client_id: Option<i64>,
    pub seller_id: Option<String>,
    #[serde(default, deserialize_with = "decimal_text")]
    pub amount: String,
    #[serde(rename = "comission", default, deserialize_with = "decimal_text")]
    pub commission: String,
    /// Raw payment-method code as sent by the backend (e.g. `"cash"`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_method: String,
    pub date: Option<String>,
}

impl SaleRecord {
    pub fn amount_value(&self) -> Decimal {
        decimal_or_zero("amount", &self.amount)
    }

    pub fn commission_value(&self) -> Decimal {
        decimal_or_zero("comission", &self.commission)
    }
}

// ---------------------------------------------------------------------------
// DepositRecord — A seller handing games over for a session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DepositRecord {
    pub id: Option<i64>,
    pub session_id: Option<i64>,
    pub seller_id: Option<String>,
    #[serde(default, deserialize_with = "decimal_text")]
    pub amount: String,
    pub date: Option<String>,
}

impl DepositRecord {
    pub fn amount_value(&self) -> Decimal {
        decimal_or_zero("amount", &self.amount)
    }
}

// ---------------------------------------------------------------------------
// WithdrawalRecord — Units returned to their seller
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WithdrawalRecord {
    pub id: Option<i64>,
    pub session_id: Option<i64>,
    pub seller_id: Option<String>,
    #[serde(default, deserialize_with = "decimal_text")]
    pub amount: String,
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<WithdrawalItem>,
}

impl WithdrawalRecord {
    pub fn amount_value(&self) -> Decimal {
        decimal_or_zero("amount", &self.amount)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WithdrawalItem {
    pub game_id: i64,
    #[serde(default = "one")]
    pub quantity: u32,
    /// Tags of the individual units withdrawn.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

fn one() -> u32 {
    1
}
