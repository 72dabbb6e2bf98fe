use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TransactionStatistics — Summary of a list of sales, deposits or withdrawals
// ---------------------------------------------------------------------------

/// Aggregate figures over one transaction list.
///
/// Fields that do not apply to a transaction kind stay at zero: withdrawals
/// only carry `count`, `total_amount` and `average_amount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TransactionStatistics {
    pub count: usize,
    pub total_amount: Decimal,
    pub total_commission: Decimal,
    pub total_fees: Decimal,
    pub total_discount: Decimal,
    /// `total_amount / count`, or 0 for an empty list.
    pub average_amount: Decimal,
    /// Occurrences per raw payment-method code. Values sum to `count` for sales.
    pub payment_method_distribution: BTreeMap<String, usize>,
}

// ---------------------------------------------------------------------------
// BalanceReport — Dashboard figures for one session or seller
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BalanceReport {
    pub sales: TransactionStatistics,
    pub deposits: TransactionStatistics,
    pub withdrawals: TransactionStatistics,
}

impl BalanceReport {
    /// What the marketplace keeps: sale commissions plus deposit fees, minus
    /// deposit discounts. Saturates instead of overflowing.
    pub fn marketplace_earnings(&self) -> Decimal {
        self.sales
            .total_commission
            .saturating_add(self.deposits.total_fees)
            .saturating_sub(self.deposits.total_discount)
    }
}
