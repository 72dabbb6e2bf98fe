//! Reductions of sale, deposit and withdrawal lists into
//! [`TransactionStatistics`].
//!
//! Malformed amounts contribute zero and are logged, as does any amount that
//! would overflow a running total. Empty lists produce the zero-valued
//! default. None of these functions can fail or panic.

use rust_decimal::Decimal;

use crate::models::{
    BalanceReport, DepositRecord, SaleRecord, Session, TransactionStatistics, WithdrawalRecord,
};

/// Count, totals, average and payment-method distribution of `sales`.
pub fn compute_sale_statistics(sales: &[SaleRecord]) -> TransactionStatistics {
    let mut stats = TransactionStatistics {
        count: sales.len(),
        ..Default::default()
    };

    for sale in sales {
        accumulate(&mut stats.total_amount, sale.amount_value(), "amount");
        accumulate(&mut stats.total_commission, sale.commission_value(), "comission");
        *stats
            .payment_method_distribution
            .entry(sale.payment_method.clone())
            .or_insert(0) += 1;
    }

    stats.average_amount = average(stats.total_amount, stats.count);
    tracing::debug!(count = stats.count, total = %stats.total_amount, "computed sale statistics");
    stats
}

/// Count, totals and average of `deposits`.
///
/// Fees and discounts are the session's flat per-deposit rates multiplied by
/// the number of deposits; they do not depend on deposit amounts.
pub fn compute_deposit_statistics(
    deposits: &[DepositRecord],
    fee_rate: Decimal,
    discount_rate: Decimal,
) -> TransactionStatistics {
    let count = deposits.len();
    let total_amount = total(deposits.iter().map(DepositRecord::amount_value));

    let stats = TransactionStatistics {
        count,
        total_amount,
        total_fees: per_record(fee_rate, count, "deposit_fee"),
        total_discount: per_record(discount_rate, count, "discount"),
        average_amount: average(total_amount, count),
        ..Default::default()
    };
    tracing::debug!(count, total = %stats.total_amount, "computed deposit statistics");
    stats
}

/// Count, total and average of `withdrawals`.
pub fn compute_withdrawal_statistics(withdrawals: &[WithdrawalRecord]) -> TransactionStatistics {
    let count = withdrawals.len();
    let total_amount = total(withdrawals.iter().map(WithdrawalRecord::amount_value));

    TransactionStatistics {
        count,
        total_amount,
        average_amount: average(total_amount, count),
        ..Default::default()
    }
}

/// All three statistics for one session, using the session's deposit rates.
pub fn balance_report(
    sales: &[SaleRecord],
    deposits: &[DepositRecord],
    withdrawals: &[WithdrawalRecord],
    session: &Session,
) -> BalanceReport {
    BalanceReport {
        sales: compute_sale_statistics(sales),
        deposits: compute_deposit_statistics(
            deposits,
            session.deposit_fee_rate(),
            session.discount_rate(),
        ),
        withdrawals: compute_withdrawal_statistics(withdrawals),
    }
}

/// Add `value` to `sum`, skipping it with a warning if the sum would overflow.
fn accumulate(sum: &mut Decimal, value: Decimal, field: &str) {
    match sum.checked_add(value) {
        Some(next) => *sum = next,
        None => {
            tracing::warn!(field, value = %value, "overflowing amount left out of total");
        }
    }
}

fn total(values: impl Iterator<Item = Decimal>) -> Decimal {
    let mut sum = Decimal::ZERO;
    for value in values {
        accumulate(&mut sum, value, "amount");
    }
    sum
}

/// A flat per-record `rate` times `count`, saturating on overflow.
fn per_record(rate: Decimal, count: usize, field: &str) -> Decimal {
    let n = Decimal::from(count);
    rate.checked_mul(n).unwrap_or_else(|| {
        tracing::warn!(field, rate = %rate, count, "per-record total overflowed; saturating");
        rate.saturating_mul(n)
    })
}

fn average(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        Decimal::ZERO
    } else {
        total / Decimal::from(count)
    }
}
