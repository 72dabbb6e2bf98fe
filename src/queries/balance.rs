//! Balance queries: transaction lists and the statistics derived from them.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::aggregate::{
    balance_report, compute_deposit_statistics, compute_sale_statistics,
    compute_withdrawal_statistics,
};
use crate::client::BackendClient;
use crate::config::endpoint;
use crate::context::RequestContext;
use crate::error::{DepotError, Result};
use crate::models::{
    BalanceReport, DepositRecord, SaleRecord, Session, TransactionStatistics, WithdrawalRecord,
};
use crate::queries::sessions::SessionQuery;

/// Which transactions a balance query covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Everything recorded in one session (manager view).
    Session(i64),
    /// Everything involving one seller (seller view).
    Seller(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Session(id) => write!(f, "session/{}", id),
            Scope::Seller(id) => write!(f, "seller/{}", id),
        }
    }
}

// ---------------------------------------------------------------------------
// BalanceQuery
// ---------------------------------------------------------------------------

/// Query interface for sales, deposits, withdrawals and their statistics.
pub struct BalanceQuery<'a> {
    client: &'a BackendClient,
    ctx: &'a RequestContext,
}

impl<'a> BalanceQuery<'a> {
    /// Create a new `BalanceQuery` bound to the given client and caller.
    pub fn new(client: &'a BackendClient, ctx: &'a RequestContext) -> Self {
        Self { client, ctx }
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: &str, scope: &Scope) -> Result<Vec<T>> {
        let path = format!("{}/{}", endpoint(resource), scope);
        self.client.get_json(self.ctx, &path).await
    }

    pub async fn sales(&self, scope: &Scope) -> Result<Vec<SaleRecord>> {
        self.fetch("sales", scope).await
    }

    pub async fn deposits(&self, scope: &Scope) -> Result<Vec<DepositRecord>> {
        self.fetch("deposits", scope).await
    }

    pub async fn withdrawals(&self, scope: &Scope) -> Result<Vec<WithdrawalRecord>> {
        self.fetch("withdrawals", scope).await
    }

    pub async fn sale_statistics(&self, scope: &Scope) -> Result<TransactionStatistics> {
        Ok(compute_sale_statistics(&self.sales(scope).await?))
    }

    /// Deposit statistics for `scope`, using `session`'s flat fee and
    /// discount rates.
    pub async fn deposit_statistics(
        &self,
        scope: &Scope,
        session: &Session,
    ) -> Result<TransactionStatistics> {
        let deposits = self.deposits(scope).await?;
        Ok(compute_deposit_statistics(
            &deposits,
            session.deposit_fee_rate(),
            session.discount_rate(),
        ))
    }

    pub async fn withdrawal_statistics(&self, scope: &Scope) -> Result<TransactionStatistics> {
        Ok(compute_withdrawal_statistics(&self.withdrawals(scope).await?))
    }

    /// Sales, deposit and withdrawal statistics for one session.
    pub async fn report(&self, session_id: i64) -> Result<BalanceReport> {
        let session = SessionQuery::new(self.client, self.ctx)
            .get(session_id)
            .await?
            .ok_or_else(|| DepotError::NotFound(format!("Session {}", session_id)))?;

        let scope = Scope::Session(session_id);
        let sales = self.sales(&scope).await?;
        let deposits = self.deposits(&scope).await?;
        let withdrawals = self.withdrawals(&scope).await?;
        Ok(balance_report(&sales, &deposits, &withdrawals, &session))
    }
}
