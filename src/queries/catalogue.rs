//! Catalogue queries: the units deposited in a session, grouped for display.

use crate::aggregate::{enrich_with_game_details, group_listings};
use crate::client::BackendClient;
use crate::config::{endpoint, RetryPolicy};
use crate::context::RequestContext;
use crate::error::Result;
use crate::models::{ListingGroup, ListingUpdate, RawListing};
use crate::queries::games::GameQuery;

// ---------------------------------------------------------------------------
// CatalogueQuery
// ---------------------------------------------------------------------------

/// Query interface for a session's catalogue of deposited units.
///
/// Grouping applies the caller's [`Visibility`](crate::context::Visibility):
/// managers see every unit, everyone else only units on sale.
pub struct CatalogueQuery<'a> {
    client: &'a BackendClient,
    ctx: &'a RequestContext,
    retry: RetryPolicy,
}

impl<'a> CatalogueQuery<'a> {
    /// Create a new `CatalogueQuery` bound to the given client and caller.
    pub fn new(client: &'a BackendClient, ctx: &'a RequestContext, retry: RetryPolicy) -> Self {
        Self { client, ctx, retry }
    }

    /// Every deposited unit of a session, ungrouped and unfiltered.
    pub async fn raw(&self, session_id: i64) -> Result<Vec<RawListing>> {
        let path = format!("{}/session/{}", endpoint("listings"), session_id);
        self.client.get_json(self.ctx, &path).await
    }

    /// The session's units visible to the caller, grouped by game, seller and price.
    pub async fn listings(&self, session_id: i64) -> Result<Vec<ListingGroup>> {
        let records = self.raw(session_id).await?;
        let visibility = self.ctx.visibility();
        Ok(group_listings(&records, |r| visibility.admits(r)))
    }

    /// Like [`listings`](Self::listings), with game details joined in.
    ///
    /// Games whose details cannot be fetched are still listed, without details.
    pub async fn enriched_listings(&self, session_id: i64) -> Result<Vec<ListingGroup>> {
        let groups = self.listings(session_id).await?;
        let games = GameQuery::new(self.client, self.ctx);
        Ok(enrich_with_game_details(groups, &games, &self.retry).await)
    }

    /// Toggle the sale flags of one unit, identified by its tag.
    pub async fn update_listing(&self, tag: &str, update: &ListingUpdate) -> Result<RawListing> {
        let path = format!("{}/{}", endpoint("listings"), tag);
        self.client.patch_json(self.ctx, &path, update).await
    }
}
