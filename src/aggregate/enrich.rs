//! Joining game details onto listing groups.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use futures::future::join_all;

use crate::config::RetryPolicy;
use crate::error::Result;
use crate::models::{Game, ListingGroup};

/// Source of game details, keyed by game id.
///
/// `Ok(None)` means the game has no details and is final; `Err` is a failed
/// attempt that may be retried.
#[async_trait]
pub trait GameLookup: Send + Sync {
    async fn game(&self, game_id: i64) -> Result<Option<Game>>;
}

/// Attach [`Game`] details to every group.
///
/// Each distinct game id is looked up once, all ids concurrently. A lookup
/// that keeps failing is retried per `policy` and then given up on: its
/// groups are returned with `game_details` unset. Groups are only touched
/// after every lookup has finished, so dropping the returned future leaves
/// the caller's data as it was.
pub async fn enrich_with_game_details<L>(
    mut groups: Vec<ListingGroup>,
    lookup: &L,
    policy: &RetryPolicy,
) -> Vec<ListingGroup>
where
    L: GameLookup + ?Sized,
{
    let ids: BTreeSet<i64> = groups.iter().map(|g| g.game_id).collect();

    let results = join_all(
        ids.into_iter()
            .map(move |id| async move { (id, lookup_with_retry(lookup, id, policy).await) }),
    )
    .await;
    let details: HashMap<i64, Game> = results
        .into_iter()
        .filter_map(|(id, game)| game.map(|g| (id, g)))
        .collect();

    for group in &mut groups {
        group.game_details = details.get(&group.game_id).cloned();
    }
    groups
}

async fn lookup_with_retry<L>(lookup: &L, game_id: i64, policy: &RetryPolicy) -> Option<Game>
where
    L: GameLookup + ?Sized,
{
    let attempts = policy.attempts.max(1);
    for attempt in 1..=attempts {
        if attempt > 1 {
            tokio::time::sleep(policy.backoff).await;
        }
        match lookup.game(game_id).await {
            Ok(game) => return game,
            Err(e) => {
                tracing::warn!(game_id, attempt, error = %e, "game lookup failed");
            }
        }
    }

    tracing::warn!(game_id, attempts, "game lookup exhausted; leaving details unset");
    None
}
