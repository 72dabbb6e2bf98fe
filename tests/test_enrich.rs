//! Game-details enrichment tests.

mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use common::{game, listing, ScriptedLookup, Script};
use gamedepot_sdk::models::{Game, ListingGroup};
use gamedepot_sdk::{enrich_with_game_details, group_listings, GameLookup, Result, RetryPolicy};
use tokio::sync::Barrier;

fn no_wait(attempts: u32) -> RetryPolicy {
    RetryPolicy::new(attempts, Duration::ZERO)
}

fn groups_for(game_ids: &[i64]) -> Vec<ListingGroup> {
    let records: Vec<_> = game_ids
        .iter()
        .enumerate()
        .map(|(i, &id)| listing(&format!("t-{}", i), id, if i % 2 == 0 { "A" } else { "B" }, "5.00"))
        .collect();
    group_listings(&records, |_| true)
}

// ---------------------------------------------------------------------------
// Joining
// ---------------------------------------------------------------------------

#[tokio::test]
async fn details_joined_by_game_id() {
    let lookup = ScriptedLookup::new([
        (1, Script::Found(game(1, "Catan"))),
        (2, Script::Found(game(2, "Azul"))),
    ]);

    let groups = enrich_with_game_details(groups_for(&[1, 2, 1]), &lookup, &no_wait(3)).await;
    assert_eq!(groups.len(), 2);
    for g in &groups {
        let details = g.game_details.as_ref().unwrap();
        assert_eq!(details.id, g.game_id);
    }
    assert_eq!(groups[0].name(), Some("Catan"));
}

#[tokio::test]
async fn each_game_looked_up_once() {
    let lookup = ScriptedLookup::new([
        (1, Script::Found(game(1, "Catan"))),
        (2, Script::Found(game(2, "Azul"))),
    ]);

    enrich_with_game_details(groups_for(&[1, 1, 2, 1, 2, 2]), &lookup, &no_wait(3)).await;
    assert_eq!(lookup.calls(1), 1);
    assert_eq!(lookup.calls(2), 1);
}

#[tokio::test]
async fn missing_game_is_not_retried() {
    let lookup = ScriptedLookup::new([(7, Script::Missing)]);

    let groups = enrich_with_game_details(groups_for(&[7]), &lookup, &no_wait(3)).await;
    assert!(groups[0].game_details.is_none());
    assert_eq!(lookup.calls(7), 1);
}

#[tokio::test]
async fn empty_groups_make_no_lookups() {
    let lookup = ScriptedLookup::new([]);
    let groups = enrich_with_game_details(Vec::new(), &lookup, &no_wait(3)).await;
    assert!(groups.is_empty());
    assert_eq!(lookup.total_calls(), 0);
}

// ---------------------------------------------------------------------------
// Retries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn exhausted_lookup_keeps_group_without_details() {
    let lookup = ScriptedLookup::new([
        (1, Script::AlwaysFail),
        (2, Script::Found(game(2, "Azul"))),
    ]);

    let groups = enrich_with_game_details(groups_for(&[1, 2]), &lookup, &no_wait(3)).await;
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].game_id, 1);
    assert_eq!(groups[0].count, 1);
    assert!(groups[0].game_details.is_none());
    assert_eq!(groups[1].name(), Some("Azul"));
    assert_eq!(lookup.calls(1), 3);
    assert_eq!(lookup.calls(2), 1);
}

#[tokio::test]
async fn transient_failures_recover_within_attempts() {
    let lookup = ScriptedLookup::new([(4, Script::FailThenFound(2, game(4, "Dixit")))]);

    let groups = enrich_with_game_details(groups_for(&[4]), &lookup, &no_wait(3)).await;
    assert_eq!(groups[0].name(), Some("Dixit"));
    assert_eq!(lookup.calls(4), 3);
}

#[tokio::test]
async fn failures_beyond_attempts_give_up() {
    let lookup = ScriptedLookup::new([(4, Script::FailThenFound(3, game(4, "Dixit")))]);

    let groups = enrich_with_game_details(groups_for(&[4]), &lookup, &no_wait(3)).await;
    assert!(groups[0].game_details.is_none());
    assert_eq!(lookup.calls(4), 3);
}

#[tokio::test]
async fn backoff_precedes_each_retry() {
    let lookup = ScriptedLookup::new([(1, Script::AlwaysFail)]);
    let policy = RetryPolicy::new(3, Duration::from_millis(30));

    let started = Instant::now();
    enrich_with_game_details(groups_for(&[1]), &lookup, &policy).await;
    assert!(started.elapsed() >= Duration::from_millis(60));
    assert_eq!(lookup.calls(1), 3);
}

#[test]
fn default_policy_is_three_attempts_half_a_second_apart() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.attempts, 3);
    assert_eq!(policy.backoff, Duration::from_millis(500));
    assert_eq!(RetryPolicy::new(0, Duration::ZERO).attempts, 1);
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

/// Lookup that only answers once every expected caller is waiting, so it
/// completes only if the lookups run concurrently.
struct RendezvousLookup {
    barrier: Arc<Barrier>,
}

#[async_trait]
impl GameLookup for RendezvousLookup {
    async fn game(&self, game_id: i64) -> Result<Option<Game>> {
        self.barrier.wait().await;
        Ok(Some(game(game_id, "Rendezvous")))
    }
}

#[tokio::test]
async fn distinct_games_looked_up_concurrently() {
    let lookup = RendezvousLookup {
        barrier: Arc::new(Barrier::new(3)),
    };

    let enriched = tokio::time::timeout(
        Duration::from_secs(5),
        enrich_with_game_details(groups_for(&[1, 2, 3]), &lookup, &no_wait(1)),
    )
    .await
    .expect("lookups did not run concurrently");
    assert!(enriched.iter().all(|g| g.game_details.is_some()));
}

#[tokio::test]
async fn result_independent_of_completion_order() {
    let fast_first = ScriptedLookup::new([
        (1, Script::Delayed(Duration::from_millis(5), game(1, "Catan"))),
        (2, Script::Delayed(Duration::from_millis(40), game(2, "Azul"))),
        (3, Script::Delayed(Duration::from_millis(80), game(3, "Dixit"))),
    ]);
    let slow_first = ScriptedLookup::new([
        (1, Script::Delayed(Duration::from_millis(80), game(1, "Catan"))),
        (2, Script::Delayed(Duration::from_millis(40), game(2, "Azul"))),
        (3, Script::Delayed(Duration::from_millis(5), game(3, "Dixit"))),
    ]);

    let ids = [3, 1, 2, 1, 3];
    let a = enrich_with_game_details(groups_for(&ids), &fast_first, &no_wait(1)).await;
    let b = enrich_with_game_details(groups_for(&ids), &slow_first, &no_wait(1)).await;
    assert_eq!(a, b);
    let names: Vec<_> = a.iter().map(|g| g.name().unwrap()).collect();
    assert_eq!(names.first(), Some(&"Catan"));
    assert_eq!(names.last(), Some(&"Dixit"));
}

#[tokio::test]
async fn abandoned_enrichment_leaves_input_untouched() {
    let lookup = ScriptedLookup::new([(1, Script::Delayed(Duration::from_secs(10), game(1, "Catan")))]);
    let groups = group_listings(
        &[listing("t-1", 1, "A", "5.00"), listing("t-2", 1, "A", "5.00")],
        |_| true,
    );

    let outcome = tokio::time::timeout(
        Duration::from_millis(20),
        enrich_with_game_details(groups.clone(), &lookup, &no_wait(1)),
    )
    .await;
    assert!(outcome.is_err());
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].count, 2);
    assert!(groups[0].game_details.is_none());
}
