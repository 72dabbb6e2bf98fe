//! Shared fixtures for the Game Depot SDK integration tests.
//!
//! Provides builders for raw listings and transaction records, plus
//! `ScriptedLookup`, a `GameLookup` whose per-game behaviour is fixed up front
//! and which counts the calls it receives.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use gamedepot_sdk::models::{
    DepositRecord, Game, ListingGroup, RawListing, SaleRecord, Session, WithdrawalRecord,
};
use gamedepot_sdk::{DepotError, GameLookup, Result};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

pub fn listing(tag: &str, game_id: i64, seller_id: &str, price: &str) -> RawListing {
    RawListing {
        tag: tag.to_string(),
        game_id,
        seller_id: seller_id.to_string(),
        price: price.to_string(),
        for_sale: true,
        sold: false,
        session_id: 1,
    }
}

pub fn sold(mut l: RawListing) -> RawListing {
    l.sold = true;
    l
}

pub fn withheld(mut l: RawListing) -> RawListing {
    l.for_sale = false;
    l
}

/// A mixed catalogue: two sellers, three games, some units sold or withheld.
pub fn sample_catalogue() -> Vec<RawListing> {
    vec![
        listing("t-01", 3, "A", "25.00"),
        listing("t-02", 1, "A", "10.00"),
        listing("t-03", 1, "A", "10.0"),
        listing("t-04", 1, "B", "10.00"),
        sold(listing("t-05", 1, "B", "10.00")),
        listing("t-06", 2, "B", "7.50"),
        withheld(listing("t-07", 2, "B", "7.50")),
        listing("t-08", 3, "A", "25"),
        listing("t-09", 1, "A", "12.00"),
    ]
}

/// Expand groups back into one raw unit per counted member.
pub fn expand(groups: &[ListingGroup]) -> Vec<RawListing> {
    groups
        .iter()
        .enumerate()
        .flat_map(|(g, group)| {
            (0..group.count).map(move |i| {
                listing(
                    &format!("x-{}-{}", g, i),
                    group.game_id,
                    &group.seller_id,
                    &group.price.to_string(),
                )
            })
        })
        .collect()
}

pub fn sale(amount: &str, commission: &str, payment_method: &str) -> SaleRecord {
    SaleRecord {
        amount: amount.to_string(),
        commission: commission.to_string(),
        payment_method: payment_method.to_string(),
        ..Default::default()
    }
}

pub fn deposit(amount: &str) -> DepositRecord {
    DepositRecord {
        amount: amount.to_string(),
        ..Default::default()
    }
}

pub fn withdrawal(amount: &str) -> WithdrawalRecord {
    WithdrawalRecord {
        amount: amount.to_string(),
        ..Default::default()
    }
}

pub fn session(id: i64, deposit_fee: &str, discount: &str) -> Session {
    Session {
        id,
        name: format!("Session {}", id),
        start_date: None,
        end_date: None,
        deposit_fee: deposit_fee.to_string(),
        discount: discount.to_string(),
        commission: "0.10".to_string(),
        is_active: true,
    }
}

pub fn game(id: i64, name: &str) -> Game {
    Game {
        id,
        name: name.to_string(),
        description: None,
        image: None,
        min_players: Some(2),
        max_players: Some(4),
        min_age: Some(8),
        max_age: None,
        editor_id: None,
        category_id: None,
    }
}

// ---------------------------------------------------------------------------
// ScriptedLookup
// ---------------------------------------------------------------------------

/// How `ScriptedLookup` answers for one game id.
#[derive(Clone)]
pub enum Script {
    Found(Game),
    Missing,
    /// Fail the first `n` calls, then return the game.
    FailThenFound(u32, Game),
    AlwaysFail,
    /// Return the game after sleeping.
    Delayed(Duration, Game),
}

pub struct ScriptedLookup {
    scripts: HashMap<i64, Script>,
    calls: Mutex<HashMap<i64, u32>>,
}

impl ScriptedLookup {
    pub fn new(scripts: impl IntoIterator<Item = (i64, Script)>) -> Self {
        Self {
            scripts: scripts.into_iter().collect(),
            calls: Mutex::new(HashMap::new()),
        }
    }

    pub fn calls(&self, game_id: i64) -> u32 {
        self.calls.lock().unwrap().get(&game_id).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> u32 {
        self.calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl GameLookup for ScriptedLookup {
    async fn game(&self, game_id: i64) -> Result<Option<Game>> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            let n = calls.entry(game_id).or_insert(0);
            *n += 1;
            *n
        };
        match self.scripts.get(&game_id).cloned() {
            Some(Script::Found(g)) => Ok(Some(g)),
            Some(Script::Missing) | None => Ok(None),
            Some(Script::FailThenFound(n, g)) => {
                if call <= n {
                    Err(DepotError::NotFound(format!("transient failure for {}", game_id)))
                } else {
                    Ok(Some(g))
                }
            }
            Some(Script::AlwaysFail) => Err(DepotError::NotFound(format!("game {}", game_id))),
            Some(Script::Delayed(d, g)) => {
                tokio::time::sleep(d).await;
                Ok(Some(g))
            }
        }
    }
}
