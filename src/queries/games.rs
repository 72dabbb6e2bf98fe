//! Game catalogue queries.

use async_trait::async_trait;

use crate::aggregate::GameLookup;
use crate::client::BackendClient;
use crate::config::endpoint;
use crate::context::RequestContext;
use crate::error::Result;
use crate::models::Game;

// ---------------------------------------------------------------------------
// GameQuery
// ---------------------------------------------------------------------------

/// Query interface for game titles.
pub struct GameQuery<'a> {
    client: &'a BackendClient,
    ctx: &'a RequestContext,
}

impl<'a> GameQuery<'a> {
    /// Create a new `GameQuery` bound to the given client and caller.
    pub fn new(client: &'a BackendClient, ctx: &'a RequestContext) -> Self {
        Self { client, ctx }
    }

    /// Get a game by id, or `None` if the backend does not know it.
    pub async fn get(&self, game_id: i64) -> Result<Option<Game>> {
        let path = format!("{}/{}", endpoint("games"), game_id);
        self.client.get_optional(self.ctx, &path).await
    }

    /// List every game title.
    pub async fn list(&self) -> Result<Vec<Game>> {
        self.client.get_json(self.ctx, endpoint("games")).await
    }
}

#[async_trait]
impl<'a> GameLookup for GameQuery<'a> {
    async fn game(&self, game_id: i64) -> Result<Option<Game>> {
        self.get(game_id).await
    }
}
