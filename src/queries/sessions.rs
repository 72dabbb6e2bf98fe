//! Session queries.

use crate::client::BackendClient;
use crate::config::endpoint;
use crate::context::RequestContext;
use crate::error::{DepotError, Result};
use crate::models::{Session, SessionUpdate};

// ---------------------------------------------------------------------------
// SessionQuery
// ---------------------------------------------------------------------------

/// Query interface for sales sessions.
pub struct SessionQuery<'a> {
    client: &'a BackendClient,
    ctx: &'a RequestContext,
}

impl<'a> SessionQuery<'a> {
    /// Create a new `SessionQuery` bound to the given client and caller.
    pub fn new(client: &'a BackendClient, ctx: &'a RequestContext) -> Self {
        Self { client, ctx }
    }

    pub async fn get(&self, session_id: i64) -> Result<Option<Session>> {
        let path = format!("{}/{}", endpoint("sessions"), session_id);
        self.client.get_optional(self.ctx, &path).await
    }

    pub async fn list(&self) -> Result<Vec<Session>> {
        self.client.get_json(self.ctx, endpoint("sessions")).await
    }

    /// The session currently open for deposits and sales.
    ///
    /// Fails with [`DepotError::NotFound`] when no session is active.
    pub async fn active(&self) -> Result<Session> {
        let path = format!("{}/active", endpoint("sessions"));
        self.client
            .get_optional(self.ctx, &path)
            .await?
            .ok_or_else(|| DepotError::NotFound("No active session".into()))
    }

    /// Send only the fields set in `update`; returns the stored session.
    pub async fn update(&self, session_id: i64, update: &SessionUpdate) -> Result<Session> {
        let path = format!("{}/{}", endpoint("sessions"), session_id);
        self.client.patch_json(self.ctx, &path, update).await
    }
}
