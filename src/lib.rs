//! Game Depot SDK for Rust.
//!
//! Client-side logic for a second-hand game deposit/sale marketplace. Sellers
//! deposit games into a sales session, clients buy them, and managers follow
//! the session's balance. The backend is reached over a JSON REST API; this
//! crate turns what it returns into display-ready catalogue listings and
//! dashboard statistics.
//!
//! # Quick start
//!
//! ```no_run
//! use gamedepot_sdk::{GameDepotSdk, RequestContext, Role};
//! use gamedepot_sdk::queries::Scope;
//!
//! # async fn example() -> gamedepot_sdk::Result<()> {
//! let sdk = GameDepotSdk::builder()
//!     .base_url("https://depot.example.org/api")
//!     .build()?;
//! let ctx = RequestContext::new("token", Role::Manager);
//!
//! // Catalogue of session 4, grouped by game, seller and price
//! let listings = sdk.catalogue(&ctx).enriched_listings(4).await?;
//!
//! // Sales figures for the same session
//! let stats = sdk.balance(&ctx).sale_statistics(&Scope::Session(4)).await?;
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod queries;

pub use aggregate::{
    balance_report, compute_deposit_statistics, compute_sale_statistics,
    compute_withdrawal_statistics, enrich_with_game_details, group_listings, GameLookup,
};
pub use client::BackendClient;
pub use config::RetryPolicy;
pub use context::{RequestContext, Role, Visibility};
pub use error::{DepotError, Result};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// GameDepotSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`GameDepotSdk`] instance.
///
/// Use [`GameDepotSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](GameDepotSdkBuilder::build) to create the SDK.
pub struct GameDepotSdkBuilder {
    base_url: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl Default for GameDepotSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }
}

impl GameDepotSdkBuilder {
    /// Set the backend base URL. Defaults to [`config::DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set how game-details lookups are retried.
    ///
    /// Defaults to 3 attempts with a 500 ms pause before each retry.
    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Build the SDK. Performs no network I/O.
    pub fn build(self) -> Result<GameDepotSdk> {
        if self.retry.attempts == 0 {
            return Err(DepotError::InvalidArgument(
                "Retry policy needs at least one attempt".into(),
            ));
        }
        let client = BackendClient::new(&self.base_url, self.timeout)?;
        Ok(GameDepotSdk {
            client,
            retry: self.retry,
        })
    }
}

// ---------------------------------------------------------------------------
// GameDepotSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Game Depot SDK.
///
/// Owns a [`BackendClient`] and hands out query interfaces bound to one
/// caller's [`RequestContext`]. The SDK holds no caller state of its own, so
/// one instance can serve callers with different tokens and roles.
pub struct GameDepotSdk {
    client: BackendClient,
    retry: RetryPolicy,
}

impl GameDepotSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> GameDepotSdkBuilder {
        GameDepotSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the game title query interface.
    pub fn games<'a>(&'a self, ctx: &'a RequestContext) -> queries::GameQuery<'a> {
        queries::GameQuery::new(&self.client, ctx)
    }

    /// Access the session query interface.
    pub fn sessions<'a>(&'a self, ctx: &'a RequestContext) -> queries::SessionQuery<'a> {
        queries::SessionQuery::new(&self.client, ctx)
    }

    /// Access the catalogue query interface.
    ///
    /// Listings are filtered by what `ctx.role` may see, and enriched using
    /// the SDK's retry policy.
    pub fn catalogue<'a>(&'a self, ctx: &'a RequestContext) -> queries::CatalogueQuery<'a> {
        queries::CatalogueQuery::new(&self.client, ctx, self.retry)
    }

    /// Access the balance and statistics query interface.
    pub fn balance<'a>(&'a self, ctx: &'a RequestContext) -> queries::BalanceQuery<'a> {
        queries::BalanceQuery::new(&self.client, ctx)
    }

    /// Return the retry policy used for game-details lookups.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Return a reference to the underlying [`BackendClient`] for advanced usage.
    pub fn client(&self) -> &BackendClient {
        &self.client
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for GameDepotSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GameDepotSdk(base_url={}, timeout={:?}, lookup_attempts={})",
            self.client.base_url,
            self.client.timeout(),
            self.retry.attempts
        )
    }
}
