//! Catalogue aggregation: grouping raw deposited units into listings,
//! joining game details onto them, and reducing transaction lists into
//! dashboard statistics.
//!
//! Nothing here performs I/O except [`enrich_with_game_details`], which calls
//! out through an injected [`GameLookup`].

pub mod enrich;
pub mod grouping;
pub mod statistics;

pub use enrich::{enrich_with_game_details, GameLookup};
pub use grouping::group_listings;
pub use statistics::{
    balance_report, compute_deposit_statistics, compute_sale_statistics,
    compute_withdrawal_statistics,
};
