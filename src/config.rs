use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Total attempts made for a single game-details lookup.
pub const LOOKUP_ATTEMPTS: u32 = 3;
/// Fixed delay before each lookup retry.
pub const LOOKUP_BACKOFF: Duration = Duration::from_millis(500);

pub fn endpoints() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("games", "games"),
        ("listings", "deposited-games"),
        ("sessions", "sessions"),
        ("sales", "sales"),
        ("deposits", "deposits"),
        ("withdrawals", "withdrawals"),
    ])
}

/// Resolve a logical resource name to its path segment on the backend.
///
/// Unknown names are passed through unchanged.
pub fn endpoint(resource: &str) -> &str {
    endpoints().get(resource).copied().unwrap_or(resource)
}

/// Retry behaviour for game-details lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Always at least 1.
    pub attempts: u32,
    /// Delay before each retry.
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(attempts: u32, backoff: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            backoff,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: LOOKUP_ATTEMPTS,
            backoff: LOOKUP_BACKOFF,
        }
    }
}
