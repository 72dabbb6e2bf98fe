use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Game — Catalogue details for a game title
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub min_players: Option<i64>,
    pub max_players: Option<i64>,
    pub min_age: Option<i64>,
    pub max_age: Option<i64>,
    pub editor_id: Option<i64>,
    pub category_id: Option<i64>,
}
