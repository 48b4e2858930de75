// Game entity and input model
//
// The wire contract uses Portuguese field names (titulo/produtora/preco);
// the Rust side uses English names with serde renames so the JSON stays
// byte-compatible with existing clients.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// GAME ENTITY
// ============================================================================

/// A catalog entry.
///
/// Identity: `id` (UUID, never changes once created).
/// Values: title, publisher, price (mutable via update operations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Stable identity - generated at insert, never changes
    pub id: Uuid,

    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "produtora")]
    pub publisher: String,

    /// Non-negative by convention; not enforced at the type level
    #[serde(rename = "preco")]
    pub price: f64,
}

impl Game {
    /// Create a new game with a freshly generated v4 id
    pub fn new(input: GameInput) -> Self {
        Game {
            id: Uuid::new_v4(),
            title: input.title,
            publisher: input.publisher,
            price: input.price,
        }
    }

    /// Check whether this game occupies the given (title, publisher) pair
    pub fn matches_pair(&self, title: &str, publisher: &str) -> bool {
        self.title == title && self.publisher == publisher
    }
}

// ============================================================================
// INPUT MODEL
// ============================================================================

/// Body of POST /games and PUT /games/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameInput {
    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "produtora")]
    pub publisher: String,

    #[serde(rename = "preco")]
    pub price: f64,
}

impl GameInput {
    pub fn new(title: impl Into<String>, publisher: impl Into<String>, price: f64) -> Self {
        GameInput {
            title: title.into(),
            publisher: publisher.into(),
            price,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
