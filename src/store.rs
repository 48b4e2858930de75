// In-memory record store
//
// Plain data structure with no interior locking: CatalogService wraps the
// whole store in a single Mutex so check-then-insert stays atomic.

use std::collections::HashMap;

use uuid::{uuid, Uuid};

use crate::error::CatalogError;
use crate::game::Game;

// ============================================================================
// GAME STORE
// ============================================================================

/// Process-lifetime store of games keyed by id.
///
/// A side index of ids preserves insertion order, so paginated listings are
/// stable across calls (HashMap iteration order alone is not).
#[derive(Debug, Default)]
pub struct GameStore {
    games: HashMap<Uuid, Game>,
    order: Vec<Uuid>,
}

impl GameStore {
    /// Create an empty store
    pub fn new() -> Self {
        GameStore {
            games: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a store pre-loaded with the default catalog
    pub fn with_defaults() -> Self {
        let mut store = GameStore::new();
        store.seed_default_games();
        store
    }

    /// Initial catalog contents (ids are fixed so restarts stay consistent)
    fn seed_default_games(&mut self) {
        let defaults = [
            (uuid!("0ca314a5-9282-45d8-92c3-2985f2a9fd04"), "PES 2021", 200.0),
            (uuid!("eb909ced-1862-4789-8641-1bba36c23db3"), "PES 2020", 190.0),
            (uuid!("5e99c84a-108b-4dfa-ab7e-d8c55957a7ec"), "PES 2019", 180.0),
            (uuid!("da033439-f352-4539-879f-515759312d53"), "PES 2018", 170.0),
            (uuid!("92576bd2-388e-4f5d-96c1-8bfda6c5a268"), "Silent Hill", 100.0),
            (uuid!("c3c9b5da-6a45-4de1-b28b-491cbf83b589"), "Silent Hill 2", 150.0),
        ];

        for (id, title, price) in defaults {
            let game = Game {
                id,
                title: title.to_string(),
                publisher: "Konami".to_string(),
                price,
            };
            // Fixed distinct ids, cannot conflict
            let _ = self.insert(game);
        }
    }

    /// Get the page of games at offset `(page - 1) * page_size`.
    ///
    /// An out-of-range page returns an empty Vec, never an error.
    pub fn list(&self, page: usize, page_size: usize) -> Vec<Game> {
        let offset = page.saturating_sub(1).saturating_mul(page_size);

        self.order
            .iter()
            .skip(offset)
            .take(page_size)
            .filter_map(|id| self.games.get(id))
            .cloned()
            .collect()
    }

    /// Exact lookup by id; absent is not an error
    pub fn get(&self, id: Uuid) -> Option<&Game> {
        self.games.get(&id)
    }

    /// Exact match on both title and publisher
    pub fn find(&self, title: &str, publisher: &str) -> Vec<Game> {
        self.order
            .iter()
            .filter_map(|id| self.games.get(id))
            .filter(|game| game.matches_pair(title, publisher))
            .cloned()
            .collect()
    }

    /// Add a new entry keyed by its id
    pub fn insert(&mut self, game: Game) -> Result<(), CatalogError> {
        if self.games.contains_key(&game.id) {
            return Err(CatalogError::IdConflict(game.id));
        }

        self.order.push(game.id);
        self.games.insert(game.id, game);
        Ok(())
    }

    /// Replace the entry at an existing id (caller checks existence first)
    pub fn update(&mut self, game: Game) {
        self.games.insert(game.id, game);
    }

    /// Remove the entry if present; no-op otherwise
    pub fn remove(&mut self, id: Uuid) {
        if self.games.remove(&id).is_some() {
            self.order.retain(|entry| *entry != id);
        }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
