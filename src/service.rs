// Catalog service - business rules between the HTTP layer and the store
//
// Every operation takes the store mutex exactly once, so compound steps
// like duplicate-check-then-insert run as a single critical section even
// under concurrent requests.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::error::{CatalogError, Result};
use crate::game::{Game, GameInput};
use crate::store::GameStore;

// ============================================================================
// CATALOG SERVICE
// ============================================================================

/// Shared handle over the guarded store; cheap to clone into handlers
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<Mutex<GameStore>>,
}

impl CatalogService {
    /// Service over an empty store
    pub fn new() -> Self {
        CatalogService::with_store(GameStore::new())
    }

    /// Service over the default seeded catalog
    pub fn with_defaults() -> Self {
        CatalogService::with_store(GameStore::with_defaults())
    }

    pub fn with_store(store: GameStore) -> Self {
        CatalogService {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Paginated listing; empty is a valid, non-error result.
    ///
    /// Parameter bounds (page >= 1, page_size 1..=50) are enforced at the
    /// HTTP layer before this is called.
    pub fn list_games(&self, page: usize, page_size: usize) -> Vec<Game> {
        let store = self.store.lock().unwrap();
        store.list(page, page_size)
    }

    /// Lookup by id; absent is not an error
    pub fn get_game(&self, id: Uuid) -> Option<Game> {
        let store = self.store.lock().unwrap();
        store.get(id).cloned()
    }

    /// Insert a new game unless its (title, publisher) pair already exists
    pub fn add_game(&self, input: GameInput) -> Result<Game> {
        let mut store = self.store.lock().unwrap();

        if !store.find(&input.title, &input.publisher).is_empty() {
            return Err(CatalogError::AlreadyRegistered {
                title: input.title,
                publisher: input.publisher,
            });
        }

        let game = Game::new(input);
        store.insert(game.clone())?;
        Ok(game)
    }

    /// Replace title, publisher and price of an existing game
    pub fn update_game(&self, id: Uuid, input: GameInput) -> Result<()> {
        let mut store = self.store.lock().unwrap();

        let mut game = store.get(id).cloned().ok_or(CatalogError::NotFound(id))?;
        game.title = input.title;
        game.publisher = input.publisher;
        game.price = input.price;
        store.update(game);
        Ok(())
    }

    /// Replace only the price of an existing game
    pub fn update_price(&self, id: Uuid, price: f64) -> Result<()> {
        let mut store = self.store.lock().unwrap();

        let mut game = store.get(id).cloned().ok_or(CatalogError::NotFound(id))?;
        game.price = price;
        store.update(game);
        Ok(())
    }

    /// Delete an existing game
    pub fn remove_game(&self, id: Uuid) -> Result<()> {
        let mut store = self.store.lock().unwrap();

        if store.get(id).is_none() {
            return Err(CatalogError::NotFound(id));
        }
        store.remove(id);
        Ok(())
    }

    /// Number of games currently in the catalog
    pub fn count(&self) -> usize {
        let store = self.store.lock().unwrap();
        store.len()
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        CatalogService::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_game_assigns_id_and_stores() {
        let service = CatalogService::new();

        let game = service
            .add_game(GameInput::new("PES 2021", "Konami", 200.0))
            .unwrap();

        assert!(!game.id.is_nil());
        assert_eq!(service.get_game(game.id), Some(game));
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn test_add_duplicate_pair_fails_and_store_unchanged() {
        let service = CatalogService::new();
        service
            .add_game(GameInput::new("PES 2021", "Konami", 200.0))
            .unwrap();

        let result = service.add_game(GameInput::new("PES 2021", "Konami", 180.0));

        assert!(matches!(
            result,
            Err(CatalogError::AlreadyRegistered { .. })
        ));
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn test_same_title_different_publisher_both_succeed() {
        let service = CatalogService::new();

        service
            .add_game(GameInput::new("Silent Hill", "Konami", 100.0))
            .unwrap();
        service
            .add_game(GameInput::new("Silent Hill", "Capcom", 90.0))
            .unwrap();

        assert_eq!(service.count(), 2);
    }

    #[test]
    fn test_update_game_replaces_all_fields() {
        let service = CatalogService::new();
        let game = service
            .add_game(GameInput::new("PES 2020", "Konami", 190.0))
            .unwrap();

        service
            .update_game(game.id, GameInput::new("PES 2021", "Konami", 200.0))
            .unwrap();

        let updated = service.get_game(game.id).unwrap();
        assert_eq!(updated.id, game.id);
        assert_eq!(updated.title, "PES 2021");
        assert_eq!(updated.price, 200.0);
    }

    #[test]
    fn test_update_missing_game_fails_and_store_unchanged() {
        let service = CatalogService::new();
        service
            .add_game(GameInput::new("PES 2021", "Konami", 200.0))
            .unwrap();

        let missing = Uuid::new_v4();
        let result = service.update_game(missing, GameInput::new("X", "Y", 1.0));

        assert_eq!(result, Err(CatalogError::NotFound(missing)));
        assert_eq!(service.count(), 1);
        assert_eq!(service.list_games(1, 50)[0].title, "PES 2021");
    }

    #[test]
    fn test_update_price_only_touches_price() {
        let service = CatalogService::new();
        let game = service
            .add_game(GameInput::new("PES 2021", "Konami", 200.0))
            .unwrap();

        service.update_price(game.id, 149.9).unwrap();

        let updated = service.get_game(game.id).unwrap();
        assert_eq!(updated.price, 149.9);
        assert_eq!(updated.title, "PES 2021");
        assert_eq!(updated.publisher, "Konami");
    }

    #[test]
    fn test_update_price_missing_game_fails() {
        let service = CatalogService::new();
        let missing = Uuid::new_v4();

        assert_eq!(
            service.update_price(missing, 10.0),
            Err(CatalogError::NotFound(missing))
        );
    }

    #[test]
    fn test_remove_missing_game_fails_and_store_unchanged() {
        let service = CatalogService::new();
        service
            .add_game(GameInput::new("PES 2021", "Konami", 200.0))
            .unwrap();

        let missing = Uuid::new_v4();
        assert_eq!(
            service.remove_game(missing),
            Err(CatalogError::NotFound(missing))
        );
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn test_list_games_pages_through_catalog() {
        let service = CatalogService::new();
        for i in 0..12 {
            service
                .add_game(GameInput::new(format!("Game {}", i), "Konami", 10.0))
                .unwrap();
        }

        assert_eq!(service.list_games(1, 5).len(), 5);
        assert_eq!(service.list_games(3, 5).len(), 2);
        assert!(service.list_games(4, 5).is_empty());
    }

    #[test]
    fn test_full_lifecycle_scenario() {
        let service = CatalogService::new();

        // Insert succeeds and gets an identifier
        let game = service
            .add_game(GameInput::new("Chrono Trigger", "Square", 59.99))
            .unwrap();
        assert!(!game.id.is_nil());

        // Inserting the same pair again is a duplicate
        let dup = service.add_game(GameInput::new("Chrono Trigger", "Square", 59.99));
        assert!(matches!(dup, Err(CatalogError::AlreadyRegistered { .. })));

        // Price patch is visible on lookup
        service.update_price(game.id, 39.99).unwrap();
        assert_eq!(service.get_game(game.id).unwrap().price, 39.99);

        // Delete, then the id is gone
        service.remove_game(game.id).unwrap();
        assert_eq!(service.get_game(game.id), None);
    }
}
