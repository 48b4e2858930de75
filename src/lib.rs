// Game Catalog - Core Library
// Exposes all modules for use in the API server and tests

pub mod api;
pub mod error;
pub mod game;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use api::{router, AppState};
pub use error::CatalogError;
pub use game::{Game, GameInput};
pub use service::CatalogService;
pub use store::GameStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
