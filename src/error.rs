// Domain error taxonomy
//
// Everything here is recoverable: the HTTP layer converts each variant
// into a status code plus a plain-text message (see api.rs).

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Insert attempted with a (title, publisher) pair that already exists
    #[error("a game titled \"{title}\" is already registered for publisher \"{publisher}\"")]
    AlreadyRegistered { title: String, publisher: String },

    /// Operation targeted an id that is not in the catalog
    #[error("game not found: {0}")]
    NotFound(Uuid),

    /// Insert collided on an id - ids are random v4, so this signals a bug
    #[error("id already present in store: {0}")]
    IdConflict(Uuid),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
