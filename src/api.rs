// HTTP surface - REST API with Axum
//
// Stateless request/response mapping over CatalogService. Domain errors are
// converted to status codes with plain-text bodies; nothing here is fatal.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, patch},
    Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::CatalogError;
use crate::game::GameInput;
use crate::service::CatalogService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

/// Build the full application router over the given catalog
pub fn router(catalog: CatalogService) -> Router {
    let state = AppState { catalog };

    Router::new()
        .route("/games", get(list_games).post(add_game))
        .route(
            "/games/:id",
            get(get_game).put(update_game).delete(remove_game),
        )
        .route("/games/:id/preco/:preco", patch(update_price))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// ERROR MAPPING
// ============================================================================

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match self {
            CatalogError::AlreadyRegistered { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::IdConflict(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            warn!("internal catalog error: {}", self);
        }

        (status, self.to_string()).into_response()
    }
}

// ============================================================================
// API HANDLERS
// ============================================================================

const MAX_PAGE_SIZE: usize = 50;

/// Pagination query parameters (defaults: page 1, 5 per page)
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    page: usize,
    #[serde(rename = "pageSize", default = "default_page_size")]
    page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    5
}

impl PageQuery {
    /// page must be >= 1, pageSize within 1..=50
    fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be at least 1".to_string());
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Err(format!("pageSize must be between 1 and {}", MAX_PAGE_SIZE));
        }
        Ok(())
    }
}

/// GET /games?page=&pageSize= - Paginated listing; 204 when the page is empty
async fn list_games(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    if let Err(message) = query.validate() {
        return (StatusCode::BAD_REQUEST, message).into_response();
    }

    let games = state.catalog.list_games(query.page, query.page_size);

    if games.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::OK, Json(games)).into_response()
    }
}

/// GET /games/{id} - Single game in the body; 204 when the id is unknown
async fn get_game(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.catalog.get_game(id) {
        Some(game) => (StatusCode::OK, Json(game)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// POST /games - Insert a new game; 422 when the (title, publisher) pair exists
async fn add_game(
    State(state): State<AppState>,
    Json(input): Json<GameInput>,
) -> Response {
    match state.catalog.add_game(input) {
        Ok(game) => {
            info!("game added: {} ({})", game.title, game.id);
            (StatusCode::OK, Json(game)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// PUT /games/{id} - Replace title/publisher/price; 404 when the id is unknown
async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<GameInput>,
) -> Response {
    match state.catalog.update_game(id, input) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => err.into_response(),
    }
}

/// PATCH /games/{id}/preco/{preco} - Replace only the price; 404 when unknown
async fn update_price(
    State(state): State<AppState>,
    Path((id, price)): Path<(Uuid, f64)>,
) -> Response {
    match state.catalog.update_price(id, price) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(err) => err.into_response(),
    }
}

/// DELETE /games/{id} - Remove the game; 404 when the id is unknown
async fn remove_game(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.catalog.remove_game(id) {
        Ok(()) => {
            info!("game removed: {}", id);
            StatusCode::OK.into_response()
        }
        Err(err) => err.into_response(),
    }
}
