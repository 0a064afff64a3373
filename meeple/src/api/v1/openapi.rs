use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Meeple API",
        version = "1.0.0",
        description = "Board game collections and profile compatibility.",
    ),
    paths(
        handlers::health::health_check,
        handlers::games::create_game,
        handlers::games::get_game,
        handlers::games::delete_game,
        handlers::games::list_games,
        handlers::collections::get_collection,
        handlers::collections::toggle_collection,
        handlers::compatibility::get_compatibility,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        response::ResponseMeta,
        // Games
        dto::games::CreateGameRequest,
        dto::games::ListGamesQuery,
        dto::games::GameResponse,
        dto::games::ListGamesResponse,
        dto::games::DeleteGameResponse,
        // Collections
        dto::collections::V1CollectionFlag,
        dto::collections::ToggleCollectionRequest,
        dto::collections::CollectionEntryResponse,
        dto::collections::ToggleCollectionResponse,
        dto::collections::CollectionCountsResponse,
        dto::collections::UserCollectionResponse,
        // Compatibility
        dto::compatibility::CompatibilityQuery,
        dto::compatibility::V1CompatibilityTier,
        dto::compatibility::CategoryMatchResponse,
        dto::compatibility::OverallMatchResponse,
        dto::compatibility::CompatibilityResponse,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::DatabaseStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "games", description = "Game catalog CRUD and listing"),
        (name = "collections", description = "Per-user favorite, wishlist and owned flags"),
        (name = "compatibility", description = "Collection overlap between two users"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
