//! v1 Collection handlers.

use axum::extract::{Path, State};

use crate::api::extractors::AppJson;
use crate::api::v1::dto::{ToggleCollectionRequest, ToggleCollectionResponse, UserCollectionResponse};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};
use crate::api::AppState;
use crate::models::{GameId, UserId};

/// `GET /api/v1/users/{userId}/collection`
#[utoipa::path(
    get,
    path = "/api/v1/users/{userId}/collection",
    tag = "collections",
    operation_id = "collections.get",
    params(("userId" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User collection", body = UserCollectionResponse),
        (status = 400, description = "Invalid user id", body = ApiError),
    )
)]
pub async fn get_collection(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResponse<UserCollectionResponse> {
    let user_id = match UserId::parse(&user_id) {
        Ok(id) => id,
        Err(e) => return e.into(),
    };

    match state.collections.collection(&user_id).await {
        Ok(collection) => ApiResponse::success(UserCollectionResponse::from(collection)),
        Err(e) => e.into(),
    }
}

/// `POST /api/v1/users/{userId}/collection:toggle`
///
/// Flips one flag on the user's entry for a game. Marking a game owned clears
/// its wishlist flag; the wishlist flag cannot be set while the game is owned.
#[utoipa::path(
    post,
    path = "/api/v1/users/{userId}/collection:toggle",
    tag = "collections",
    operation_id = "collections.toggle",
    params(("userId" = String, Path, description = "User ID")),
    request_body = ToggleCollectionRequest,
    responses(
        (status = 200, description = "Flag toggled", body = ToggleCollectionResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Game not found", body = ApiError),
    )
)]
pub async fn toggle_collection(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    AppJson(req): AppJson<ToggleCollectionRequest>,
) -> ApiResponse<ToggleCollectionResponse> {
    let user_id = match UserId::parse(&user_id) {
        Ok(id) => id,
        Err(e) => return e.into(),
    };

    if req.game_id.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "gameId cannot be empty");
    }
    let game_id = GameId::from(req.game_id.trim());

    match state
        .collections
        .toggle(&user_id, &game_id, req.flag.into())
        .await
    {
        Ok(outcome) => ApiResponse::success(ToggleCollectionResponse::from(outcome)),
        Err(e) => e.into(),
    }
}
