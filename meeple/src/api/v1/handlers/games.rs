//! v1 Game catalog handlers.

use axum::extract::{Path, State};
use validator::Validate;

use crate::api::extractors::{AppJson, AppQuery};
use crate::api::v1::dto::{
    CreateGameRequest, DeleteGameResponse, GameResponse, ListGamesQuery, ListGamesResponse,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode, ResponseMeta};
use crate::api::AppState;
use crate::error::MeepleError;
use crate::models::{self, Game, GameId, Pagination};

const DEFAULT_PAGE_SIZE: u32 = 20;
const MAX_PAGE_SIZE: u32 = 100;

/// `POST /api/v1/games`
#[utoipa::path(
    post,
    path = "/api/v1/games",
    tag = "games",
    operation_id = "games.create",
    request_body = CreateGameRequest,
    responses(
        (status = 201, description = "Game created", body = GameResponse),
        (status = 400, description = "Invalid request", body = ApiError),
    )
)]
pub async fn create_game(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateGameRequest>,
) -> ApiResponse<GameResponse> {
    let req: models::CreateGameRequest = req.into();
    if let Err(e) = req.validate() {
        return MeepleError::from(e).into();
    }

    let game = Game::new(req);
    if let Err(e) = state.db.create_game(&game).await {
        return e.into();
    }

    tracing::info!(game_id = %game.id, name = %game.name, "Game created");
    ApiResponse::created(GameResponse::from(game))
}

/// `GET /api/v1/games/{gameId}`
#[utoipa::path(
    get,
    path = "/api/v1/games/{gameId}",
    tag = "games",
    operation_id = "games.get",
    params(("gameId" = String, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Game found", body = GameResponse),
        (status = 404, description = "Game not found", body = ApiError),
    )
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<GameResponse> {
    let game_id = GameId::from(id);
    match state.db.get_game_by_id(&game_id).await {
        Ok(Some(game)) => ApiResponse::success(GameResponse::from(game)),
        Ok(None) => ApiResponse::error(ErrorCode::NotFound, format!("Game {game_id} not found")),
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/games/{gameId}`
///
/// Collection entries referencing the game are removed with it.
#[utoipa::path(
    delete,
    path = "/api/v1/games/{gameId}",
    tag = "games",
    operation_id = "games.delete",
    params(("gameId" = String, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Game deleted", body = DeleteGameResponse),
        (status = 404, description = "Game not found", body = ApiError),
    )
)]
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<DeleteGameResponse> {
    let game_id = GameId::from(id);
    match state.db.delete_game(&game_id).await {
        Ok(true) => {
            tracing::info!(game_id = %game_id, "Game deleted");
            ApiResponse::success(DeleteGameResponse {
                game_id: game_id.into_inner(),
                deleted: true,
            })
        }
        Ok(false) => ApiResponse::error(ErrorCode::NotFound, format!("Game {game_id} not found")),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/games`
///
/// Lists games ordered by name. The cursor is the offset of the next page.
#[utoipa::path(
    get,
    path = "/api/v1/games",
    tag = "games",
    operation_id = "games.list",
    params(ListGamesQuery),
    responses(
        (status = 200, description = "Games listed", body = ListGamesResponse),
        (status = 400, description = "Invalid cursor or limit", body = ApiError),
    )
)]
pub async fn list_games(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListGamesQuery>,
) -> ApiResponse<ListGamesResponse> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    let offset = match query.cursor.as_deref() {
        None | Some("") => 0,
        Some(cursor) => match cursor.parse::<u32>() {
            Ok(offset) => offset,
            Err(_) => return ApiResponse::error(ErrorCode::InvalidRequest, "Invalid cursor"),
        },
    };

    let (games, total) = match state.db.list_games(limit, offset).await {
        Ok(page) => page,
        Err(e) => return e.into(),
    };

    let pagination = Pagination::new(limit, offset, total);
    let meta = ResponseMeta {
        next_cursor: pagination.next_offset().map(|next| next.to_string()),
        total: Some(u64::from(total)),
    };

    let games = games.into_iter().map(GameResponse::from).collect();
    ApiResponse::success_with_meta(ListGamesResponse { games }, meta)
}
