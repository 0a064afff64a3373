//! Game catalog request/response DTOs for the v1 API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models;

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Request body for `POST /v1/games`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    /// Display name (1-200 characters).
    pub name: String,
    pub min_players: Option<u32>,
    pub max_players: Option<u32>,
    /// Typical playing time in minutes.
    pub playing_time_minutes: Option<u32>,
    pub year_published: Option<i32>,
}

impl From<CreateGameRequest> for models::CreateGameRequest {
    fn from(req: CreateGameRequest) -> Self {
        Self {
            name: req.name,
            min_players: req.min_players,
            max_players: req.max_players,
            playing_time_minutes: req.playing_time_minutes,
            year_published: req.year_published,
        }
    }
}

/// Query parameters for `GET /v1/games`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListGamesQuery {
    /// Maximum results per page (default 20, max 100).
    pub limit: Option<u32>,
    /// Opaque cursor from a previous response's `meta.nextCursor`.
    pub cursor: Option<String>,
}

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    /// Unique game ID (nanoid, 21 chars).
    pub game_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_players: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_players: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playing_time_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_published: Option<i32>,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String)]
    pub updated_at: DateTime<Utc>,
}

impl From<models::Game> for GameResponse {
    fn from(game: models::Game) -> Self {
        Self {
            game_id: game.id.into_inner(),
            name: game.name,
            min_players: game.min_players,
            max_players: game.max_players,
            playing_time_minutes: game.playing_time_minutes,
            year_published: game.year_published,
            created_at: game.created_at,
            updated_at: game.updated_at,
        }
    }
}

/// Response for `GET /v1/games`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListGamesResponse {
    pub games: Vec<GameResponse>,
}

/// Response for `DELETE /v1/games/{gameId}`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteGameResponse {
    pub game_id: String,
    pub deleted: bool,
}
