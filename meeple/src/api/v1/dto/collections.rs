//! Collection request/response DTOs for the v1 API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{self, CollectionFlag};

/// Collection flag on the wire: `"favorite"`, `"wishlist"` or `"owned"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum V1CollectionFlag {
    Favorite,
    Wishlist,
    Owned,
}

impl From<V1CollectionFlag> for CollectionFlag {
    fn from(flag: V1CollectionFlag) -> Self {
        match flag {
            V1CollectionFlag::Favorite => CollectionFlag::Favorite,
            V1CollectionFlag::Wishlist => CollectionFlag::Wishlist,
            V1CollectionFlag::Owned => CollectionFlag::Owned,
        }
    }
}

/// Request body for `POST /v1/users/{userId}/collection:toggle`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleCollectionRequest {
    pub game_id: String,
    pub flag: V1CollectionFlag,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEntryResponse {
    pub game_id: String,
    pub is_favorite: bool,
    pub is_wishlist: bool,
    pub is_owned: bool,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String)]
    pub updated_at: DateTime<Utc>,
}

impl From<models::UserGameEntry> for CollectionEntryResponse {
    fn from(entry: models::UserGameEntry) -> Self {
        Self {
            game_id: entry.game_id.into_inner(),
            is_favorite: entry.is_favorite,
            is_wishlist: entry.is_wishlist,
            is_owned: entry.is_owned,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

/// Response for a toggle action. `changed` is false when the action was a
/// no-op (toggling the wishlist of an owned game).
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleCollectionResponse {
    pub entry: CollectionEntryResponse,
    pub changed: bool,
}

impl From<models::ToggleOutcome> for ToggleCollectionResponse {
    fn from(outcome: models::ToggleOutcome) -> Self {
        Self {
            entry: outcome.entry.into(),
            changed: outcome.changed,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCountsResponse {
    pub favorite: usize,
    pub wishlist: usize,
    pub owned: usize,
    /// Games carrying at least one flag.
    pub any: usize,
}

impl From<models::CollectionCounts> for CollectionCountsResponse {
    fn from(counts: models::CollectionCounts) -> Self {
        Self {
            favorite: counts.favorite,
            wishlist: counts.wishlist,
            owned: counts.owned,
            any: counts.any,
        }
    }
}

/// Response for `GET /v1/users/{userId}/collection`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCollectionResponse {
    pub user_id: String,
    pub entries: Vec<CollectionEntryResponse>,
    pub counts: CollectionCountsResponse,
}

impl From<models::UserCollection> for UserCollectionResponse {
    fn from(collection: models::UserCollection) -> Self {
        Self {
            user_id: collection.user_id.to_string(),
            entries: collection.entries.into_iter().map(Into::into).collect(),
            counts: collection.counts.into(),
        }
    }
}
