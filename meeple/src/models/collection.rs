use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{GameId, UserId};

/// One of the three per-user flags a game can carry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CollectionFlag {
    Favorite,
    Wishlist,
    Owned,
}

impl std::fmt::Display for CollectionFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Favorite => write!(f, "favorite"),
            Self::Wishlist => write!(f, "wishlist"),
            Self::Owned => write!(f, "owned"),
        }
    }
}

/// A user's flags for a single game.
///
/// Rows are created on the first toggle and never deleted; an entry with every
/// flag cleared is valid and simply contributes to no collection set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserGameEntry {
    pub user_id: UserId,
    pub game_id: GameId,
    pub is_favorite: bool,
    pub is_wishlist: bool,
    pub is_owned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserGameEntry {
    pub fn new(user_id: UserId, game_id: GameId) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            game_id,
            is_favorite: false,
            is_wishlist: false,
            is_owned: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.is_favorite || self.is_wishlist || self.is_owned)
    }

    /// Apply a toggle action and report whether any flag changed.
    ///
    /// Owned games never sit on the wishlist: owning clears the wishlist flag,
    /// and toggling the wishlist of an owned game does nothing.
    pub fn toggle(&mut self, flag: CollectionFlag) -> bool {
        match flag {
            CollectionFlag::Favorite => {
                self.is_favorite = !self.is_favorite;
            }
            CollectionFlag::Wishlist => {
                if self.is_owned {
                    return false;
                }
                self.is_wishlist = !self.is_wishlist;
            }
            CollectionFlag::Owned => {
                self.is_owned = !self.is_owned;
                if self.is_owned {
                    self.is_wishlist = false;
                }
            }
        }
        self.updated_at = Utc::now();
        true
    }
}

/// Number of games a user has in each collection set.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionCounts {
    pub favorite: usize,
    pub wishlist: usize,
    pub owned: usize,
    pub any: usize,
}

/// A user's stored entries together with their per-set counts.
#[derive(Debug, Clone)]
pub struct UserCollection {
    pub user_id: UserId,
    pub entries: Vec<UserGameEntry>,
    pub counts: CollectionCounts,
}

/// Result of a toggle action.
#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    pub entry: UserGameEntry,
    pub changed: bool,
}
