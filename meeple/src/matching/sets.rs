use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{CollectionCounts, CollectionFlag, GameId, UserGameEntry};

/// Set of game ids sharing one collection flag. Ordered for stable output.
pub type CollectionSet = BTreeSet<GameId>;

/// Addressable collection sets; `Any` is the union of the three flags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CollectionCategory {
    Favorite,
    Wishlist,
    Owned,
    Any,
}

impl CollectionCategory {
    /// The three flag-backed categories, in display order.
    pub const FLAGGED: [CollectionCategory; 3] = [Self::Favorite, Self::Wishlist, Self::Owned];
}

impl From<CollectionFlag> for CollectionCategory {
    fn from(flag: CollectionFlag) -> Self {
        match flag {
            CollectionFlag::Favorite => Self::Favorite,
            CollectionFlag::Wishlist => Self::Wishlist,
            CollectionFlag::Owned => Self::Owned,
        }
    }
}

/// One user's games partitioned by flag, rebuilt from rows on every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionSets {
    favorite: CollectionSet,
    wishlist: CollectionSet,
    owned: CollectionSet,
    any: CollectionSet,
}

impl CollectionSets {
    /// Partition rows that all belong to the same user.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a UserGameEntry>,
    {
        let mut sets = Self::default();
        for entry in entries {
            if entry.is_favorite {
                sets.favorite.insert(entry.game_id.clone());
            }
            if entry.is_wishlist {
                sets.wishlist.insert(entry.game_id.clone());
            }
            if entry.is_owned {
                sets.owned.insert(entry.game_id.clone());
            }
            if !entry.is_empty() {
                sets.any.insert(entry.game_id.clone());
            }
        }
        sets
    }

    pub fn get(&self, category: CollectionCategory) -> &CollectionSet {
        match category {
            CollectionCategory::Favorite => &self.favorite,
            CollectionCategory::Wishlist => &self.wishlist,
            CollectionCategory::Owned => &self.owned,
            CollectionCategory::Any => &self.any,
        }
    }

    pub fn any(&self) -> &CollectionSet {
        &self.any
    }

    /// True when the user has no flagged game at all.
    pub fn is_empty(&self) -> bool {
        self.any.is_empty()
    }

    pub fn counts(&self) -> CollectionCounts {
        CollectionCounts {
            favorite: self.favorite.len(),
            wishlist: self.wishlist.len(),
            owned: self.owned.len(),
            any: self.any.len(),
        }
    }
}
