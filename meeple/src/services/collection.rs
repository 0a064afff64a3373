use std::sync::Arc;

use crate::db::DatabaseBackend;
use crate::error::{MeepleError, Result};
use crate::matching::{compare_collections, Compatibility, CollectionSets};
use crate::models::{CollectionFlag, GameId, ToggleOutcome, UserCollection, UserId};

/// Collection toggles and profile compatibility on top of the store.
#[derive(Clone)]
pub struct CollectionService {
    db: Arc<dyn DatabaseBackend>,
}

impl CollectionService {
    pub fn new(db: Arc<dyn DatabaseBackend>) -> Self {
        Self { db }
    }

    /// Flip one flag on a user's entry for a game, creating the entry on
    /// first use. The read-modify-write happens inside the store.
    pub async fn toggle(
        &self,
        user_id: &UserId,
        game_id: &GameId,
        flag: CollectionFlag,
    ) -> Result<ToggleOutcome> {
        if self.db.get_game_by_id(game_id).await?.is_none() {
            return Err(MeepleError::NotFound(format!("Game {game_id} not found")));
        }

        let outcome = self.db.toggle_user_game(user_id, game_id, flag).await?;

        tracing::debug!(
            user_id = %user_id,
            game_id = %game_id,
            flag = %flag,
            changed = outcome.changed,
            "Collection flag toggled"
        );

        Ok(outcome)
    }

    pub async fn collection(&self, user_id: &UserId) -> Result<UserCollection> {
        let entries = self.db.list_user_games(user_id).await?;
        let counts = CollectionSets::from_entries(&entries).counts();
        Ok(UserCollection {
            user_id: user_id.clone(),
            entries,
            counts,
        })
    }

    /// Compare the profile owner's collection with the viewer's. The viewer
    /// is passed in explicitly; nothing is read from request context.
    pub async fn compatibility(&self, owner: &UserId, viewer: &UserId) -> Result<Compatibility> {
        let owner_entries = self.db.list_user_games(owner).await?;
        let viewer_entries = if owner == viewer {
            owner_entries.clone()
        } else {
            self.db.list_user_games(viewer).await?
        };

        let owner_sets = CollectionSets::from_entries(&owner_entries);
        let viewer_sets = CollectionSets::from_entries(&viewer_entries);
        let result = compare_collections(&owner_sets, &viewer_sets);

        match &result {
            Compatibility::Available(report) => tracing::debug!(
                owner = %owner,
                viewer = %viewer,
                percent = report.overall.stats.percent,
                tier = %report.overall.tier,
                "Compatibility computed"
            ),
            Compatibility::Unavailable => tracing::debug!(
                owner = %owner,
                viewer = %viewer,
                "Viewer has no collection data, compatibility unavailable"
            ),
        }

        Ok(result)
    }
}
