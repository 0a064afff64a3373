use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CollectionFlag, Game, GameId, ToggleOutcome, UserGameEntry, UserId};

// ---------------------------------------------------------------------------
// Individual store traits
// ---------------------------------------------------------------------------

/// CRUD operations for the game catalog.
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn create_game(&self, game: &Game) -> Result<()>;
    async fn get_game_by_id(&self, id: &GameId) -> Result<Option<Game>>;
    /// Page through games ordered by name; also returns the total count.
    async fn list_games(&self, limit: u32, offset: u32) -> Result<(Vec<Game>, u32)>;
    async fn delete_game(&self, id: &GameId) -> Result<bool>;
}

/// Per-user collection rows.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Atomically flip one flag, creating the row on first use.
    async fn toggle_user_game(
        &self,
        user_id: &UserId,
        game_id: &GameId,
        flag: CollectionFlag,
    ) -> Result<ToggleOutcome>;
    async fn list_user_games(&self, user_id: &UserId) -> Result<Vec<UserGameEntry>>;
}

// ---------------------------------------------------------------------------
// Unified backend supertrait
// ---------------------------------------------------------------------------

/// A complete database backend that combines all store traits plus lifecycle
/// operations.
#[async_trait]
pub trait DatabaseBackend: GameStore + CollectionStore {
    /// Sync with remote (e.g. Turso replication). No-op for local-only backends.
    async fn sync(&self) -> Result<()>;
}
