use crate::db::connection::Database;
use crate::db::repository::{GameRepository, UserGameRepository};
use crate::db::traits::{CollectionStore, DatabaseBackend, GameStore};
use crate::error::Result;
use crate::models::{CollectionFlag, Game, GameId, ToggleOutcome, UserGameEntry, UserId};
use async_trait::async_trait;

pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GameStore for LibSqlBackend {
    async fn create_game(&self, game: &Game) -> Result<()> {
        let conn = self.db.connect().await?;
        GameRepository::create(&conn, game).await
    }
    async fn get_game_by_id(&self, id: &GameId) -> Result<Option<Game>> {
        let conn = self.db.connect().await?;
        GameRepository::get_by_id(&conn, id).await
    }
    async fn list_games(&self, limit: u32, offset: u32) -> Result<(Vec<Game>, u32)> {
        let conn = self.db.connect().await?;
        GameRepository::list(&conn, limit, offset).await
    }
    async fn delete_game(&self, id: &GameId) -> Result<bool> {
        let conn = self.db.connect().await?;
        GameRepository::delete(&conn, id).await
    }
}

#[async_trait]
impl CollectionStore for LibSqlBackend {
    async fn toggle_user_game(
        &self,
        user_id: &UserId,
        game_id: &GameId,
        flag: CollectionFlag,
    ) -> Result<ToggleOutcome> {
        let conn = self.db.connect().await?;
        UserGameRepository::toggle(&conn, user_id, game_id, flag).await
    }
    async fn list_user_games(&self, user_id: &UserId) -> Result<Vec<UserGameEntry>> {
        let conn = self.db.connect().await?;
        UserGameRepository::list_by_user(&conn, user_id).await
    }
}

#[async_trait]
impl DatabaseBackend for LibSqlBackend {
    async fn sync(&self) -> Result<()> {
        self.db.sync().await
    }
}
