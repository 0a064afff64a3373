use chrono::{DateTime, Utc};
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::{Game, GameId};

pub struct GameRepository;

impl GameRepository {
    pub async fn create(conn: &Connection, game: &Game) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO games (
                id, name, min_players, max_players, playing_time_minutes,
                year_published, created_at, updated_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8
            )
            "#,
            params![
                game.id.as_str(),
                game.name.clone(),
                game.min_players.map(i64::from),
                game.max_players.map(i64::from),
                game.playing_time_minutes.map(i64::from),
                game.year_published.map(i64::from),
                game.created_at.to_rfc3339(),
                game.updated_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_id(conn: &Connection, id: &GameId) -> Result<Option<Game>> {
        let mut rows = conn
            .query(
                r#"
                SELECT id, name, min_players, max_players, playing_time_minutes,
                       year_published, created_at, updated_at
                FROM games
                WHERE id = ?1
                "#,
                params![id.as_str()],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_game(&row)?))
        } else {
            Ok(None)
        }
    }

    /// Page through the catalog ordered by name. Returns the page and the
    /// total number of games.
    pub async fn list(conn: &Connection, limit: u32, offset: u32) -> Result<(Vec<Game>, u32)> {
        let mut count_rows = conn.query("SELECT COUNT(*) FROM games", ()).await?;
        let total: i64 = if let Some(row) = count_rows.next().await? {
            row.get(0)?
        } else {
            0
        };

        let mut rows = conn
            .query(
                r#"
                SELECT id, name, min_players, max_players, playing_time_minutes,
                       year_published, created_at, updated_at
                FROM games
                ORDER BY name COLLATE NOCASE ASC, id ASC
                LIMIT ?1 OFFSET ?2
                "#,
                params![i64::from(limit), i64::from(offset)],
            )
            .await?;

        let mut games = Vec::new();
        while let Some(row) = rows.next().await? {
            games.push(Self::row_to_game(&row)?);
        }

        Ok((games, total as u32))
    }

    /// Delete a game. The `trg_games_delete_entries` trigger removes its
    /// collection rows in the same statement.
    pub async fn delete(conn: &Connection, id: &GameId) -> Result<bool> {
        let rows_affected = conn
            .execute("DELETE FROM games WHERE id = ?1", params![id.as_str()])
            .await?;

        Ok(rows_affected > 0)
    }

    fn row_to_game(row: &libsql::Row) -> Result<Game> {
        Ok(Game {
            id: GameId::from(row.get::<String>(0)?),
            name: row.get(1)?,
            min_players: row.get::<Option<i64>>(2)?.map(|v| v as u32),
            max_players: row.get::<Option<i64>>(3)?.map(|v| v as u32),
            playing_time_minutes: row.get::<Option<i64>>(4)?.map(|v| v as u32),
            year_published: row.get::<Option<i64>>(5)?.map(|v| v as i32),
            created_at: parse_timestamp(&row.get::<String>(6)?),
            updated_at: parse_timestamp(&row.get::<String>(7)?),
        })
    }
}

pub(crate) fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
