use libsql::{params, Connection};

use super::games::parse_timestamp;
use crate::error::{MeepleError, Result};
use crate::models::{CollectionFlag, GameId, ToggleOutcome, UserGameEntry, UserId};

pub struct UserGameRepository;

impl UserGameRepository {
    pub async fn get(
        conn: &Connection,
        user_id: &UserId,
        game_id: &GameId,
    ) -> Result<Option<UserGameEntry>> {
        let mut rows = conn
            .query(
                r#"
                SELECT user_id, game_id, is_favorite, is_wishlist, is_owned,
                       created_at, updated_at
                FROM user_games
                WHERE user_id = ?1 AND game_id = ?2
                "#,
                params![user_id.as_str(), game_id.as_str()],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_entry(&row)?))
        } else {
            Ok(None)
        }
    }

    /// Flip `flag` on the (user, game) row in one statement, inserting the
    /// row on first use. Concurrent toggles serialize on SQLite's write lock,
    /// so none of them is lost.
    ///
    /// Returns `changed = false` when the row was left alone (wishlist toggle
    /// on an owned game).
    pub async fn toggle(
        conn: &Connection,
        user_id: &UserId,
        game_id: &GameId,
        flag: CollectionFlag,
    ) -> Result<ToggleOutcome> {
        let mut fresh = UserGameEntry::new(user_id.clone(), game_id.clone());
        fresh.toggle(flag);

        // SET expressions read the row as it was before the update.
        let update = match flag {
            CollectionFlag::Favorite => {
                "is_favorite = 1 - user_games.is_favorite, updated_at = excluded.updated_at"
            }
            CollectionFlag::Wishlist => {
                "is_wishlist = 1 - user_games.is_wishlist, updated_at = excluded.updated_at \
                 WHERE user_games.is_owned = 0"
            }
            CollectionFlag::Owned => {
                "is_owned = 1 - user_games.is_owned, \
                 is_wishlist = CASE WHEN user_games.is_owned = 0 THEN 0 ELSE user_games.is_wishlist END, \
                 updated_at = excluded.updated_at"
            }
        };

        let sql = format!(
            r#"
            INSERT INTO user_games (
                user_id, game_id, is_favorite, is_wishlist, is_owned, created_at, updated_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7
            )
            ON CONFLICT(user_id, game_id) DO UPDATE SET {update}
            RETURNING user_id, game_id, is_favorite, is_wishlist, is_owned,
                      created_at, updated_at
            "#
        );

        let mut rows = conn
            .query(
                &sql,
                params![
                    fresh.user_id.as_str(),
                    fresh.game_id.as_str(),
                    fresh.is_favorite as i32,
                    fresh.is_wishlist as i32,
                    fresh.is_owned as i32,
                    fresh.created_at.to_rfc3339(),
                    fresh.updated_at.to_rfc3339(),
                ],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            let entry = Self::row_to_entry(&row)?;
            return Ok(ToggleOutcome {
                entry,
                changed: true,
            });
        }
        drop(rows);

        let entry = Self::get(conn, user_id, game_id).await?.ok_or_else(|| {
            MeepleError::NotFound(format!("Collection entry for game {game_id} not found"))
        })?;
        Ok(ToggleOutcome {
            entry,
            changed: false,
        })
    }

    /// All rows for one user, oldest first. Includes rows with no flags set.
    pub async fn list_by_user(conn: &Connection, user_id: &UserId) -> Result<Vec<UserGameEntry>> {
        let mut rows = conn
            .query(
                r#"
                SELECT user_id, game_id, is_favorite, is_wishlist, is_owned,
                       created_at, updated_at
                FROM user_games
                WHERE user_id = ?1
                ORDER BY created_at ASC, game_id ASC
                "#,
                params![user_id.as_str()],
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(Self::row_to_entry(&row)?);
        }

        Ok(entries)
    }

    fn row_to_entry(row: &libsql::Row) -> Result<UserGameEntry> {
        Ok(UserGameEntry {
            user_id: UserId::parse(&row.get::<String>(0)?)?,
            game_id: GameId::from(row.get::<String>(1)?),
            is_favorite: row.get::<i32>(2)? != 0,
            is_wishlist: row.get::<i32>(3)? != 0,
            is_owned: row.get::<i32>(4)? != 0,
            created_at: parse_timestamp(&row.get::<String>(5)?),
            updated_at: parse_timestamp(&row.get::<String>(6)?),
        })
    }
}
