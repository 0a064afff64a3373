use libsql::Connection;

use crate::error::Result;

pub async fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Game catalog
        CREATE TABLE IF NOT EXISTS games (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            min_players INTEGER,
            max_players INTEGER,
            playing_time_minutes INTEGER,
            year_published INTEGER,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_games_name ON games(name);

        -- Per-user collection flags, one row per (user, game)
        CREATE TABLE IF NOT EXISTS user_games (
            user_id TEXT NOT NULL,
            game_id TEXT NOT NULL,
            is_favorite INTEGER NOT NULL DEFAULT 0,
            is_wishlist INTEGER NOT NULL DEFAULT 0,
            is_owned INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            PRIMARY KEY (user_id, game_id),
            FOREIGN KEY (game_id) REFERENCES games(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_user_games_game_id ON user_games(game_id);

        -- Foreign keys are off unless a connection enables them, so the
        -- cascade runs as a trigger inside the DELETE statement itself.
        CREATE TRIGGER IF NOT EXISTS trg_games_delete_entries
        AFTER DELETE ON games
        BEGIN
            DELETE FROM user_games WHERE game_id = OLD.id;
        END;
        "#,
    )
    .await?;

    Ok(())
}
