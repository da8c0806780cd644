//! Player registry implementation.

use super::{
    errors::{PlayerError, PlayerResult},
    models::{Player, PlayerId},
};
use crate::db::{self, UNIQUE_PLAYER_NAME};
use sqlx::{PgPool, Row};
use std::sync::Arc;

/// Player manager
#[derive(Clone)]
pub struct PlayerManager {
    pool: Arc<PgPool>,
}

impl PlayerManager {
    /// Create a new player manager
    ///
    /// # Arguments
    ///
    /// * `pool` - Database connection pool
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Register a new player
    ///
    /// # Arguments
    ///
    /// * `name` - Player name, unique across the system
    ///
    /// # Returns
    ///
    /// * `PlayerResult<Player>` - Created player or error
    ///
    /// # Errors
    ///
    /// * `PlayerError::NameRequired` - Name missing or empty
    /// * `PlayerError::NameTaken` - Name already registered
    pub async fn create_player(&self, name: &str) -> PlayerResult<Player> {
        if name.trim().is_empty() {
            return Err(PlayerError::NameRequired);
        }

        // The unique constraint on players.name is the only duplicate
        // check; a race between two inserts is resolved by Postgres.
        let row =
            sqlx::query("INSERT INTO players (name) VALUES ($1) RETURNING id, name, created_at")
                .bind(name)
                .fetch_one(self.pool.as_ref())
                .await
                .map_err(|e| {
                    if db::violates_unique(&e, UNIQUE_PLAYER_NAME) {
                        PlayerError::NameTaken
                    } else {
                        PlayerError::Database(e)
                    }
                })?;

        Ok(Player {
            id: row.get("id"),
            name: row.get("name"),
            created_at: row.get::<chrono::NaiveDateTime, _>("created_at").and_utc(),
        })
    }

    /// List all registered players in storage order
    pub async fn list_players(&self) -> PlayerResult<Vec<Player>> {
        let rows = sqlx::query("SELECT id, name, created_at FROM players")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Player {
                id: row.get("id"),
                name: row.get("name"),
                created_at: row.get::<chrono::NaiveDateTime, _>("created_at").and_utc(),
            })
            .collect())
    }

    /// Get a player by ID
    ///
    /// # Errors
    ///
    /// * `PlayerError::NotFound` - No player with this ID
    pub async fn get_player(&self, player_id: PlayerId) -> PlayerResult<Player> {
        let row = sqlx::query("SELECT id, name, created_at FROM players WHERE id = $1")
            .bind(player_id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(PlayerError::NotFound(player_id))?;

        Ok(Player {
            id: row.get("id"),
            name: row.get("name"),
            created_at: row.get::<chrono::NaiveDateTime, _>("created_at").and_utc(),
        })
    }
}
