//! Tournament registry and roster management.

use super::{
    errors::{TournamentError, TournamentResult},
    models::{MAX_PARTICIPANTS, Participant, Tournament, TournamentId},
};
use crate::db::{self, UNIQUE_PARTICIPANT};
use crate::player::PlayerId;
use sqlx::{PgPool, Row};
use std::sync::Arc;

/// Tournament manager
#[derive(Clone)]
pub struct TournamentManager {
    pool: Arc<PgPool>,
}

impl TournamentManager {
    /// Create a new tournament manager
    ///
    /// # Arguments
    ///
    /// * `pool` - Database connection pool
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Create a new tournament
    ///
    /// Names are not required to be unique; two tournaments may share one.
    ///
    /// # Errors
    ///
    /// * `TournamentError::NameRequired` - Name missing or empty
    pub async fn create_tournament(&self, name: &str) -> TournamentResult<Tournament> {
        if name.trim().is_empty() {
            return Err(TournamentError::NameRequired);
        }

        let row =
            sqlx::query("INSERT INTO tournaments (name) VALUES ($1) RETURNING id, name, created_at")
                .bind(name)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(Tournament {
            id: row.get("id"),
            name: row.get("name"),
            created_at: row.get::<chrono::NaiveDateTime, _>("created_at").and_utc(),
        })
    }

    /// Get a tournament by ID
    ///
    /// # Errors
    ///
    /// * `TournamentError::NotFound` - No tournament with this ID
    pub async fn get_tournament(
        &self,
        tournament_id: TournamentId,
    ) -> TournamentResult<Tournament> {
        let row = sqlx::query("SELECT id, name, created_at FROM tournaments WHERE id = $1")
            .bind(tournament_id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(TournamentError::NotFound(tournament_id))?;

        Ok(Tournament {
            id: row.get("id"),
            name: row.get("name"),
            created_at: row.get::<chrono::NaiveDateTime, _>("created_at").and_utc(),
        })
    }

    /// Add a player to a tournament roster
    ///
    /// The whole check-and-insert sequence runs in one transaction that
    /// locks the tournament row, so concurrent roster additions for the
    /// same tournament queue up and the capacity check stays accurate.
    /// New participants start with zero points.
    ///
    /// # Errors
    ///
    /// * `TournamentError::NotFound` - No tournament with this ID
    /// * `TournamentError::PlayerNotFound` - No player with this ID
    /// * `TournamentError::RosterFull` - Roster already holds the maximum
    /// * `TournamentError::AlreadyEntered` - Player already on the roster
    pub async fn add_participant(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
    ) -> TournamentResult<()> {
        let mut tx = self.pool.begin().await?;

        let tournament = sqlx::query("SELECT id FROM tournaments WHERE id = $1 FOR UPDATE")
            .bind(tournament_id)
            .fetch_optional(&mut *tx)
            .await?;

        if tournament.is_none() {
            return Err(TournamentError::NotFound(tournament_id));
        }

        let player = sqlx::query("SELECT id FROM players WHERE id = $1")
            .bind(player_id)
            .fetch_optional(&mut *tx)
            .await?;

        if player.is_none() {
            return Err(TournamentError::PlayerNotFound(player_id));
        }

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tournament_participants WHERE tournament_id = $1",
        )
        .bind(tournament_id)
        .fetch_one(&mut *tx)
        .await?;

        if count >= MAX_PARTICIPANTS {
            return Err(TournamentError::RosterFull {
                capacity: MAX_PARTICIPANTS,
            });
        }

        sqlx::query(
            "INSERT INTO tournament_participants (tournament_id, player_id) VALUES ($1, $2)",
        )
        .bind(tournament_id)
        .bind(player_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if db::violates_unique(&e, UNIQUE_PARTICIPANT) {
                TournamentError::AlreadyEntered
            } else {
                TournamentError::Database(e)
            }
        })?;

        tx.commit().await?;

        Ok(())
    }

    /// List a tournament's roster in registration order
    pub async fn participants(
        &self,
        tournament_id: TournamentId,
    ) -> TournamentResult<Vec<Participant>> {
        let rows = sqlx::query(
            "SELECT id, tournament_id, player_id, points
             FROM tournament_participants
             WHERE tournament_id = $1
             ORDER BY id",
        )
        .bind(tournament_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Participant {
                id: row.get("id"),
                tournament_id: row.get("tournament_id"),
                player_id: row.get("player_id"),
                points: row.get("points"),
            })
            .collect())
    }
}
