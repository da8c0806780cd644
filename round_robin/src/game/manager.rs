//! Game recording implementation.

use super::{
    errors::{GameError, GameResult},
    models::{Game, PointsAwarded},
};
use crate::db::{self, UNIQUE_GAME_PAIR};
use crate::player::PlayerId;
use crate::tournament::TournamentId;
use sqlx::{PgPool, Row};
use std::sync::Arc;

/// Game manager
#[derive(Clone)]
pub struct GameManager {
    pool: Arc<PgPool>,
}

impl GameManager {
    /// Create a new game manager
    ///
    /// # Arguments
    ///
    /// * `pool` - Database connection pool
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Record a finished game and credit points to both participants
    ///
    /// Validation, the game insert, and both point updates run in one
    /// transaction anchored on a lock of the tournament row, so the pair
    /// can never be recorded twice concurrently and points are never
    /// half-applied. Each unordered pair plays at most once per
    /// tournament; the stored orientation of a game does not matter.
    ///
    /// # Returns
    ///
    /// * `GameResult<(Game, PointsAwarded)>` - Stored game and the points
    ///   credited to each side
    ///
    /// # Errors
    ///
    /// * `GameError::SelfPlay` - Both IDs name the same player
    /// * `GameError::NotInTournament` - A named player is not a participant
    /// * `GameError::AlreadyRecorded` - The pair already played
    pub async fn record_game(
        &self,
        tournament_id: TournamentId,
        player1_id: PlayerId,
        player2_id: PlayerId,
        player1_score: i32,
        player2_score: i32,
    ) -> GameResult<(Game, PointsAwarded)> {
        if player1_id == player2_id {
            return Err(GameError::SelfPlay);
        }

        let mut tx = self.pool.begin().await?;

        // Serialize recordings per tournament so the duplicate check below
        // cannot race. A missing tournament is not reported here; the
        // membership checks fail for it the same way they do for an empty
        // roster.
        sqlx::query("SELECT id FROM tournaments WHERE id = $1 FOR UPDATE")
            .bind(tournament_id)
            .fetch_optional(&mut *tx)
            .await?;

        let participant1 = sqlx::query(
            "SELECT id FROM tournament_participants WHERE tournament_id = $1 AND player_id = $2",
        )
        .bind(tournament_id)
        .bind(player1_id)
        .fetch_optional(&mut *tx)
        .await?;

        if participant1.is_none() {
            return Err(GameError::NotInTournament { slot: 1 });
        }

        let participant2 = sqlx::query(
            "SELECT id FROM tournament_participants WHERE tournament_id = $1 AND player_id = $2",
        )
        .bind(tournament_id)
        .bind(player2_id)
        .fetch_optional(&mut *tx)
        .await?;

        if participant2.is_none() {
            return Err(GameError::NotInTournament { slot: 2 });
        }

        // The unique index only covers one orientation of the pair, so the
        // reversed orientation has to be checked here.
        let existing = sqlx::query(
            "SELECT id FROM games
             WHERE tournament_id = $1
               AND ((player1_id = $2 AND player2_id = $3)
                 OR (player1_id = $3 AND player2_id = $2))",
        )
        .bind(tournament_id)
        .bind(player1_id)
        .bind(player2_id)
        .fetch_optional(&mut *tx)
        .await?;

        if existing.is_some() {
            return Err(GameError::AlreadyRecorded);
        }

        let row = sqlx::query(
            r#"
            INSERT INTO games (tournament_id, player1_id, player2_id, player1_score, player2_score)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, tournament_id, player1_id, player2_id,
                      player1_score, player2_score, played_at
            "#,
        )
        .bind(tournament_id)
        .bind(player1_id)
        .bind(player2_id)
        .bind(player1_score)
        .bind(player2_score)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if db::violates_unique(&e, UNIQUE_GAME_PAIR) {
                GameError::AlreadyRecorded
            } else {
                GameError::Database(e)
            }
        })?;

        let game = Game {
            id: row.get("id"),
            tournament_id: row.get("tournament_id"),
            player1_id: row.get("player1_id"),
            player2_id: row.get("player2_id"),
            player1_score: row.get("player1_score"),
            player2_score: row.get("player2_score"),
            played_at: row.get::<chrono::NaiveDateTime, _>("played_at").and_utc(),
        };

        let points = PointsAwarded::for_scores(player1_score, player2_score);

        sqlx::query(
            "UPDATE tournament_participants SET points = points + $1
             WHERE tournament_id = $2 AND player_id = $3",
        )
        .bind(points.player1)
        .bind(tournament_id)
        .bind(player1_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE tournament_participants SET points = points + $1
             WHERE tournament_id = $2 AND player_id = $3",
        )
        .bind(points.player2)
        .bind(tournament_id)
        .bind(player2_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((game, points))
    }
}
