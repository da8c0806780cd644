//! Leaderboard derivation over the participant and game tables.

use super::{
    errors::{LeaderboardError, LeaderboardResult},
    models::{Leaderboard, LeaderboardRow, TournamentStatus, total_games_required},
};
use crate::tournament::TournamentId;
use sqlx::{PgPool, Row};
use std::sync::Arc;

/// Leaderboard manager
///
/// Standings are always computed from the stored participants and games;
/// nothing here is cached or persisted.
#[derive(Clone)]
pub struct LeaderboardManager {
    pool: Arc<PgPool>,
}

impl LeaderboardManager {
    /// Create a new leaderboard manager
    ///
    /// # Arguments
    ///
    /// * `pool` - Database connection pool
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Build the full leaderboard document for a tournament
    ///
    /// # Errors
    ///
    /// * `LeaderboardError::TournamentNotFound` - No tournament with this ID
    pub async fn get_leaderboard(
        &self,
        tournament_id: TournamentId,
    ) -> LeaderboardResult<Leaderboard> {
        let tournament = sqlx::query("SELECT id, name FROM tournaments WHERE id = $1")
            .bind(tournament_id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(LeaderboardError::TournamentNotFound(tournament_id))?;

        let tournament_name: String = tournament.get("name");

        let participants: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tournament_participants WHERE tournament_id = $1",
        )
        .bind(tournament_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        let games_played: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM games WHERE tournament_id = $1")
                .bind(tournament_id)
                .fetch_one(self.pool.as_ref())
                .await?;

        let total_games_required = total_games_required(participants);
        let status = TournamentStatus::derive(participants, games_played, total_games_required);

        // A game counts for a participant when they sat on either side of
        // it. DISTINCT keeps the join from double-counting.
        let rows = sqlx::query(
            r#"
            SELECT
                tp.player_id,
                p.name AS player_name,
                tp.points,
                COUNT(DISTINCT g.id) AS games_played
            FROM tournament_participants tp
            JOIN players p ON tp.player_id = p.id
            LEFT JOIN games g ON
                g.tournament_id = tp.tournament_id
                AND (g.player1_id = tp.player_id OR g.player2_id = tp.player_id)
            WHERE tp.tournament_id = $1
            GROUP BY tp.player_id, p.name, tp.points
            ORDER BY tp.points DESC, p.name ASC
            "#,
        )
        .bind(tournament_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        let leaderboard = rows
            .into_iter()
            .map(|row| LeaderboardRow {
                player_id: row.get("player_id"),
                player_name: row.get("player_name"),
                points: row.get("points"),
                games_played: row.get("games_played"),
            })
            .collect();

        Ok(Leaderboard {
            tournament_id,
            tournament_name,
            status,
            participants,
            games_played,
            total_games_required,
            leaderboard,
        })
    }
}
