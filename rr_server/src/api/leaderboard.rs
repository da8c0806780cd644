//! Leaderboard API handler.
//!
//! Serves the derived standings document for a tournament: ranked rows,
//! schedule progress, and the tournament status.
//!
//! # Examples
//!
//! ```bash
//! curl http://localhost:3000/tournaments/1/leaderboard
//! ```

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use round_robin::leaderboard::{Leaderboard, LeaderboardError};
use round_robin::tournament::TournamentId;
use serde::Serialize;

use super::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Get the leaderboard for a tournament.
///
/// Rows are ordered by points descending, ties broken by player name
/// ascending. The status field is `planning` until the first game is
/// recorded, `in_progress` while games remain, and `completed` once
/// every pair has played.
///
/// # Path Parameters
///
/// - `id`: Tournament ID (integer)
///
/// # Response
///
/// Returns `200 OK` with the standings document:
/// ```json
/// {
///   "tournament_id": 1,
///   "tournament_name": "Spring Cup",
///   "status": "completed",
///   "participants": 2,
///   "games_played": 1,
///   "total_games_required": 1,
///   "leaderboard": [
///     {"player_id": 1, "player_name": "Ann", "points": 2, "games_played": 1},
///     {"player_id": 2, "player_name": "Bo", "points": 0, "games_played": 1}
///   ]
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No tournament with this ID
/// - `500 Internal Server Error`: Storage failure
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(tournament_id): Path<TournamentId>,
) -> Result<Json<Leaderboard>, (StatusCode, Json<ErrorResponse>)> {
    match state
        .leaderboard_manager
        .get_leaderboard(tournament_id)
        .await
    {
        Ok(leaderboard) => Ok(Json(leaderboard)),
        Err(LeaderboardError::Database(e)) => {
            tracing::error!("Failed to fetch leaderboard for tournament {tournament_id}: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch leaderboard".to_string(),
                }),
            ))
        }
        Err(e) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: e.client_message(),
            }),
        )),
    }
}
