//! Game recording API handlers.
//!
//! This module provides the HTTP REST endpoint for recording game results.
//! A recorded game is immutable: there is no edit or delete, and each pair
//! of participants plays exactly once per tournament regardless of which
//! side submitted the result.
//!
//! # Examples
//!
//! Record a result:
//! ```bash
//! curl -X POST http://localhost:3000/tournaments/1/games \
//!   -H "Content-Type: application/json" \
//!   -d '{"player1_id": 1, "player2_id": 2, "player1_score": 3, "player2_score": 1}'
//! ```

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use round_robin::game::{GameError, PointsAwarded};
use round_robin::player::PlayerId;
use round_robin::tournament::TournamentId;
use serde::{Deserialize, Serialize};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecordGamePayload {
    pub player1_id: Option<PlayerId>,
    pub player2_id: Option<PlayerId>,
    pub player1_score: Option<i32>,
    pub player2_score: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct RecordGameResponse {
    pub message: String,
    pub points_awarded: PointsAwarded,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Record a game result and award points.
///
/// Both players must be on the tournament roster and must not have
/// played each other yet. The winner earns 2 points, the loser 0, and a
/// draw awards 1 point to each side; the score margin never matters.
/// The game row and both point updates are committed atomically.
///
/// # Path Parameters
///
/// - `id`: Tournament ID (integer)
///
/// # Request Body
///
/// ```json
/// {
///   "player1_id": 1,
///   "player2_id": 2,
///   "player1_score": 3,
///   "player2_score": 1
/// }
/// ```
///
/// # Response
///
/// Returns `201 Created` with the points awarded:
/// ```json
/// {
///   "message": "Game result recorded successfully",
///   "points_awarded": {
///     "player1": 2,
///     "player2": 0
///   }
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing fields, self-play, a player outside the
///   roster, or a pair that already played
/// - `500 Internal Server Error`: Storage failure
pub async fn record_game(
    State(state): State<AppState>,
    Path(tournament_id): Path<TournamentId>,
    Json(payload): Json<RecordGamePayload>,
) -> Result<(StatusCode, Json<RecordGameResponse>), (StatusCode, Json<ErrorResponse>)> {
    let (Some(player1_id), Some(player2_id), Some(player1_score), Some(player2_score)) = (
        payload.player1_id,
        payload.player2_id,
        payload.player1_score,
        payload.player2_score,
    ) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: GameError::MissingFields.client_message(),
            }),
        ));
    };

    match state
        .game_manager
        .record_game(
            tournament_id,
            player1_id,
            player2_id,
            player1_score,
            player2_score,
        )
        .await
    {
        Ok((_game, points_awarded)) => {
            crate::metrics::games_recorded_total();
            Ok((
                StatusCode::CREATED,
                Json(RecordGameResponse {
                    message: "Game result recorded successfully".to_string(),
                    points_awarded,
                }),
            ))
        }
        Err(GameError::Database(e)) => {
            tracing::error!("Failed to record game in tournament {tournament_id}: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to record game result".to_string(),
                }),
            ))
        }
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.client_message(),
            }),
        )),
    }
}
