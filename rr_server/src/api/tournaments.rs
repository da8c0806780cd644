//! Tournament API handlers.
//!
//! This module provides HTTP REST endpoints for tournament management:
//! - Creating a tournament (names may repeat across tournaments)
//! - Fetching a tournament by ID
//! - Adding a registered player to a tournament roster
//!
//! Rosters are capped at five players and every participant starts
//! with zero points.
//!
//! # Examples
//!
//! Create a tournament:
//! ```bash
//! curl -X POST http://localhost:3000/tournaments \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Spring Cup"}'
//! ```
//!
//! Add a player to the roster:
//! ```bash
//! curl -X POST http://localhost:3000/tournaments/1/players \
//!   -H "Content-Type: application/json" \
//!   -d '{"player_id": 2}'
//! ```

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use round_robin::player::PlayerId;
use round_robin::tournament::{Tournament, TournamentError, TournamentId};
use serde::{Deserialize, Serialize};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTournamentPayload {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateTournamentResponse {
    pub id: TournamentId,
    pub name: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct AddPlayerPayload {
    pub player_id: Option<PlayerId>,
}

#[derive(Debug, Serialize)]
pub struct AddPlayerResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Create a new tournament.
///
/// Tournament names are not unique; two tournaments may share a name.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Spring Cup"
/// }
/// ```
///
/// # Response
///
/// Returns `201 Created` with the stored tournament:
/// ```json
/// {
///   "id": 1,
///   "name": "Spring Cup",
///   "message": "Tournament created successfully"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Name missing or empty
/// - `500 Internal Server Error`: Storage failure
pub async fn create_tournament(
    State(state): State<AppState>,
    Json(payload): Json<CreateTournamentPayload>,
) -> Result<(StatusCode, Json<CreateTournamentResponse>), (StatusCode, Json<ErrorResponse>)> {
    let name = payload.name.unwrap_or_default();

    match state.tournament_manager.create_tournament(&name).await {
        Ok(tournament) => {
            crate::metrics::tournaments_created_total();
            Ok((
                StatusCode::CREATED,
                Json(CreateTournamentResponse {
                    id: tournament.id,
                    name: tournament.name,
                    message: "Tournament created successfully".to_string(),
                }),
            ))
        }
        Err(TournamentError::Database(e)) => {
            tracing::error!("Failed to create tournament: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create tournament".to_string(),
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

/// Get a tournament by ID.
///
/// # Path Parameters
///
/// - `id`: Tournament ID (integer)
///
/// # Response
///
/// Returns `200 OK` with the tournament.
///
/// # Errors
///
/// - `404 Not Found`: No tournament with this ID
/// - `500 Internal Server Error`: Storage failure
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<TournamentId>,
) -> Result<Json<Tournament>, (StatusCode, Json<ErrorResponse>)> {
    match state.tournament_manager.get_tournament(tournament_id).await {
        Ok(tournament) => Ok(Json(tournament)),
        Err(TournamentError::Database(e)) => {
            tracing::error!("Failed to fetch tournament {tournament_id}: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch tournament".to_string(),
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

/// Add a player to a tournament roster.
///
/// The player must already be registered, the roster must have room
/// (max 5 players), and the player may only be added once. The new
/// participant starts with zero points.
///
/// # Path Parameters
///
/// - `id`: Tournament ID (integer)
///
/// # Request Body
///
/// ```json
/// {
///   "player_id": 2
/// }
/// ```
///
/// # Response
///
/// Returns `201 Created`:
/// ```json
/// {
///   "message": "Player added to tournament successfully"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Player ID missing, roster full, or player already entered
/// - `404 Not Found`: Tournament or player doesn't exist
/// - `500 Internal Server Error`: Storage failure
pub async fn add_player(
    State(state): State<AppState>,
    Path(tournament_id): Path<TournamentId>,
    Json(payload): Json<AddPlayerPayload>,
) -> Result<(StatusCode, Json<AddPlayerResponse>), (StatusCode, Json<ErrorResponse>)> {
    // Presence is checked before the tournament lookup, so a missing
    // player_id is reported even for an unknown tournament
    let Some(player_id) = payload.player_id else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: TournamentError::PlayerIdRequired.client_message(),
            }),
        ));
    };

    match state
        .tournament_manager
        .add_participant(tournament_id, player_id)
        .await
    {
        Ok(_) => {
            crate::metrics::participants_added_total();
            Ok((
                StatusCode::CREATED,
                Json(AddPlayerResponse {
                    message: "Player added to tournament successfully".to_string(),
                }),
            ))
        }
        Err(TournamentError::Database(e)) => {
            tracing::error!("Failed to add player {player_id} to tournament {tournament_id}: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to add player to tournament".to_string(),
                }),
            ))
        }
        Err(e @ (TournamentError::NotFound(_) | TournamentError::PlayerNotFound(_))) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: e.client_message(),
            }),
        )),
        Err(e) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.client_message(),
            }),
        )),
    }
}
