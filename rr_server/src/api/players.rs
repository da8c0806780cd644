//! Player registry API handlers.
//!
//! This module provides HTTP REST endpoints for the global player registry:
//! - Registering a player with a system-wide unique name
//! - Listing all registered players
//! - Fetching a single player by ID
//!
//! # Examples
//!
//! Register a player:
//! ```bash
//! curl -X POST http://localhost:3000/players \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Ann"}'
//! ```
//!
//! List all players:
//! ```bash
//! curl http://localhost:3000/players
//! ```

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use round_robin::player::{Player, PlayerError, PlayerId};
use serde::{Deserialize, Serialize};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePlayerPayload {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatePlayerResponse {
    pub id: PlayerId,
    pub name: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new player.
///
/// Creates a player in the global registry. Names are unique across the
/// whole system, not per tournament.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ann"
/// }
/// ```
///
/// # Response
///
/// Returns `201 Created` with the stored player:
/// ```json
/// {
///   "id": 1,
///   "name": "Ann",
///   "message": "Player created successfully"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Name missing, empty, or already taken
/// - `500 Internal Server Error`: Storage failure
pub async fn create_player(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlayerPayload>,
) -> Result<(StatusCode, Json<CreatePlayerResponse>), (StatusCode, Json<ErrorResponse>)> {
    let name = payload.name.unwrap_or_default();

    match state.player_manager.create_player(&name).await {
        Ok(player) => {
            crate::metrics::players_registered_total();
            Ok((
                StatusCode::CREATED,
                Json(CreatePlayerResponse {
                    id: player.id,
                    name: player.name,
                    message: "Player created successfully".to_string(),
                }),
            ))
        }
        Err(PlayerError::Database(e)) => {
            tracing::error!("Failed to create player: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create player".to_string(),
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

/// List all registered players.
///
/// # Response
///
/// Returns `200 OK` with an array of players:
/// ```json
/// [
///   {
///     "id": 1,
///     "name": "Ann",
///     "created_at": "2026-03-14T10:30:00Z"
///   }
/// ]
/// ```
///
/// # Errors
///
/// - `500 Internal Server Error`: Storage failure
pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<Vec<Player>>, (StatusCode, Json<ErrorResponse>)> {
    match state.player_manager.list_players().await {
        Ok(players) => Ok(Json(players)),
        Err(e) => {
            tracing::error!("Failed to fetch players: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch players".to_string(),
                }),
            ))
        }
    }
}

/// Get a player by ID.
///
/// # Path Parameters
///
/// - `id`: Player ID (integer)
///
/// # Response
///
/// Returns `200 OK` with the player.
///
/// # Errors
///
/// - `404 Not Found`: No player with this ID
/// - `500 Internal Server Error`: Storage failure
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<PlayerId>,
) -> Result<Json<Player>, (StatusCode, Json<ErrorResponse>)> {
    match state.player_manager.get_player(player_id).await {
        Ok(player) => Ok(Json(player)),
        Err(PlayerError::Database(e)) => {
            tracing::error!("Failed to fetch player {player_id}: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch player".to_string(),
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
