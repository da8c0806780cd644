//! HTTP API for the round-robin tournament server.
//!
//! This module provides the complete REST API over the `round_robin`
//! managers. Handlers translate manager results into status codes and
//! JSON bodies; no domain rules live here.
//!
//! # Architecture
//!
//! The API is built with:
//! - **Axum**: Async web framework routing requests to handlers
//! - **Tower**: Middleware for CORS and request correlation
//! - **sqlx**: PostgreSQL access inside the `round_robin` managers
//!
//! # Modules
//!
//! - [`players`]: Global player registry (register, list, fetch)
//! - [`tournaments`]: Tournaments and roster management
//! - [`games`]: Game result recording with point awards
//! - [`leaderboard`]: Derived standings and tournament status
//! - [`request_id`]: Request correlation middleware
//!
//! # Endpoints Overview
//!
//! ```text
//! GET  /health                          - Health check
//! POST /players                         - Register player
//! GET  /players                         - List players
//! GET  /players/{id}                    - Get player
//! POST /tournaments                     - Create tournament
//! GET  /tournaments/{id}                - Get tournament
//! POST /tournaments/{id}/players        - Add player to roster
//! POST /tournaments/{id}/games          - Record game result
//! GET  /tournaments/{id}/leaderboard    - Get standings
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use rr_server::api::{AppState, create_router};
//! use std::sync::Arc;
//! # use round_robin::game::GameManager;
//! # use round_robin::leaderboard::LeaderboardManager;
//! # use round_robin::player::PlayerManager;
//! # use round_robin::tournament::TournamentManager;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let player_manager: PlayerManager = unimplemented!();
//! # let tournament_manager: TournamentManager = unimplemented!();
//! # let game_manager: GameManager = unimplemented!();
//! # let leaderboard_manager: LeaderboardManager = unimplemented!();
//!
//! // Create application state
//! let state = AppState {
//!     player_manager: Arc::new(player_manager),
//!     tournament_manager: Arc::new(tournament_manager),
//!     game_manager: Arc::new(game_manager),
//!     leaderboard_manager: Arc::new(leaderboard_manager),
//! };
//!
//! // Create router with all endpoints
//! let app = create_router(state);
//!
//! // Start server
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CORS
//!
//! CORS is configured permissively for development. In production, configure
//! appropriate origins, methods, and headers.

pub mod games;
pub mod leaderboard;
pub mod players;
pub mod request_id;
pub mod tournaments;

use axum::{
    Router,
    response::Json,
    routing::{get, post},
};
use round_robin::game::GameManager;
use round_robin::leaderboard::LeaderboardManager;
use round_robin::player::PlayerManager;
use round_robin::tournament::TournamentManager;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers.
///
/// This state is cloned for each request (cheap due to Arc wrappers) and
/// provides access to the domain managers.
#[derive(Clone)]
pub struct AppState {
    pub player_manager: Arc<PlayerManager>,
    pub tournament_manager: Arc<TournamentManager>,
    pub game_manager: Arc<GameManager>,
    pub leaderboard_manager: Arc<LeaderboardManager>,
}

/// Create the complete API router with all endpoints and middleware.
///
/// Constructs an Axum router with the player, tournament, game, and
/// leaderboard endpoints configured. Applies request correlation and
/// CORS middleware to all routes.
///
/// # Arguments
///
/// - `state`: Application state with managers
///
/// # Returns
///
/// Configured Axum router ready to serve requests
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/players",
            post(players::create_player).get(players::list_players),
        )
        .route("/players/{id}", get(players::get_player))
        .route("/tournaments", post(tournaments::create_tournament))
        .route("/tournaments/{id}", get(tournaments::get_tournament))
        .route("/tournaments/{id}/players", post(tournaments::add_player))
        .route("/tournaments/{id}/games", post(games::record_game))
        .route(
            "/tournaments/{id}/leaderboard",
            get(leaderboard::get_leaderboard),
        )
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint for monitoring and load balancers.
///
/// Always returns `200 OK`; storage problems surface on the data
/// endpoints, not here.
///
/// # Example
///
/// ```bash
/// curl http://localhost:3000/health
/// # {"status":"ok","timestamp":"2026-03-14T10:30:00+00:00"}
/// ```
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
