//! # Round Robin
//!
//! A round-robin tournament management library backed by PostgreSQL.
//!
//! This library tracks players, tournaments with a five-player roster cap,
//! recorded games, and derived leaderboards. Every pair of participants
//! plays exactly once; a win is worth 2 points, a draw 1, a loss 0.
//!
//! ## Core Modules
//!
//! - [`player`]: Global player registry with unique names
//! - [`tournament`]: Tournaments and roster management
//! - [`game`]: Game recording and the scoring rule
//! - [`leaderboard`]: Standings derived from stored games
//! - [`db`]: Connection pooling and schema bootstrap
//!
//! All write paths with more than one statement run inside transactions,
//! so rosters can never exceed capacity and points always match the games
//! on record.
//!
//! ## Example
//!
//! ```
//! use round_robin::game::PointsAwarded;
//!
//! // 4:2 is a win for the first player
//! let points = PointsAwarded::for_scores(4, 2);
//! assert_eq!((points.player1, points.player2), (2, 0));
//! ```

/// Connection pooling, schema bootstrap, and error classification.
pub mod db;
pub use db::{Database, DatabaseConfig};

/// Global player registry.
pub mod player;
pub use player::{Player, PlayerError, PlayerId, PlayerManager};

/// Tournaments and roster management.
pub mod tournament;
pub use tournament::{
    MAX_PARTICIPANTS, Participant, Tournament, TournamentError, TournamentId, TournamentManager,
};

/// Game recording and scoring.
pub mod game;
pub use game::{Game, GameError, GameId, GameManager, PointsAwarded};

/// Standings derived from stored games.
pub mod leaderboard;
pub use leaderboard::{
    Leaderboard, LeaderboardError, LeaderboardManager, LeaderboardRow, TournamentStatus,
};
