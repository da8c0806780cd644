//! Leaderboard module deriving tournament standings.
//!
//! Standings are computed on demand from the participant and game tables:
//! - Per-player points and games-played counts
//! - Schedule progress against the round-robin total of n * (n - 1) / 2
//! - A derived status: planning, in_progress, or completed

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{LeaderboardError, LeaderboardResult};
pub use manager::LeaderboardManager;
pub use models::{Leaderboard, LeaderboardRow, TournamentStatus, total_games_required};
