//! Leaderboard error types.

use crate::tournament::TournamentId;
use thiserror::Error;

/// Leaderboard errors
#[derive(Debug, Error)]
pub enum LeaderboardError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Tournament not found
    #[error("Tournament {0} not found")]
    TournamentNotFound(TournamentId),
}

impl LeaderboardError {
    /// Get a client-safe error message that doesn't leak sensitive information
    pub fn client_message(&self) -> String {
        match self {
            LeaderboardError::Database(_) => "Internal server error".to_string(),
            LeaderboardError::TournamentNotFound(_) => "Tournament not found".to_string(),
        }
    }
}

/// Result type for leaderboard operations
pub type LeaderboardResult<T> = Result<T, LeaderboardError>;
