//! Tournament error types.

use super::models::TournamentId;
use crate::player::PlayerId;
use thiserror::Error;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Name missing or empty
    #[error("Tournament name is required")]
    NameRequired,

    /// Player ID missing from a roster request
    #[error("Player ID is required")]
    PlayerIdRequired,

    /// Tournament not found
    #[error("Tournament {0} not found")]
    NotFound(TournamentId),

    /// Player not found
    #[error("Player {0} not found")]
    PlayerNotFound(PlayerId),

    /// Roster already at capacity
    #[error("Tournament is full (max {capacity} players)")]
    RosterFull { capacity: i64 },

    /// Player already on the roster
    #[error("Player already in tournament")]
    AlreadyEntered,
}

impl TournamentError {
    /// Get a client-safe error message that doesn't leak sensitive information
    ///
    /// Database errors are sanitized to prevent information disclosure about
    /// the internal system structure, and tournament/player IDs are redacted.
    pub fn client_message(&self) -> String {
        match self {
            // Sanitize database errors - don't expose SQL details
            TournamentError::Database(_) => "Internal server error".to_string(),
            // Sanitize not found - don't expose IDs
            TournamentError::NotFound(_) => "Tournament not found".to_string(),
            TournamentError::PlayerNotFound(_) => "Player not found".to_string(),
            // All other errors are safe to expose
            _ => self.to_string(),
        }
    }
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
