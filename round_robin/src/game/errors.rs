//! Game recording error types.

use thiserror::Error;

/// Game recording errors
#[derive(Debug, Error)]
pub enum GameError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// One or more payload fields missing
    #[error("All fields are required: player1_id, player2_id, player1_score, player2_score")]
    MissingFields,

    /// Both sides of the game are the same player
    #[error("A player cannot play against themselves")]
    SelfPlay,

    /// One of the named players is not on the tournament roster
    #[error("Player {slot} is not in this tournament")]
    NotInTournament { slot: u8 },

    /// The pair already played, in either orientation
    #[error("Game between these players already recorded")]
    AlreadyRecorded,
}

impl GameError {
    /// Get a client-safe error message that doesn't leak sensitive information
    ///
    /// Database errors are sanitized to prevent information disclosure about
    /// the internal system structure.
    pub fn client_message(&self) -> String {
        match self {
            // Sanitize database errors - don't expose SQL details
            GameError::Database(_) => "Internal server error".to_string(),
            // All other errors are safe to expose
            _ => self.to_string(),
        }
    }
}

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;
