//! Player error types.

use super::models::PlayerId;
use thiserror::Error;

/// Player errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Name missing or empty
    #[error("Player name is required")]
    NameRequired,

    /// Name already registered
    #[error("Player name already exists")]
    NameTaken,

    /// Player not found
    #[error("Player {0} not found")]
    NotFound(PlayerId),
}

impl PlayerError {
    /// Get a client-safe error message that doesn't leak sensitive information
    ///
    /// Database errors are sanitized to prevent information disclosure about
    /// the internal system structure, and player IDs are redacted.
    pub fn client_message(&self) -> String {
        match self {
            // Sanitize database errors - don't expose SQL details
            PlayerError::Database(_) => "Internal server error".to_string(),
            // Sanitize not found - don't expose player IDs
            PlayerError::NotFound(_) => "Player not found".to_string(),
            // All other errors are safe to expose
            _ => self.to_string(),
        }
    }
}

/// Result type for player operations
pub type PlayerResult<T> = Result<T, PlayerError>;
