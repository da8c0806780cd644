//! Player data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player ID type
pub type PlayerId = i64;

/// Player model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
