//! Tournament data models.

use crate::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tournament ID type
pub type TournamentId = i64;

/// Maximum number of players a tournament roster can hold
pub const MAX_PARTICIPANTS: i64 = 5;

/// Tournament model
///
/// Tournament names are not unique; the same name may be reused across
/// seasons. Only player names carry a uniqueness guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A player's membership in one tournament, with accumulated points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub tournament_id: TournamentId,
    pub player_id: PlayerId,
    pub points: i32,
}
