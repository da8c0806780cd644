//! Leaderboard data models and derivations.

use crate::player::PlayerId;
use crate::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tournament lifecycle status, derived from counts rather than stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// No participants yet, or no game played yet
    Planning,
    /// Some games played, schedule not yet complete
    InProgress,
    /// Every required pairing has been played
    Completed,
}

impl TournamentStatus {
    /// Derive the status from the roster size and game counts
    pub fn derive(participants: i64, games_played: i64, total_required: i64) -> Self {
        if participants == 0 || games_played == 0 {
            TournamentStatus::Planning
        } else if games_played < total_required {
            TournamentStatus::InProgress
        } else {
            TournamentStatus::Completed
        }
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TournamentStatus::Planning => write!(f, "planning"),
            TournamentStatus::InProgress => write!(f, "in_progress"),
            TournamentStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Number of games a full round-robin needs for `participants` players
///
/// Every pair meets exactly once: n * (n - 1) / 2.
pub fn total_games_required(participants: i64) -> i64 {
    participants * (participants - 1) / 2
}

/// One ranked line of a tournament leaderboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub player_id: PlayerId,
    pub player_name: String,
    pub points: i32,
    pub games_played: i64,
}

/// Full leaderboard document for one tournament
///
/// Rows are ordered by points descending, ties broken by player name
/// ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    pub status: TournamentStatus,
    pub participants: i64,
    pub games_played: i64,
    pub total_games_required: i64,
    pub leaderboard: Vec<LeaderboardRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_total_games_required_formula() {
        assert_eq!(total_games_required(0), 0);
        assert_eq!(total_games_required(1), 0);
        assert_eq!(total_games_required(2), 1);
        assert_eq!(total_games_required(3), 3);
        assert_eq!(total_games_required(4), 6);
        assert_eq!(total_games_required(5), 10);
    }

    #[test]
    fn test_status_planning_without_participants_or_games() {
        assert_eq!(
            TournamentStatus::derive(0, 0, 0),
            TournamentStatus::Planning
        );
        assert_eq!(
            TournamentStatus::derive(4, 0, 6),
            TournamentStatus::Planning
        );
    }

    #[test]
    fn test_status_in_progress_mid_schedule() {
        assert_eq!(
            TournamentStatus::derive(4, 1, 6),
            TournamentStatus::InProgress
        );
        assert_eq!(
            TournamentStatus::derive(4, 5, 6),
            TournamentStatus::InProgress
        );
    }

    #[test]
    fn test_status_completed_when_schedule_done() {
        assert_eq!(
            TournamentStatus::derive(2, 1, 1),
            TournamentStatus::Completed
        );
        assert_eq!(
            TournamentStatus::derive(5, 10, 10),
            TournamentStatus::Completed
        );
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(TournamentStatus::Planning).unwrap(),
            json!("planning")
        );
        assert_eq!(
            serde_json::to_value(TournamentStatus::InProgress).unwrap(),
            json!("in_progress")
        );
        assert_eq!(
            serde_json::to_value(TournamentStatus::Completed).unwrap(),
            json!("completed")
        );
    }

    #[test]
    fn test_status_display_matches_serialization() {
        assert_eq!(TournamentStatus::InProgress.to_string(), "in_progress");
        assert_eq!(TournamentStatus::Completed.to_string(), "completed");
        assert_eq!(TournamentStatus::Planning.to_string(), "planning");
    }
}
