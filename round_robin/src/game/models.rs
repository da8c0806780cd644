//! Game data models and the scoring rule.

use crate::player::PlayerId;
use crate::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Game ID type
pub type GameId = i64;

/// A recorded game between two tournament participants
///
/// Games are immutable once recorded; there is no edit or delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub tournament_id: TournamentId,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub player1_score: i32,
    pub player2_score: i32,
    pub played_at: DateTime<Utc>,
}

/// Points credited to each side of a recorded game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsAwarded {
    pub player1: i32,
    pub player2: i32,
}

impl PointsAwarded {
    /// Score a finished game. Win = 2, draw = 1, loss = 0.
    ///
    /// Only the comparison of the two scores matters; the margin does not.
    pub fn for_scores(player1_score: i32, player2_score: i32) -> Self {
        if player1_score > player2_score {
            Self {
                player1: 2,
                player2: 0,
            }
        } else if player1_score < player2_score {
            Self {
                player1: 0,
                player2: 2,
            }
        } else {
            Self {
                player1: 1,
                player2: 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_awards_two_points() {
        let points = PointsAwarded::for_scores(3, 1);
        assert_eq!(points.player1, 2);
        assert_eq!(points.player2, 0);
    }

    #[test]
    fn test_loss_awards_zero_points() {
        let points = PointsAwarded::for_scores(0, 4);
        assert_eq!(points.player1, 0);
        assert_eq!(points.player2, 2);
    }

    #[test]
    fn test_draw_awards_one_point_each() {
        let points = PointsAwarded::for_scores(2, 2);
        assert_eq!(points.player1, 1);
        assert_eq!(points.player2, 1);

        // Goalless draws count the same as scoring draws
        let points = PointsAwarded::for_scores(0, 0);
        assert_eq!(points.player1, 1);
        assert_eq!(points.player2, 1);
    }

    #[test]
    fn test_margin_does_not_matter() {
        assert_eq!(
            PointsAwarded::for_scores(10, 0),
            PointsAwarded::for_scores(2, 1)
        );
    }

    #[test]
    fn test_negative_scores_compare_normally() {
        let points = PointsAwarded::for_scores(-1, -3);
        assert_eq!(points.player1, 2);
        assert_eq!(points.player2, 0);
    }
}
