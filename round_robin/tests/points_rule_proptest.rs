//! Property-based tests for the scoring rule and schedule arithmetic.
//!
//! These tests verify that point awards and the required-games formula
//! hold across the whole score space, not just hand-picked examples.

use proptest::prelude::*;
use round_robin::game::PointsAwarded;
use round_robin::leaderboard::total_games_required;
use std::cmp::Ordering;

proptest! {
    #[test]
    fn test_points_always_sum_to_two(s1 in any::<i32>(), s2 in any::<i32>()) {
        let points = PointsAwarded::for_scores(s1, s2);
        prop_assert_eq!(points.player1 + points.player2, 2);
    }

    #[test]
    fn test_points_follow_score_comparison(s1 in any::<i32>(), s2 in any::<i32>()) {
        let points = PointsAwarded::for_scores(s1, s2);
        let expected = match s1.cmp(&s2) {
            Ordering::Greater => (2, 0),
            Ordering::Less => (0, 2),
            Ordering::Equal => (1, 1),
        };
        prop_assert_eq!((points.player1, points.player2), expected);
    }

    #[test]
    fn test_swapping_sides_mirrors_points(s1 in any::<i32>(), s2 in any::<i32>()) {
        let forward = PointsAwarded::for_scores(s1, s2);
        let reversed = PointsAwarded::for_scores(s2, s1);
        prop_assert_eq!(forward.player1, reversed.player2);
        prop_assert_eq!(forward.player2, reversed.player1);
    }

    #[test]
    fn test_only_three_outcomes_exist(s1 in any::<i32>(), s2 in any::<i32>()) {
        let points = PointsAwarded::for_scores(s1, s2);
        let outcome = (points.player1, points.player2);
        prop_assert!(
            outcome == (2, 0) || outcome == (0, 2) || outcome == (1, 1),
            "unexpected outcome: {:?}",
            outcome
        );
    }

    #[test]
    fn test_required_games_grows_by_roster_size(n in 0i64..=1000) {
        // Adding one player adds a game against each existing player
        prop_assert_eq!(total_games_required(n + 1), total_games_required(n) + n);
    }

    #[test]
    fn test_required_games_never_negative(n in 0i64..=1000) {
        prop_assert!(total_games_required(n) >= 0);
    }
}
