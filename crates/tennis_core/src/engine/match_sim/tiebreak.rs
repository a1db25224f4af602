//! Tiebreak State Machine
//!
//! The first server serves point 1 alone; service then changes every two
//! points (points 2-3 by the opponent, 4-5 by the first server, ...).
//! Target depends on the tiebreak format and on whether this is the final set.

use super::MatchEngine;
use crate::engine::score::PointScore;
use crate::models::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiebreakOutcome {
    pub winner: Side,
    pub p1_points: u32,
    pub p2_points: u32,
    pub target: u8,
}

impl TiebreakOutcome {
    pub fn winner_points(&self) -> u32 {
        self.winner.pick((self.p1_points, self.p2_points))
    }

    pub fn loser_points(&self) -> u32 {
        self.winner.opponent().pick((self.p1_points, self.p2_points))
    }
}

/// Server of the tiebreak point at `point_index` (0-based).
pub fn tiebreak_server(first_server: Side, point_index: u32) -> Side {
    if point_index == 0 || ((point_index - 1) / 2) % 2 == 1 {
        first_server
    } else {
        first_server.opponent()
    }
}

pub fn tiebreak_winner(p1_points: u32, p2_points: u32, target: u8) -> Option<Side> {
    let target = u32::from(target);
    if p1_points >= target && p1_points >= p2_points + 2 {
        Some(Side::PlayerOne)
    } else if p2_points >= target && p2_points >= p1_points + 2 {
        Some(Side::PlayerTwo)
    } else {
        None
    }
}

impl MatchEngine<'_> {
    /// `set_games` is the (player one, player two) game score the tiebreak
    /// was triggered at; it keeps set-level pressure in play.
    pub(crate) fn play_tiebreak(&mut self, first_server: Side, target: u8, set_games: (u8, u8)) -> TiebreakOutcome {
        let (mut p1_points, mut p2_points) = (0u32, 0u32);
        let mut points_played = 0u32;

        loop {
            let server = tiebreak_server(first_server, points_played);
            let server_games = server.pick(set_games);
            let returner_games = server.opponent().pick(set_games);

            let point = self.play_point(
                server,
                PointScore::Tiebreak,
                PointScore::Tiebreak,
                server_games,
                returner_games,
            );
            let point_winner = if point.server_won { server } else { server.opponent() };
            match point_winner {
                Side::PlayerOne => p1_points += 1,
                Side::PlayerTwo => p2_points += 1,
            }
            points_played += 1;

            if let Some(winner) = tiebreak_winner(p1_points, p2_points, target) {
                return TiebreakOutcome { winner, p1_points, p2_points, target };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::engine::config::EngineConfig;
    use crate::models::{MatchFormat, PlayerProfile};
    use proptest::prelude::*;

    #[test]
    fn test_serve_rotation() {
        let order: Vec<u8> = (0..9).map(|i| tiebreak_server(Side::PlayerOne, i).number()).collect();
        assert_eq!(order, vec![1, 2, 2, 1, 1, 2, 2, 1, 1]);
        let order: Vec<u8> = (0..5).map(|i| tiebreak_server(Side::PlayerTwo, i).number()).collect();
        assert_eq!(order, vec![2, 1, 1, 2, 2]);
    }

    #[test]
    fn test_tiebreak_winner() {
        assert_eq!(tiebreak_winner(7, 5, 7), Some(Side::PlayerOne));
        assert_eq!(tiebreak_winner(7, 6, 7), None);
        assert_eq!(tiebreak_winner(6, 8, 7), Some(Side::PlayerTwo));
        assert_eq!(tiebreak_winner(9, 7, 10), None);
        assert_eq!(tiebreak_winner(12, 10, 10), Some(Side::PlayerOne));
    }

    #[test]
    fn test_whitewash_reaches_exact_target() {
        let (p1, p2) = dominant_pair();
        for target in [5u8, 7, 10, 12] {
            let mut engine = MatchEngine::new(&p1, &p2, MatchFormat::best_of_three(), 0)
                .with_config(EngineConfig::deterministic());
            let tb = engine.play_tiebreak(Side::PlayerTwo, target, (6, 6));
            assert_eq!(tb.winner, Side::PlayerOne);
            assert_eq!((tb.winner_points(), tb.loser_points()), (u32::from(target), 0));
        }
    }

    #[test]
    fn test_tiebreaks_end_with_two_point_lead() {
        let a = profile("A", 62.0);
        let b = profile("B", 62.0);
        let mut engine = MatchEngine::new(&a, &b, MatchFormat::best_of_three(), 8);
        for target in [5u8, 7, 10, 12] {
            for _ in 0..300 {
                let tb = engine.play_tiebreak(Side::PlayerOne, target, (6, 6));
                let (w, l) = (tb.winner_points(), tb.loser_points());
                let target = u32::from(target);
                assert!(w >= target);
                assert!(w >= l + 2);
                if w > target {
                    assert_eq!(w, l + 2);
                }
            }
        }
    }

    #[test]
    fn test_tiebreak_points_count_as_serve_points() {
        let a = profile("A", 62.0);
        let b = profile("B", 62.0);
        let mut engine = MatchEngine::new(&a, &b, MatchFormat::best_of_three(), 2);
        let tb = engine.play_tiebreak(Side::PlayerOne, 7, (6, 6));
        let played = engine.stats().totals(Side::PlayerOne).serve_points_played
            + engine.stats().totals(Side::PlayerTwo).serve_points_played;
        assert_eq!(played, tb.p1_points + tb.p2_points);
        // no break points inside a tiebreak
        assert_eq!(engine.stats().totals(Side::PlayerOne).break_points_faced, 0);
        assert_eq!(engine.stats().totals(Side::PlayerTwo).break_points_faced, 0);
    }

    #[test]
    fn test_near_perfect_servers_finish_long_tiebreaks() {
        // each side drops roughly 0.4% of service points
        let a = PlayerProfile::new("A", 100.0, 1.0, 0.0).unwrap();
        let b = PlayerProfile::new("B", 100.0, 1.0, 0.0).unwrap();
        let mut longest = 0;
        for seed in 0..200 {
            let mut engine = MatchEngine::new(&a, &b, MatchFormat::best_of_three(), seed);
            let tb = engine.play_tiebreak(Side::PlayerOne, 7, (6, 6));
            let (w, l) = (tb.winner_points(), tb.loser_points());
            assert!(w >= 7);
            assert_eq!(w, l.max(5) + 2);
            assert_eq!(tb.winner, tiebreak_winner(tb.p1_points, tb.p2_points, 7).unwrap());
            longest = longest.max(w + l);
        }
        assert!(longest > 14);
    }

    proptest! {
        #[test]
        fn prop_rotation_serves_in_pairs(first in any::<bool>(), n in 1u32..200) {
            let first = if first { Side::PlayerOne } else { Side::PlayerTwo };
            // points 2k+1 and 2k+2 share a server
            let odd = 2 * ((n - 1) / 2) + 1;
            prop_assert_eq!(tiebreak_server(first, odd), tiebreak_server(first, odd + 1));
            prop_assert_ne!(tiebreak_server(first, odd), tiebreak_server(first, odd + 2));
        }
    }
}
