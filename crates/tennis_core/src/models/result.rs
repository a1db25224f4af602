//! Match Result Data Structures
//!
//! Output of one simulated match. The engine builds these once, at set end
//! and match end; they are never mutated afterwards.

use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

// ============================================================================
// Side
// ============================================================================

/// One of the two players. Serialized as `1` / `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum Side {
    #[default]
    PlayerOne,
    PlayerTwo,
}

impl Side {
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::PlayerOne => Side::PlayerTwo,
            Side::PlayerTwo => Side::PlayerOne,
        }
    }

    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Side::PlayerOne => 1,
            Side::PlayerTwo => 2,
        }
    }

    /// Picks this side's entry from a (player one, player two) pair.
    #[inline]
    pub fn pick<T>(self, pair: (T, T)) -> T {
        match self {
            Side::PlayerOne => pair.0,
            Side::PlayerTwo => pair.1,
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Side::PlayerOne),
            2 => Ok(Side::PlayerTwo),
            other => Err(CoreError::invalid("side", other, "must be 1 or 2")),
        }
    }
}

impl From<Side> for u8 {
    fn from(side: Side) -> u8 {
        side.number()
    }
}

impl JsonSchema for Side {
    fn schema_name() -> String {
        "Side".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        u8::json_schema(gen)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

// ============================================================================
// SetResult
// ============================================================================

/// Results from a single set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SetResult {
    /// `'6-4` for a games-decided set, `'7-6(3)` for a tiebreak-decided set
    pub score: String,
    pub winner: Side,
    pub p1_games: u8,
    pub p2_games: u8,
    /// Breaks of serve won by player one
    pub p1_breaks: u32,
    /// Breaks of serve won by player two
    pub p2_breaks: u32,
    /// Winner breaks minus loser breaks; 0 for tiebreak sets
    pub net_breaks: i32,
    /// Loser's tiebreak points, present only for tiebreak sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiebreak_loser_points: Option<u32>,
}

impl SetResult {
    pub(crate) fn by_games(
        winner: Side,
        games: (u8, u8),
        breaks: (u32, u32),
    ) -> Self {
        let winner_games = winner.pick(games);
        let loser_games = winner.opponent().pick(games);
        let net_breaks = winner.pick(breaks) as i32 - winner.opponent().pick(breaks) as i32;
        Self {
            score: format!("'{}-{}", winner_games, loser_games),
            winner,
            p1_games: games.0,
            p2_games: games.1,
            p1_breaks: breaks.0,
            p2_breaks: breaks.1,
            net_breaks,
            tiebreak_loser_points: None,
        }
    }

    pub(crate) fn by_tiebreak(
        winner: Side,
        threshold: u8,
        loser_points: u32,
        breaks: (u32, u32),
    ) -> Self {
        let (p1_games, p2_games) = match winner {
            Side::PlayerOne => (threshold + 1, threshold),
            Side::PlayerTwo => (threshold, threshold + 1),
        };
        Self {
            score: format!("'{}-{}({})", threshold + 1, threshold, loser_points),
            winner,
            p1_games,
            p2_games,
            p1_breaks: breaks.0,
            p2_breaks: breaks.1,
            net_breaks: 0,
            tiebreak_loser_points: Some(loser_points),
        }
    }

    pub fn is_tiebreak(&self) -> bool {
        self.tiebreak_loser_points.is_some()
    }

    pub fn winner_breaks(&self) -> u32 {
        self.winner.pick((self.p1_breaks, self.p2_breaks))
    }

    pub fn loser_breaks(&self) -> u32 {
        self.winner.opponent().pick((self.p1_breaks, self.p2_breaks))
    }

    pub fn games(&self, side: Side) -> u8 {
        side.pick((self.p1_games, self.p2_games))
    }
}

// ============================================================================
// MatchResult
// ============================================================================

/// Cumulative counters for one player over a whole match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PlayerTotals {
    pub points_won: u32,
    pub serve_points_won: u32,
    pub serve_points_played: u32,
    pub games_won: u32,
    pub break_points_faced: u32,
    pub break_points_saved: u32,
    pub break_points_converted: u32,
    pub break_point_opportunities: u32,
}

impl PlayerTotals {
    pub fn serve_win_pct(&self) -> f64 {
        percentage(self.serve_points_won, self.serve_points_played)
    }

    pub fn break_point_save_pct(&self) -> f64 {
        percentage(self.break_points_saved, self.break_points_faced)
    }

    pub fn break_point_conversion_pct(&self) -> f64 {
        percentage(self.break_points_converted, self.break_point_opportunities)
    }
}

/// Complete match results with comprehensive statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MatchResult {
    pub winner: Side,
    /// Sets in play order
    pub sets: Vec<SetResult>,
    pub player1: PlayerTotals,
    pub player2: PlayerTotals,
}

impl MatchResult {
    pub fn totals(&self, side: Side) -> &PlayerTotals {
        match side {
            Side::PlayerOne => &self.player1,
            Side::PlayerTwo => &self.player2,
        }
    }

    pub fn sets_won(&self, side: Side) -> usize {
        self.sets.iter().filter(|s| s.winner == side).count()
    }

    pub fn total_points(&self) -> u32 {
        self.player1.points_won + self.player2.points_won
    }

    pub fn total_games(&self) -> u32 {
        self.player1.games_won + self.player2.games_won
    }
}

/// `part / whole * 100`, or 0 when `whole` is 0.
pub fn percentage(part: u32, whole: u32) -> f64 {
    if whole > 0 {
        part as f64 / whole as f64 * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::PlayerOne.opponent(), Side::PlayerTwo);
        assert_eq!(Side::PlayerTwo.opponent().opponent(), Side::PlayerTwo);
        assert_eq!(Side::PlayerTwo.pick(("a", "b")), "b");
        assert_eq!(serde_json::to_string(&Side::PlayerTwo).unwrap(), "2");
        assert_eq!(serde_json::from_str::<Side>("1").unwrap(), Side::PlayerOne);
        assert!(serde_json::from_str::<Side>("3").is_err());
    }

    #[test]
    fn test_set_by_games_formatting() {
        let set = SetResult::by_games(Side::PlayerTwo, (4, 6), (1, 2));
        assert_eq!(set.score, "'6-4");
        assert_eq!(set.net_breaks, 1);
        assert_eq!(set.winner_breaks(), 2);
        assert_eq!(set.loser_breaks(), 1);
        assert!(!set.is_tiebreak());
        assert_eq!(set.games(Side::PlayerTwo), 6);
    }

    #[test]
    fn test_set_by_tiebreak_formatting() {
        let set = SetResult::by_tiebreak(Side::PlayerOne, 6, 5, (2, 1));
        assert_eq!(set.score, "'7-6(5)");
        assert_eq!((set.p1_games, set.p2_games), (7, 6));
        assert_eq!(set.net_breaks, 0);
        assert!(set.is_tiebreak());

        let fast4 = SetResult::by_tiebreak(Side::PlayerTwo, 3, 12, (0, 0));
        assert_eq!(fast4.score, "'4-3(12)");
        assert_eq!((fast4.p1_games, fast4.p2_games), (3, 4));
    }

    #[test]
    fn test_percentages_guard_zero() {
        let totals = PlayerTotals::default();
        assert_eq!(totals.serve_win_pct(), 0.0);
        assert_eq!(totals.break_point_save_pct(), 0.0);
        assert_eq!(totals.break_point_conversion_pct(), 0.0);

        let totals = PlayerTotals {
            serve_points_won: 3,
            serve_points_played: 4,
            break_points_faced: 2,
            break_points_saved: 1,
            ..Default::default()
        };
        assert_eq!(totals.serve_win_pct(), 75.0);
        assert_eq!(totals.break_point_save_pct(), 50.0);
    }
}
