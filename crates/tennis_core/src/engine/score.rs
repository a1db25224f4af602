//! Within-game score labels
//!
//! Point counts are collapsed to the canonical labels before they reach the
//! pressure evaluator, so the evaluator matches on variants instead of text.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointScore {
    Love,
    Fifteen,
    Thirty,
    Forty,
    Advantage,
    /// Placeholder for tiebreak points, which carry no game score.
    Tiebreak,
}

impl PointScore {
    /// Label for 0..=3 points won; anything beyond reads as 40.
    pub const fn from_points(points: u32) -> Self {
        match points {
            0 => PointScore::Love,
            1 => PointScore::Fifteen,
            2 => PointScore::Thirty,
            _ => PointScore::Forty,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PointScore::Love => "0",
            PointScore::Fifteen => "15",
            PointScore::Thirty => "30",
            PointScore::Forty => "40",
            PointScore::Advantage => "Ad",
            PointScore::Tiebreak => "TB",
        }
    }
}

impl fmt::Display for PointScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical (server, returner) labels for a game in progress.
///
/// Once both sides have 3 points, advantage scoring shows deuce, Ad-40 or
/// 40-Ad; no-ad scoring stays at 40-40 (the deciding point).
pub fn game_score(server_points: u32, returner_points: u32, ad_scoring: bool) -> (PointScore, PointScore) {
    if server_points < 4 && returner_points < 4 {
        return (PointScore::from_points(server_points), PointScore::from_points(returner_points));
    }
    if server_points >= 3 && returner_points >= 3 && ad_scoring {
        return match server_points.cmp(&returner_points) {
            std::cmp::Ordering::Equal => (PointScore::Forty, PointScore::Forty),
            std::cmp::Ordering::Greater => (PointScore::Advantage, PointScore::Forty),
            std::cmp::Ordering::Less => (PointScore::Forty, PointScore::Advantage),
        };
    }
    (PointScore::Forty, PointScore::Forty)
}

/// "40-Ad" style label, server first.
pub fn format_game_score(server: PointScore, returner: PointScore) -> String {
    format!("{}-{}", server, returner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PointScore::*;

    #[test]
    fn test_basic_labels() {
        assert_eq!(game_score(0, 0, true), (Love, Love));
        assert_eq!(game_score(1, 3, true), (Fifteen, Forty));
        assert_eq!(game_score(2, 2, false), (Thirty, Thirty));
        assert_eq!(game_score(3, 3, true), (Forty, Forty));
    }

    #[test]
    fn test_advantage_labels() {
        assert_eq!(game_score(4, 3, true), (Advantage, Forty));
        assert_eq!(game_score(5, 6, true), (Forty, Advantage));
        assert_eq!(game_score(7, 7, true), (Forty, Forty));
    }

    #[test]
    fn test_no_ad_never_shows_advantage() {
        for s in 0..=4u32 {
            for r in 0..=4u32 {
                let (a, b) = game_score(s, r, false);
                assert_ne!(a, Advantage);
                assert_ne!(b, Advantage);
            }
        }
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_game_score(Forty, Advantage), "40-Ad");
        assert_eq!(format_game_score(Love, Thirty), "0-30");
        assert_eq!(Tiebreak.to_string(), "TB");
    }
}
