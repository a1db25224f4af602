//! Batch Summary - aggregation over exported match records
//!
//! Break-point percentages are pooled (sum over sum), serve win % is the
//! mean of the per-match percentages. Every ratio reports 0 on an empty
//! denominator.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::batch::MatchRecord;
use crate::models::{percentage, Side};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct PlayerSummary {
    pub wins: u32,
    pub win_pct: f64,
    pub avg_serve_win_pct: f64,
    pub avg_games_won: f64,
    pub bp_save_pct: f64,
    pub bp_conversion_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct BatchSummary {
    pub matches: u32,
    pub num_sets: u8,
    pub player1: PlayerSummary,
    pub player2: PlayerSummary,
    pub avg_games: f64,
    pub avg_points: f64,
    /// Pooled over both players
    pub bp_conversion_pct: f64,
    /// Tiebreak-decided sets / (matches × num_sets), in %
    pub tiebreak_pct: f64,
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

fn sum_u32(records: &[MatchRecord], field: impl Fn(&MatchRecord) -> u32) -> u32 {
    records.iter().map(field).sum()
}

fn sum_f64(records: &[MatchRecord], field: impl Fn(&MatchRecord) -> f64) -> f64 {
    records.iter().map(field).sum()
}

impl BatchSummary {
    pub fn from_records(records: &[MatchRecord], num_sets: u8) -> Self {
        let n = records.len();
        let wins = |side: Side| records.iter().filter(|r| r.winner == side).count() as u32;
        let (p1_wins, p2_wins) = (wins(Side::PlayerOne), wins(Side::PlayerTwo));

        let player1 = PlayerSummary {
            wins: p1_wins,
            win_pct: percentage(p1_wins, n as u32),
            avg_serve_win_pct: mean(sum_f64(records, |r| r.p1_serve_win_pct), n),
            avg_games_won: mean(sum_u32(records, |r| r.p1_games_won) as f64, n),
            bp_save_pct: percentage(sum_u32(records, |r| r.p1_bp_saved), sum_u32(records, |r| r.p1_bp_faced)),
            bp_conversion_pct: percentage(
                sum_u32(records, |r| r.p1_bp_converted),
                sum_u32(records, |r| r.p1_bp_opportunities),
            ),
        };
        let player2 = PlayerSummary {
            wins: p2_wins,
            win_pct: percentage(p2_wins, n as u32),
            avg_serve_win_pct: mean(sum_f64(records, |r| r.p2_serve_win_pct), n),
            avg_games_won: mean(sum_u32(records, |r| r.p2_games_won) as f64, n),
            bp_save_pct: percentage(sum_u32(records, |r| r.p2_bp_saved), sum_u32(records, |r| r.p2_bp_faced)),
            bp_conversion_pct: percentage(
                sum_u32(records, |r| r.p2_bp_converted),
                sum_u32(records, |r| r.p2_bp_opportunities),
            ),
        };

        let converted = sum_u32(records, |r| r.p1_bp_converted + r.p2_bp_converted);
        let opportunities = sum_u32(records, |r| r.p1_bp_opportunities + r.p2_bp_opportunities);
        let tiebreak_sets: usize = records.iter().map(MatchRecord::tiebreak_sets).sum();

        Self {
            matches: n as u32,
            num_sets,
            player1,
            player2,
            avg_games: mean(sum_u32(records, |r| r.total_games) as f64, n),
            avg_points: mean(sum_u32(records, |r| r.total_points) as f64, n),
            bp_conversion_pct: percentage(converted, opportunities),
            tiebreak_pct: percentage(tiebreak_sets as u32, n as u32 * num_sets as u32),
        }
    }

    pub fn player(&self, side: Side) -> &PlayerSummary {
        match side {
            Side::PlayerOne => &self.player1,
            Side::PlayerTwo => &self.player2,
        }
    }

    /// Plain-text results block. `names` label player one and two.
    pub fn render_text(&self, names: (&str, &str)) -> String {
        let rule = "=".repeat(80);
        let sides = [(names.0, Side::PlayerOne), (names.1, Side::PlayerTwo)];

        let mut lines = vec![rule.clone(), "RESULTS".to_string(), rule];
        for (name, side) in sides {
            let p = self.player(side);
            lines.push(format!("{} wins: {}/{} ({:.1}%)", name, p.wins, self.matches, p.win_pct));
        }
        lines.push(String::new());
        lines.push(format!("Average games per match: {:.1}", self.avg_games));
        lines.push(format!("Average points per match: {:.0}", self.avg_points));
        lines.push(format!("Tiebreak frequency: {:.1}%", self.tiebreak_pct));
        lines.push(format!("Average BP conversion: {:.1}%", self.bp_conversion_pct));
        for (name, side) in sides {
            let p = self.player(side);
            lines.extend([
                String::new(),
                format!("{name} statistics:"),
                format!("  Avg Serve Win %: {:.1}%", p.avg_serve_win_pct),
                format!("  Avg Games Won: {:.1}", p.avg_games_won),
                format!("  BP Save %: {:.1}%", p.bp_save_pct),
                format!("  BP Conversion %: {:.1}%", p.bp_conversion_pct),
            ]);
        }
        lines.push(String::new());
        lines.join("\n")
    }
}
