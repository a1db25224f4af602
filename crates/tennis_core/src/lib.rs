//! # tennis_core - Deterministic Tennis Match Simulation Engine
//!
//! Monte Carlo simulation of head-to-head tennis matches from per-player
//! serve parameters, with a JSON API for external drivers.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same match)
//! - Pressure-aware point model: execution noise + clutch factor
//! - Traditional, Fast4, pro set and short set formats; ad / no-ad scoring
//! - Per-set break tracking and break-point statistics
//! - JSON API for easy integration

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod simulation;

// Re-export main API functions
pub use api::{
    request_schema_json, simulate_batch, simulate_batch_json, SimulationRequest,
    SimulationResponse,
};
pub use error::{CoreError, Result};

// Re-export engine and records
pub use engine::{EngineConfig, MatchEngine};
pub use models::{
    MatchFormat, MatchResult, PlayerProfile, PlayerTotals, SetCount, SetFormat, SetResult, Side,
    TiebreakFormat,
};
pub use simulation::{run_simulations, BatchConfig, BatchRunner, BatchSummary, MatchRecord};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn even_player(name: &str) -> PlayerProfile {
        PlayerProfile::new(name, 65.0, 4.0, 0.0).unwrap()
    }

    #[test]
    fn test_symmetric_matchup_is_even() {
        let a = even_player("A");
        let b = even_player("B");
        let records = run_simulations(&a, &b, MatchFormat::best_of_three(), 500).unwrap();
        let summary = BatchSummary::from_records(&records, 3);

        assert_eq!(summary.matches, 500);
        // binomial sd at n=500 is ~2.2 points: 45-55 is only +-2.2 sd, so the
        // bound is widened to 42-58 (+-3.6 sd)
        assert!(
            (42.0..=58.0).contains(&summary.player1.win_pct),
            "player one won {:.1}%",
            summary.player1.win_pct
        );
    }

    #[test]
    fn test_short_two_sets_start_at_two_all() {
        let a = even_player("A");
        let b = even_player("B");
        let format = MatchFormat::new(3, SetFormat::ShortTwo, TiebreakFormat::Five, true).unwrap();
        let records = run_simulations(&a, &b, format, 100).unwrap();

        let mut four_two = 0;
        for record in &records {
            for set in &record.sets {
                let (w, l) = parse_score(&set.score);
                assert_eq!(w, 4);
                assert!(l == 2 || (l == 3 && set.is_tiebreak()), "short set reported {}", set.score);
                if (w, l) == (4, 2) {
                    four_two += 1;
                }
            }
            // starting games are not won games
            let set_games: u32 = record
                .sets
                .iter()
                .map(|s| {
                    let (w, l) = parse_score(&s.score);
                    (w + l) as u32
                })
                .sum();
            assert_eq!(record.total_games + 4 * record.sets.len() as u32, set_games);
        }
        assert!(four_two > 0);
    }

    #[test]
    fn test_no_ad_scores_never_show_advantage() {
        let a = PlayerProfile::new("A", 70.0, 4.0, 2.0).unwrap();
        let b = PlayerProfile::new("B", 70.0, 4.0, -2.0).unwrap();
        let format = MatchFormat::new(3, SetFormat::Fast4, TiebreakFormat::Ten, false).unwrap();
        let records = run_simulations(&a, &b, format, 100).unwrap();
        let mut saw_tiebreak = false;
        for record in &records {
            for set in &record.sets {
                assert!(!set.score.contains("Ad"));
                if set.is_tiebreak() {
                    saw_tiebreak = true;
                    assert!(set.score.starts_with("'4-3("));
                }
            }
        }
        assert!(saw_tiebreak);
    }

    #[test]
    fn test_json_roundtrip_through_top_level_api() {
        let request = json!({
            "schema_version": SCHEMA_VERSION,
            "player1": { "name": "A", "serve_win_pct": 64.0, "serve_variability": 3.0, "clutch_factor": 0.0 },
            "player2": { "name": "B", "serve_win_pct": 66.0, "serve_variability": 3.0, "clutch_factor": 0.0 },
            "format": { "num_sets": 1, "set_format": "pro_set", "tiebreak_format": "twelve", "ad_scoring": true },
            "simulations": 10,
            "engine_config": {}
        });
        let response = simulate_batch_json(&request.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(parsed["records"].as_array().unwrap().len(), 10);
        for record in parsed["records"].as_array().unwrap() {
            assert_eq!(record["sets"].as_array().unwrap().len(), 1);
        }
    }

    #[test]
    fn test_version_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(SCHEMA_VERSION, 1);
    }

    fn parse_score(score: &str) -> (u8, u8) {
        let digits = score.trim_start_matches('\'');
        let digits = digits.split('(').next().unwrap();
        let (w, l) = digits.split_once('-').unwrap();
        (w.parse().unwrap(), l.parse().unwrap())
    }
}
