//! Batch Runner - N independent seeded matches
//!
//! Match `i` is played by a fresh `MatchEngine` seeded with
//! `base_seed.wrapping_add(i)`, so any single match of a batch can be
//! replayed on its own. Records are returned in batch order; no aggregation
//! happens here (see `summary`).

use std::time::Instant;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::engine::{check_terminating, EngineConfig, MatchEngine};
use crate::error::{CoreError, Result};
use crate::models::{MatchFormat, MatchResult, PlayerProfile, SetResult, Side};

/// Set slots in a flat export row. Unplayed slots are blank.
pub const MAX_SETS: usize = 5;

const SET_COLUMNS: [&str; 7] =
    ["score", "winner", "net_breaks", "winner_breaks", "loser_breaks", "p1_breaks", "p2_breaks"];

const STAT_COLUMNS: [&str; 24] = [
    "p1_points_won",
    "p2_points_won",
    "p1_serve_points_won",
    "p2_serve_points_won",
    "p1_serve_points_total",
    "p2_serve_points_total",
    "p1_serve_win_pct",
    "p2_serve_win_pct",
    "p1_games_won",
    "p2_games_won",
    "total_points",
    "total_games",
    "p1_bp_faced",
    "p2_bp_faced",
    "p1_bp_saved",
    "p2_bp_saved",
    "p1_bp_converted",
    "p2_bp_converted",
    "p1_bp_opportunities",
    "p2_bp_opportunities",
    "p1_bp_save_pct",
    "p2_bp_save_pct",
    "p1_bp_conversion_pct",
    "p2_bp_conversion_pct",
];

// ============================================================================
// BatchConfig
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BatchConfig {
    pub simulations: u32,
    #[serde(default)]
    pub base_seed: u64,
}

impl BatchConfig {
    pub fn new(simulations: u32) -> Self {
        Self { simulations, base_seed: 0 }
    }

    pub fn with_base_seed(mut self, base_seed: u64) -> Self {
        self.base_seed = base_seed;
        self
    }

    #[inline]
    pub fn seed_for(&self, index: u32) -> u64 {
        self.base_seed.wrapping_add(index as u64)
    }

    pub fn validate(&self) -> Result<()> {
        if self.simulations == 0 {
            return Err(CoreError::invalid("simulations", self.simulations, "must be at least 1"));
        }
        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new(500)
    }
}

// ============================================================================
// Records
// ============================================================================

/// One played set, flattened for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SetRecord {
    pub score: String,
    pub winner: Side,
    pub net_breaks: i32,
    pub winner_breaks: u32,
    pub loser_breaks: u32,
    pub p1_breaks: u32,
    pub p2_breaks: u32,
}

impl From<&SetResult> for SetRecord {
    fn from(set: &SetResult) -> Self {
        Self {
            score: set.score.clone(),
            winner: set.winner,
            net_breaks: set.net_breaks,
            winner_breaks: set.winner_breaks(),
            loser_breaks: set.loser_breaks(),
            p1_breaks: set.p1_breaks,
            p2_breaks: set.p2_breaks,
        }
    }
}

impl SetRecord {
    pub fn is_tiebreak(&self) -> bool {
        self.score.contains('(')
    }

    fn cells(&self) -> [String; 7] {
        [
            self.score.clone(),
            self.winner.to_string(),
            self.net_breaks.to_string(),
            self.winner_breaks.to_string(),
            self.loser_breaks.to_string(),
            self.p1_breaks.to_string(),
            self.p2_breaks.to_string(),
        ]
    }
}

/// One simulated match, flattened for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatchRecord {
    /// 1-based position in the batch
    #[serde(rename = "match")]
    pub match_number: u32,
    pub seed: u64,
    pub winner: Side,
    /// Played sets only, in order
    pub sets: Vec<SetRecord>,

    pub p1_points_won: u32,
    pub p2_points_won: u32,
    pub p1_serve_points_won: u32,
    pub p2_serve_points_won: u32,
    pub p1_serve_points_total: u32,
    pub p2_serve_points_total: u32,
    pub p1_serve_win_pct: f64,
    pub p2_serve_win_pct: f64,
    pub p1_games_won: u32,
    pub p2_games_won: u32,
    pub total_points: u32,
    pub total_games: u32,

    pub p1_bp_faced: u32,
    pub p2_bp_faced: u32,
    pub p1_bp_saved: u32,
    pub p2_bp_saved: u32,
    pub p1_bp_converted: u32,
    pub p2_bp_converted: u32,
    pub p1_bp_opportunities: u32,
    pub p2_bp_opportunities: u32,
    pub p1_bp_save_pct: f64,
    pub p2_bp_save_pct: f64,
    pub p1_bp_conversion_pct: f64,
    pub p2_bp_conversion_pct: f64,
}

impl MatchRecord {
    pub fn from_result(match_number: u32, seed: u64, result: &MatchResult) -> Self {
        let (a, b) = (&result.player1, &result.player2);
        Self {
            match_number,
            seed,
            winner: result.winner,
            sets: result.sets.iter().map(SetRecord::from).collect(),

            p1_points_won: a.points_won,
            p2_points_won: b.points_won,
            p1_serve_points_won: a.serve_points_won,
            p2_serve_points_won: b.serve_points_won,
            p1_serve_points_total: a.serve_points_played,
            p2_serve_points_total: b.serve_points_played,
            p1_serve_win_pct: a.serve_win_pct(),
            p2_serve_win_pct: b.serve_win_pct(),
            p1_games_won: a.games_won,
            p2_games_won: b.games_won,
            total_points: result.total_points(),
            total_games: result.total_games(),

            p1_bp_faced: a.break_points_faced,
            p2_bp_faced: b.break_points_faced,
            p1_bp_saved: a.break_points_saved,
            p2_bp_saved: b.break_points_saved,
            p1_bp_converted: a.break_points_converted,
            p2_bp_converted: b.break_points_converted,
            p1_bp_opportunities: a.break_point_opportunities,
            p2_bp_opportunities: b.break_point_opportunities,
            p1_bp_save_pct: a.break_point_save_pct(),
            p2_bp_save_pct: b.break_point_save_pct(),
            p1_bp_conversion_pct: a.break_point_conversion_pct(),
            p2_bp_conversion_pct: b.break_point_conversion_pct(),
        }
    }

    /// Set in slot `index` (0-based), `None` when it was not played.
    pub fn set(&self, index: usize) -> Option<&SetRecord> {
        self.sets.get(index)
    }

    pub fn tiebreak_sets(&self) -> usize {
        self.sets.iter().filter(|s| s.is_tiebreak()).count()
    }

    /// Column names of a flat row: match, winner, five set slots, stats.
    pub fn csv_header() -> Vec<String> {
        let mut header = vec!["match".to_string(), "winner".to_string()];
        for n in 1..=MAX_SETS {
            header.extend(SET_COLUMNS.iter().map(|c| format!("set{n}_{c}")));
        }
        header.extend(STAT_COLUMNS.iter().map(|c| c.to_string()));
        header
    }

    /// Cells in `csv_header` order. Unplayed set slots are empty strings.
    pub fn csv_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(2 + MAX_SETS * SET_COLUMNS.len() + STAT_COLUMNS.len());
        row.push(self.match_number.to_string());
        row.push(self.winner.to_string());
        for index in 0..MAX_SETS {
            match self.set(index) {
                Some(set) => row.extend(set.cells()),
                None => row.extend(std::iter::repeat(String::new()).take(SET_COLUMNS.len())),
            }
        }

        let counts = [
            self.p1_points_won,
            self.p2_points_won,
            self.p1_serve_points_won,
            self.p2_serve_points_won,
            self.p1_serve_points_total,
            self.p2_serve_points_total,
        ];
        row.extend(counts.iter().map(u32::to_string));
        row.push(pct_cell(self.p1_serve_win_pct));
        row.push(pct_cell(self.p2_serve_win_pct));

        let counts = [
            self.p1_games_won,
            self.p2_games_won,
            self.total_points,
            self.total_games,
            self.p1_bp_faced,
            self.p2_bp_faced,
            self.p1_bp_saved,
            self.p2_bp_saved,
            self.p1_bp_converted,
            self.p2_bp_converted,
            self.p1_bp_opportunities,
            self.p2_bp_opportunities,
        ];
        row.extend(counts.iter().map(u32::to_string));
        for pct in [
            self.p1_bp_save_pct,
            self.p2_bp_save_pct,
            self.p1_bp_conversion_pct,
            self.p2_bp_conversion_pct,
        ] {
            row.push(pct_cell(pct));
        }
        row
    }
}

fn pct_cell(pct: f64) -> String {
    format!("{:.2}", pct)
}

// ============================================================================
// BatchRunner
// ============================================================================

pub struct BatchRunner<'a> {
    player1: &'a PlayerProfile,
    player2: &'a PlayerProfile,
    format: MatchFormat,
    config: EngineConfig,
    batch: BatchConfig,
}

impl<'a> BatchRunner<'a> {
    /// Validates the batch and engine config up front; the simulation loop
    /// itself cannot fail.
    pub fn new(
        player1: &'a PlayerProfile,
        player2: &'a PlayerProfile,
        format: MatchFormat,
        batch: BatchConfig,
        config: EngineConfig,
    ) -> Result<Self> {
        batch.validate()?;
        config.validate()?;
        check_terminating(player1, player2, &config)?;
        Ok(Self { player1, player2, format, config, batch })
    }

    pub fn batch(&self) -> &BatchConfig {
        &self.batch
    }

    pub fn format(&self) -> &MatchFormat {
        &self.format
    }

    /// Play one match of the batch by its 0-based index.
    pub fn simulate_one(&self, index: u32) -> MatchResult {
        MatchEngine::new(self.player1, self.player2, self.format, self.batch.seed_for(index))
            .with_config(self.config.clone())
            .simulate_match()
    }

    pub fn run(&self) -> Vec<MatchRecord> {
        let started = Instant::now();
        log::info!(
            "Simulating {} matches: {} vs {} ({})",
            self.batch.simulations,
            self.player1.name(),
            self.player2.name(),
            self.format.describe()
        );

        let mut records = Vec::with_capacity(self.batch.simulations as usize);
        for index in 0..self.batch.simulations {
            let seed = self.batch.seed_for(index);
            let result = self.simulate_one(index);
            log::debug!(
                "match {} seed {}: winner {} [{}]",
                index + 1,
                seed,
                result.winner,
                result.sets.iter().map(|s| s.score.as_str()).collect::<Vec<_>>().join(" ")
            );
            records.push(MatchRecord::from_result(index + 1, seed, &result));
        }

        log::info!(
            "Batch complete: {} matches in {:.1} ms",
            records.len(),
            started.elapsed().as_secs_f64() * 1000.0
        );
        records
    }
}

/// Default-config batch with seeds `0..simulations`.
pub fn run_simulations(
    player1: &PlayerProfile,
    player2: &PlayerProfile,
    format: MatchFormat,
    simulations: u32,
) -> Result<Vec<MatchRecord>> {
    let runner =
        BatchRunner::new(player1, player2, format, BatchConfig::new(simulations), EngineConfig::default())?;
    Ok(runner.run())
}
