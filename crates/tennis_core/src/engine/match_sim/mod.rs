//! Match Simulation - point → game → tiebreak → set → match
//!
//! `MatchEngine` owns one private random stream per match. Points are drawn
//! strictly in play order because each point's pressure depends on the
//! evolving game and set score.
//!
//! Layers (one file each, all `impl MatchEngine`):
//! - `point.rs`    - execution noise + clutch-adjusted outcome draw
//! - `game.rs`     - ad / no-ad game state machine, break-point bookkeeping
//! - `tiebreak.rs` - alternating-serve tiebreak
//! - `set.rs`      - games, breaks of serve, tiebreak trigger
//!
//! The match loop itself lives here.

mod game;
mod point;
mod set;
mod tiebreak;

pub use game::{game_winner, GameOutcome, GameWinner};
pub use point::{clutch_adjustment, point_win_probability, PointOutcome};
pub use set::{set_winner, SetOutcome};
pub use tiebreak::{tiebreak_server, tiebreak_winner, TiebreakOutcome};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::config::EngineConfig;
use super::stats::MatchStats;
use crate::error::{CoreError, Result};
use crate::models::{MatchFormat, MatchResult, PlayerProfile, Side};

pub struct MatchEngine<'a> {
    player1: &'a PlayerProfile,
    player2: &'a PlayerProfile,
    format: MatchFormat,
    config: EngineConfig,
    seed: u64,
    rng: ChaCha8Rng,
    stats: MatchStats,
}

impl<'a> MatchEngine<'a> {
    pub fn new(
        player1: &'a PlayerProfile,
        player2: &'a PlayerProfile,
        format: MatchFormat,
        seed: u64,
    ) -> Self {
        Self {
            player1,
            player2,
            format,
            config: EngineConfig::default(),
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            stats: MatchStats::new(),
        }
    }

    /// Swap in `config` after checking it is valid and that the two profiles
    /// can finish a tiebreak under it.
    pub fn try_with_config(self, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        check_terminating(self.player1, self.player2, &config)?;
        Ok(self.with_config(config))
    }

    /// Unchecked; callers have already validated `config`.
    pub(crate) fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn format(&self) -> &MatchFormat {
        &self.format
    }

    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    #[inline]
    pub(crate) fn profile(&self, side: Side) -> &'a PlayerProfile {
        match side {
            Side::PlayerOne => self.player1,
            Side::PlayerTwo => self.player2,
        }
    }

    /// Play sets until one side reaches ceil(num_sets / 2).
    ///
    /// Player one serves first. Each following set is opened by whoever did
    /// not serve the last game of the previous one.
    pub fn simulate_match(mut self) -> MatchResult {
        let num_sets = self.format.num_sets.as_u8();
        let sets_to_win = self.format.sets_to_win();

        let mut sets_won = (0u8, 0u8);
        let mut sets = Vec::with_capacity(num_sets as usize);
        let mut first_server = Side::PlayerOne;

        while sets_won.0 < sets_to_win && sets_won.1 < sets_to_win {
            let is_final_set = sets_won.0 + sets_won.1 == num_sets - 1;
            let outcome = self.play_set(first_server, is_final_set);

            match outcome.result.winner {
                Side::PlayerOne => sets_won.0 += 1,
                Side::PlayerTwo => sets_won.1 += 1,
            }
            first_server = outcome.next_server;
            sets.push(outcome.result);
        }

        let winner = if sets_won.0 > sets_won.1 { Side::PlayerOne } else { Side::PlayerTwo };
        self.stats.into_result(winner, sets)
    }
}

/// Reject inputs for which a tiebreak can never end.
///
/// With no execution noise, two servers at the same 0% or 100% extreme trade
/// points forever inside a tiebreak.
pub fn check_terminating(
    player1: &PlayerProfile,
    player2: &PlayerProfile,
    config: &EngineConfig,
) -> Result<()> {
    if config.point.variability_scale > 0.0 {
        return Ok(());
    }
    let p1 = player1.serve_win_pct();
    let p2 = player2.serve_win_pct();
    let locked = |pct: f64| pct <= 0.0 || pct >= 100.0;
    if locked(p1) && p1 == p2 {
        return Err(CoreError::invalid(
            "serve_win_pct",
            p1,
            "both players at the same 0/100 extreme with zero variability never finish a tiebreak",
        ));
    }
    Ok(())
}
