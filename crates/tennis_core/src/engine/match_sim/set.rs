//! Set State Machine
//!
//! Games alternate serve from the set's first server. After each game the
//! set-win check (games_to_win with a 2-game lead) runs before the tiebreak
//! trigger (both sides at the format's threshold).

use super::tiebreak::TiebreakOutcome;
use super::MatchEngine;
use crate::models::{SetResult, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOutcome {
    pub result: SetResult,
    /// Opens the next set: whoever did not serve the last game, or, after a
    /// tiebreak, whoever received the first tiebreak point.
    pub next_server: Side,
    pub tiebreak: Option<TiebreakOutcome>,
}

pub fn set_winner(games: (u8, u8), games_to_win: u8) -> Option<Side> {
    if games.0 >= games_to_win && games.0 >= games.1 + 2 {
        Some(Side::PlayerOne)
    } else if games.1 >= games_to_win && games.1 >= games.0 + 2 {
        Some(Side::PlayerTwo)
    } else {
        None
    }
}

impl MatchEngine<'_> {
    pub(crate) fn play_set(&mut self, first_server: Side, is_final_set: bool) -> SetOutcome {
        let games_to_win = self.format.games_to_win();
        let threshold = self.format.tiebreak_threshold();

        let mut games = self.format.starting_games();
        let mut breaks = (0u32, 0u32);
        let mut server = first_server;

        loop {
            let game = self.play_game(server, server.pick(games), server.opponent().pick(games));

            match game.winner {
                Side::PlayerOne => games.0 += 1,
                Side::PlayerTwo => games.1 += 1,
            }
            self.stats.record_game(game.winner);
            if game.is_break(server) {
                match game.winner {
                    Side::PlayerOne => breaks.0 += 1,
                    Side::PlayerTwo => breaks.1 += 1,
                }
            }

            server = server.opponent();

            if let Some(winner) = set_winner(games, games_to_win) {
                return SetOutcome {
                    result: SetResult::by_games(winner, games, breaks),
                    next_server: server,
                    tiebreak: None,
                };
            }

            if games.0 == threshold && games.1 == threshold {
                let target = self.format.tiebreak_points(is_final_set);
                log::trace!(
                    "tiebreak at {}-{} (target {}, seed {})",
                    threshold,
                    threshold,
                    target,
                    self.seed
                );
                let tiebreak = self.play_tiebreak(server, target, games);
                self.stats.record_game(tiebreak.winner);
                return SetOutcome {
                    result: SetResult::by_tiebreak(
                        tiebreak.winner,
                        threshold,
                        tiebreak.loser_points(),
                        breaks,
                    ),
                    next_server: server.opponent(),
                    tiebreak: Some(tiebreak),
                };
            }
        }
    }
}
