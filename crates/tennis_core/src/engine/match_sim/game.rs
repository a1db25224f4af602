//! Game State Machine
//!
//! Advantage scoring: first to 4 points with a 2-point lead.
//! No-ad scoring: first to 4 points; at 3-3 the next point decides.

use super::MatchEngine;
use crate::engine::score::game_score;
use crate::models::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameWinner {
    Server,
    Returner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Side,
    pub server_points: u32,
    pub returner_points: u32,
    /// Break points faced by the server in this game
    pub break_points: u32,
    /// Break points the server won
    pub break_points_saved: u32,
}

impl GameOutcome {
    pub fn is_break(&self, server: Side) -> bool {
        self.winner != server
    }
}

/// Terminal check after a point has been awarded.
pub fn game_winner(server_points: u32, returner_points: u32, ad_scoring: bool) -> Option<GameWinner> {
    let (s, r) = (server_points, returner_points);
    if !ad_scoring {
        if s >= 4 && r >= 3 && s > r {
            return Some(GameWinner::Server);
        }
        if r >= 4 && s >= 3 && r > s {
            return Some(GameWinner::Returner);
        }
    }
    if s >= 4 && s >= r + 2 {
        Some(GameWinner::Server)
    } else if r >= 4 && r >= s + 2 {
        Some(GameWinner::Returner)
    } else {
        None
    }
}

impl MatchEngine<'_> {
    /// Play points until the game has a winner.
    ///
    /// Break points are recorded as faced (and saved) point by point. If the
    /// returner takes the game, every break point of the game is credited as
    /// converted at once.
    pub(crate) fn play_game(&mut self, server: Side, server_games: u8, returner_games: u8) -> GameOutcome {
        let ad_scoring = self.format.ad_scoring;
        let (mut server_points, mut returner_points) = (0u32, 0u32);
        let mut break_points = 0u32;
        let mut break_points_saved = 0u32;

        loop {
            let (server_score, returner_score) = game_score(server_points, returner_points, ad_scoring);
            let point = self.play_point(server, server_score, returner_score, server_games, returner_games);

            if point.is_break_point {
                break_points += 1;
                if point.server_won {
                    break_points_saved += 1;
                }
                self.stats.record_break_point(server, point.server_won);
            }

            if point.server_won {
                server_points += 1;
            } else {
                returner_points += 1;
            }

            if let Some(winner) = game_winner(server_points, returner_points, ad_scoring) {
                let winner = match winner {
                    GameWinner::Server => server,
                    GameWinner::Returner => {
                        if break_points > 0 {
                            self.stats.record_break_conversions(server.opponent(), break_points);
                        }
                        server.opponent()
                    }
                };
                return GameOutcome {
                    winner,
                    server_points,
                    returner_points,
                    break_points,
                    break_points_saved,
                };
            }
        }
    }
}
