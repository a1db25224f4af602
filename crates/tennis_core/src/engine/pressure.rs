//! Pressure evaluation (pure functions)
//!
//! Hierarchical and additive: a base from how many breaks the server is
//! down in the set, plus the criticality of the current point, capped.
//!
//! | situation                         | pressure |
//! |-----------------------------------|----------|
//! | down 3 breaks / about to lose set | 8.5 base |
//! | down 2 breaks / serving to stay in| 6.0 base |
//! | down 1 break                      | 3.5 base |
//! | 0-40                              | +5.0     |
//! | 15-40                             | +4.5     |
//! | 30-40 (ad), 40-Ad                 | +4.0     |
//! | 30-40 / 40-40 (no-ad)             | +4.5     |
//! | deuce                             | +2.5     |
//! | Ad-40                             | +2.0     |
//! | 30-30                             | +1.5     |

use super::config::PressureConfig;
use super::score::PointScore;

/// Everything the evaluator needs about the point about to be played.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureContext {
    pub server_score: PointScore,
    pub returner_score: PointScore,
    pub server_games: u8,
    pub returner_games: u8,
    pub games_to_win: u8,
    pub ad_scoring: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureReading {
    /// 0.0 ..= cap
    pub pressure: f64,
    pub is_break_point: bool,
}

/// How many breaks down the server effectively is (0-3).
pub fn break_deficit(server_games: u8, returner_games: u8, games_to_win: u8) -> u8 {
    if returner_games <= server_games {
        return 0;
    }
    let diff = returner_games - server_games;
    let returner = returner_games as i32;
    let server = server_games as i32;
    let to_win = games_to_win as i32;

    if returner >= to_win - 1 && diff >= 2 {
        // returner serves for the set next
        3
    } else if returner == to_win - 1 && server == to_win - 2 {
        // serving to stay in the set
        2
    } else {
        diff.min(3)
    }
}

/// True when the returner wins the game by winning this point.
pub fn is_break_point(server: PointScore, returner: PointScore, ad_scoring: bool) -> bool {
    use PointScore::*;
    match (server, returner) {
        (Love | Fifteen | Thirty, Forty) => true,
        (Forty, Advantage) => true,
        (Forty, Forty) => !ad_scoring,
        _ => false,
    }
}

fn game_pressure(server: PointScore, returner: PointScore, ad_scoring: bool, cfg: &PressureConfig) -> f64 {
    use PointScore::*;
    match (server, returner) {
        (Love, Forty) => cfg.triple_break_point,
        (Fifteen, Forty) => cfg.double_break_point,
        (Thirty, Forty) if ad_scoring => cfg.single_break_point,
        (Thirty, Forty) => cfg.deciding_point,
        (Forty, Forty) if ad_scoring => cfg.deuce,
        (Forty, Forty) => cfg.deciding_point,
        (Forty, Advantage) => cfg.advantage_returner,
        (Advantage, Forty) => cfg.advantage_server,
        (Thirty, Thirty) => cfg.thirty_all,
        _ => 0.0,
    }
}

pub fn evaluate_pressure(ctx: &PressureContext, cfg: &PressureConfig) -> PressureReading {
    let base = match break_deficit(ctx.server_games, ctx.returner_games, ctx.games_to_win) {
        0 => 0.0,
        1 => cfg.down_one_break,
        2 => cfg.down_two_breaks,
        _ => cfg.down_three_breaks,
    };
    let in_game = game_pressure(ctx.server_score, ctx.returner_score, ctx.ad_scoring, cfg);

    PressureReading {
        pressure: (base + in_game).min(cfg.cap),
        is_break_point: is_break_point(ctx.server_score, ctx.returner_score, ctx.ad_scoring),
    }
}
