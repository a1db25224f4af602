use crate::models::{MatchResult, PlayerTotals, SetResult, Side};

/// Mutable per-match counters, fed by the point/game/set layers and
/// consumed into a [`MatchResult`] when the match ends.
#[derive(Debug, Clone, Default)]
pub struct MatchStats {
    player1: PlayerTotals,
    player2: PlayerTotals,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn side_mut(&mut self, side: Side) -> &mut PlayerTotals {
        match side {
            Side::PlayerOne => &mut self.player1,
            Side::PlayerTwo => &mut self.player2,
        }
    }

    pub fn totals(&self, side: Side) -> &PlayerTotals {
        match side {
            Side::PlayerOne => &self.player1,
            Side::PlayerTwo => &self.player2,
        }
    }

    /// Counted before the outcome is drawn.
    #[inline]
    pub fn record_serve_point_played(&mut self, server: Side) {
        self.side_mut(server).serve_points_played += 1;
    }

    #[inline]
    pub fn record_point(&mut self, server: Side, server_won: bool) {
        if server_won {
            let totals = self.side_mut(server);
            totals.points_won += 1;
            totals.serve_points_won += 1;
        } else {
            self.side_mut(server.opponent()).points_won += 1;
        }
    }

    /// A break point was played on `server`'s serve.
    pub fn record_break_point(&mut self, server: Side, saved: bool) {
        let totals = self.side_mut(server);
        totals.break_points_faced += 1;
        if saved {
            totals.break_points_saved += 1;
        }
        self.side_mut(server.opponent()).break_point_opportunities += 1;
    }

    /// Game-level attribution: every break point of a lost service game is
    /// credited to the returner at game end.
    pub fn record_break_conversions(&mut self, returner: Side, break_points_in_game: u32) {
        self.side_mut(returner).break_points_converted += break_points_in_game;
    }

    #[inline]
    pub fn record_game(&mut self, winner: Side) {
        self.side_mut(winner).games_won += 1;
    }

    pub fn into_result(self, winner: Side, sets: Vec<SetResult>) -> MatchResult {
        MatchResult { winner, sets, player1: self.player1, player2: self.player2 }
    }
}
