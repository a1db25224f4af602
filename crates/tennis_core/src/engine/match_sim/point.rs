//! Point Simulation - execution noise and clutch
//!
//! p = clamp(base + N(0, variability) + clutch × sqrt(pressure / 10), 0, 100)
//!
//! The square-root curve makes moderate pressure feel close to maximal:
//! pressure 4 gives ~63% of the full clutch swing, pressure 9 ~95%.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use super::MatchEngine;
use crate::engine::pressure::{evaluate_pressure, PressureContext};
use crate::engine::score::PointScore;
use crate::models::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointOutcome {
    pub server_won: bool,
    pub is_break_point: bool,
}

/// Clutch swing in percentage points. Zero when there is no pressure.
#[inline]
pub fn clutch_adjustment(clutch_factor: f64, pressure: f64, swing_per_point: f64) -> f64 {
    if pressure <= 0.0 || clutch_factor == 0.0 {
        return 0.0;
    }
    clutch_factor * swing_per_point * (pressure / 10.0).sqrt()
}

/// Serve win probability (0-100) for one point.
#[inline]
pub fn point_win_probability(
    base_pct: f64,
    noise: f64,
    clutch_factor: f64,
    pressure: f64,
    swing_per_point: f64,
) -> f64 {
    let pct = base_pct + noise + clutch_adjustment(clutch_factor, pressure, swing_per_point);
    pct.clamp(0.0, 100.0)
}

impl MatchEngine<'_> {
    /// Play one point on `server`'s serve and feed the point counters.
    pub(crate) fn play_point(
        &mut self,
        server: Side,
        server_score: PointScore,
        returner_score: PointScore,
        server_games: u8,
        returner_games: u8,
    ) -> PointOutcome {
        self.stats.record_serve_point_played(server);
        let profile = self.profile(server);

        let reading = evaluate_pressure(
            &PressureContext {
                server_score,
                returner_score,
                server_games,
                returner_games,
                games_to_win: self.format.games_to_win(),
                ad_scoring: self.format.ad_scoring,
            },
            &self.config.pressure,
        );

        let sigma = profile.serve_variability() * self.config.point.variability_scale;
        let z: f64 = StandardNormal.sample(&mut self.rng);
        let pct = point_win_probability(
            profile.serve_win_pct(),
            z * sigma,
            profile.clutch_factor(),
            reading.pressure,
            self.config.point.clutch_swing_per_point,
        );

        let server_won = self.rng.gen::<f64>() < pct / 100.0;
        self.stats.record_point(server, server_won);

        PointOutcome { server_won, is_break_point: reading.is_break_point }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::engine::config::EngineConfig;
    use crate::models::MatchFormat;
    use PointScore::*;

    #[test]
    fn test_clutch_curve() {
        assert_eq!(clutch_adjustment(5.0, 10.0, 1.0), 5.0);
        assert_eq!(clutch_adjustment(-5.0, 10.0, 1.0), -5.0);
        assert_eq!(clutch_adjustment(3.0, 0.0, 1.0), 0.0);
        assert_eq!(clutch_adjustment(0.0, 8.0, 1.0), 0.0);

        let at_four = clutch_adjustment(1.0, 4.0, 1.0);
        assert!((at_four - 0.632).abs() < 0.001);
        let at_nine = clutch_adjustment(1.0, 9.0, 1.0);
        assert!((at_nine - 0.949).abs() < 0.001);
        // clutch -3 at pressure 6 -> about -2.3
        assert!((clutch_adjustment(-3.0, 6.0, 1.0) + 2.324).abs() < 0.001);
    }

    #[test]
    fn test_probability_clamped() {
        assert_eq!(point_win_probability(98.0, 4.0, 5.0, 10.0, 1.0), 100.0);
        assert_eq!(point_win_probability(2.0, -4.0, -5.0, 10.0, 1.0), 0.0);
        assert_eq!(point_win_probability(65.0, 1.5, 0.0, 10.0, 1.0), 66.5);
    }

    #[test]
    fn test_extremes_are_certain() {
        let (p1, p2) = dominant_pair();
        let mut engine = MatchEngine::new(&p1, &p2, MatchFormat::best_of_three(), 3)
            .with_config(EngineConfig::deterministic());
        for _ in 0..50 {
            assert!(engine.play_point(Side::PlayerOne, Love, Love, 0, 0).server_won);
            assert!(!engine.play_point(Side::PlayerTwo, Love, Forty, 0, 0).server_won);
        }
        let p1 = engine.stats().totals(Side::PlayerOne);
        assert_eq!((p1.points_won, p1.serve_points_played), (100, 50));
        assert_eq!(engine.stats().totals(Side::PlayerTwo).serve_points_played, 50);
    }

    #[test]
    fn test_break_point_flag_passes_through() {
        let a = profile("A", 60.0);
        let b = profile("B", 60.0);
        let mut engine = MatchEngine::new(&a, &b, MatchFormat::best_of_three(), 1);
        assert!(engine.play_point(Side::PlayerOne, Fifteen, Forty, 2, 2).is_break_point);
        assert!(!engine.play_point(Side::PlayerOne, Forty, Forty, 2, 2).is_break_point);
        assert!(!engine.play_point(Side::PlayerTwo, Tiebreak, Tiebreak, 6, 6).is_break_point);
    }

    #[test]
    fn test_base_rate_is_respected() {
        let a = profile("A", 70.0);
        let b = profile("B", 50.0);
        let mut engine = MatchEngine::new(&a, &b, MatchFormat::best_of_three(), 99);
        let won = (0..4000)
            .filter(|_| engine.play_point(Side::PlayerOne, Love, Love, 0, 0).server_won)
            .count();
        let rate = won as f64 / 4000.0;
        assert!((0.66..0.74).contains(&rate), "rate = {rate}");
    }

    #[test]
    fn test_clutch_shifts_pressure_points() {
        // +5 clutch at 0-40 down three breaks (pressure 10) vs -5 clutch
        let strong = clutch_profile("Clutch", 60.0, 5.0);
        let weak = clutch_profile("Choker", 60.0, -5.0);
        let mut hi = MatchEngine::new(&strong, &weak, MatchFormat::best_of_three(), 5);
        let mut lo = MatchEngine::new(&weak, &strong, MatchFormat::best_of_three(), 5);
        let n = 6000;
        let hi_wins = (0..n)
            .filter(|_| hi.play_point(Side::PlayerOne, Love, Forty, 0, 3).server_won)
            .count();
        let lo_wins = (0..n)
            .filter(|_| lo.play_point(Side::PlayerOne, Love, Forty, 0, 3).server_won)
            .count();
        // expected gap of 10 percentage points
        assert!(hi_wins > lo_wins + n / 25, "hi = {hi_wins}, lo = {lo_wins}");
    }
}
