//! Pressure weighting configuration

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pressure weights (0-10 scale).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PressureConfig {
    // === Break deficit base pressure ===
    /// Down one break (default: 3.5)
    pub down_one_break: f64,
    /// Down two breaks, or serving to stay in the set (default: 6.0)
    pub down_two_breaks: f64,
    /// Down three breaks, or about to lose the set (default: 8.5)
    pub down_three_breaks: f64,

    // === Within-game pressure, added on top ===
    /// 0-40 (default: 5.0)
    pub triple_break_point: f64,
    /// 15-40 (default: 4.5)
    pub double_break_point: f64,
    /// 30-40 with advantage scoring (default: 4.0)
    pub single_break_point: f64,
    /// 40-Ad (default: 4.0)
    pub advantage_returner: f64,
    /// Ad-40 (default: 2.0)
    pub advantage_server: f64,
    /// 40-40 with advantage scoring (default: 2.5)
    pub deuce: f64,
    /// 30-30 (default: 1.5)
    pub thirty_all: f64,
    /// No-ad 30-40 and sudden-death 40-40 (default: 4.5)
    pub deciding_point: f64,

    /// Upper bound on total pressure (default: 10.0)
    pub cap: f64,
}

impl Default for PressureConfig {
    fn default() -> Self {
        Self {
            down_one_break: 3.5,
            down_two_breaks: 6.0,
            down_three_breaks: 8.5,
            triple_break_point: 5.0,
            double_break_point: 4.5,
            single_break_point: 4.0,
            advantage_returner: 4.0,
            advantage_server: 2.0,
            deuce: 2.5,
            thirty_all: 1.5,
            deciding_point: 4.5,
            cap: 10.0,
        }
    }
}

impl PressureConfig {
    pub(crate) fn weights(&self) -> [(&'static str, f64); 11] {
        [
            ("down_one_break", self.down_one_break),
            ("down_two_breaks", self.down_two_breaks),
            ("down_three_breaks", self.down_three_breaks),
            ("triple_break_point", self.triple_break_point),
            ("double_break_point", self.double_break_point),
            ("single_break_point", self.single_break_point),
            ("advantage_returner", self.advantage_returner),
            ("advantage_server", self.advantage_server),
            ("deuce", self.deuce),
            ("thirty_all", self.thirty_all),
            ("deciding_point", self.deciding_point),
        ]
    }
}
