pub mod config; // tunables: pressure weights, clutch swing, noise scale
pub mod match_sim; // MatchEngine: point → game → tiebreak → set → match
pub mod pressure; // pure pressure evaluator
pub mod score; // point score labels
pub mod stats; // per-match counters

pub use config::{EngineConfig, PointConfig, PressureConfig};
pub use match_sim::{check_terminating, MatchEngine};
pub use pressure::{evaluate_pressure, PressureContext, PressureReading};
pub use score::PointScore;
pub use stats::MatchStats;
